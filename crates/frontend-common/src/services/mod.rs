pub mod api_wrapper;

pub use api_wrapper::with_session_handling;
