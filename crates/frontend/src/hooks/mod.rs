//! Frontend hooks

pub mod use_flow;
pub mod use_input;

pub use use_flow::FlowStatus;
pub use use_input::use_input;
