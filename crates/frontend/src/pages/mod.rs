//! Routed views

mod forgot_password;
mod home;
mod login;
mod logout;
mod profile;
mod register;
mod reset_password;

pub use forgot_password::ForgotPassword;
pub use home::Home;
pub use login::Login;
pub use logout::Logout;
pub use profile::Profile;
pub use register::Register;
pub use reset_password::ResetPassword;
