mod notification;
mod spinner;

pub use notification::{
    NotificationProvider, Notifier, Toast, ToastAction, ToastKind, ToastList, use_notify,
};
pub use spinner::LoadingSpinner;
