pub mod notify;
pub mod render;
pub mod style;

pub use notify::{Notification, NotificationLevel};
