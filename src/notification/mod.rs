//! Transient toast messages
//!
//! Any part of the app can raise a toast; it disappears on its own once its
//! display time has passed.

mod render;
mod state;

pub use render::render_notification;
pub use state::{DEFAULT_DURATION, Notification, NotificationLevel, NotificationState};
