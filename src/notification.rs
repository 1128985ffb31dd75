//! Transient notifications shown in the top-right corner
//!
//! Used for non-blocking messages such as a bad config file or a lost search
//! worker. Blocking messages go through `alert` instead.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{NotificationKind, NotificationState};
