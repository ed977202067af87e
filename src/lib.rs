//! Notification Peek - 判断通知何时值得再次展示

pub mod content;
pub mod detector;
pub mod highlight;
pub mod settings;
pub mod snapshot;
pub mod telephony;

pub use content::{display_body, slot_descriptor, text_lines_joined, DELIMITER};
pub use detector::{display_decision, should_display, DisplayDecision};
pub use highlight::{FilterOp, LightingFilter, PressHighlight, Rect, TouchAction};
pub use settings::{is_peek_disabled, PeekSettings};
pub use snapshot::{NotificationExtras, NotificationSnapshot};
pub use telephony::{is_sim_panel_showing, CallMonitor, CallState, SimState};
