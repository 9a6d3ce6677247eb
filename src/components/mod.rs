//! Widgets for the floating windows and the nav menu preview. Window bodies
//! render into offscreen buffers at the window's logical size; the app
//! composites them onto the screen in z order.

pub mod chart;
pub mod chrome;
pub mod menu;
pub mod windows;

pub use chrome::{WindowChrome, WindowHit};
pub use menu::{MenuEntry, MenuPreview};
