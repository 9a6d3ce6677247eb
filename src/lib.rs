pub mod app;
pub mod catalog;
pub mod components;
pub mod constants;
pub mod drivers;
pub mod event_loop;
pub mod format;
pub mod keybindings;
pub mod nav;
pub mod panel;
pub mod theme;
pub mod tracing_sub;
pub mod ui;
pub mod workspace;
