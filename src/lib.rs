pub mod config;
pub mod defaults;
pub mod engine;
pub mod format;
pub mod logging;
pub mod schedule;
pub mod settings;
pub mod theme;
pub mod ticker;
pub mod tui;
pub mod view;
