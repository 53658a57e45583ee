pub mod editor;
pub mod input;
pub mod layout;
pub mod timer_ui;
pub mod widgets;

pub use editor::{LevelEditor, SettingsEditor};
pub use input::{InputEffect, InputState};
pub use layout::TimerLayout;
pub use timer_ui::{TimerUI, TimerUIAction};
pub use widgets::{ClockWidget, StatsWidget};
