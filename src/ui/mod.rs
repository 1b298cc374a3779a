//! UI rendering modules for the chat widget.
//!
//! Render functions read the conversation state and push the user's
//! gestures as `WidgetAction`s; they never mutate the state themselves.
//! - `launcher`: floating round button shown while the panel is closed
//! - `panel`: fixed-size card hosting the active screen
//! - `welcome`, `capabilities`, `chat`: the three screens
//! - `composer`: message input shared by capabilities and chat
//! - `widgets`: bubbles, badges, buttons and the typing indicator
//! - `theme`: palette-derived colors and text styles

pub mod capabilities;
pub mod chat;
pub mod composer;
pub mod launcher;
pub mod panel;
pub mod theme;
pub mod welcome;
pub mod widgets;

pub use launcher::render_launcher;
pub use panel::render_panel;
pub use theme::{apply_widget_style, WidgetTheme};
