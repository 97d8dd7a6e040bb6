//! Core module: application infrastructure shared by every command
//!
//! - `settings` - [`Settings`] loaded from and saved to the user's config directory

pub mod settings;

pub use settings::Settings;
