pub mod app;
pub mod events;
pub mod input;
pub mod keymap;
pub mod listing;
pub mod ui;

pub use app::App;
pub use keymap::{KeyMap, KeyMapError};
pub use listing::Listing;
