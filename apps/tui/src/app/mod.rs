// App module for the portfolio viewer
// Holds application state, loading actions and input handling

pub mod actions;
pub mod input;
pub mod state;

pub use input::{handle_key_event, handle_mouse_event};
pub use state::App;
