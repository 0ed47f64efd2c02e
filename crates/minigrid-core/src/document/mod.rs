//! Document state and logic.

mod io;
mod state;

pub use state::Document;
