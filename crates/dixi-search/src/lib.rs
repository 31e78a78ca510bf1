pub mod controller;
pub mod session;
pub mod source;

#[cfg(test)]
mod tests;

pub use controller::{SuggestionController, SuggestionSettings};
pub use session::{Direction, SuggestionSession};
pub use source::{ApiSuggestions, SharedSource, SuggestionSource};
