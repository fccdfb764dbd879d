//! Concrete implementations of the UI ports

mod in_memory;
mod terminal;

pub use in_memory::{InMemoryFieldSource, RecordingNotifier};
pub use terminal::TerminalNotifier;
