//! Infrastructure layer - logging setup and UI port implementations

pub mod logging;
pub mod ui;

pub use logging::init_logging;
pub use ui::{InMemoryFieldSource, RecordingNotifier, TerminalNotifier};
