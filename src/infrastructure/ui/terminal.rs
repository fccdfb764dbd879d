//! Terminal-backed alert adapter

use std::io::{self, BufRead, Write};

use crate::ui::ports::Notifier;

/// Notifier that writes alerts to the terminal
///
/// The console stand-in for a modal dialog. In interactive mode it blocks
/// until the user presses Enter, matching the blocking semantics of a real
/// alert; otherwise it just prints and returns.
#[derive(Debug, Clone, Default)]
pub struct TerminalNotifier {
    interactive: bool,
}

impl TerminalNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block on Enter after each alert
    pub fn interactive() -> Self {
        Self { interactive: true }
    }
}

impl Notifier for TerminalNotifier {
    fn alert(&self, message: &str) {
        let mut stdout = io::stdout().lock();

        // Output failures are not actionable from an alert box
        let _ = writeln!(stdout, "ALERT: {message}");

        if self.interactive {
            let _ = write!(stdout, "Press Enter to dismiss...");
            let _ = stdout.flush();

            let mut dismissed = String::new();
            let _ = io::stdin().lock().read_line(&mut dismissed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_interactive_alert_returns_immediately() {
        TerminalNotifier::new().alert("Registration successful!");
    }
}
