//! Output formatting module
//!
//! Handles formatting and display of companion replies and status
//! information for the one-shot CLI paths, using colored output.

use crate::llm::GeminiModel;
use console::Style;

/// Output formatter for CLI results
pub struct OutputFormatter {
    // Styles
    blue: Style,
    green: Style,
    red: Style,
    bold: Style,
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self {
            blue: Style::new().blue(),
            green: Style::new().green(),
            red: Style::new().red(),
            bold: Style::new().bold(),
        }
    }
}

impl OutputFormatter {
    /// Create a new formatter
    pub fn new() -> Self {
        Self::default()
    }

    /// Print a companion reply
    pub fn print_reply(&self, text: &str, model: GeminiModel) {
        println!();
        println!("{}", self.bold.apply_to("Solace:"));
        println!("{}", text);
        println!();
        println!("{}", self.blue.apply_to(format!("Model: {}", model)));
    }

    /// Print an informational line
    pub fn print_info(&self, message: &str) {
        println!("{}", self.green.apply_to(message));
    }

    /// Print a user-visible error
    pub fn print_error(&self, message: &str) {
        eprintln!("{}", self.red.apply_to(message));
    }
}
