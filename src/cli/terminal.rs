//! Terminal capability detection and colouring

use doclint::report::Palette;
use owo_colors::{OwoColorize, colors::css};

/// Detects whether colored output should be enabled
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Colours the text report, if enabled.
#[derive(Debug, Clone, Copy)]
pub struct Colors {
    enabled: bool,
}

impl Colors {
    /// Enables colour when stdout supports it, unless `disabled` is set.
    pub fn detect(disabled: bool) -> Self {
        Self {
            enabled: !disabled && supports_color(),
        }
    }
}

impl Palette for Colors {
    fn path(&self, text: &str) -> String {
        if self.enabled {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    fn error(&self, text: &str) -> String {
        if self.enabled {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    fn hint(&self, text: &str) -> String {
        if self.enabled {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    fn success(&self, text: &str) -> String {
        if self.enabled {
            text.fg::<css::Green>().to_string()
        } else {
            text.to_string()
        }
    }
}
