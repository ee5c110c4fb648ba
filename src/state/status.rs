// src/state/status.rs
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Failure,
    Warning,
    Info,
}

/// The single feedback slot. A new status always replaces the old one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    pub tone: Tone,
    pub text: String,
}

impl Status {
    pub fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self { tone, text: text.into() }
    }

    /// Failures and warnings; the CLI exits non-zero on these.
    pub fn is_problem(&self) -> bool {
        matches!(self.tone, Tone::Failure | Tone::Warning)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.tone {
            Tone::Success => "✅ ",
            Tone::Failure => "❌ ",
            Tone::Warning => "⚠️ ",
            Tone::Info => "",
        };
        write!(f, "{prefix}{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_by_tone() {
        assert_eq!(status!(Success, "Client created").to_string(), "✅ Client created");
        assert_eq!(status!(Failure, "Error: {}", "boom").to_string(), "❌ Error: boom");
        assert_eq!(Status::new(Tone::Info, "Scrape triggered").to_string(), "Scrape triggered");
    }
}
