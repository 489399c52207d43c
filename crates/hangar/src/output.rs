//! Terminal output for CLI commands.
//!
//! Startup details and route reports are printed as indented `label: value`
//! fields under a highlighted heading.

use console::{Style, Term};

/// Emphasis of a printed line.
#[derive(Clone, Copy)]
pub(crate) enum Tone {
    Plain,
    Heading,
    Success,
    Warning,
    Error,
}

impl Tone {
    fn style(self) -> Style {
        match self {
            Self::Plain => Style::new(),
            Self::Heading => Style::new().cyan().bold(),
            Self::Success => Style::new().green(),
            Self::Warning => Style::new().yellow(),
            Self::Error => Style::new().red(),
        }
    }
}

/// Line printer bound to stderr (diagnostics) or stdout (command results).
pub(crate) struct Output {
    term: Term,
}

impl Output {
    /// Printer for diagnostics and server status.
    pub(crate) fn stderr() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    /// Printer for results meant to be piped.
    pub(crate) fn stdout() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    /// Print one line in the given tone.
    pub(crate) fn line(&self, tone: Tone, msg: &str) {
        let _ = self.term.write_line(&tone.style().apply_to(msg).to_string());
    }

    /// Print an indented `label: value` field.
    pub(crate) fn field(&self, depth: usize, label: &str, value: &str) {
        let label = Style::new().dim().apply_to(label).to_string();
        let _ = self.term.write_line(&format_field(depth, &label, value));
    }
}

/// `label: value` indented by two spaces per level; empty value prints the
/// label alone.
pub(crate) fn format_field(depth: usize, label: &str, value: &str) -> String {
    let indent = "  ".repeat(depth);
    if value.is_empty() {
        format!("{indent}{label}:")
    } else {
        format!("{indent}{label}: {value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_field() {
        assert_eq!(
            format_field(1, "engine", "/thirdparty/godot/"),
            "  engine: /thirdparty/godot/"
        );
        assert_eq!(format_field(2, "headers", ""), "    headers:");
        assert_eq!(format_field(0, "cors", "false"), "cors: false");
    }
}
