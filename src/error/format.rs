use crate::error::{DevsiftError, ErrorContext};

pub fn format_error_chain(error: &DevsiftError) -> String {
    ErrorContext::new(error).to_string()
}

/// ANSI sequences used on stderr, all empty when color is off.
struct Palette {
    red: &'static str,
    yellow: &'static str,
    cyan: &'static str,
    bold: &'static str,
    reset: &'static str,
}

impl Palette {
    fn new(use_color: bool) -> Self {
        if use_color {
            Self {
                red: "\x1b[31m",
                yellow: "\x1b[33m",
                cyan: "\x1b[36m",
                bold: "\x1b[1m",
                reset: "\x1b[0m",
            }
        } else {
            Self {
                red: "",
                yellow: "",
                cyan: "",
                bold: "",
                reset: "",
            }
        }
    }
}

/// Error message, details and suggestions as printed by the CLI.
pub fn format_error_with_color(error: &DevsiftError, use_color: bool) -> String {
    let Palette {
        red,
        yellow,
        cyan,
        bold,
        reset,
    } = Palette::new(use_color);
    let context = ErrorContext::new(error);

    let mut lines = vec![format!("{red}{bold}Error:{reset} {error}")];
    if let Some(details) = &context.details {
        lines.push(String::new());
        lines.push(details.clone());
    }
    if let Some(suggestion) = &context.suggestion {
        lines.push(String::new());
        lines.push(format!("{yellow}{bold}Suggestions:{reset}"));
        lines.extend(
            suggestion
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(|line| format!("{cyan}• {line}{reset}")),
        );
    }

    let mut output = lines.join("\n");
    output.push('\n');
    // No color bleeding into the shell prompt
    output.push_str(reset);
    output
}
