// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

use crate::theme::THEME_NAMES;

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Close the viewer
    Quit,
    // Display help
    Help,
    // Change theme
    Theme(String),
    // Toggle row striping
    Stripes,
    // Jump to the first row
    Top,
    // Jump to the last row
    Bottom,
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// string returns `Err("")` as a sentinel meaning "close without acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" | "q!" | "quit!" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "stripes" => Ok(Command::Stripes),
            "top" => Ok(Command::Top),
            "bottom" => Ok(Command::Bottom),
            "theme" => {
                if rest.is_empty() {
                    Err(format!("usage: theme <{}>", THEME_NAMES.join("|")))
                } else {
                    Ok(Command::Theme(rest.to_string()))
                }
            }
            other => Err(format!("unknown command: {other}")),
        }
    }
}
