//! Command parsing for the interactive operator console.
//!
//! This module parses operator input lines into structured
//! [`ConsoleCommand`] values; executing them is the console loop's job.

/// Parsed command from operator input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Send a PING frame.
    Ping,

    /// Switch the animation program.
    Program {
        /// Program slot, 0-9.
        slot: u8,
    },

    /// Set the tempo byte.
    Bpm {
        /// Raw tempo byte, 0-255 (maps to 60-180 BPM).
        value: u8,
    },

    /// Trigger a flash effect.
    Flash,

    /// Trigger a ripple effect.
    Ripple {
        /// Ripple position byte, 0-255.
        position: u8,
    },

    /// Leave the console.
    Quit,

    /// Unknown command word.
    Unknown {
        /// The original input.
        input: String,
    },

    /// Known command with missing or invalid arguments.
    InvalidArgs {
        /// Command name.
        command: String,
        /// Error message.
        error: String,
    },
}

fn parse_byte(arg: &str) -> Option<u8> {
    arg.parse::<u8>().ok()
}

/// Parse one operator input line.
///
/// Input is case-insensitive. An empty line quits, matching the original
/// console's behavior.
pub fn parse(input: &str) -> ConsoleCommand {
    let input = input.trim().to_lowercase();

    if input.is_empty() {
        return ConsoleCommand::Quit;
    }

    let parts: Vec<&str> = input.split_whitespace().collect();
    let command = parts.first().copied().unwrap_or("");

    match command {
        "ping" => ConsoleCommand::Ping,

        "program" => match parts.get(1) {
            Some(arg) => match parse_byte(arg) {
                Some(slot) if slot <= 9 => ConsoleCommand::Program { slot },
                _ => ConsoleCommand::InvalidArgs {
                    command: "program".into(),
                    error: "Program must be 0-9".into(),
                },
            },
            None => ConsoleCommand::InvalidArgs {
                command: "program".into(),
                error: "Usage: program <0-9>".into(),
            },
        },

        "bpm" => match parts.get(1) {
            Some(arg) => match parse_byte(arg) {
                Some(value) => ConsoleCommand::Bpm { value },
                None => ConsoleCommand::InvalidArgs {
                    command: "bpm".into(),
                    error: "BPM value must be 0-255".into(),
                },
            },
            None => ConsoleCommand::InvalidArgs {
                command: "bpm".into(),
                error: "Usage: bpm <0-255>".into(),
            },
        },

        "flash" => ConsoleCommand::Flash,

        "ripple" => match parts.get(1) {
            Some(arg) => match parse_byte(arg) {
                Some(position) => ConsoleCommand::Ripple { position },
                None => ConsoleCommand::InvalidArgs {
                    command: "ripple".into(),
                    error: "Position must be 0-255".into(),
                },
            },
            None => ConsoleCommand::InvalidArgs {
                command: "ripple".into(),
                error: "Usage: ripple <0-255>".into(),
            },
        },

        "quit" | "q" => ConsoleCommand::Quit,

        _ => ConsoleCommand::Unknown { input },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ping() {
        assert_eq!(parse("ping"), ConsoleCommand::Ping);
        assert_eq!(parse("  PING  "), ConsoleCommand::Ping);
    }

    #[test]
    fn parse_program() {
        assert_eq!(parse("program 3"), ConsoleCommand::Program { slot: 3 });
    }

    #[test]
    fn parse_program_out_of_range() {
        assert!(matches!(
            parse("program 12"),
            ConsoleCommand::InvalidArgs { command, .. } if command == "program"
        ));
    }

    #[test]
    fn parse_program_missing_arg() {
        assert!(matches!(
            parse("program"),
            ConsoleCommand::InvalidArgs { command, .. } if command == "program"
        ));
    }

    #[test]
    fn parse_bpm() {
        assert_eq!(parse("bpm 127"), ConsoleCommand::Bpm { value: 127 });
        assert_eq!(parse("bpm 255"), ConsoleCommand::Bpm { value: 255 });
    }

    #[test]
    fn parse_bpm_out_of_range() {
        assert!(matches!(parse("bpm 300"), ConsoleCommand::InvalidArgs { .. }));
        assert!(matches!(parse("bpm -1"), ConsoleCommand::InvalidArgs { .. }));
    }

    #[test]
    fn parse_flash() {
        assert_eq!(parse("flash"), ConsoleCommand::Flash);
    }

    #[test]
    fn parse_ripple() {
        assert_eq!(parse("ripple 64"), ConsoleCommand::Ripple { position: 64 });
    }

    #[test]
    fn parse_ripple_invalid() {
        assert!(matches!(parse("ripple lots"), ConsoleCommand::InvalidArgs { .. }));
    }

    #[test]
    fn parse_quit() {
        assert_eq!(parse("quit"), ConsoleCommand::Quit);
        assert_eq!(parse("q"), ConsoleCommand::Quit);
    }

    #[test]
    fn parse_empty_quits() {
        assert_eq!(parse(""), ConsoleCommand::Quit);
        assert_eq!(parse("   "), ConsoleCommand::Quit);
    }

    #[test]
    fn parse_unknown() {
        assert!(matches!(parse("launch"), ConsoleCommand::Unknown { .. }));
    }
}
