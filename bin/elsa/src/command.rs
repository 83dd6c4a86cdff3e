use std::fmt;

/// Protocol-independent print action. The caller always names the exact
/// intent; nothing here inspects printer state to pick pause vs resume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Pause,
    Resume,
    Stop,
    /// Passthrough for commands the integration does not know by name.
    /// Only the Halot protocol accepts these.
    Custom(String),
}

impl Command {
    pub fn parse(value: &str) -> Command {
        match value {
            // PAUSE_RESUME and pause_resume_print are legacy toggle
            // identifiers, both mapped to the pause action
            "PRINT_PAUSE" | "PAUSE_RESUME" | "pause_resume_print" | "pause" => Command::Pause,
            "PRINT_RESUME" | "resume" => Command::Resume,
            "PRINT_STOP" | "STOP_PRINT" | "stop_print" | "stop" => Command::Stop,
            other => Command::Custom(other.to_string()),
        }
    }

    /// Wire name for the Halot WebSocket protocol.
    pub fn halot_command(&self) -> &str {
        match self {
            Command::Pause => "PRINT_PAUSE",
            Command::Resume => "PRINT_RESUME",
            Command::Stop => "PRINT_STOP",
            Command::Custom(name) => name,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.halot_command())
    }
}
