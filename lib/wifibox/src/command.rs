use std::fmt;

/// The Wi-Fi Box knows exactly three print commands, all issued as
/// query-string flags on the `iot_conf` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Pause,
    Resume,
    Stop,
}

impl Command {
    pub(crate) fn query(&self) -> &'static str {
        match self {
            Command::Pause => "pause=1",
            Command::Resume => "pause=0",
            Command::Stop => "stop=1",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Pause => write!(f, "pause"),
            Command::Resume => write!(f, "resume"),
            Command::Stop => write!(f, "stop"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query() {
        assert_eq!(Command::Pause.query(), "pause=1");
        assert_eq!(Command::Resume.query(), "pause=0");
        assert_eq!(Command::Stop.query(), "stop=1");
    }
}
