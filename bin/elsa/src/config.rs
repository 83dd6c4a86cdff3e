use std::fmt;
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 18188;

/// Which of the two supported wire protocols the printer speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrinterKind {
    Halot,
    WifiBox,
}

impl FromStr for PrinterKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "halot" => Ok(PrinterKind::Halot),
            "wifi_box" => Ok(PrinterKind::WifiBox),
            other => Err(format!("unknown printer type: {other}")),
        }
    }
}

impl fmt::Display for PrinterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrinterKind::Halot => write!(f, "halot"),
            PrinterKind::WifiBox => write!(f, "wifi_box"),
        }
    }
}

/// Immutable per-printer configuration, supplied once at startup.
#[derive(Debug, Clone)]
pub struct PrinterConfig {
    pub kind: PrinterKind,
    pub host: String,
    pub port: u16,
    pub password: Option<String>,
    pub model: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_str() {
        assert_eq!("halot".parse(), Ok(PrinterKind::Halot));
        assert_eq!("wifi_box".parse(), Ok(PrinterKind::WifiBox));
        assert!("ender".parse::<PrinterKind>().is_err());
    }
}
