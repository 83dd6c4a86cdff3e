use std::fmt;

#[derive(Debug)]
pub enum FetchError {
    Halot(halot::Error),
    WifiBox(wifibox::Error),
}

impl FetchError {
    /// Whether the printer answered but rejected the token. Only the
    /// Halot protocol signals this in-band.
    pub fn is_auth_rejected(&self) -> bool {
        matches!(self, Self::Halot(halot::Error::TokenRejected))
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Halot(err) => write!(f, "halot error: {err}"),
            Self::WifiBox(err) => write!(f, "wifi box error: {err}"),
        }
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug)]
pub enum SendError {
    Halot(halot::Error),
    WifiBox(wifibox::Error),
    Unsupported(String),
}

impl fmt::Display for SendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Halot(err) => write!(f, "halot error: {err}"),
            Self::WifiBox(err) => write!(f, "wifi box error: {err}"),
            Self::Unsupported(name) => write!(f, "command {name} is not supported"),
        }
    }
}

impl std::error::Error for SendError {}

#[derive(Debug)]
pub enum CommandError {
    Offline,
    Send(SendError),
}

impl From<SendError> for CommandError {
    fn from(err: SendError) -> Self {
        Self::Send(err)
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Offline => write!(f, "printer is offline"),
            Self::Send(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CommandError {}
