use std::fmt;

use tokio_tungstenite::tungstenite::Message;

#[derive(Debug)]
pub enum Error {
    StreamClosed,
    CannotParse(serde_json::Error),
    WebSocket(tokio_tungstenite::tungstenite::Error),
    UnexpectedMessage(Message),
    Timeout(tokio::time::error::Elapsed),
    TokenRejected,
    CommandRejected(serde_json::Value),
    Crypto(crypto::PadError),
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::CannotParse(value)
    }
}

impl From<tokio_tungstenite::tungstenite::Error> for Error {
    fn from(value: tokio_tungstenite::tungstenite::Error) -> Self {
        if let tokio_tungstenite::tungstenite::Error::AlreadyClosed = value {
            Self::StreamClosed
        } else {
            Self::WebSocket(value)
        }
    }
}

impl From<tokio::time::error::Elapsed> for Error {
    fn from(value: tokio::time::error::Elapsed) -> Self {
        Self::Timeout(value)
    }
}

impl From<crypto::PadError> for Error {
    fn from(value: crypto::PadError) -> Self {
        Self::Crypto(value)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StreamClosed => write!(f, "stream closed"),
            Self::CannotParse(error) => write!(f, "cannot parse: {}", error),
            Self::WebSocket(error) => write!(f, "websocket error: {}", error),
            Self::UnexpectedMessage(message) => write!(f, "unexpected message: {:?}", message),
            Self::Timeout(error) => write!(f, "timeout error: {}", error),
            Self::TokenRejected => write!(f, "token rejected by printer"),
            Self::CommandRejected(response) => write!(f, "command rejected: {}", response),
            Self::Crypto(error) => write!(f, "crypto error: {}", error),
        }
    }
}

impl std::error::Error for Error {}
