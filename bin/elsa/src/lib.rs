mod client;
pub use client::{PrinterClient, RawStatus};

mod command;
pub use command::Command;

mod config;
pub use config::{PrinterConfig, PrinterKind, DEFAULT_PORT};

mod coordinator;
pub use coordinator::{Connection, Coordinator, POLL_INTERVAL};

mod error;
pub use error::{CommandError, FetchError, SendError};

mod status;
pub use status::{project, ProjectedStatus};

pub type ErasedError = Box<dyn std::error::Error + Send + Sync>;
pub type Result<T> = std::result::Result<T, ErasedError>;
