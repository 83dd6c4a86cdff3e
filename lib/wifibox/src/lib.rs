mod client;
pub use client::Client;

mod command;
pub use command::Command;

mod error;
pub use error::Error;

pub type Result<T> = std::result::Result<T, Error>;
