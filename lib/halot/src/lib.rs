mod client;
pub use client::Client;

mod error;
pub use error::Error;

mod token;
pub use token::generate_token;

pub type Result<T> = std::result::Result<T, Error>;
