mod enc;
pub use enc::encrypt;
