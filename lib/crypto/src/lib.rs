pub mod ecb;

pub use cipher::inout::PadError;

pub type Token<const N: usize> = [u8; N];
