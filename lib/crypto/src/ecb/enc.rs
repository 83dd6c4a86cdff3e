use cipher::{block_padding::Pkcs7, BlockEncryptMut, KeyInit};
use cipher::inout::PadError;

use crate::Token;

type DesEcbEnc = ecb::Encryptor<des::Des>;

const BLOCK_SIZE: usize = 8;

pub fn encrypt(data: &mut Vec<u8>, key: Token<8>) -> Result<&[u8], PadError> {
    let pos = data.len();

    // Pkcs7 always appends at least one byte, so block-aligned input
    // still needs room for a full pad block.
    data.resize((pos / BLOCK_SIZE + 1) * BLOCK_SIZE, 0);

    let ct = DesEcbEnc::new(&key.into()).encrypt_padded_mut::<Pkcs7>(data, pos)?;
    Ok(ct)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const KEY: Token<8> = hex!("6138356539643638");

    #[test]
    fn test_encrypt() {
        let mut data = b"secret".to_vec();
        let encrypted = encrypt(&mut data, KEY).unwrap();
        assert_eq!(encrypted, hex!("e0a218a0f503185b"));
    }

    #[test]
    fn test_encrypt_block_aligned() {
        let mut data = b"12345678".to_vec();
        let encrypted = encrypt(&mut data, KEY).unwrap();
        assert_eq!(encrypted, hex!("b9447794f29fc5c1ac47b00288156e5c"));
    }
}
