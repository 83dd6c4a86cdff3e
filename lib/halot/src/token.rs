use base64::prelude::*;
use crypto::{PadError, Token};

// The firmware expects the password encrypted under this fixed key,
// hex 6138356539643638. Protocol compatibility, not a security boundary.
const KEY: Token<8> = *b"a85e9d68";

pub fn generate_token(password: &str) -> Result<String, PadError> {
    let mut data = password.as_bytes().to_vec();
    let encrypted = crypto::ecb::encrypt(&mut data, KEY)?;

    Ok(BASE64_STANDARD.encode(encrypted))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tokens() {
        assert_eq!(
            generate_token("password123").unwrap(),
            "SxXl0ERBH9nbL+ZRKzjiGQ=="
        );
        assert_eq!(generate_token("hunter2").unwrap(), "pG3bAPElFQw=");
    }

    #[test]
    fn test_deterministic() {
        let first = generate_token("resin").unwrap();
        let second = generate_token("resin").unwrap();
        assert_eq!(first, second);

        let other = generate_token("fdm").unwrap();
        assert_ne!(first, other);
    }
}
