//! Secret generation for auto-provisioned student credentials.

use rand::TryRng;
use rand::rngs::SysRng;

use campus_core::error::AppError;
use campus_core::result::AppResult;

const SECRET_DIGITS: usize = 8;

/// Generate an 8-digit numeric secret from the operating system's
/// cryptographically strong random source.
pub fn generate_secret() -> AppResult<String> {
    let mut rng = SysRng;
    let mut secret = String::with_capacity(SECRET_DIGITS);
    for _ in 0..SECRET_DIGITS {
        let digit = rng
            .try_next_u32()
            .map_err(|e| AppError::internal(format!("OS random source failure: {e}")))?
            % 10;
        secret.push(char::from(b'0' + digit as u8));
    }
    Ok(secret)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secrets_are_eight_digits() {
        for _ in 0..32 {
            let secret = generate_secret().unwrap();
            assert_eq!(secret.len(), SECRET_DIGITS);
            assert!(secret.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
