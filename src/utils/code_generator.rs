//! Random shortcode generation.
//!
//! Codes are drawn from the operating system's entropy source and mapped onto
//! the 64-character URL-safe alphabet, so every character is equally likely.

/// Length of generated shortcodes.
pub const CODE_LENGTH: usize = 6;

/// URL-safe alphabet. Exactly 64 symbols so a byte masked to 6 bits indexes it uniformly.
const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Generates a random 6-character shortcode.
///
/// # Errors
///
/// Returns the underlying [`getrandom::Error`] if the system random number
/// generator is unavailable.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code()?;
/// assert_eq!(code.len(), 6);
/// ```
pub fn generate_code() -> Result<String, getrandom::Error> {
    let mut buffer = [0u8; CODE_LENGTH];
    getrandom::fill(&mut buffer)?;

    Ok(buffer
        .iter()
        .map(|byte| ALPHABET[(byte & 0x3f) as usize] as char)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validators::is_valid_shortcode;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = generate_code().unwrap();
        assert_eq!(code.len(), CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_url_safe_characters() {
        for _ in 0..200 {
            let code = generate_code().unwrap();
            assert!(
                code.chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
                "unexpected character in {code}"
            );
        }
    }

    #[test]
    fn test_generated_codes_pass_shortcode_validation() {
        for _ in 0..200 {
            assert!(is_valid_shortcode(&generate_code().unwrap()));
        }
    }

    #[test]
    fn test_generate_code_mostly_unique() {
        let codes: HashSet<String> = (0..1000).map(|_| generate_code().unwrap()).collect();

        // 64^6 possible codes; a handful of birthday collisions would still be suspicious.
        assert!(codes.len() >= 998);
    }
}
