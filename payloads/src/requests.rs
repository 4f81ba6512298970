use serde::{Deserialize, Serialize};

pub const EMAIL_MAX_LEN: usize = 255;
pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 30;
pub const PASSWORD_MIN_LEN: usize = 8;

/// Validation result for usernames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsernameValidation {
    Valid,
    TooShort,
    TooLong,
    InvalidCharacters,
    MustStartWithLetter,
}

impl UsernameValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::TooShort => Some("Username must be at least 3 characters"),
            Self::TooLong => Some("Username must be at most 30 characters"),
            Self::InvalidCharacters => Some(
                "Username can only contain letters, numbers, and underscores",
            ),
            Self::MustStartWithLetter => {
                Some("Username must start with a letter")
            }
        }
    }
}

/// Validate a username.
///
/// Rules:
/// - 3-30 characters
/// - ASCII letters, numbers, and underscores only
/// - Must start with a letter
pub fn validate_username(username: &str) -> UsernameValidation {
    if username.len() < USERNAME_MIN_LEN {
        return UsernameValidation::TooShort;
    }
    if username.len() > USERNAME_MAX_LEN {
        return UsernameValidation::TooLong;
    }

    let mut chars = username.chars();

    if let Some(first) = chars.next()
        && !first.is_ascii_alphabetic()
    {
        return UsernameValidation::MustStartWithLetter;
    }

    for c in chars {
        if !c.is_ascii_alphanumeric() && c != '_' {
            return UsernameValidation::InvalidCharacters;
        }
    }

    UsernameValidation::Valid
}

#[derive(Serialize, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct CreateAccount {
    pub email: String,
    pub username: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_typical_usernames() {
        assert!(validate_username("movie_fan_42").is_valid());
        assert!(validate_username("abc").is_valid());
    }

    #[test]
    fn rejects_short_and_long_usernames() {
        assert_eq!(validate_username("ab"), UsernameValidation::TooShort);
        let long = "a".repeat(USERNAME_MAX_LEN + 1);
        assert_eq!(validate_username(&long), UsernameValidation::TooLong);
    }

    #[test]
    fn rejects_bad_leading_characters() {
        assert_eq!(
            validate_username("1movies"),
            UsernameValidation::MustStartWithLetter
        );
        assert_eq!(
            validate_username("_movies"),
            UsernameValidation::MustStartWithLetter
        );
    }

    #[test]
    fn rejects_invalid_characters() {
        assert_eq!(
            validate_username("movie night"),
            UsernameValidation::InvalidCharacters
        );
        assert_eq!(
            validate_username("movie-night"),
            UsernameValidation::InvalidCharacters
        );
    }
}
