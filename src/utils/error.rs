use crate::domain::model::Field;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardError {
    #[error("Card {card} has no key {field}")]
    MissingField { card: String, field: Field },

    #[error("Card {card} has an invalid {field}: expected {expected}")]
    InvalidField {
        card: String,
        field: Field,
        expected: &'static str,
    },

    #[error("Card not found: {name}")]
    CardNotFound { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CardError {
    /// True for the one error kind accessors raise on an absent key.
    pub fn is_missing_field(&self) -> bool {
        matches!(self, CardError::MissingField { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CardError::MissingField { card, field } => {
                format!("{} does not have a {} field", card, field)
            }
            CardError::InvalidField { card, field, .. } => {
                format!("{} has a malformed {} field", card, field)
            }
            CardError::CardNotFound { name } => format!("No card named '{}'", name),
            CardError::IoError(e) => format!("Could not read file: {}", e),
            CardError::SerializationError(e) => format!("Card data is not valid JSON: {}", e),
            CardError::ConfigError { message } => format!("Configuration problem: {}", message),
            CardError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value {} is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CardError::MissingField { .. } | CardError::InvalidField { .. } => {
                "Check that the card data follows the Scryfall card schema"
            }
            CardError::CardNotFound { .. } => {
                "Check the spelling, or search for one half of a split card"
            }
            CardError::IoError(_) => "Make sure the file exists and is readable",
            CardError::SerializationError(_) => {
                "Provide a JSON card object or an array of card objects"
            }
            CardError::ConfigError { .. } | CardError::InvalidConfigValueError { .. } => {
                "Fix the display configuration file and try again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CardError>;

/// Turn an accessor result into an optional read: an absent key becomes
/// `None`, every other error still propagates.
pub fn optional<T>(value: Result<T>) -> Result<Option<T>> {
    match value {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_missing_field() => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message_names_card_and_field() {
        let err = CardError::MissingField {
            card: "Fire // Ice".to_string(),
            field: Field::Loyalty,
        };
        assert_eq!(err.to_string(), "Card Fire // Ice has no key loyalty");
        assert!(err.is_missing_field());
    }

    #[test]
    fn test_other_errors_are_not_missing_field() {
        let err = CardError::CardNotFound {
            name: "Nope".to_string(),
        };
        assert!(!err.is_missing_field());
        assert_eq!(err.user_friendly_message(), "No card named 'Nope'");
    }

    #[test]
    fn test_optional_only_swallows_missing_field() {
        let missing: Result<&str> = Err(CardError::MissingField {
            card: "Opt".to_string(),
            field: Field::Power,
        });
        assert!(optional(missing).unwrap().is_none());
        assert_eq!(optional(Ok("2")).unwrap(), Some("2"));

        let invalid: Result<&str> = Err(CardError::InvalidField {
            card: "Opt".to_string(),
            field: Field::Power,
            expected: "a string",
        });
        assert!(optional(invalid).is_err());
    }
}
