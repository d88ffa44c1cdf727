use crate::domain::model::{CardRecord, Field, NamedLookup};
use crate::domain::ports::CardSource;
use crate::utils::error::{CardError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Card source backed by a JSON file on disk: either a bulk-data export
/// (an array of card objects) or a single card object.
#[derive(Debug, Clone, Default)]
pub struct LocalCardStore {
    cards: Vec<CardRecord>,
}

impl LocalCardStore {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        tracing::debug!("Read {} bytes from {}", content.len(), path.as_ref().display());
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let json_data: Value = serde_json::from_str(content)?;

        let mut cards = Vec::new();
        match json_data {
            Value::Array(items) => {
                for (index, item) in items.into_iter().enumerate() {
                    if let Value::Object(obj) = item {
                        cards.push(CardRecord::from(obj));
                    } else {
                        tracing::warn!("Skipping entry {}: not a card object", index);
                    }
                }
            }
            Value::Object(obj) => cards.push(CardRecord::from(obj)),
            _ => {
                return Err(CardError::ConfigError {
                    message: "card file must hold a card object or an array of them".to_string(),
                })
            }
        }

        tracing::debug!("Loaded {} cards", cards.len());
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Case-insensitive match on the full name or on one half of a `//` name,
/// so "Alive" finds "Alive // Well".
fn name_matches(card_name: &str, wanted: &str) -> bool {
    let wanted = wanted.trim();
    card_name.eq_ignore_ascii_case(wanted)
        || card_name
            .split("//")
            .any(|half| half.trim().eq_ignore_ascii_case(wanted))
}

impl CardSource for LocalCardStore {
    fn named(&self, name: &str) -> Result<NamedLookup> {
        let exact = self
            .cards
            .iter()
            .find(|card| card.get_str(Field::Name) == Some(name));

        exact
            .or_else(|| {
                self.cards.iter().find(|card| {
                    card.get_str(Field::Name)
                        .is_some_and(|card_name| name_matches(card_name, name))
                })
            })
            .map(|card| NamedLookup {
                scryfall_json: card.clone(),
            })
            .ok_or_else(|| CardError::CardNotFound {
                name: name.to_string(),
            })
    }

    fn cards(&self) -> &[CardRecord] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_matches_full_and_half_names() {
        assert!(name_matches("Alive // Well", "alive // well"));
        assert!(name_matches("Alive // Well", "Alive"));
        assert!(name_matches("Alive // Well", " well "));
        assert!(!name_matches("Buried Alive", "Alive"));
    }

    #[test]
    fn test_exact_name_wins_over_half_match() {
        let store = LocalCardStore::from_json_str(
            r#"[{"name": "Fire // Ice"}, {"name": "Fire"}]"#,
        )
        .unwrap();
        let found = store.named("Fire").unwrap();
        assert_eq!(found.scryfall_json.get_str(Field::Name), Some("Fire"));
    }

    #[test]
    fn test_non_objects_are_skipped() {
        let store = LocalCardStore::from_json_str(r#"[{"name": "Opt"}, 3, "x"]"#).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_scalar_json_is_rejected() {
        assert!(LocalCardStore::from_json_str("42").is_err());
        assert!(LocalCardStore::from_json_str("not json").is_err());
    }
}
