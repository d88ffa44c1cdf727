use crate::utils::error::CardError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Card keys this crate knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Colors,
    ColorIndicator,
    ManaCost,
    OracleText,
    TypeLine,
    Power,
    Toughness,
    Loyalty,
    Layout,
    CardFaces,
    FlavorName,
    FuseText,
    FaceType,
    FaceSymbol,
    FaceNum,
    Legalities,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Colors => "colors",
            Field::ColorIndicator => "color_indicator",
            Field::ManaCost => "mana_cost",
            Field::OracleText => "oracle_text",
            Field::TypeLine => "type_line",
            Field::Power => "power",
            Field::Toughness => "toughness",
            Field::Loyalty => "loyalty",
            Field::Layout => "layout",
            Field::CardFaces => "card_faces",
            Field::FlavorName => "flavor_name",
            Field::FuseText => "fuse_text",
            Field::FaceType => "face_type",
            Field::FaceSymbol => "face_symbol",
            Field::FaceNum => "face_num",
            Field::Legalities => "legalities",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw card object as the card-data service returns it.
///
/// Serialized as the JSON object itself, so bulk exports and API responses
/// deserialize straight into it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardRecord {
    pub data: HashMap<String, Value>,
}

impl CardRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&Value> {
        self.data.get(field.as_str())
    }

    pub fn contains(&self, field: Field) -> bool {
        self.data.contains_key(field.as_str())
    }

    pub fn insert(&mut self, field: Field, value: impl Into<Value>) {
        self.data.insert(field.as_str().to_string(), value.into());
    }

    pub fn get_str(&self, field: Field) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// Name used when reporting errors about this record.
    pub fn display_name(&self) -> String {
        self.get_str(Field::Name).unwrap_or("<unknown>").to_string()
    }
}

impl From<HashMap<String, Value>> for CardRecord {
    fn from(data: HashMap<String, Value>) -> Self {
        Self { data }
    }
}

impl From<serde_json::Map<String, Value>> for CardRecord {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        Self {
            data: map.into_iter().collect(),
        }
    }
}

impl TryFrom<Value> for CardRecord {
    type Error = CardError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Result of a named lookup against a card source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedLookup {
    pub scryfall_json: CardRecord,
}

impl From<NamedLookup> for CardRecord {
    fn from(lookup: NamedLookup) -> Self {
        lookup.scryfall_json
    }
}
