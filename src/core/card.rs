use crate::core::colors::{extract_colors, Color, ColorNames};
use crate::core::layout::{classify_split, Layout};
use crate::domain::model::{CardRecord, Field};
use crate::utils::error::{CardError, Result};
use serde_json::{Map, Value};
use std::fmt;

const STANDARD_FACE_TYPE: &str = "standard";
const TOKEN_SUBJECT: &str = "This token";

const BASIC_LANDS: [&str; 11] = [
    "Plains",
    "Island",
    "Swamp",
    "Mountain",
    "Forest",
    "Wastes",
    "Snow-Covered Plains",
    "Snow-Covered Island",
    "Snow-Covered Swamp",
    "Snow-Covered Mountain",
    "Snow-Covered Forest",
];

/// Uniform read access to a card, a card face or half of a split card.
///
/// Construction settles the real layout once: `split` cards are refined into
/// `aftermath` or `fuse` from their rules text, and emblems and tokens are
/// tagged as such. Records without a `layout` (bare faces, partial records)
/// are wrapped untouched.
///
/// Faces are derived on demand by [`CardView::card_faces`] from the unmodified
/// parent record, so reading them any number of times gives the same result.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    record: CardRecord,
    layout: Option<Layout>,
}

impl CardView {
    pub fn new(card: impl Into<CardRecord>) -> Result<Self> {
        let mut record = card.into();

        let raw_layout = match record.get(Field::Layout) {
            None => None,
            Some(Value::String(raw)) => Some(raw.clone()),
            Some(_) => return Err(invalid_field(&record, Field::Layout, "a string")),
        };
        let Some(raw_layout) = raw_layout else {
            tracing::trace!("{} has no layout, wrapping as-is", record.display_name());
            return Ok(Self {
                record,
                layout: None,
            });
        };

        let layout = match normalize_token_or_emblem(&mut record) {
            Some(layout) => layout,
            None => Layout::parse(&raw_layout, record.get_str(Field::FuseText)),
        };

        let mut view = Self {
            record,
            layout: Some(layout),
        };

        if view.layout == Some(Layout::Split) {
            let refined = classify_split(view.second_half_text()?);
            if refined != Layout::Split {
                tracing::debug!("Reclassified {} as {}", view.record.display_name(), refined);
                view.record.insert(Field::Layout, refined.as_str());
                if let Some(fuse_text) = refined.fuse_text() {
                    view.record.insert(Field::FuseText, fuse_text);
                }
                view.layout = Some(refined);
            }
        }

        Ok(view)
    }

    /// Faces keep whatever layout their record carries and skip normalization.
    fn from_face(record: CardRecord) -> Self {
        let layout = record
            .get_str(Field::Layout)
            .map(|raw| Layout::parse(raw, record.get_str(Field::FuseText)));
        Self { record, layout }
    }

    /// The (normalized) record backing this view.
    pub fn record(&self) -> &CardRecord {
        &self.record
    }

    pub fn into_record(self) -> CardRecord {
        self.record
    }

    pub fn name(&self) -> Result<&str> {
        self.require_str(Field::Name)
    }

    pub fn colors(&self) -> Result<Vec<Color>> {
        self.require_colors(Field::Colors)
    }

    pub fn color_indicator(&self) -> Result<Vec<Color>> {
        self.require_colors(Field::ColorIndicator)
    }

    pub fn mana_cost(&self) -> Result<&str> {
        self.require_str(Field::ManaCost)
    }

    pub fn oracle_text(&self) -> Result<&str> {
        self.require_str(Field::OracleText)
    }

    pub fn type_line(&self) -> Result<&str> {
        self.require_str(Field::TypeLine)
    }

    pub fn power(&self) -> Result<&str> {
        self.require_str(Field::Power)
    }

    pub fn toughness(&self) -> Result<&str> {
        self.require_str(Field::Toughness)
    }

    pub fn loyalty(&self) -> Result<&str> {
        self.require_str(Field::Loyalty)
    }

    pub fn layout(&self) -> Result<&Layout> {
        self.layout
            .as_ref()
            .ok_or_else(|| missing_field(&self.record, Field::Layout))
    }

    pub fn fuse_text(&self) -> Result<&str> {
        match self.layout.as_ref().and_then(Layout::fuse_text) {
            Some(fuse_text) => Ok(fuse_text),
            None => self.require_str(Field::FuseText),
        }
    }

    /// Front/back indicator symbol. Only set on faces of double-faced cards.
    pub fn face_symbol(&self) -> Result<&str> {
        self.require_str(Field::FaceSymbol)
    }

    /// The parent's layout for faces, `"standard"` for everything else.
    pub fn face_type(&self) -> &str {
        self.record
            .get_str(Field::FaceType)
            .unwrap_or(STANDARD_FACE_TYPE)
    }

    /// Position of this face in its card: 0 for the front, left or upright
    /// half, 1 for the other one. Only set on faces.
    pub fn face_num(&self) -> Result<usize> {
        self.require(Field::FaceNum)?
            .as_u64()
            .map(|n| n as usize)
            .ok_or_else(|| invalid_field(&self.record, Field::FaceNum, "a face index"))
    }

    pub fn legalities(&self) -> Result<&Map<String, Value>> {
        self.require(Field::Legalities)?
            .as_object()
            .ok_or_else(|| invalid_field(&self.record, Field::Legalities, "an object"))
    }

    pub fn flavor_name(&self) -> Result<&str> {
        self.require_str(Field::FlavorName)
    }

    /// The two units of a multi-part card: halves of a split card, faces of a
    /// double-faced card, and so on. Derived fresh on every call.
    pub fn card_faces(&self) -> Result<(CardView, CardView)> {
        let (front, back) = self.face_objects()?;
        let layout = self.layout()?;

        Ok((
            self.derive_face(front, 0, layout)?,
            self.derive_face(back, 1, layout)?,
        ))
    }

    /// Reminder text for the color indicator, using the default color names.
    pub fn color_indicator_reminder_text(&self) -> Result<String> {
        self.color_indicator_reminder_text_with(&ColorNames::default())
    }

    /// Black and white proxies lose the color indicator dot, so it is spelled
    /// out instead: `"(Name is white and blue.)\n"`. Empty when the card has
    /// no indicator.
    pub fn color_indicator_reminder_text_with(&self, names: &ColorNames) -> Result<String> {
        if !self.record.contains(Field::ColorIndicator) {
            return Ok(String::new());
        }
        let indicator = self.color_indicator()?;
        if indicator.is_empty() {
            return Ok(String::new());
        }

        let name = self.name()?;
        let subject = if self.is_token() && self.type_line()?.contains(name) {
            TOKEN_SUBJECT
        } else {
            name
        };

        Ok(format!("({} is {}.)\n", subject, names.describe(&indicator)))
    }

    pub fn has_pt(&self) -> bool {
        self.record.contains(Field::Power)
    }

    pub fn has_l(&self) -> bool {
        self.record.contains(Field::Loyalty)
    }

    pub fn has_ptl(&self) -> bool {
        self.has_pt() || self.has_l()
    }

    pub fn has_flavor_name(&self) -> bool {
        self.record.contains(Field::FlavorName)
    }

    pub fn is_token(&self) -> bool {
        type_line_contains(&self.record, "Token")
    }

    pub fn is_emblem(&self) -> bool {
        type_line_contains(&self.record, "Emblem")
    }

    pub fn is_token_or_emblem(&self) -> bool {
        self.is_token() || self.is_emblem()
    }

    pub fn is_textless_token(&self) -> bool {
        self.is_token() && self.record.get_str(Field::OracleText) == Some("")
    }

    pub fn is_basic_land(&self) -> bool {
        self.record
            .get_str(Field::Name)
            .is_some_and(|name| BASIC_LANDS.contains(&name))
    }

    pub fn is_two_parts(&self) -> bool {
        self.record.contains(Field::CardFaces)
    }

    fn require(&self, field: Field) -> Result<&Value> {
        self.record
            .get(field)
            .ok_or_else(|| missing_field(&self.record, field))
    }

    fn require_str(&self, field: Field) -> Result<&str> {
        self.require(field)?
            .as_str()
            .ok_or_else(|| invalid_field(&self.record, field, "a string"))
    }

    fn require_colors(&self, field: Field) -> Result<Vec<Color>> {
        let values = self
            .require(field)?
            .as_array()
            .ok_or_else(|| invalid_field(&self.record, field, "a list of colors"))?;

        values
            .iter()
            .map(|value| {
                value
                    .as_str()
                    .and_then(Color::from_letter)
                    .ok_or_else(|| invalid_field(&self.record, field, "a list of colors"))
            })
            .collect()
    }

    fn face_objects(&self) -> Result<(&Map<String, Value>, &Map<String, Value>)> {
        let not_two_faces = || invalid_field(&self.record, Field::CardFaces, "two face objects");

        let faces = self
            .require(Field::CardFaces)?
            .as_array()
            .ok_or_else(not_two_faces)?;

        match faces.as_slice() {
            [front, back, ..] => Ok((
                front.as_object().ok_or_else(not_two_faces)?,
                back.as_object().ok_or_else(not_two_faces)?,
            )),
            _ => Err(not_two_faces()),
        }
    }

    fn second_half_text(&self) -> Result<&str> {
        let (_, back) = self.face_objects()?;
        match back.get(Field::OracleText.as_str()) {
            Some(Value::String(text)) => Ok(text),
            Some(_) => Err(CardError::InvalidField {
                card: face_display_name(back),
                field: Field::OracleText,
                expected: "a string",
            }),
            None => Err(CardError::MissingField {
                card: face_display_name(back),
                field: Field::OracleText,
            }),
        }
    }

    fn derive_face(
        &self,
        face: &Map<String, Value>,
        face_num: usize,
        layout: &Layout,
    ) -> Result<CardView> {
        let mut record = CardRecord::from(face.clone());
        record.insert(Field::FaceType, layout.as_str());
        record.insert(Field::FaceNum, face_num);
        if let Some(legalities) = self.record.get(Field::Legalities) {
            record.insert(Field::Legalities, legalities.clone());
        }

        if let Some((front_symbol, back_symbol)) = layout.face_symbols() {
            let symbol = if face_num == 0 { front_symbol } else { back_symbol };
            record.insert(Field::FaceSymbol, symbol);
            record.insert(Field::Layout, layout.as_str());
        } else if let Layout::Fuse { fuse_text } = layout {
            let text = record
                .get_str(Field::OracleText)
                .ok_or_else(|| missing_field(&record, Field::OracleText))?;
            let stripped = text.replace(&format!("\n{}", fuse_text), "");
            record.insert(Field::OracleText, stripped);
        } else if *layout == Layout::Flip {
            // The flipped half shares the card's colors but has no cost of its own.
            if let Some(colors) = self.record.get(Field::Colors).cloned() {
                if face_num == 1 {
                    record.insert(Field::ColorIndicator, colors.clone());
                }
                record.insert(Field::Colors, colors);
            }
        }

        if layout.is_split_family() {
            let mana_cost = record
                .get_str(Field::ManaCost)
                .ok_or_else(|| missing_field(&record, Field::ManaCost))?;
            let letters: Vec<&str> = extract_colors(mana_cost)
                .into_iter()
                .map(Color::letter)
                .collect();
            record.insert(Field::Colors, letters);
        }

        tracing::trace!(
            "Derived face {} of {} ({})",
            face_num,
            self.record.display_name(),
            layout
        );
        Ok(CardView::from_face(record))
    }
}

impl fmt::Display for CardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card ({})", self.record.display_name())
    }
}

/// Emblems and tokens get their own layouts; returns the new layout if one applied.
fn normalize_token_or_emblem(record: &mut CardRecord) -> Option<Layout> {
    if type_line_contains(record, "Emblem") {
        let trimmed = record
            .get_str(Field::Name)
            .and_then(|name| name.strip_suffix(" Emblem"))
            .map(str::to_string);
        if let Some(name) = trimmed {
            record.insert(Field::Name, name);
        }
        record.insert(Field::Layout, Layout::Emblem.as_str());
        record.insert(Field::TypeLine, "Emblem");
        tracing::debug!("Tagged {} as an emblem", record.display_name());
        return Some(Layout::Emblem);
    }

    // Double-faced tokens keep their layout so their faces can still be split.
    if type_line_contains(record, "Token") && !record.contains(Field::CardFaces) {
        record.insert(Field::Layout, Layout::Token.as_str());
        let colors = record
            .get(Field::Colors)
            .filter(|colors| colors.as_array().is_some_and(|list| !list.is_empty()))
            .cloned();
        if let Some(colors) = colors {
            record.insert(Field::ColorIndicator, colors);
        }
        tracing::debug!("Tagged {} as a token", record.display_name());
        return Some(Layout::Token);
    }

    None
}

fn type_line_contains(record: &CardRecord, needle: &str) -> bool {
    record
        .get_str(Field::TypeLine)
        .is_some_and(|type_line| type_line.contains(needle))
}

fn face_display_name(face: &Map<String, Value>) -> String {
    face.get(Field::Name.as_str())
        .and_then(Value::as_str)
        .unwrap_or("<unknown>")
        .to_string()
}

fn missing_field(record: &CardRecord, field: Field) -> CardError {
    CardError::MissingField {
        card: record.display_name(),
        field,
    }
}

fn invalid_field(record: &CardRecord, field: Field, expected: &'static str) -> CardError {
    CardError::InvalidField {
        card: record.display_name(),
        field,
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn view(value: Value) -> CardView {
        CardView::new(CardRecord::try_from(value).unwrap()).unwrap()
    }

    #[test]
    fn test_record_without_layout_is_passed_through() {
        let card = view(json!({"name": "Fire", "mana_cost": "{1}{R}"}));
        assert_eq!(card.name().unwrap(), "Fire");
        assert!(card.layout().unwrap_err().is_missing_field());
        assert_eq!(card.face_type(), "standard");
    }

    #[test]
    fn test_missing_field_reports_card_and_field() {
        let card = view(json!({"name": "Shock", "layout": "normal"}));
        match card.loyalty() {
            Err(CardError::MissingField { card, field }) => {
                assert_eq!(card, "Shock");
                assert_eq!(field, Field::Loyalty);
            }
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_name_does_not_break_error() {
        let card = view(json!({"layout": "normal"}));
        let err = card.mana_cost().unwrap_err();
        assert_eq!(err.to_string(), "Card <unknown> has no key mana_cost");
    }

    #[test]
    fn test_wrong_type_is_invalid_field() {
        let card = view(json!({"name": "Odd", "layout": "normal", "colors": "W"}));
        assert!(matches!(
            card.colors(),
            Err(CardError::InvalidField { field: Field::Colors, .. })
        ));
    }

    #[test]
    fn test_non_string_layout_is_rejected() {
        let record = CardRecord::try_from(json!({"name": "Odd", "layout": 3})).unwrap();
        assert!(CardView::new(record).is_err());
    }

    #[test]
    fn test_split_without_faces_fails_construction() {
        let record = CardRecord::try_from(json!({"name": "Broken", "layout": "split"})).unwrap();
        let err = CardView::new(record).unwrap_err();
        assert!(err.is_missing_field());
    }

    #[test]
    fn test_display() {
        let card = view(json!({"name": "Opt", "layout": "normal"}));
        assert_eq!(card.to_string(), "Card (Opt)");
    }

    #[test]
    fn test_emblem_is_normalized() {
        let card = view(json!({
            "name": "Chandra, Torch of Defiance Emblem",
            "layout": "emblem",
            "type_line": "Emblem — Chandra",
        }));
        assert_eq!(card.name().unwrap(), "Chandra, Torch of Defiance");
        assert_eq!(card.type_line().unwrap(), "Emblem");
        assert_eq!(card.layout().unwrap(), &Layout::Emblem);
        assert!(card.is_emblem());
    }

    #[test]
    fn test_nameless_emblem_keeps_name_missing() {
        let card = view(json!({"layout": "emblem", "type_line": "Emblem — Chandra"}));
        assert!(card.name().unwrap_err().is_missing_field());
        assert!(!card.record().contains(Field::Name));
        assert_eq!(card.layout().unwrap(), &Layout::Emblem);
    }

    #[test]
    fn test_emblem_suffix_is_only_trimmed_at_the_end() {
        let card = view(json!({
            "name": "Sorin Emblem Maker Emblem",
            "layout": "emblem",
            "type_line": "Emblem — Sorin",
        }));
        assert_eq!(card.name().unwrap(), "Sorin Emblem Maker");

        let plain = view(json!({
            "name": "Emblem of the Warmind",
            "layout": "emblem",
            "type_line": "Emblem — Warmind",
        }));
        assert_eq!(plain.name().unwrap(), "Emblem of the Warmind");
    }

    #[test]
    fn test_token_colors_become_indicator() {
        let card = view(json!({
            "name": "Goblin",
            "layout": "token",
            "type_line": "Token Creature — Goblin",
            "colors": ["R"],
            "oracle_text": "",
        }));
        assert_eq!(card.color_indicator().unwrap(), vec![Color::Red]);
        assert_eq!(
            card.color_indicator_reminder_text().unwrap(),
            "(This token is red.)\n"
        );
        assert!(card.is_textless_token());
    }

    #[test]
    fn test_colorless_token_gets_no_indicator() {
        let card = view(json!({
            "name": "Treasure",
            "layout": "token",
            "type_line": "Token Artifact — Treasure",
            "colors": [],
            "oracle_text": "{T}, Sacrifice this artifact: Add one mana of any color.",
        }));
        assert!(card.color_indicator().unwrap_err().is_missing_field());
        assert_eq!(card.color_indicator_reminder_text().unwrap(), "");
        assert_eq!(card.layout().unwrap(), &Layout::Token);
        assert!(!card.is_textless_token());
    }

    #[test]
    fn test_double_faced_token_keeps_its_layout() {
        let card = view(json!({
            "name": "Incubator // Phyrexian Token",
            "layout": "transform",
            "type_line": "Token Artifact — Incubator // Token Artifact Creature — Phyrexian",
            "colors": [],
            "card_faces": [
                {"name": "Incubator", "mana_cost": "", "type_line": "Token Artifact — Incubator"},
                {"name": "Phyrexian Token", "mana_cost": "", "type_line": "Token Artifact Creature — Phyrexian",
                 "power": "0", "toughness": "0"}
            ]
        }));
        assert_eq!(card.layout().unwrap(), &Layout::Transform);
        assert!(card.is_token());

        let (front, back) = card.card_faces().unwrap();
        assert_eq!(front.face_symbol().unwrap(), "{TDFC_FRONT}");
        assert_eq!(back.face_symbol().unwrap(), "{TDFC_BACK}");
        assert_eq!(back.layout().unwrap(), &Layout::Transform);
    }

    #[test]
    fn test_basic_land_and_two_parts() {
        let land = view(json!({"name": "Snow-Covered Island", "layout": "normal"}));
        assert!(land.is_basic_land());
        assert!(!land.is_two_parts());
    }
}
