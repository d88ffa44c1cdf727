use crate::core::card::CardView;
use crate::core::colors::{Color, ColorNames};
use crate::utils::error::{optional, Result};

/// Plain-text description of a card and, for multi-part cards, each of its faces.
pub fn render_summary(card: &CardView, names: &ColorNames) -> Result<String> {
    let mut lines = vec![format!("Name: {}", card.name()?)];

    if let Some(layout) = optional(card.layout())? {
        lines.push(format!("Layout: {}", layout));
    }
    push_details(&mut lines, card, names, "")?;

    if card.is_two_parts() {
        let (front, back) = card.card_faces()?;
        for face in [&front, &back] {
            let mut header = format!("  [{}] {}", face.face_num()?, face.name()?);
            if let Some(symbol) = optional(face.face_symbol())? {
                header.push(' ');
                header.push_str(symbol);
            }
            lines.push(header);
            push_details(&mut lines, face, names, "    ")?;
            if let Some(colors) = optional(face.colors())? {
                lines.push(format!("    Colors: {}", join_letters(&colors)));
            }
        }
    }

    Ok(lines.join("\n"))
}

fn push_details(
    lines: &mut Vec<String>,
    card: &CardView,
    names: &ColorNames,
    indent: &str,
) -> Result<()> {
    if let Some(type_line) = optional(card.type_line())? {
        lines.push(format!("{}Type: {}", indent, type_line));
    }
    if let Some(mana_cost) = optional(card.mana_cost())?.filter(|cost| !cost.is_empty()) {
        lines.push(format!("{}Cost: {}", indent, mana_cost));
    }
    if card.has_pt() {
        let toughness = optional(card.toughness())?.unwrap_or("?");
        lines.push(format!("{}P/T: {}/{}", indent, card.power()?, toughness));
    }
    if card.has_l() {
        lines.push(format!("{}Loyalty: {}", indent, card.loyalty()?));
    }
    if card.has_flavor_name() {
        lines.push(format!("{}Flavor name: {}", indent, card.flavor_name()?));
    }

    let reminder = card.color_indicator_reminder_text_with(names)?;
    if !reminder.is_empty() {
        lines.push(format!("{}{}", indent, reminder.trim_end()));
    }
    Ok(())
}

fn join_letters(colors: &[Color]) -> String {
    colors
        .iter()
        .map(|c| c.letter())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::CardRecord;
    use serde_json::json;

    #[test]
    fn test_single_faced_summary() {
        let record = CardRecord::try_from(json!({
            "name": "Grizzly Bears",
            "layout": "normal",
            "type_line": "Creature — Bear",
            "mana_cost": "{1}{G}",
            "power": "2",
            "toughness": "2",
        }))
        .unwrap();
        let card = CardView::new(record).unwrap();

        let summary = render_summary(&card, &ColorNames::default()).unwrap();
        assert_eq!(
            summary,
            "Name: Grizzly Bears\nLayout: normal\nType: Creature — Bear\nCost: {1}{G}\nP/T: 2/2"
        );
    }

    #[test]
    fn test_transform_summary_lists_faces_with_symbols() {
        let record = CardRecord::try_from(json!({
            "name": "Delver of Secrets // Insectile Aberration",
            "layout": "transform",
            "type_line": "Creature — Human Wizard // Creature — Human Insect",
            "card_faces": [
                {"name": "Delver of Secrets", "mana_cost": "{U}", "type_line": "Creature — Human Wizard", "power": "1", "toughness": "1"},
                {"name": "Insectile Aberration", "mana_cost": "", "type_line": "Creature — Human Insect", "power": "3", "toughness": "2", "color_indicator": ["U"]}
            ]
        }))
        .unwrap();
        let card = CardView::new(record).unwrap();

        let summary = render_summary(&card, &ColorNames::default()).unwrap();
        assert!(summary.contains("  [0] Delver of Secrets {TDFC_FRONT}"));
        assert!(summary.contains("  [1] Insectile Aberration {TDFC_BACK}"));
        assert!(summary.contains("    (Insectile Aberration is blue.)"));
        assert!(summary.contains("    P/T: 3/2"));
    }
}
