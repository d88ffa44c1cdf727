use std::fmt;

/// How a card is physically arranged.
///
/// Mirrors the service's `layout` strings, plus `aftermath` and `fuse`,
/// which the service reports as plain `split` and which are recovered from
/// the second half's rules text by [`classify_split`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    Normal,
    Split,
    Aftermath,
    Fuse { fuse_text: String },
    Flip,
    Adventure,
    Transform,
    ModalDfc,
    Token,
    Emblem,
    Other(String),
}

impl Layout {
    /// Parse a raw `layout` value. A `fuse` layout is only recognized when
    /// its banner line is known.
    pub fn parse(raw: &str, fuse_text: Option<&str>) -> Layout {
        match raw {
            "normal" => Layout::Normal,
            "split" => Layout::Split,
            "aftermath" => Layout::Aftermath,
            "fuse" => match fuse_text {
                Some(text) => Layout::Fuse {
                    fuse_text: text.to_string(),
                },
                None => Layout::Other(raw.to_string()),
            },
            "flip" => Layout::Flip,
            "adventure" => Layout::Adventure,
            "transform" => Layout::Transform,
            "modal_dfc" => Layout::ModalDfc,
            "token" => Layout::Token,
            "emblem" => Layout::Emblem,
            other => Layout::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Layout::Normal => "normal",
            Layout::Split => "split",
            Layout::Aftermath => "aftermath",
            Layout::Fuse { .. } => "fuse",
            Layout::Flip => "flip",
            Layout::Adventure => "adventure",
            Layout::Transform => "transform",
            Layout::ModalDfc => "modal_dfc",
            Layout::Token => "token",
            Layout::Emblem => "emblem",
            Layout::Other(raw) => raw,
        }
    }

    /// Split, fuse and aftermath cards: two halves printed on one face,
    /// each with its own mana cost.
    pub fn is_split_family(&self) -> bool {
        matches!(self, Layout::Split | Layout::Fuse { .. } | Layout::Aftermath)
    }

    /// Front and back face indicator symbols for double-faced cards.
    pub fn face_symbols(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Layout::Transform => Some(("{TDFC_FRONT}", "{TDFC_BACK}")),
            Layout::ModalDfc => Some(("{MDFC_FRONT}", "{MDFC_BACK}")),
            _ => None,
        }
    }

    pub fn fuse_text(&self) -> Option<&str> {
        match self {
            Layout::Fuse { fuse_text } => Some(fuse_text),
            _ => None,
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Work out the real layout of a `split` card from its second half's rules text.
///
/// Aftermath halves open with an "Aftermath" line; fuse cards close with a
/// "Fuse" reminder line, which becomes the variant's banner. When both match
/// the fuse check runs last and wins.
pub fn classify_split(second_half_text: &str) -> Layout {
    let lines: Vec<&str> = second_half_text.split('\n').collect();
    let first_line = lines.first().copied().unwrap_or_default();
    let last_line = lines.last().copied().unwrap_or_default();

    let mut layout = Layout::Split;
    if first_word(first_line) == "Aftermath" {
        layout = Layout::Aftermath;
    }
    if first_word(last_line) == "Fuse" {
        layout = Layout::Fuse {
            fuse_text: last_line.to_string(),
        };
    }
    layout
}

fn first_word(line: &str) -> &str {
    line.split(' ').next().unwrap_or_default()
}
