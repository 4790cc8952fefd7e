use crate::models::fields;
use crate::models::record::Record;
use ansi_term::Colour;
use serde::Serialize;
use std::fmt;

/// Logo order priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Priority {
    Rush,
    #[serde(rename = "Lax.Ink")]
    LaxInk,
    New,
}

impl Priority {
    /// Rush wins over a Lax.Ink variation; everything else is a new logo.
    pub fn of(record: &Record) -> Self {
        if record.flag(fields::RUSH_ORDER) {
            Priority::Rush
        } else if Self::is_lax_ink_variation(record) {
            Priority::LaxInk
        } else {
            Priority::New
        }
    }

    /// A Lax.Ink variation, whether or not it is also a rush order.
    pub fn is_lax_ink_variation(record: &Record) -> bool {
        record.text(fields::VARIATION_OF_CHECK).as_deref() == Some("Lax.Ink")
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Rush => "Rush",
            Priority::LaxInk => "Lax.Ink",
            Priority::New => "New",
        }
    }

    pub fn colour(&self) -> Colour {
        match self {
            Priority::Rush => Colour::Red,
            Priority::LaxInk => Colour::Purple,
            Priority::New => Colour::Green,
        }
    }

    /// Coloured label for terminal output.
    pub fn badge(&self) -> String {
        self.colour().bold().paint(self.as_str()).to_string()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn logo(fields: serde_json::Value) -> Record {
        serde_json::from_value(json!({"id": "rec", "fields": fields})).unwrap()
    }

    #[test]
    fn rush_wins_over_variation() {
        assert_eq!(
            Priority::of(&logo(json!({"Rush Order": true, "VariationOfCheck": "Lax.Ink"}))),
            Priority::Rush
        );
        assert_eq!(
            Priority::of(&logo(json!({"VariationOfCheck": "Lax.Ink"}))),
            Priority::LaxInk
        );
        assert_eq!(
            Priority::of(&logo(json!({"Rush Order": false, "VariationOfCheck": "Other"}))),
            Priority::New
        );
        assert_eq!(Priority::of(&logo(json!({}))), Priority::New);
    }
}
