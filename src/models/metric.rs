use serde::Serialize;

/// A headline number shown as a card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub title: String,
    pub value: String,
    pub description: String,
}

impl MetricCard {
    pub fn new(title: &str, value: impl ToString, description: &str) -> Self {
        Self {
            title: title.to_string(),
            value: value.to_string(),
            description: description.to_string(),
        }
    }
}
