//! Detect keys missing from a configuration file written by an older release.

use serde_yaml::Value;

/// Every key understood by `Config`, in file order.
pub const KNOWN_KEYS: &[&str] = &[
    "timezone",
    "business_start_hour",
    "business_end_hour",
    "window_days",
    "max_records",
    "page_size",
    "separator_char",
];

/// Keys of `KNOWN_KEYS` absent from `content`.
/// Content that is not a YAML mapping is reported as missing everything.
pub fn missing_keys(content: &str) -> Vec<&'static str> {
    let parsed: Option<Value> = serde_yaml::from_str(content).ok();

    match parsed.as_ref().and_then(Value::as_mapping) {
        Some(map) => KNOWN_KEYS
            .iter()
            .copied()
            .filter(|k| !map.contains_key(Value::String((*k).to_string())))
            .collect(),
        None => KNOWN_KEYS.to_vec(),
    }
}

/// Keys present in `content` that `Config` does not know about.
pub fn unknown_keys(content: &str) -> Vec<String> {
    let parsed: Option<Value> = serde_yaml::from_str(content).ok();

    parsed
        .as_ref()
        .and_then(Value::as_mapping)
        .map(|map| {
            map.keys()
                .filter_map(Value::as_str)
                .filter(|k| !KNOWN_KEYS.contains(k))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_missing_and_unknown_keys() {
        let content = "timezone: Europe/Rome\npage_size: 20\ndatabase: old.sqlite\n";

        let missing = missing_keys(content);
        assert!(missing.contains(&"business_start_hour"));
        assert!(!missing.contains(&"timezone"));
        assert_eq!(missing.len(), KNOWN_KEYS.len() - 2);

        assert_eq!(unknown_keys(content), vec!["database".to_string()]);
    }

    #[test]
    fn garbage_is_missing_everything() {
        assert_eq!(missing_keys("- just\n- a list\n").len(), KNOWN_KEYS.len());
    }
}
