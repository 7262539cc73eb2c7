//! Extraction of presentation attributes into component defaults.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::svg::SvgRoot;

/// Attributes extracted when no allow-list is configured.
pub const DEFAULT_ATTRIBUTES: &[&str] = &["stroke-width"];

/// Ordered mapping from extracted attribute name to its raw value.
///
/// Entries follow the allow-list order used during extraction, not the
/// order the attributes had in the document. Serializes to a JSON object in
/// that same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedDefaults {
    entries: Vec<(String, String)>,
}

impl ExtractedDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Serialize for ExtractedDefaults {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Removes every allow-listed attribute present on `root` and returns the
/// removed values.
///
/// Attributes missing from the element are skipped. Attributes not on the
/// allow-list are left where they are.
pub fn extract<S: AsRef<str>>(root: &mut SvgRoot, allow_list: &[S]) -> ExtractedDefaults {
    let mut defaults = ExtractedDefaults::new();
    for name in allow_list {
        let name = name.as_ref();
        if let Some(value) = root.remove_attribute(name) {
            tracing::debug!(attribute = name, value = %value, "removing attribute");
            defaults.insert(name, value);
        }
    }
    defaults
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> SvgRoot {
        SvgRoot::parse(concat!(
            r#"<svg fill="none" stroke-linecap="round" stroke-width="2" stroke="currentColor">"#,
            r#"<path d="M0 0"/></svg>"#,
        ))
        .unwrap()
    }

    #[test]
    fn extracts_allow_listed_attributes() {
        let mut root = root();
        let defaults = extract(&mut root, DEFAULT_ATTRIBUTES);

        assert_eq!(defaults.len(), 1);
        assert_eq!(defaults.get("stroke-width"), Some("2"));
        assert_eq!(root.attribute("stroke-width"), None);
    }

    #[test]
    fn follows_allow_list_order() {
        let mut root = root();
        let defaults = extract(&mut root, &["stroke", "stroke-width", "fill"]);

        let keys: Vec<_> = defaults.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["stroke", "stroke-width", "fill"]);
        assert_eq!(defaults.get("stroke"), Some("currentColor"));
    }

    #[test]
    fn leaves_other_attributes_untouched() {
        let mut root = root();
        let defaults = extract(&mut root, &["stroke-width"]);

        assert_eq!(defaults.get("fill"), None);
        let keys: Vec<_> = root.attributes().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["fill", "stroke-linecap", "stroke"]);
    }

    #[test]
    fn missing_attributes_are_skipped() {
        let mut root = root();
        let defaults = extract(&mut root, &["opacity", "stroke-dasharray"]);
        assert!(defaults.is_empty());
        assert_eq!(root.attributes().len(), 4);
    }

    #[test]
    fn second_extraction_is_empty() {
        let mut root = root();
        let first = extract(&mut root, DEFAULT_ATTRIBUTES);
        let after_first = root.clone();
        let second = extract(&mut root, DEFAULT_ATTRIBUTES);

        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
        assert_eq!(root, after_first);
    }

    #[test]
    fn defaults_serialize_in_insertion_order() {
        let mut defaults = ExtractedDefaults::new();
        defaults.insert("stroke-width", "2");
        defaults.insert("fill", "none");
        assert_eq!(
            serde_json::to_string(&defaults).unwrap(),
            r#"{"stroke-width":"2","fill":"none"}"#
        );
    }
}
