//! SVG root parsing and serialization using quick-xml.
//!
//! Only the root element's attributes are materialized; everything inside the
//! root is kept as a stream of owned events and written back verbatim.

use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::error::{Error, Result};

// ============================================================================
// SvgRoot
// ============================================================================

/// The root element of an SVG document.
///
/// Anything before the root element (XML declaration, comments, whitespace)
/// and anything after its closing tag is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgRoot {
    name: String,
    attributes: Vec<(String, String)>,
    /// Events following the start tag, up to and including the matching end
    /// tag. Empty when the root is self-closing.
    children: Vec<Event<'static>>,
    self_closing: bool,
}

impl SvgRoot {
    /// Parses `svg` and returns its root element.
    pub fn parse(svg: &str) -> Result<Self> {
        let mut reader = Reader::from_str(svg);

        let (start, self_closing) = loop {
            match reader.read_event()? {
                Event::Start(start) => break (start, false),
                Event::Empty(start) => break (start, true),
                Event::Eof => return Err(Error::MissingRoot),
                _ => {}
            }
        };

        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr?;
            attributes.push((
                String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
                String::from_utf8_lossy(&attr.value).into_owned(),
            ));
        }

        let mut children = Vec::new();
        if !self_closing {
            let mut depth = 1usize;
            loop {
                let event = reader.read_event()?;
                match &event {
                    Event::Start(_) => depth += 1,
                    Event::End(_) => depth -= 1,
                    Event::Eof => return Err(Error::UnclosedRoot(name)),
                    _ => {}
                }
                children.push(event.into_owned());
                if depth == 0 {
                    break;
                }
            }
        }

        Ok(Self {
            name,
            attributes,
            children,
            self_closing,
        })
    }

    /// Tag name of the root element, normally `svg`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attributes of the root element in document order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Returns the raw value of the attribute `name`, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Removes the attribute `name` and returns its raw value.
    ///
    /// The remaining attributes keep their relative order.
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let index = self.attributes.iter().position(|(key, _)| key == name)?;
        Some(self.attributes.remove(index).1)
    }

    /// Serializes the root element and its content back to markup.
    ///
    /// The start tag is always written first as `<name` followed by a space,
    /// `>` or `/>`. Root attribute values are double-quoted; a `"` taken from a
    /// single-quoted value is written as `&quot;`.
    pub fn to_markup(&self) -> Result<String> {
        let mut start = BytesStart::new(self.name.as_str());
        for (key, value) in &self.attributes {
            let value = value.replace('"', "&quot;");
            start.push_attribute((key.as_bytes(), value.as_bytes()));
        }

        let mut writer = Writer::new(Vec::new());
        if self.self_closing {
            writer.write_event(Event::Empty(start))?;
        } else {
            writer.write_event(Event::Start(start))?;
            for event in &self.children {
                writer.write_event(event.clone())?;
            }
        }

        String::from_utf8(writer.into_inner())
            .map_err(|e| Error::Serialize(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const ICON: &str = concat!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" "#,
        r#"stroke-width="1.5" stroke="currentColor" aria-hidden="true">"#,
        "\n",
        r#"  <path stroke-linecap="round" stroke-linejoin="round" "#,
        r#"d="M10.5 19.5L3 12m0 0l7.5-7.5M3 12h18"/>"#,
        "\n</svg>\n",
    );

    #[test]
    fn parse_reads_root_attributes_in_order() {
        let root = SvgRoot::parse(ICON).unwrap();
        assert_eq!(root.name(), "svg");

        let keys: Vec<_> = root.attributes().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            ["xmlns", "fill", "viewBox", "stroke-width", "stroke", "aria-hidden"]
        );
        assert_eq!(root.attribute("stroke-width"), Some("1.5"));
        assert_eq!(root.attribute("stroke-dasharray"), None);
    }

    #[test]
    fn markup_round_trips_body_verbatim() {
        let root = SvgRoot::parse(ICON).unwrap();
        let markup = root.to_markup().unwrap();
        assert_eq!(markup, ICON.trim_end());
    }

    #[test]
    fn remove_attribute_keeps_other_attributes() {
        let mut root = SvgRoot::parse(ICON).unwrap();
        assert_eq!(root.remove_attribute("stroke-width").as_deref(), Some("1.5"));
        assert_eq!(root.remove_attribute("stroke-width"), None);

        let markup = root.to_markup().unwrap();
        assert!(markup.starts_with(concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" fill="none" "#,
            r#"viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">"#
        )));
    }

    #[test]
    fn leading_prolog_and_trailing_content_are_dropped() {
        let svg = concat!(
            "<?xml version=\"1.0\"?>\n<!-- icon -->\n",
            "<svg viewBox=\"0 0 20 20\"><g><path d=\"M0 0\"/></g></svg>\n",
            "<!-- trailer -->",
        );
        let root = SvgRoot::parse(svg).unwrap();
        assert_eq!(
            root.to_markup().unwrap(),
            "<svg viewBox=\"0 0 20 20\"><g><path d=\"M0 0\"/></g></svg>"
        );
    }

    #[test]
    fn self_closing_root() {
        let root = SvgRoot::parse(r#"<svg width="4"/>"#).unwrap();
        assert_eq!(root.to_markup().unwrap(), r#"<svg width="4"/>"#);
    }

    #[test]
    fn entity_values_are_kept_raw() {
        let root = SvgRoot::parse(r#"<svg data-x="a &amp; b"></svg>"#).unwrap();
        assert_eq!(root.attribute("data-x"), Some("a &amp; b"));
        assert_eq!(root.to_markup().unwrap(), r#"<svg data-x="a &amp; b"></svg>"#);
    }

    #[test]
    fn single_quoted_values_stay_well_formed() {
        let root = SvgRoot::parse(r#"<svg aria-label='say "hi"' fill="none"></svg>"#).unwrap();
        assert_eq!(root.attribute("aria-label"), Some(r#"say "hi""#));

        let markup = root.to_markup().unwrap();
        assert_eq!(
            markup,
            r#"<svg aria-label="say &quot;hi&quot;" fill="none"></svg>"#
        );

        let reparsed = SvgRoot::parse(&markup).unwrap();
        assert_eq!(reparsed.attributes().len(), 2);
        assert_eq!(reparsed.attribute("fill"), Some("none"));
    }

    #[test]
    fn empty_document_has_no_root() {
        assert!(matches!(SvgRoot::parse("  "), Err(Error::MissingRoot)));
    }

    #[test]
    fn unclosed_root_is_an_error() {
        assert!(SvgRoot::parse("<svg><path d=\"M0 0\"/>").is_err());
    }
}
