//! Icon types for the generation pipeline.
//!
//! This module provides the input side ([`IconSource`]), the identifier
//! derived from each file name ([`ComponentName`]) and the emitted artifact
//! ([`GeneratedComponent`]).

use std::fmt;

use heck::ToUpperCamelCase;

use crate::error::{Error, Result};

/// Extension of source icon files.
pub const SVG_EXTENSION: &str = "svg";

/// Suffix appended to every derived component name.
pub const COMPONENT_SUFFIX: &str = "Icon";

// ============================================================================
// ComponentName
// ============================================================================

/// Identifier of a generated component.
///
/// Always starts with an ASCII letter and contains only ASCII alphanumerics,
/// so it is usable both as a type name and as a value name in the generated
/// source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentName(String);

impl ComponentName {
    /// Derives a component name from an icon file name.
    ///
    /// The `.svg` extension is stripped, the remaining words are converted to
    /// PascalCase and [`COMPONENT_SUFFIX`] is appended. A letter following a
    /// run of digits starts a new word, so `stack-3d` becomes `Stack3D`:
    ///
    /// ```
    /// use icon_codegen::ComponentName;
    ///
    /// let name = ComponentName::from_file_name("arrow-left.svg").unwrap();
    /// assert_eq!(name.as_str(), "ArrowLeftIcon");
    /// ```
    pub fn from_file_name(file_name: &str) -> Result<Self> {
        let stem = file_name.strip_suffix(".svg").unwrap_or(file_name);
        let derived = format!(
            "{}{COMPONENT_SUFFIX}",
            upper_after_digits(&stem.to_upper_camel_case())
        );

        let starts_with_letter = derived
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic());
        if !starts_with_letter || !derived.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::InvalidComponentName {
                file_name: file_name.to_string(),
                derived,
            });
        }

        Ok(Self(derived))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Upper-cases every letter that directly follows a digit.
fn upper_after_digits(name: &str) -> String {
    let mut prev_digit = false;
    name.chars()
        .map(|c| {
            let c = if prev_digit { c.to_ascii_uppercase() } else { c };
            prev_digit = c.is_ascii_digit();
            c
        })
        .collect()
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ComponentName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// IconSource
// ============================================================================

/// A single SVG icon read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSource {
    /// Style subdirectory the icon was read from, e.g. `24/outline`.
    pub style: String,

    /// File name including the extension, e.g. `arrow-left.svg`.
    pub file_name: String,

    /// Raw SVG markup.
    pub svg: String,
}

impl IconSource {
    pub fn new(
        style: impl Into<String>,
        file_name: impl Into<String>,
        svg: impl Into<String>,
    ) -> Self {
        Self {
            style: style.into(),
            file_name: file_name.into(),
            svg: svg.into(),
        }
    }

    /// Derives the component name for this icon.
    pub fn component_name(&self) -> Result<ComponentName> {
        ComponentName::from_file_name(&self.file_name)
    }
}

/// Returns true if `file_name` names an SVG icon.
pub fn is_svg_file(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && ext == SVG_EXTENSION)
}

// ============================================================================
// GeneratedComponent
// ============================================================================

/// The emitted source of one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedComponent {
    pub component_name: ComponentName,
    pub source: String,
}

impl GeneratedComponent {
    /// File name the component is written to, e.g. `ArrowLeftIcon.tsx`.
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{extension}", self.component_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_pascal_case_names() {
        let name = ComponentName::from_file_name("arrow-left.svg").unwrap();
        assert_eq!(name.as_str(), "ArrowLeftIcon");

        let name = ComponentName::from_file_name("academic-cap.svg").unwrap();
        assert_eq!(name.as_str(), "AcademicCapIcon");
    }

    #[test]
    fn keeps_digits_inside_names() {
        let name = ComponentName::from_file_name("bars-3-bottom-left.svg").unwrap();
        assert_eq!(name.as_str(), "Bars3BottomLeftIcon");
    }

    #[test]
    fn letters_after_digits_start_a_word() {
        let name = ComponentName::from_file_name("square-3-stack-3d.svg").unwrap();
        assert_eq!(name.as_str(), "Square3Stack3DIcon");

        let name = ComponentName::from_file_name("h1.svg").unwrap();
        assert_eq!(name.as_str(), "H1Icon");
    }

    #[test]
    fn rejects_names_starting_with_digit() {
        let err = ComponentName::from_file_name("3d-cube.svg").unwrap_err();
        assert!(matches!(err, Error::InvalidComponentName { .. }));
    }

    #[test]
    fn icon_source_component_name() {
        let icon = IconSource::new("24/solid", "x-mark.svg", "<svg/>");
        assert_eq!(icon.component_name().unwrap().to_string(), "XMarkIcon");
    }

    #[test]
    fn svg_file_detection() {
        assert!(is_svg_file("check.svg"));
        assert!(!is_svg_file("check.svg.bak"));
        assert!(!is_svg_file(".svg"));
        assert!(!is_svg_file("README"));
    }

    #[test]
    fn generated_file_name() {
        let component = GeneratedComponent {
            component_name: ComponentName::from_file_name("bell.svg").unwrap(),
            source: String::new(),
        };
        assert_eq!(component.file_name("tsx"), "BellIcon.tsx");
    }
}
