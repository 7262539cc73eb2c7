//! SVG to component transformation.
//!
//! A transform runs three stages over a single icon:
//!
//! 1. [`SvgRoot::parse`] reads the root element of the markup.
//! 2. [`extract`] moves allow-listed presentation attributes off the root into
//!    an [`ExtractedDefaults`] mapping.
//! 3. The [`Package`]'s emitter renders the component, typing each default
//!    with [`infer_type`] and spreading the props into the root element.
//!
//! Every call owns its own parsed tree and defaults, so transforms can run
//! concurrently without coordination.

pub mod extract;
pub mod infer;
pub mod qwik;
pub mod svg;

pub use extract::{extract, ExtractedDefaults, DEFAULT_ATTRIBUTES};
pub use infer::{infer_type, TypeTag};
pub use svg::SvgRoot;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::icon::{ComponentName, GeneratedComponent};

// ============================================================================
// Package
// ============================================================================

/// A target framework package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub enum Package {
    /// Qwik components (`@builder.io/qwik`).
    Qwik,
}

impl Package {
    pub const ALL: &'static [Package] = &[Package::Qwik];

    /// Directory name of the package under the output root.
    pub fn name(self) -> &'static str {
        match self {
            Self::Qwik => "qwik",
        }
    }

    /// Extension of generated component files.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Qwik => "tsx",
        }
    }

    /// Subdirectory of a style directory that receives the components.
    pub fn source_dir(self) -> &'static str {
        match self {
            Self::Qwik => "tsx",
        }
    }

    /// File name of the barrel module.
    pub fn index_file(self) -> &'static str {
        match self {
            Self::Qwik => "index.ts",
        }
    }

    /// Transforms one SVG icon into a component.
    pub fn transform<S: AsRef<str>>(
        self,
        svg: &str,
        component_name: ComponentName,
        attributes: &[S],
    ) -> Result<GeneratedComponent> {
        let mut root = SvgRoot::parse(svg)?;
        let defaults = extract(&mut root, attributes);
        tracing::debug!(
            component = %component_name,
            ?defaults,
            remaining = ?root.attributes(),
            "extracted defaults"
        );

        let markup = root.to_markup()?;
        let source = match self {
            Self::Qwik => qwik::emit(&component_name, &defaults, &markup),
        };

        Ok(GeneratedComponent {
            component_name,
            source,
        })
    }

    /// Renders the barrel module re-exporting `components`.
    pub fn index<'a>(self, components: impl IntoIterator<Item = &'a ComponentName>) -> String {
        match self {
            Self::Qwik => qwik::emit_index(components),
        }
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown package name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown package `{0}`")]
pub struct UnknownPackage(pub String);

impl FromStr for Package {
    type Err = UnknownPackage;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|package| package.name() == s)
            .ok_or_else(|| UnknownPackage(s.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================
