//! icon-codegen: SVG icon to framework component generator
//!
//! This crate turns a tree of SVG icons into component source files. Each
//! icon's root `<svg>` element loses a configurable set of presentation
//! attributes, which become the component's typed, overridable defaults.
//!
//! # Example
//!
//! ```
//! use icon_codegen::{ComponentName, Package, DEFAULT_ATTRIBUTES};
//!
//! let svg = r#"<svg stroke-width="2" fill="none"><path d="M0 0"/></svg>"#;
//! let name = ComponentName::from_file_name("arrow-left.svg").unwrap();
//!
//! let component = Package::Qwik.transform(svg, name, DEFAULT_ATTRIBUTES).unwrap();
//! assert!(component.source.contains(r#"const defaults = {"stroke-width":"2"}"#));
//! assert!(component.source.contains(r#"<svg {...attrs} fill="none">"#));
//! ```
//!
//! # Batch Builds
//!
//! [`build`] regenerates a whole package from a [`BuildConfig`]:
//!
//! ```no_run
//! use icon_codegen::{build, BuildConfig, Package};
//!
//! # async fn run() -> icon_codegen::Result<()> {
//! let config = BuildConfig::new().with_icons_root("heroicons/optimized");
//! let report = build(Package::Qwik, &config).await?;
//! println!("wrote {} components", report.total());
//! # Ok(())
//! # }
//! ```

mod batch;
mod config;
mod error;
mod icon;
mod transform;

pub use batch::{build, BuildReport, StyleReport};
pub use config::{BuildConfig, DEFAULT_CONCURRENCY, DEFAULT_ICONS_ROOT, DEFAULT_STYLES};
pub use error::{Error, Result};
pub use icon::{is_svg_file, ComponentName, GeneratedComponent, IconSource, COMPONENT_SUFFIX};
pub use transform::{
    extract, infer_type, ExtractedDefaults, Package, SvgRoot, TypeTag, UnknownPackage,
    DEFAULT_ATTRIBUTES,
};
