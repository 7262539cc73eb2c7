//! Batch driver: reads every icon of every style and writes the components.
//!
//! A build first clears each style's output directory, then builds all styles
//! concurrently. Within a style, at most [`BuildConfig::concurrency`] icons are
//! in flight at once. The first failure aborts the whole build; output that
//! was already written stays on disk and is cleared by the next run.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use futures_util::future::try_join_all;
use futures_util::stream::{self, StreamExt, TryStreamExt};
use tokio::fs;

use crate::config::BuildConfig;
use crate::error::{Error, Result};
use crate::icon::{is_svg_file, ComponentName, GeneratedComponent, IconSource};
use crate::transform::Package;

// ============================================================================
// Reports
// ============================================================================

/// Outcome of building one style directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleReport {
    pub style: String,
    pub output_dir: PathBuf,
    /// Components written, after collapsing duplicate names.
    pub components: Vec<ComponentName>,
}

/// Outcome of a whole build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub package: Package,
    pub styles: Vec<StyleReport>,
}

impl BuildReport {
    /// Total number of components written across all styles.
    pub fn total(&self) -> usize {
        self.styles.iter().map(|s| s.components.len()).sum()
    }
}

// ============================================================================
// Build
// ============================================================================

/// Regenerates every style of `package` from scratch.
pub async fn build(package: Package, config: &BuildConfig) -> Result<BuildReport> {
    tracing::info!("Building {package} package...");

    let package_dir = config.output_root.join(package.name());
    try_join_all(
        config
            .styles
            .iter()
            .map(|style| clear_dir(package_dir.join(style))),
    )
    .await?;

    let styles = try_join_all(
        config
            .styles
            .iter()
            .map(|style| build_style(package, config, style)),
    )
    .await?;

    let report = BuildReport { package, styles };
    tracing::info!(components = report.total(), "Finished building {package} package.");
    Ok(report)
}

async fn build_style(package: Package, config: &BuildConfig, style: &str) -> Result<StyleReport> {
    let source_dir = config.icons_root.join(style);
    let output_dir = config
        .output_root
        .join(package.name())
        .join(style)
        .join(package.source_dir());

    let icons = list_icons(&source_dir).await?;
    tracing::debug!(style, icons = icons.len(), "building style");

    let generated: Vec<GeneratedComponent> = stream::iter(icons)
        .map(|file_name| load_icon(package, config, style, &source_dir, file_name))
        .buffered(config.effective_concurrency())
        .try_collect()
        .await?;

    let components = resolve_duplicates(style, generated);

    stream::iter(&components)
        .map(|component| {
            let target = output_dir.join(component.file_name(package.extension()));
            async move {
                write_file(&target, &component.source).await?;
                tracing::debug!(path = %target.display(), "wrote component");
                Ok::<_, Error>(())
            }
        })
        .buffer_unordered(config.effective_concurrency())
        .try_collect::<()>()
        .await?;

    let components: Vec<ComponentName> = components
        .into_iter()
        .map(|component| component.component_name)
        .collect();

    if config.write_index {
        let path = output_dir.join(package.index_file());
        write_file(&path, &package.index(&components)).await?;
    }

    tracing::info!(style, components = components.len(), "built style");
    Ok(StyleReport {
        style: style.to_string(),
        output_dir,
        components,
    })
}

async fn load_icon(
    package: Package,
    config: &BuildConfig,
    style: &str,
    source_dir: &Path,
    file_name: String,
) -> Result<GeneratedComponent> {
    let path = source_dir.join(&file_name);
    let svg = fs::read_to_string(&path)
        .await
        .map_err(Error::io("failed to read icon", &path))?;

    let icon = IconSource::new(style, file_name, svg);
    let component_name = icon.component_name()?;
    package.transform(&icon.svg, component_name, &config.attributes)
}

/// Keeps one component per name, sorted by name.
///
/// `generated` is in icon file-name order; when several icons map to the same
/// name, the one whose file name sorts last is kept.
fn resolve_duplicates(
    style: &str,
    generated: Vec<GeneratedComponent>,
) -> Vec<GeneratedComponent> {
    let mut by_name: BTreeMap<ComponentName, Vec<GeneratedComponent>> = BTreeMap::new();
    for component in generated {
        by_name
            .entry(component.component_name.clone())
            .or_default()
            .push(component);
    }

    by_name
        .into_iter()
        .filter_map(|(name, mut group)| {
            if group.len() > 1 {
                tracing::warn!(
                    style,
                    component = %name,
                    count = group.len(),
                    "several icons map to the same component, keeping the last by file name"
                );
            }
            group.pop()
        })
        .collect()
}

// ============================================================================
// File System
// ============================================================================

/// Lists the SVG file names in `dir`, sorted.
async fn list_icons(dir: &Path) -> Result<Vec<String>> {
    let mut entries = fs::read_dir(dir)
        .await
        .map_err(Error::io("failed to read icon directory", dir))?;

    let mut icons = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(Error::io("failed to read icon directory", dir))?
    {
        let path = entry.path();
        let Some(file_name) = entry.file_name().to_str().map(str::to_owned) else {
            tracing::warn!(path = %path.display(), "skipping non UTF-8 file name");
            continue;
        };
        if !is_svg_file(&file_name) {
            continue;
        }
        let metadata = fs::metadata(&path)
            .await
            .map_err(Error::io("failed to inspect", &path))?;
        if metadata.is_file() {
            icons.push(file_name);
        }
    }

    icons.sort();
    Ok(icons)
}

/// Removes everything inside `dir`. A missing directory is already clear.
async fn clear_dir(dir: PathBuf) -> Result<()> {
    let mut entries = match fs::read_dir(&dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(Error::io("failed to read directory", &dir)(e)),
    };

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(Error::io("failed to read directory", &dir))?
    {
        let path = entry.path();
        let file_type = entry
            .file_type()
            .await
            .map_err(Error::io("failed to inspect", &path))?;
        let removed = if file_type.is_dir() {
            fs::remove_dir_all(&path).await
        } else {
            fs::remove_file(&path).await
        };
        removed.map_err(Error::io("failed to remove", &path))?;
    }

    tracing::debug!(dir = %dir.display(), "cleared output directory");
    Ok(())
}

/// Writes `contents` to `path`, creating parent directories as needed.
async fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(Error::io("failed to create directory", parent))?;
    }
    fs::write(path, contents)
        .await
        .map_err(Error::io("failed to write", path))
}

// ============================================================================
// Tests
// ============================================================================
