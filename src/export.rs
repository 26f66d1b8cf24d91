//! Static export
//!
//! Writes every page of the guide to a directory so any static host can
//! serve it: `index.html`, `<slug>/index.html` per step and `404.html`.
//! Step pages are rendered in parallel.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::error::ExportError;
use crate::pages::{render_home, render_not_found, render_step};
use crate::registry::{StepRecord, StepRegistry};

pub const NOT_FOUND_FILE: &str = "404.html";

/// Files written by one export, landing page first, then steps in registry
/// order, then the 404 page.
#[derive(Debug, Clone)]
pub struct ExportReport {
    pub out_dir: PathBuf,
    pub pages: Vec<PathBuf>,
}

/// Path of a route's page relative to the export root.
pub fn page_path(route: &str) -> PathBuf {
    let slug = route.trim_matches('/');
    if slug.is_empty() {
        PathBuf::from("index.html")
    } else {
        Path::new(slug).join("index.html")
    }
}

pub fn export_site(registry: &StepRegistry, out_dir: &Path) -> Result<ExportReport, ExportError> {
    create_dir(out_dir)?;

    let mut pages = Vec::with_capacity(registry.len() + 2);

    pages.push(write_page(out_dir, &page_path("/"), &render_home(registry)?)?);

    let step_pages = registry
        .all_steps()
        .par_iter()
        .map(|step| export_step(registry, step, out_dir))
        .collect::<Result<Vec<_>, _>>()?;
    pages.extend(step_pages);

    let missing = render_not_found(registry, None)?;
    pages.push(write_page(out_dir, Path::new(NOT_FOUND_FILE), &missing)?);

    tracing::info!("Exported {} pages to {}", pages.len(), out_dir.display());

    Ok(ExportReport {
        out_dir: out_dir.to_path_buf(),
        pages,
    })
}

fn export_step(registry: &StepRegistry, step: &StepRecord, out_dir: &Path) -> Result<PathBuf, ExportError> {
    let html = render_step(registry, &step.route)?;
    let relative = page_path(&step.route);
    if let Some(parent) = relative.parent() {
        create_dir(&out_dir.join(parent))?;
    }
    tracing::debug!("Rendered {} ({} bytes)", step.route, html.len());
    write_page(out_dir, &relative, &html)
}

fn write_page(out_dir: &Path, relative: &Path, html: &str) -> Result<PathBuf, ExportError> {
    let path = out_dir.join(relative);
    fs::write(&path, html).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

fn create_dir(path: &Path) -> Result<(), ExportError> {
    fs::create_dir_all(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}
