//! Generation pipeline.
//!
//! Processes the catalog, emits candidate text for every target path,
//! merges prior custom-content regions recovered from disk, and writes the
//! files that changed. Each target is fully read before its replacement is
//! written; a file whose merged text equals what is on disk is left alone.
//!
//! Regeneration is idempotent and self-healing: as long as the region
//! markers survive, rerunning the generator converges on the same output
//! with all hand-written content intact.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::{process, ComponentsConfig};
use crate::emit::{component_index, components_index, implementation_file, interface_file};
use crate::error::{GenError, Result};
use crate::merge::merge_regions;

/// Options controlling a generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Compute and report outcomes without touching the filesystem.
    pub dry_run: bool,
}

/// What happened to one target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// No prior file existed.
    Created,
    /// The merged text differs from what was on disk.
    Updated,
    /// The merged text matches the existing file; nothing was written.
    Unchanged,
}

/// Report for one generated target.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,

    /// Custom regions carried over from the prior file.
    pub preserved: Vec<String>,

    /// Regions whose prior content no longer has a home in the template.
    pub dropped: Vec<String>,
}

/// Summary of a whole generation run.
#[derive(Debug, Default)]
pub struct GenerateSummary {
    pub files: Vec<FileReport>,
}

impl GenerateSummary {
    pub fn created(&self) -> usize {
        self.count(FileOutcome::Created)
    }

    pub fn updated(&self) -> usize {
        self.count(FileOutcome::Updated)
    }

    pub fn unchanged(&self) -> usize {
        self.count(FileOutcome::Unchanged)
    }

    fn count(&self, outcome: FileOutcome) -> usize {
        self.files.iter().filter(|f| f.outcome == outcome).count()
    }

    /// All (path, region) pairs whose prior content was dropped.
    pub fn dropped_regions(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.files.iter().flat_map(|file| {
            file.dropped
                .iter()
                .map(move |name| (file.path.as_path(), name.as_str()))
        })
    }
}

/// Generate all component files into `dir`.
pub fn generate(
    config: &ComponentsConfig,
    dir: &Path,
    options: &GenerateOptions,
) -> Result<GenerateSummary> {
    let processed = process(config);
    let mut summary = GenerateSummary::default();

    if !options.dry_run {
        ensure_dir(dir)?;
    }

    update_file(
        &dir.join("index.ts"),
        &components_index(&processed),
        options,
        &mut summary,
    )?;

    for component in processed.components() {
        let component_dir = dir.join(&component.name);
        if !options.dry_run {
            ensure_dir(&component_dir)?;
        }

        update_file(
            &component_dir.join("index.ts"),
            &component_index(component),
            options,
            &mut summary,
        )?;
        update_file(
            &component_dir.join(format!("I{}.ts", component.name)),
            &interface_file(component),
            options,
            &mut summary,
        )?;

        for &version in &component.versions {
            if let Some(model) = component.version(version) {
                let file_name = format!("{}{}.ts", component.name, version.suffix());
                update_file(
                    &component_dir.join(file_name),
                    &implementation_file(component, version, model),
                    options,
                    &mut summary,
                )?;
            }
        }
    }

    Ok(summary)
}

/// Merge the candidate against whatever is on disk and write if changed.
fn update_file(
    path: &Path,
    candidate: &str,
    options: &GenerateOptions,
    summary: &mut GenerateSummary,
) -> Result<()> {
    let report = match read_file_if_exists(path)? {
        None => {
            if !options.dry_run {
                write_file(path, candidate)?;
            }
            FileReport {
                path: path.to_path_buf(),
                outcome: FileOutcome::Created,
                preserved: Vec::new(),
                dropped: Vec::new(),
            }
        }
        Some(existing) => {
            let merged = merge_regions(&existing, candidate);
            let outcome = if merged.text == existing {
                FileOutcome::Unchanged
            } else {
                if !options.dry_run {
                    write_file(path, &merged.text)?;
                }
                FileOutcome::Updated
            };
            FileReport {
                path: path.to_path_buf(),
                outcome,
                preserved: merged.preserved,
                dropped: merged.dropped,
            }
        }
    };

    summary.files.push(report);
    Ok(())
}

/// Read a file's contents. An absent file means "no prior content"; any
/// other failure is fatal.
pub fn read_file_if_exists(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(GenError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read file: {}", e),
        }),
    }
}

/// Write a file, replacing any existing content.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| GenError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write file: {}", e),
    })
}

/// Create a directory. A no-op if it already exists.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| GenError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to create directory: {}", e),
    })
}
