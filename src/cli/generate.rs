//! Generate command implementation.
//!
//! Runs the full pipeline and reports per-file outcomes in Cargo style.

use std::path::PathBuf;

use clap::Args;

use crate::cli::load_catalog;
use crate::error::{GenError, Result};
use crate::generate::{generate, FileOutcome, GenerateOptions};
use crate::output::{display_path, plural, Printer};

/// Generate component source files from the catalog
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Components output directory
    #[arg(long, short, default_value = "src/components")]
    pub output: PathBuf,

    /// Catalog file (defaults to the builtin OpenAPI catalog)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Report what would change without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Exit with an error if anything would change (implies --dry-run)
    #[arg(long)]
    pub check: bool,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let catalog = load_catalog(args.config.as_deref())?;
    let options = GenerateOptions {
        dry_run: args.dry_run || args.check,
    };

    printer.status(
        "Generating",
        &format!(
            "{} into {}",
            plural(catalog.len(), "component", "components"),
            display_path(&args.output)
        ),
    );

    let summary = generate(&catalog, &args.output, &options)?;

    for report in &summary.files {
        match report.outcome {
            FileOutcome::Created => printer.info("Creating", &display_path(&report.path)),
            FileOutcome::Updated => {
                let preserved = if report.preserved.is_empty() {
                    String::new()
                } else {
                    format!(
                        " ({} preserved)",
                        plural(report.preserved.len(), "region", "regions")
                    )
                };
                printer.info(
                    "Updating",
                    &format!("{}{}", display_path(&report.path), preserved),
                );
            }
            FileOutcome::Unchanged => {}
        }

        for region in &report.dropped {
            printer.warning(
                "Dropping",
                &format!(
                    "custom region '{}' in {} (no longer in the template)",
                    region,
                    display_path(&report.path)
                ),
            );
        }
    }

    let changed = summary.created() + summary.updated();
    printer.status(
        "Finished",
        &format!(
            "{} changed, {} unchanged",
            plural(changed, "file", "files"),
            summary.unchanged()
        ),
    );

    if args.check && changed > 0 {
        return Err(GenError::Generate {
            message: format!("{} out of date", plural(changed, "file", "files")),
            help: Some("Run `oasgen generate` to regenerate".to_string()),
        });
    }

    Ok(())
}
