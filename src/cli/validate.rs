//! Validate command implementation.
//!
//! Runs the catalog checks and prints diagnostics. Warnings are
//! informational; errors fail the command.

use std::path::PathBuf;

use clap::Args;

use crate::cli::load_catalog;
use crate::error::{GenError, Result};
use crate::output::{plural, Printer};
use crate::validation::{validate_config, Severity};

/// Check the catalog for problems without generating
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Catalog file (defaults to the builtin OpenAPI catalog)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let catalog = load_catalog(args.config.as_deref())?;
    let report = validate_config(&catalog);

    for diagnostic in report.iter() {
        let label = printer.severity(
            &diagnostic.severity.to_string(),
            diagnostic.severity == Severity::Error,
        );
        let location = diagnostic.location();
        if location.is_empty() {
            eprintln!("{}: {}", label, diagnostic.message);
        } else {
            eprintln!("{}: {}: {}", label, location, diagnostic.message);
        }
        if let Some(help) = &diagnostic.help {
            eprintln!("  {}", printer.dim(&format!("help: {}", help)));
        }
    }

    let failed = report.has_errors() || (args.strict && report.warning_count() > 0);
    if failed {
        return Err(GenError::Config {
            message: format!(
                "Catalog validation failed with {} and {}",
                plural(report.error_count(), "error", "errors"),
                plural(report.warning_count(), "warning", "warnings")
            ),
            help: None,
        });
    }

    printer.status(
        "Validated",
        &format!(
            "{} ({})",
            plural(catalog.len(), "component", "components"),
            plural(report.warning_count(), "warning", "warnings")
        ),
    );

    Ok(())
}
