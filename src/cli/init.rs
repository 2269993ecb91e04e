//! Init command implementation.
//!
//! Writes a starter `oasgen.yaml` catalog to get a project going.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::cli::CATALOG_FILENAME;
use crate::config::ComponentsConfig;
use crate::error::{GenError, Result};
use crate::output::{display_path, Printer};

/// Starter catalog written by `oasgen init`.
const STARTER_CATALOG: &str = "\
# oasgen component catalog.
#
# Each top-level key is a component; v2/v3 blocks declare the spec versions
# it supports. Property values use the compact type grammar:
#   string!              required string
#   Server[]             array of Server components
#   Schema|Reference{}   map of Schema values, $ref allowed
Contact:
  v3:
    allowsExtensions: true
    properties:
      name: string
      url: string
      email: string
Info:
  v3:
    allowsExtensions: true
    properties:
      title: string!
      version: string!
      contact: Contact
";

/// Initialize a starter catalog file (generates oasgen.yaml)
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing oasgen.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let catalog_path = args.path.join(CATALOG_FILENAME);

    if catalog_path.exists() && !args.force {
        return Err(GenError::Generate {
            message: format!("{} already exists", CATALOG_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    // The starter must always round-trip through the loader.
    debug_assert!(ComponentsConfig::parse(STARTER_CATALOG).is_ok());

    fs::write(&catalog_path, STARTER_CATALOG).map_err(|e| GenError::Io {
        path: catalog_path.clone(),
        message: format!("Failed to write catalog: {}", e),
    })?;

    printer.status("Created", &display_path(&catalog_path));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_creates_catalog() {
        let dir = tempdir().unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };
        run(args, &Printer::new()).unwrap();

        let path = dir.path().join("oasgen.yaml");
        assert!(path.is_file());

        let catalog = ComponentsConfig::load(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get("Contact").is_some());
    }

    #[test]
    fn test_init_errors_if_catalog_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("oasgen.yaml"), "Contact:\n  v3: {}\n").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };
        assert!(run(args, &Printer::new()).is_err());
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("oasgen.yaml"), "Old:\n  v3: {}\n").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: true,
        };
        run(args, &Printer::new()).unwrap();

        let content = fs::read_to_string(dir.path().join("oasgen.yaml")).unwrap();
        assert!(content.contains("Contact:"));
    }
}
