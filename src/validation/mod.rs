//! Validation checks for a component catalog.
//!
//! The parser is deliberately permissive (the catalog is trusted input),
//! so mistakes surface here instead: references to components that are
//! never defined, names that collide once normalized, and type tokens the
//! grammar only half-understands.

mod checks;

use std::fmt;

use crate::config::ComponentsConfig;

/// Severity level for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single catalog diagnostic.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,

    /// Machine-readable code, e.g. "oasgen::validate::unknown-reference".
    pub code: String,

    /// Human-readable message.
    pub message: String,

    /// Component the diagnostic is about, when attributable.
    pub component: Option<String>,

    /// Property within the component, when attributable.
    pub property: Option<String>,

    /// Optional help text suggesting a fix.
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, message)
    }

    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code, message)
    }

    fn new(severity: Severity, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: code.into(),
            message: message.into(),
            component: None,
            property: None,
            help: None,
        }
    }

    /// Attribute this diagnostic to a component.
    pub fn for_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Attribute this diagnostic to a property.
    pub fn for_property(mut self, property: impl Into<String>) -> Self {
        self.property = Some(property.into());
        self
    }

    /// Add help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Where the diagnostic points: "Component", "Component.property" or "".
    pub fn location(&self) -> String {
        match (&self.component, &self.property) {
            (Some(component), Some(property)) => format!("{}.{}", component, property),
            (Some(component), None) => component.clone(),
            _ => String::new(),
        }
    }
}

/// Diagnostics collected from all checks.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn merge(&mut self, other: ValidationReport) {
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Run all checks over a raw catalog.
pub fn validate_config(config: &ComponentsConfig) -> ValidationReport {
    let processed = crate::config::process(config);

    let mut report = ValidationReport::new();
    report.merge(checks::check_name_collisions(config));
    report.merge(checks::check_unknown_references(&processed));
    report.merge(checks::check_wrapper_conflicts(config));
    report.merge(checks::check_empty_literals(config));
    report.merge(checks::check_reference_only_unions(config));
    report
}
