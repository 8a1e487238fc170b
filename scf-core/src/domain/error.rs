// scf-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

/// Which side of a framework mapping request a key came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameworkRole {
    Requested,
    Source,
    Target,
}

impl std::fmt::Display for FrameworkRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameworkRole::Requested => write!(f, "Framework"),
            FrameworkRole::Source => write!(f, "Source framework"),
            FrameworkRole::Target => write!(f, "Target framework"),
        }
    }
}

#[derive(Error, Debug, Diagnostic, PartialEq)]
pub enum DomainError {
    #[error("Control {0} not found")]
    #[diagnostic(
        code(scf::domain::control_not_found),
        help("Use search to find controls by keyword.")
    )]
    ControlNotFound(String),

    #[error("{role} '{key}' not found")]
    #[diagnostic(code(scf::domain::framework_not_found), help("Available: {available}"))]
    FrameworkNotFound {
        role: FrameworkRole,
        key: String,
        available: String,
    },

    #[error("Category '{category}' not found")]
    #[diagnostic(
        code(scf::domain::category_not_found),
        help("Available categories: {available}")
    )]
    CategoryNotFound { category: String, available: String },

    #[error("{0} is required")]
    #[diagnostic(code(scf::domain::missing_argument))]
    MissingArgument(&'static str),
}
