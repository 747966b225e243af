//! Typed errors for target definition and registry evaluation.
//!
//! Every error here is raised synchronously while a definition unit is
//! being evaluated and is never caught internally: a malformed
//! definition aborts the whole generation run instead of producing a
//! partially valid registry.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while constructing targets or evaluating a definition unit.
#[derive(Debug, Error, Diagnostic)]
pub enum DefinitionError {
    /// A target declaration broke one of the structural rules.
    #[error("invalid definition for target `{target}`: {reason}")]
    #[diagnostic(
        code(gantry::definition::invalid),
        help("fix the offending entry in the defining Targets.toml")
    )]
    InvalidTargetDefinition {
        /// Name of the offending target (as declared, possibly empty)
        target: String,
        /// What rule the declaration broke
        reason: String,
    },

    /// A source directory reached the factory without being anchored.
    #[error("source directory for target `{target}` is not absolute: `{path}`")]
    #[diagnostic(
        code(gantry::definition::source_path),
        help("resolve the directory against the defining unit before construction")
    )]
    InvalidSourcePath {
        /// Name of the offending target
        target: String,
        /// The non-absolute path as given
        path: PathBuf,
    },

    /// A definition context was created from a non-absolute root.
    #[error("definition root is not absolute: `{path}`")]
    #[diagnostic(
        code(gantry::definition::root),
        help("anchor the context with the absolute path of the defining file or directory")
    )]
    UnanchoredRoot {
        /// The non-absolute root as given
        path: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_target() {
        let err = DefinitionError::InvalidTargetDefinition {
            target: "shake_content".to_string(),
            reason: "dependency `glm` is listed twice".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("shake_content"));
        assert!(msg.contains("listed twice"));

        let err = DefinitionError::InvalidSourcePath {
            target: "shake_content".to_string(),
            path: PathBuf::from("relative/src"),
        };
        assert!(err.to_string().contains("relative/src"));
    }
}
