//! Targets.toml parsing and schema.
//!
//! A declarative definition unit is a Targets.toml document holding an
//! ordered list of target declarations:
//!
//! ```toml
//! [[target]]
//! name = "shake_content"
//! type = "shared-library"
//! src_dir = "src"
//! dependencies = ["freetype", "glm", "shake_core"]
//! ```
//!
//! Declarations are raw serde types; they only become [`Target`]s
//! through the validating factory, with the defining unit's context
//! anchoring relative source directories.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::context::DefinitionContext;
use crate::core::registry::{Registry, TargetDefinitions};
use crate::core::target::{Target, TargetType};
use crate::util::diagnostic::DefinitionError;
use crate::util::fs::read_to_string;

/// Target declaration as it appears in Targets.toml.
#[derive(Debug, Clone, Deserialize)]
pub struct TargetSpec {
    /// Target name, unique within the defining unit
    pub name: String,

    /// What kind of artifact to produce
    #[serde(rename = "type")]
    pub target_type: TargetType,

    /// Source directory, taken relative to the defining unit unless absolute
    #[serde(default = "default_src_dir")]
    pub src_dir: PathBuf,

    /// Dependency names in link order; names no unit declares are
    /// external packages and pass through unresolved
    #[serde(default)]
    pub dependencies: Vec<String>,
}

fn default_src_dir() -> PathBuf {
    PathBuf::from("src")
}

impl TargetSpec {
    /// Convert to a Target, anchoring `src_dir` against the context.
    pub fn to_target(&self, cx: &DefinitionContext) -> Result<Target, DefinitionError> {
        Target::new(
            self.name.as_str(),
            self.target_type,
            cx.resolve(&self.src_dir),
            self.dependencies.iter().map(String::as_str),
        )
    }
}

/// The parsed Targets.toml document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DefinitionDoc {
    /// Declared targets, in file order
    #[serde(default, rename = "target")]
    pub targets: Vec<TargetSpec>,
}

impl DefinitionDoc {
    /// Parse a Targets.toml document.
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("failed to parse target definitions")
    }
}

impl TargetDefinitions for DefinitionDoc {
    /// Evaluate the document into its registry.
    ///
    /// Pure over the parsed document and the context: no I/O, no
    /// filesystem probing, and the same inputs always produce a
    /// structurally equal registry.
    fn targets(&self, cx: &DefinitionContext) -> Result<Registry, DefinitionError> {
        let mut registry = Registry::new();
        for spec in &self.targets {
            registry.push(spec.to_target(cx)?)?;
        }
        Ok(registry)
    }
}

/// Load a definition unit from disk and evaluate it.
///
/// The document's own location anchors every relative source directory
/// it declares, so a unit keeps working after being moved.
pub fn load_definitions(path: &Path) -> Result<Registry> {
    let text = read_to_string(path)?;
    let doc =
        DefinitionDoc::parse(&text).with_context(|| format!("in {}", path.display()))?;

    let canonical = path
        .canonicalize()
        .with_context(|| format!("failed to locate definition unit: {}", path.display()))?;
    let cx = DefinitionContext::for_file(&canonical)?;

    let registry = doc.targets(&cx)?;
    tracing::debug!(
        "evaluated {} target(s) from {}",
        registry.len(),
        path.display()
    );
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTENT_UNIT: &str = r#"
[[target]]
name = "shake_content"
type = "shared-library"
src_dir = "src"
dependencies = ["freetype", "glm", "json11", "stb", "shake_core", "shake_graphics", "shake_io"]

[[target]]
name = "shake_content_tests"
type = "executable"
src_dir = "test"
dependencies = ["shake_content"]
"#;

    #[test]
    fn test_parse_and_evaluate() {
        let doc = DefinitionDoc::parse(CONTENT_UNIT).unwrap();
        let cx = DefinitionContext::new("/project/content").unwrap();
        let registry = doc.targets(&cx).unwrap();

        assert_eq!(registry.len(), 2);

        let content = registry.get("shake_content").unwrap();
        assert_eq!(content.target_type(), TargetType::SharedLibrary);
        assert_eq!(
            content.source_dir(),
            Path::new("/project/content/src")
        );
        assert_eq!(content.dependencies().len(), 7);
        assert_eq!(content.dependencies()[0], "freetype");
        assert_eq!(content.dependencies()[6], "shake_io");

        let tests = registry.get("shake_content_tests").unwrap();
        assert_eq!(tests.target_type(), TargetType::Executable);
        assert_eq!(tests.source_dir(), Path::new("/project/content/test"));
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let doc = DefinitionDoc::parse(CONTENT_UNIT).unwrap();
        let cx = DefinitionContext::new("/project/content").unwrap();
        assert_eq!(doc.targets(&cx).unwrap(), doc.targets(&cx).unwrap());
    }

    #[test]
    fn test_type_aliases() {
        let doc = DefinitionDoc::parse(
            r#"
[[target]]
name = "tool"
type = "bin"

[[target]]
name = "engine"
type = "shared"

[[target]]
name = "runtime"
type = "static"

[[target]]
name = "headers"
type = "interface"
"#,
        )
        .unwrap();

        let kinds: Vec<TargetType> = doc.targets.iter().map(|s| s.target_type).collect();
        assert_eq!(
            kinds,
            [
                TargetType::Executable,
                TargetType::SharedLibrary,
                TargetType::StaticLibrary,
                TargetType::HeaderOnly,
            ]
        );
    }

    #[test]
    fn test_src_dir_defaults_to_src() {
        let doc = DefinitionDoc::parse(
            r#"
[[target]]
name = "shake_core"
type = "static-library"
"#,
        )
        .unwrap();
        let cx = DefinitionContext::new("/project/core").unwrap();
        let registry = doc.targets(&cx).unwrap();
        assert_eq!(
            registry.get("shake_core").unwrap().source_dir(),
            Path::new("/project/core/src")
        );
    }

    #[test]
    fn test_missing_type_is_a_parse_error() {
        let result = DefinitionDoc::parse(
            r#"
[[target]]
name = "shake_core"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_names_rejected_at_evaluation() {
        let doc = DefinitionDoc::parse(
            r#"
[[target]]
name = "shake_core"
type = "static-library"

[[target]]
name = "shake_core"
type = "shared-library"
"#,
        )
        .unwrap();
        let cx = DefinitionContext::new("/project/core").unwrap();
        let err = doc.targets(&cx).unwrap_err();
        assert!(matches!(
            err,
            DefinitionError::InvalidTargetDefinition { .. }
        ));
    }

    #[test]
    fn test_absolute_src_dir_passes_through() {
        let doc = DefinitionDoc::parse(
            r#"
[[target]]
name = "vendored"
type = "static-library"
src_dir = "/opt/vendor/src"
"#,
        )
        .unwrap();
        let cx = DefinitionContext::new("/project/content").unwrap();
        let registry = doc.targets(&cx).unwrap();
        assert_eq!(
            registry.get("vendored").unwrap().source_dir(),
            Path::new("/opt/vendor/src")
        );
    }
}
