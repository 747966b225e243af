//! Target definitions - what gets generated.
//!
//! A Target represents one buildable unit handed to the project
//! generator: executable, static library, shared library, or
//! header-only library.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::util::diagnostic::DefinitionError;

/// The kind of artifact a target produces.
///
/// The set is closed so the generator can match exhaustively; adding a
/// kind means extending this enum, never registering one at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetType {
    /// Executable binary
    #[serde(alias = "bin")]
    Executable,

    /// Static library (.a / .lib)
    #[serde(alias = "static")]
    StaticLibrary,

    /// Shared/dynamic library (.so / .dylib / .dll)
    #[serde(alias = "shared", alias = "dylib")]
    SharedLibrary,

    /// Header-only library (no compile/link steps)
    #[serde(alias = "interface")]
    HeaderOnly,
}

impl TargetType {
    /// Get the `add_library` keyword the generator emits for this kind.
    ///
    /// Executables go through `add_executable` instead and have no keyword.
    pub fn cmake_keyword(&self) -> Option<&'static str> {
        match self {
            TargetType::Executable => None,
            TargetType::StaticLibrary => Some("STATIC"),
            TargetType::SharedLibrary => Some("SHARED"),
            TargetType::HeaderOnly => Some("INTERFACE"),
        }
    }

    /// Check if this is a library (static, shared, or header-only).
    pub fn is_library(&self) -> bool {
        matches!(
            self,
            TargetType::StaticLibrary | TargetType::SharedLibrary | TargetType::HeaderOnly
        )
    }

    /// Check if this produces a linkable artifact.
    pub fn is_linkable(&self) -> bool {
        matches!(self, TargetType::StaticLibrary | TargetType::SharedLibrary)
    }

    /// Check if this is a header-only library.
    pub fn is_header_only(&self) -> bool {
        matches!(self, TargetType::HeaderOnly)
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TargetType::Executable => "executable",
            TargetType::StaticLibrary => "static-library",
            TargetType::SharedLibrary => "shared-library",
            TargetType::HeaderOnly => "header-only",
        };
        f.write_str(name)
    }
}

/// One buildable unit as handed to the generator.
///
/// Constructed only through [`Target::new`] and the per-kind shortcuts,
/// immutable afterwards. The source directory is always absolute, and
/// dependency order is preserved exactly as declared because the emitted
/// build scripts treat it as link order.
///
/// Dependency entries that name no target in any registry are opaque
/// external packages; resolving them is the generator's job, so
/// construction never fails on an unresolved name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Target {
    name: String,

    #[serde(rename = "type")]
    target_type: TargetType,

    source_dir: PathBuf,

    dependencies: Vec<String>,
}

impl Target {
    /// Validate raw construction arguments into a Target.
    ///
    /// The caller is responsible for anchoring `source_dir` to an
    /// absolute path first (see [`DefinitionContext::resolve`]); the
    /// factory only checks absoluteness. Pure function of its inputs:
    /// identical arguments always produce structurally equal targets.
    ///
    /// [`DefinitionContext::resolve`]: crate::core::context::DefinitionContext::resolve
    pub fn new(
        name: impl Into<String>,
        target_type: TargetType,
        source_dir: impl Into<PathBuf>,
        dependencies: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, DefinitionError> {
        let name = name.into();
        let source_dir = source_dir.into();
        let dependencies: Vec<String> = dependencies.into_iter().map(Into::into).collect();

        if name.trim().is_empty() {
            return Err(DefinitionError::InvalidTargetDefinition {
                target: name,
                reason: "name must not be empty".to_string(),
            });
        }

        if !source_dir.is_absolute() {
            return Err(DefinitionError::InvalidSourcePath {
                target: name,
                path: source_dir,
            });
        }

        let mut seen = HashSet::new();
        for dep in &dependencies {
            if dep.trim().is_empty() {
                return Err(DefinitionError::InvalidTargetDefinition {
                    target: name,
                    reason: "dependency entries must not be empty".to_string(),
                });
            }
            if *dep == name {
                return Err(DefinitionError::InvalidTargetDefinition {
                    reason: format!("target depends on itself via `{}`", dep),
                    target: name,
                });
            }
            if !seen.insert(dep.as_str()) {
                return Err(DefinitionError::InvalidTargetDefinition {
                    reason: format!("dependency `{}` is listed twice", dep),
                    target: name,
                });
            }
        }

        Ok(Target {
            name,
            target_type,
            source_dir,
            dependencies,
        })
    }

    /// Create an executable target with no dependencies.
    pub fn executable(
        name: impl Into<String>,
        source_dir: impl Into<PathBuf>,
    ) -> Result<Self, DefinitionError> {
        Self::new(name, TargetType::Executable, source_dir, Vec::<String>::new())
    }

    /// Create a static library target with no dependencies.
    pub fn static_library(
        name: impl Into<String>,
        source_dir: impl Into<PathBuf>,
    ) -> Result<Self, DefinitionError> {
        Self::new(name, TargetType::StaticLibrary, source_dir, Vec::<String>::new())
    }

    /// Create a shared library target with no dependencies.
    pub fn shared_library(
        name: impl Into<String>,
        source_dir: impl Into<PathBuf>,
    ) -> Result<Self, DefinitionError> {
        Self::new(name, TargetType::SharedLibrary, source_dir, Vec::<String>::new())
    }

    /// Create a header-only library target with no dependencies.
    pub fn header_only(
        name: impl Into<String>,
        source_dir: impl Into<PathBuf>,
    ) -> Result<Self, DefinitionError> {
        Self::new(name, TargetType::HeaderOnly, source_dir, Vec::<String>::new())
    }

    /// Get the target name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the kind of artifact this target produces.
    pub fn target_type(&self) -> TargetType {
        self.target_type
    }

    /// Get the absolute source directory.
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Get the dependency names, in declaration order.
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.target_type)
    }
}
