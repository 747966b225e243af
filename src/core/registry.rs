//! Registry - the ordered output of one definition unit.
//!
//! A Registry holds the targets a single definition unit declares, in
//! declaration order, with names unique within the unit. Name
//! collisions across units are the generator's concern, not ours.

use anyhow::Context;
use serde::Serialize;

use crate::core::context::DefinitionContext;
use crate::core::target::Target;
use crate::util::diagnostic::DefinitionError;

/// A source of target definitions.
///
/// This is the boundary the generator consumes: one call, one ordered
/// registry. Implementations must be deterministic. The generator may
/// evaluate a unit several times across incremental regenerations and
/// has to see structurally equal output each time, or it will schedule
/// spurious rebuilds.
pub trait TargetDefinitions {
    /// Evaluate this unit into its registry.
    fn targets(&self, cx: &DefinitionContext) -> Result<Registry, DefinitionError>;
}

/// The ordered collection of targets one definition unit produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Registry {
    targets: Vec<Target>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Registry {
            targets: Vec::new(),
        }
    }

    /// Build a registry from targets, rejecting duplicate names.
    pub fn from_targets(
        targets: impl IntoIterator<Item = Target>,
    ) -> Result<Self, DefinitionError> {
        let mut registry = Registry::new();
        for target in targets {
            registry.push(target)?;
        }
        Ok(registry)
    }

    /// Append a target, rejecting a name this unit already declares.
    pub fn push(&mut self, target: Target) -> Result<(), DefinitionError> {
        if self.contains(target.name()) {
            return Err(DefinitionError::InvalidTargetDefinition {
                target: target.name().to_string(),
                reason: "target name is declared twice in one definition unit".to_string(),
            });
        }
        self.targets.push(target);
        Ok(())
    }

    /// Get a target by name.
    pub fn get(&self, name: &str) -> Option<&Target> {
        self.targets.iter().find(|t| t.name() == name)
    }

    /// Check if this registry declares a target with the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.targets.iter().any(|t| t.name() == name)
    }

    /// Get all targets in declaration order.
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Get the number of declared targets.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Check if no targets are declared.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Iterate over targets in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Target> {
        self.targets.iter()
    }

    /// Serialize the registry for an out-of-process generator.
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize target registry")
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Target;
    type IntoIter = std::slice::Iter<'a, Target>;

    fn into_iter(self) -> Self::IntoIter {
        self.targets.iter()
    }
}

impl IntoIterator for Registry {
    type Item = Target;
    type IntoIter = std::vec::IntoIter<Target>;

    fn into_iter(self) -> Self::IntoIter {
        self.targets.into_iter()
    }
}
