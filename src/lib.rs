//! Gantry - declarative target definitions for a CMake project generator
//!
//! This crate provides the data model a project generator consumes:
//! validated [`Target`] records and the ordered [`Registry`] each
//! definition unit evaluates to. Definition units are either
//! Targets.toml documents or types implementing [`TargetDefinitions`]
//! directly. Dependency-graph resolution, topological ordering, and
//! build-script emission live in the generator, not here.

pub mod core;
pub mod util;

pub use crate::core::context::DefinitionContext;
pub use crate::core::manifest::{load_definitions, DefinitionDoc, TargetSpec};
pub use crate::core::registry::{Registry, TargetDefinitions};
pub use crate::core::target::{Target, TargetType};
pub use crate::util::diagnostic::DefinitionError;
