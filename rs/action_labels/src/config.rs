//! Label set selection
//!
//! This module defines the built-in label sets and how a label source (a
//! built-in set or a label file) resolves to a registry.

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::{LabelError, LoadError};
use crate::kinetics;
use crate::label_file;
use crate::registry::LabelRegistry;

/// Built-in label sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LabelSet {
    /// Kinetics-400 human action classes
    #[default]
    Kinetics400,
}

impl LabelSet {
    /// Stable identifier, versioned by the class count.
    pub fn id(&self) -> &'static str {
        match self {
            LabelSet::Kinetics400 => "kinetics-400",
        }
    }

    pub fn names(&self) -> &'static [&'static str] {
        match self {
            LabelSet::Kinetics400 => &kinetics::NAMES,
        }
    }

    /// Pinned fingerprint of the set's label table
    pub fn fingerprint(&self) -> &'static str {
        match self {
            LabelSet::Kinetics400 => kinetics::FINGERPRINT,
        }
    }

    /// Build a fresh registry for this set.
    pub fn registry(&self) -> Result<LabelRegistry, LabelError> {
        LabelRegistry::from_static(self.names())
    }
}

/// Where a registry's labels come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelSource {
    Builtin(LabelSet),
    File(PathBuf),
}

impl LabelSource {
    /// A label file, when given, takes precedence over the built-in set.
    pub fn new(which: LabelSet, labels: Option<PathBuf>) -> Self {
        match labels {
            Some(path) => LabelSource::File(path),
            None => LabelSource::Builtin(which),
        }
    }

    pub fn load(&self) -> Result<LabelRegistry, LoadError> {
        match self {
            LabelSource::Builtin(set) => Ok(set.registry()?),
            LabelSource::File(path) => label_file::load(path),
        }
    }
}

impl Default for LabelSource {
    fn default() -> Self {
        LabelSource::Builtin(LabelSet::default())
    }
}

impl fmt::Display for LabelSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelSource::Builtin(set) => write!(f, "{}", set.id()),
            LabelSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
