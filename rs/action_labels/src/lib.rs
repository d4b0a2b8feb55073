//! Class-label registries for video action recognition
//!
//! Classifiers emit class indices; a [`LabelRegistry`] turns them into label
//! names and back. The Kinetics-400 table ships built in, and further label
//! sets can be loaded from label files.

pub mod config;
pub mod error;
pub mod kinetics;
pub mod label_file;
pub mod registry;

pub use config::{LabelSet, LabelSource};
pub use error::{LabelError, LoadError};
pub use registry::{Fingerprint, LabelRegistry};
