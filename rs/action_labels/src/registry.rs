//! Ordered class-label registry
//!
//! A [`LabelRegistry`] maps the class indices produced by a classifier to
//! human-readable label names and back. The position of each label is its
//! class index, so the order a registry is built with must match the output
//! ordering of the model whose indices it resolves.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::LabelError;

/// Immutable, ordered set of unique class labels with O(1) lookups in both
/// directions.
///
/// Registries are plain values: build one, then share it by reference or
/// behind an `Arc`. Several registries (e.g. different label set versions)
/// can coexist in one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct LabelRegistry {
    /// Labels in class index order
    labels: Box<[String]>,
    /// Reverse map from label to class index
    index: HashMap<String, usize>,
}

impl LabelRegistry {
    /// Build a registry from labels in class index order.
    ///
    /// Labels are stored verbatim. Fails if the sequence is empty, if a label
    /// is empty or contains a line break, or if a label repeats.
    pub fn new<I, S>(labels: I) -> Result<Self, LabelError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(LabelError::Empty);
        }

        let mut index = HashMap::with_capacity(labels.len());
        for (i, label) in labels.iter().enumerate() {
            if label.is_empty() {
                return Err(LabelError::InvalidLabel {
                    index: i,
                    reason: "label is empty",
                });
            }
            if label.contains(['\n', '\r']) {
                return Err(LabelError::InvalidLabel {
                    index: i,
                    reason: "label contains a line break",
                });
            }
            if let Some(&first) = index.get(label) {
                return Err(LabelError::DuplicateLabel {
                    label: label.clone(),
                    first,
                    second: i,
                });
            }
            index.insert(label.clone(), i);
        }

        debug!(labels = labels.len(), "built label registry");
        Ok(Self {
            labels: labels.into_boxed_slice(),
            index,
        })
    }

    /// Build a registry from a constant label table.
    pub fn from_static(labels: &[&'static str]) -> Result<Self, LabelError> {
        Self::new(labels.iter().copied())
    }

    /// Number of labels, which is also the expected classifier output width.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the registry holds no labels.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Get the label for a zero-based class index.
    pub fn name_at(&self, index: usize) -> Result<&str, LabelError> {
        self.labels
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| LabelError::OutOfRange {
                index: i64::try_from(index).unwrap_or(i64::MAX),
                len: self.len(),
            })
    }

    /// Get the label for a class index coming from a signed source.
    ///
    /// Negative indices fail with [`LabelError::OutOfRange`] like indices
    /// past the end.
    pub fn name_at_signed(&self, index: i64) -> Result<&str, LabelError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.labels.get(i))
            .map(String::as_str)
            .ok_or_else(|| LabelError::OutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Get the class index of a label. Matching is exact.
    pub fn index_of(&self, name: &str) -> Result<usize, LabelError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| LabelError::UnknownLabel(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All labels in class index order.
    pub fn all(&self) -> &[String] {
        &self.labels
    }

    /// Iterate over `(class_index, label)` pairs in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (usize, &str)> + '_ {
        self.labels.iter().map(String::as_str).enumerate()
    }

    /// SHA-256 over the ordered labels, each followed by `\n`.
    ///
    /// Two registries share a fingerprint only if they hold the same labels
    /// in the same order.
    pub fn fingerprint(&self) -> Fingerprint {
        let mut hasher = Sha256::new();
        for label in self.labels.iter() {
            hasher.update(label.as_bytes());
            hasher.update(b"\n");
        }
        Fingerprint(hasher.finalize().into())
    }
}

impl TryFrom<Vec<String>> for LabelRegistry {
    type Error = LabelError;

    fn try_from(labels: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(labels)
    }
}

impl From<LabelRegistry> for Vec<String> {
    fn from(registry: LabelRegistry) -> Self {
        registry.labels.into_vec()
    }
}

/// Digest identifying the exact contents and order of a label set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Raw digest bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex encoding
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> LabelRegistry {
        LabelRegistry::new(["abseiling", "air_drumming", "zumba"]).unwrap()
    }

    #[test]
    fn test_small_registry_lookups() {
        let reg = small();
        assert_eq!(reg.len(), 3);
        assert!(!reg.is_empty());
        assert_eq!(reg.name_at(0).unwrap(), "abseiling");
        assert_eq!(reg.index_of("zumba").unwrap(), 2);
        assert_eq!(
            reg.name_at(3),
            Err(LabelError::OutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_negative_and_past_end_indices() {
        let reg = small();
        assert_eq!(
            reg.name_at_signed(-1),
            Err(LabelError::OutOfRange { index: -1, len: 3 })
        );
        assert_eq!(
            reg.name_at_signed(3),
            Err(LabelError::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(reg.name_at_signed(1).unwrap(), "air_drumming");
    }

    #[test]
    fn test_unknown_label() {
        let reg = small();
        assert_eq!(
            reg.index_of("not_a_real_label"),
            Err(LabelError::UnknownLabel("not_a_real_label".into()))
        );
        assert!(!reg.contains("Zumba"));
        assert!(reg.contains("zumba"));
    }

    #[test]
    fn test_round_trip_laws() {
        let reg = small();
        for i in 0..reg.len() {
            assert_eq!(reg.index_of(reg.name_at(i).unwrap()).unwrap(), i);
        }
        for label in reg.all() {
            assert_eq!(reg.name_at(reg.index_of(label).unwrap()).unwrap(), label);
        }
    }

    #[test]
    fn test_rejects_empty_set() {
        let labels: Vec<String> = Vec::new();
        assert_eq!(LabelRegistry::new(labels), Err(LabelError::Empty));
    }

    #[test]
    fn test_rejects_duplicates() {
        let err = LabelRegistry::new(["yoga", "zumba", "yoga"]).unwrap_err();
        assert_eq!(
            err,
            LabelError::DuplicateLabel {
                label: "yoga".into(),
                first: 0,
                second: 2,
            }
        );
    }

    #[test]
    fn test_rejects_invalid_labels() {
        assert!(matches!(
            LabelRegistry::new(["yoga", ""]),
            Err(LabelError::InvalidLabel { index: 1, .. })
        ));
        assert!(matches!(
            LabelRegistry::new(["yo\nga"]),
            Err(LabelError::InvalidLabel { index: 0, .. })
        ));
    }

    #[test]
    fn test_labels_kept_verbatim() {
        let reg = LabelRegistry::new(["hurling_-sport-", " yoga", "massaging_person's_head"])
            .unwrap();
        assert_eq!(reg.index_of(" yoga").unwrap(), 1);
        assert!(reg.index_of("yoga").is_err());
        assert_eq!(reg.name_at(2).unwrap(), "massaging_person's_head");
    }

    #[test]
    fn test_iter_in_order() {
        let reg = small();
        let pairs: Vec<_> = reg.iter().collect();
        assert_eq!(
            pairs,
            vec![(0, "abseiling"), (1, "air_drumming"), (2, "zumba")]
        );
    }

    #[test]
    fn test_fingerprint() {
        // sha256("abseiling\nair_drumming\nzumba\n")
        assert_eq!(
            small().fingerprint().to_hex(),
            "41cb2ca644fb3a34916e61d423a60ee8fd6c254bd150639bb35c9291990f386f"
        );
        let fp = small().fingerprint();
        assert_eq!(fp.as_bytes()[..4], [0x41, 0xcb, 0x2c, 0xa6]);
        assert_eq!(hex::encode(fp.as_bytes()), fp.to_string());

        let reordered = LabelRegistry::new(["air_drumming", "abseiling", "zumba"]).unwrap();
        assert_ne!(reordered.fingerprint(), fp);
    }

    #[test]
    fn test_serde_as_json_array() {
        let reg = small();
        let json = serde_json::to_string(&reg).unwrap();
        assert_eq!(json, r#"["abseiling","air_drumming","zumba"]"#);
        let back: LabelRegistry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reg);

        let dup: Result<LabelRegistry, _> = serde_json::from_str(r#"["a","a"]"#);
        assert!(dup.is_err());
    }

    #[test]
    fn test_shared_across_threads() {
        let reg = std::sync::Arc::new(small());
        std::thread::scope(|s| {
            for _ in 0..4 {
                let reg = reg.clone();
                s.spawn(move || {
                    for (i, label) in reg.iter() {
                        assert_eq!(reg.index_of(label).unwrap(), i);
                    }
                });
            }
        });
    }
}
