//! @ai:module:intent Identity of the two compared subjects
//! @ai:module:layer domain
//! @ai:module:public_api Subject, SubjectPair, Side
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};

/// @ai:intent One benchmarked system under test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Value of the record's subject field that selects this subject
    pub id: String,
    /// Short name used as winner label and column header
    pub label: String,
    /// Long name used in chart legends and the summary block
    pub legend: String,
}

impl Subject {
    /// @ai:intent Create a subject whose id, label and legend are identical
    /// @ai:effects pure
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            label: name.clone(),
            legend: name,
        }
    }
}

/// @ai:intent Which of the two subjects a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    A,
    B,
}

/// @ai:intent The ordered pair of subjects; A is the baseline for percent differences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectPair {
    pub a: Subject,
    pub b: Subject,
}

impl SubjectPair {
    /// @ai:intent Build a pair from two subjects
    /// @ai:effects pure
    pub fn new(a: Subject, b: Subject) -> Self {
        Self { a, b }
    }

    /// @ai:intent Get the subject on the given side
    /// @ai:effects pure
    pub fn get(&self, side: Side) -> &Subject {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }

    /// @ai:intent Get the winner label for the given side
    /// @ai:effects pure
    pub fn label(&self, side: Side) -> &str {
        &self.get(side).label
    }
}

impl Default for SubjectPair {
    fn default() -> Self {
        Self {
            a: Subject {
                id: "P2pComm".to_string(),
                label: "p2p-comm".to_string(),
                legend: "p2p-comm (libp2p)".to_string(),
            },
            b: Subject {
                id: "MtlsComm".to_string(),
                label: "mtls-comm".to_string(),
                legend: "mtls-comm (pure mTLS)".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_by_side() {
        let pair = SubjectPair::default();
        assert_eq!(pair.label(Side::A), "p2p-comm");
        assert_eq!(pair.label(Side::B), "mtls-comm");
    }

    #[test]
    fn test_new_subject_uses_one_name() {
        let subject = Subject::new("A");
        assert_eq!(subject.id, "A");
        assert_eq!(subject.label, "A");
        assert_eq!(subject.legend, "A");
    }
}
