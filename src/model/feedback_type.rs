use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of report a user is sending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeedbackType {
    #[default]
    Bug,
    Idea,
    Other,
}

static ALL_TYPES: &[FeedbackType] = &[FeedbackType::Bug, FeedbackType::Idea, FeedbackType::Other];

impl FeedbackType {
    /// Returns the wire representation sent to the backend.
    pub fn wire_str(&self) -> &'static str {
        match self {
            FeedbackType::Bug => "BUG",
            FeedbackType::Idea => "IDEA",
            FeedbackType::Other => "OTHER",
        }
    }

    /// Returns all feedback types in menu order.
    pub fn all() -> &'static [FeedbackType] {
        ALL_TYPES
    }
}

#[mutants::skip]
impl fmt::Display for FeedbackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_str_all_types() {
        assert_eq!(FeedbackType::Bug.wire_str(), "BUG");
        assert_eq!(FeedbackType::Idea.wire_str(), "IDEA");
        assert_eq!(FeedbackType::Other.wire_str(), "OTHER");
    }

    #[test]
    fn all_returns_types_in_menu_order() {
        assert_eq!(
            FeedbackType::all(),
            &[FeedbackType::Bug, FeedbackType::Idea, FeedbackType::Other]
        );
    }

    #[test]
    fn default_is_bug() {
        assert_eq!(FeedbackType::default(), FeedbackType::Bug);
    }

    #[test]
    fn serializes_as_wire_str() {
        for ty in FeedbackType::all() {
            let json = serde_json::to_string(ty).unwrap();
            assert_eq!(json, format!("\"{}\"", ty.wire_str()));
        }
    }

    #[test]
    fn deserializes_from_wire_str() {
        let ty: FeedbackType = serde_json::from_str("\"IDEA\"").unwrap();
        assert_eq!(ty, FeedbackType::Idea);
    }
}
