use std::collections::HashMap;

use super::FeedbackType;

/// Display metadata for one feedback type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackTypeInfo {
    /// Human-readable title shown in menus and the form header.
    pub title: String,
    /// Glyph rendered next to the title.
    pub image: String,
}

impl FeedbackTypeInfo {
    pub fn new(title: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            image: image.into(),
        }
    }
}

/// Read-only lookup from [`FeedbackType`] to its [`FeedbackTypeInfo`].
///
/// The host application supplies the catalog; [`Default`] provides an entry
/// for every [`FeedbackType`].
#[derive(Debug, Clone)]
pub struct FeedbackTypeCatalog {
    entries: HashMap<FeedbackType, FeedbackTypeInfo>,
}

impl Default for FeedbackTypeCatalog {
    fn default() -> Self {
        Self::new([
            (FeedbackType::Bug, FeedbackTypeInfo::new("Problem", "🐛")),
            (FeedbackType::Idea, FeedbackTypeInfo::new("Idea", "💡")),
            (FeedbackType::Other, FeedbackTypeInfo::new("Other", "💭")),
        ])
    }
}

impl FeedbackTypeCatalog {
    /// Builds a catalog from `(type, info)` pairs. Later duplicates win.
    pub fn new(entries: impl IntoIterator<Item = (FeedbackType, FeedbackTypeInfo)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Returns the metadata for `ty`, if the catalog has it.
    pub fn get(&self, ty: FeedbackType) -> Option<&FeedbackTypeInfo> {
        self.entries.get(&ty)
    }

    /// Returns the catalogued types in [`FeedbackType::all`] order.
    pub fn types(&self) -> Vec<FeedbackType> {
        FeedbackType::all()
            .iter()
            .copied()
            .filter(|ty| self.entries.contains_key(ty))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_covers_every_type() {
        let catalog = FeedbackTypeCatalog::default();
        for ty in FeedbackType::all() {
            assert!(catalog.get(*ty).is_some(), "{ty:?} missing from default");
        }
    }

    #[test]
    fn default_titles() {
        let catalog = FeedbackTypeCatalog::default();
        assert_eq!(catalog.get(FeedbackType::Bug).unwrap().title, "Problem");
        assert_eq!(catalog.get(FeedbackType::Idea).unwrap().title, "Idea");
        assert_eq!(catalog.get(FeedbackType::Other).unwrap().title, "Other");
    }

    #[test]
    fn partial_catalog_misses_absent_types() {
        let catalog =
            FeedbackTypeCatalog::new([(FeedbackType::Idea, FeedbackTypeInfo::new("Idea", "*"))]);
        assert!(catalog.get(FeedbackType::Bug).is_none());
        assert_eq!(catalog.types(), vec![FeedbackType::Idea]);
    }

    #[test]
    fn types_follow_menu_order() {
        let catalog = FeedbackTypeCatalog::new([
            (FeedbackType::Other, FeedbackTypeInfo::new("Other", "o")),
            (FeedbackType::Bug, FeedbackTypeInfo::new("Bug", "b")),
        ]);
        assert_eq!(
            catalog.types(),
            vec![FeedbackType::Bug, FeedbackType::Other]
        );
    }

    #[test]
    fn later_duplicate_wins() {
        let catalog = FeedbackTypeCatalog::new([
            (FeedbackType::Bug, FeedbackTypeInfo::new("First", "1")),
            (FeedbackType::Bug, FeedbackTypeInfo::new("Second", "2")),
        ]);
        assert_eq!(catalog.get(FeedbackType::Bug).unwrap().title, "Second");
    }
}
