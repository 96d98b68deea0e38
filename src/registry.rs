use std::collections::HashSet;
use std::sync::LazyLock;

use thiserror::Error;

/// A navigable block of the page, addressed by the anchor `#id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub display_name: &'static str,
    pub order: u32,
}

impl Section {
    pub const fn new(id: &'static str, display_name: &'static str, order: u32) -> Self {
        Self {
            id,
            display_name,
            order,
        }
    }

    pub fn anchor(&self) -> String {
        format!("#{}", self.id)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("section registry must contain at least one section")]
    Empty,
    #[error("duplicate section id `{0}`")]
    DuplicateId(&'static str),
    #[error("duplicate section order {0}")]
    DuplicateOrder(u32),
}

/// Sections shown in the navigation bar, top to bottom.
pub const NAV_SECTIONS: [Section; 6] = [
    Section::new("hero", "Home", 0),
    Section::new("about", "About", 1),
    Section::new("skills", "Skills", 2),
    Section::new("certifications", "Certs", 3),
    Section::new("projects", "Projects", 4),
    Section::new("contact", "Contact", 5),
];

/// Every section slot rendered on the page in document order. `learning` sits
/// between certifications and projects but has no navigation entry.
pub const PAGE_LAYOUT: [&str; 7] = [
    "hero",
    "about",
    "skills",
    "certifications",
    "learning",
    "projects",
    "contact",
];

pub static REGISTRY: LazyLock<SectionRegistry> = LazyLock::new(|| {
    SectionRegistry::new(NAV_SECTIONS)
        .expect("navigation sections should have unique ids and orders")
});

/// Ordered, immutable list of navigable sections.
#[derive(Debug, Clone)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    pub fn new(sections: impl IntoIterator<Item = Section>) -> Result<Self, RegistryError> {
        let mut sections = sections.into_iter().collect::<Vec<_>>();
        if sections.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut ids = HashSet::new();
        let mut orders = HashSet::new();
        for section in &sections {
            if !ids.insert(section.id) {
                return Err(RegistryError::DuplicateId(section.id));
            }
            if !orders.insert(section.order) {
                return Err(RegistryError::DuplicateOrder(section.order));
            }
        }
        sections.sort_by_key(|s| s.order);

        Ok(Self { sections })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }

    /// Bottom-most section first.
    pub fn iter_rev(&self) -> std::iter::Rev<std::slice::Iter<'_, Section>> {
        self.sections.iter().rev()
    }

    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// The default active section. Never fails since construction rejects an
    /// empty registry.
    pub fn first(&self) -> &Section {
        &self.sections[0]
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl<'a> IntoIterator for &'a SectionRegistry {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_sorted_by_order() {
        let registry = SectionRegistry::new([
            Section::new("skills", "Skills", 2),
            Section::new("hero", "Home", 0),
            Section::new("about", "About", 1),
        ])
        .unwrap();

        let ids = registry.iter().map(|s| s.id).collect::<Vec<_>>();
        assert_eq!(ids, vec!["hero", "about", "skills"]);

        let rev = registry.iter_rev().map(|s| s.id).collect::<Vec<_>>();
        assert_eq!(rev, vec!["skills", "about", "hero"]);
        assert_eq!(registry.first().id, "hero");
    }

    #[test]
    fn test_registry_rejects_bad_config() {
        assert_eq!(
            SectionRegistry::new(Vec::new()).unwrap_err(),
            RegistryError::Empty
        );
        assert_eq!(
            SectionRegistry::new([Section::new("a", "A", 0), Section::new("a", "B", 1)])
                .unwrap_err(),
            RegistryError::DuplicateId("a")
        );
        assert_eq!(
            SectionRegistry::new([Section::new("a", "A", 3), Section::new("b", "B", 3)])
                .unwrap_err(),
            RegistryError::DuplicateOrder(3)
        );
    }

    #[test]
    fn test_static_registry_matches_layout() {
        let registry = &*REGISTRY;
        assert_eq!(registry.len(), NAV_SECTIONS.len());
        assert_eq!(registry.first().id, PAGE_LAYOUT[0]);

        // nav order must follow document order
        let positions = registry
            .iter()
            .map(|s| {
                PAGE_LAYOUT
                    .iter()
                    .position(|id| *id == s.id)
                    .expect("every nav section should be on the page")
            })
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert!(!registry.contains("learning"));
        assert_eq!(registry.get("certifications").unwrap().anchor(), "#certifications");
    }
}
