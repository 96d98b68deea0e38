use crate::loader::{LoadError, SectionLoader};
use crate::registry::SectionRegistry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub id: &'static str,
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

/// Links in registry order with the active one flagged.
pub fn nav_links(registry: &SectionRegistry, active_id: &str) -> Vec<NavLink> {
    registry
        .iter()
        .map(|s| NavLink {
            id: s.id,
            label: s.display_name,
            href: s.anchor(),
            active: s.id == active_id,
        })
        .collect()
}

/// Section id from an in-page link such as `#projects`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chrome {
    /// At the top of the page: roomy and transparent.
    Expanded,
    /// Scrolled: compact with a frosted pill.
    Compact,
}

impl Chrome {
    pub fn from_scroll(is_past_threshold: bool) -> Self {
        if is_past_threshold {
            Self::Compact
        } else {
            Self::Expanded
        }
    }

    pub fn nav_class(self) -> &'static str {
        match self {
            Self::Expanded => "py-5",
            Self::Compact => "py-3",
        }
    }

    pub fn pill_class(self) -> &'static str {
        match self {
            Self::Expanded => "bg-transparent",
            Self::Compact => "glass-navbar shadow-navbar",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Handles a navigation link activation: the target is mounted before it is
/// scrolled to and the mobile menu is closed. Returns true if the target had
/// to be force-mounted.
pub fn activate_link(
    id: &str,
    loader: &mut SectionLoader,
    menu: &mut MobileMenu,
) -> Result<bool, LoadError> {
    menu.close();
    loader.force_mount(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::LoadState;
    use crate::registry::{PAGE_LAYOUT, REGISTRY};

    #[test]
    fn test_links_follow_registry_order() {
        let links = nav_links(&REGISTRY, "skills");
        let labels = links.iter().map(|l| l.label).collect::<Vec<_>>();
        assert_eq!(
            labels,
            vec!["Home", "About", "Skills", "Certs", "Projects", "Contact"]
        );
        let active = links.iter().filter(|l| l.active).collect::<Vec<_>>();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].href, "#skills");
    }

    #[test]
    fn test_unknown_active_highlights_nothing() {
        assert!(nav_links(&REGISTRY, "learning").iter().all(|l| !l.active));
    }

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#contact"), Some("contact"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/resume.pdf"), None);
        assert_eq!(anchor_target("https://github.com"), None);
    }

    #[test]
    fn test_chrome_style() {
        assert_eq!(Chrome::from_scroll(false), Chrome::Expanded);
        assert_eq!(Chrome::from_scroll(true).pill_class(), "glass-navbar shadow-navbar");
        assert_eq!(Chrome::Compact.nav_class(), "py-3");
    }

    #[test]
    fn test_mobile_menu_toggle() {
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_activate_link_mounts_target_and_closes_menu() {
        let mut loader = SectionLoader::new(PAGE_LAYOUT);
        let mut menu = MobileMenu::default();
        menu.toggle();

        assert_eq!(activate_link("projects", &mut loader, &mut menu), Ok(true));
        assert!(!menu.is_open());
        assert_eq!(loader.state("projects"), Some(LoadState::Ready));
        // earlier slots stay untouched
        assert_eq!(loader.state("about"), Some(LoadState::NotRequested));

        assert_eq!(activate_link("projects", &mut loader, &mut menu), Ok(false));
        assert!(activate_link("blog", &mut loader, &mut menu).is_err());
        assert!(!menu.is_open());
    }
}
