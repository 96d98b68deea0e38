use crate::content::{Certificate, Project};

/// Open/close state for a detail overlay. Opening while open replaces the
/// current selection; overlays never stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalController<T> {
    selection: Option<T>,
}

impl<T> Default for ModalController<T> {
    fn default() -> Self {
        Self { selection: None }
    }
}

impl<T> ModalController<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, item: T) {
        self.selection = Some(item);
    }

    pub fn close(&mut self) -> Option<T> {
        self.selection.take()
    }

    pub fn selection(&self) -> Option<&T> {
        self.selection.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selection.is_some()
    }

    /// Escape closes the overlay. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.is_open() {
            self.selection = None;
            return true;
        }
        false
    }
}

/// Selector for elements Tab can land on inside an open dialog.
pub const FOCUSABLE: &str = concat!(
    "a[href], button:not([disabled]), input:not([disabled]), ",
    "textarea:not([disabled]), [tabindex]:not([tabindex='-1'])",
);

/// Next focus index inside a dialog with `len` focusable elements. Wraps at
/// both ends; with nothing focused yet, Tab goes to the first and Shift+Tab to
/// the last.
pub fn cycle_focus(current: Option<usize>, len: usize, backwards: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let next = match (current, backwards) {
        (None, false) => 0,
        (None, true) => len - 1,
        (Some(i), false) => (i + 1) % len,
        (Some(0), true) => len - 1,
        (Some(i), true) => (i - 1).min(len - 1),
    };
    Some(next)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Certificate,
    Project,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModalSelection {
    Certificate(&'static Certificate),
    Project(&'static Project),
}

impl ModalSelection {
    pub fn kind(&self) -> ModalKind {
        match *self {
            Self::Certificate(_) => ModalKind::Certificate,
            Self::Project(_) => ModalKind::Project,
        }
    }

    pub fn title(&self) -> &'static str {
        match *self {
            Self::Certificate(c) => &c.title,
            Self::Project(p) => &p.title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PORTFOLIO;

    #[test]
    fn test_open_replaces_selection() {
        let mut modal = ModalController::new();
        modal.open("a");
        modal.open("b");
        assert_eq!(modal.selection(), Some(&"b"));
        assert_eq!(modal.close(), Some("b"));
        assert!(!modal.is_open());
    }

    #[test]
    fn test_close_after_any_sequence() {
        let mut modal = ModalController::new();
        assert_eq!(modal.close(), None);
        for i in 0..5 {
            modal.open(i);
        }
        modal.close();
        assert_eq!(modal.selection(), None);
        modal.close();
        assert_eq!(modal.selection(), None);
    }

    #[test]
    fn test_escape_closes() {
        let mut modal = ModalController::new();
        assert!(!modal.handle_key("Escape"));
        modal.open(1);
        assert!(!modal.handle_key("Enter"));
        assert!(modal.is_open());
        assert!(modal.handle_key("Escape"));
        assert!(!modal.is_open());
    }

    #[test]
    fn test_cycle_focus_wraps_forward() {
        assert_eq!(cycle_focus(Some(0), 3, false), Some(1));
        assert_eq!(cycle_focus(Some(2), 3, false), Some(0));
        assert_eq!(cycle_focus(None, 3, false), Some(0));
    }

    #[test]
    fn test_cycle_focus_wraps_backward() {
        assert_eq!(cycle_focus(Some(2), 3, true), Some(1));
        assert_eq!(cycle_focus(Some(0), 3, true), Some(2));
        assert_eq!(cycle_focus(None, 3, true), Some(2));
    }

    #[test]
    fn test_cycle_focus_single_and_empty() {
        assert_eq!(cycle_focus(Some(0), 1, false), Some(0));
        assert_eq!(cycle_focus(Some(0), 1, true), Some(0));
        assert_eq!(cycle_focus(None, 0, false), None);
        assert_eq!(cycle_focus(Some(0), 0, true), None);
    }

    #[test]
    fn test_selection_kinds_share_one_overlay() {
        let portfolio = &*PORTFOLIO;
        let cert = &portfolio.certifications[0];
        let project = &portfolio.projects[0];

        let mut modal = ModalController::new();
        modal.open(ModalSelection::Certificate(cert));
        assert_eq!(modal.selection().unwrap().kind(), ModalKind::Certificate);
        modal.open(ModalSelection::Project(project));
        let selected = modal.selection().unwrap();
        assert_eq!(selected.kind(), ModalKind::Project);
        assert_eq!(selected.title(), project.title);
    }
}
