//! Progressive mounting of the page's section slots.
//!
//! The first slot is mounted with the shell. Every other slot starts
//! `NotRequested` and is requested by one of: the prefetch after mount, the
//! viewport proximity check on scroll, the idle sweep, or a navigation click
//! (which force-mounts it). Completions arrive independently and in any order.

use std::time::Duration;

use thiserror::Error;

use crate::scroll::SectionGeometry;

pub const PREFETCH_COUNT: usize = 2;
pub const PREFETCH_DELAY: Duration = Duration::from_millis(150);
pub const SWEEP_DELAY: Duration = Duration::from_millis(1200);
pub const LOAD_STAGGER: Duration = Duration::from_millis(40);
/// Extra distance below the viewport at which a placeholder counts as near.
pub const PROXIMITY_MARGIN: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    NotRequested,
    Pending,
    Ready,
    Failed,
}

impl LoadState {
    pub fn is_ready(self) -> bool {
        self == Self::Ready
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("no content is registered for section `{0}`")]
    MissingContent(String),
    #[error("unknown section `{0}`")]
    UnknownSection(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoaderConfig {
    pub prefetch_count: usize,
    pub prefetch_delay: Duration,
    pub sweep_delay: Duration,
    pub load_stagger: Duration,
    pub proximity_margin: f64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            prefetch_count: PREFETCH_COUNT,
            prefetch_delay: PREFETCH_DELAY,
            sweep_delay: SWEEP_DELAY,
            load_stagger: LOAD_STAGGER,
            proximity_margin: PROXIMITY_MARGIN,
        }
    }
}

/// DOM id of the wrapper that holds a slot's placeholder or content.
pub fn slot_element_id(id: &str) -> String {
    format!("slot-{id}")
}

#[derive(Debug, Clone, PartialEq)]
struct Slot {
    id: &'static str,
    state: LoadState,
    error: Option<LoadError>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionLoader {
    slots: Vec<Slot>,
}

impl SectionLoader {
    /// Slots in document order. The first one is `Ready` immediately.
    pub fn new(ids: impl IntoIterator<Item = &'static str>) -> Self {
        let slots = ids
            .into_iter()
            .enumerate()
            .map(|(i, id)| Slot {
                id,
                state: if i == 0 {
                    LoadState::Ready
                } else {
                    LoadState::NotRequested
                },
                error: None,
            })
            .collect();
        Self { slots }
    }

    pub fn state(&self, id: &str) -> Option<LoadState> {
        self.slot(id).map(|s| s.state)
    }

    pub fn error(&self, id: &str) -> Option<&LoadError> {
        self.slot(id).and_then(|s| s.error.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, LoadState)> + '_ {
        self.slots.iter().map(|s| (s.id, s.state))
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|s| s.state.is_ready())
    }

    /// NotRequested -> Pending. Returns true if the slot needs a load started.
    pub fn request(&mut self, id: &str) -> Result<bool, LoadError> {
        let slot = self.slot_mut(id)?;
        if slot.state == LoadState::NotRequested {
            slot.state = LoadState::Pending;
            return Ok(true);
        }
        Ok(false)
    }

    /// Requests the next `count` untouched slots in document order.
    pub fn prefetch(&mut self, count: usize) -> Vec<&'static str> {
        self.request_where(|slot| slot.state == LoadState::NotRequested, count)
    }

    /// Requests every remaining untouched slot.
    pub fn sweep(&mut self) -> Vec<&'static str> {
        self.request_where(|slot| slot.state == LoadState::NotRequested, usize::MAX)
    }

    /// Requests untouched slots whose placeholder is within the viewport plus
    /// `margin`. Placeholders missing from the document are skipped.
    pub fn request_near(
        &mut self,
        geometry: &impl SectionGeometry,
        viewport_height: f64,
        margin: f64,
    ) -> Vec<&'static str> {
        let limit = viewport_height + margin;
        self.request_where(
            |slot| {
                slot.state == LoadState::NotRequested
                    && geometry
                        .top_offset(&slot_element_id(slot.id))
                        .is_some_and(|top| top <= limit)
            },
            usize::MAX,
        )
    }

    /// Applies a load result. Only a `Pending` slot moves; late results for a
    /// slot that was force-mounted in the meantime are dropped.
    pub fn complete(
        &mut self,
        id: &str,
        result: Result<(), LoadError>,
    ) -> Result<LoadState, LoadError> {
        let slot = self.slot_mut(id)?;
        if slot.state != LoadState::Pending {
            return Ok(slot.state);
        }
        match result {
            Ok(()) => {
                slot.state = LoadState::Ready;
                slot.error = None;
            }
            Err(e) => {
                slot.state = LoadState::Failed;
                slot.error = Some(e);
            }
        }
        Ok(slot.state)
    }

    /// Failed -> Pending, only ever triggered by the user.
    pub fn retry(&mut self, id: &str) -> Result<bool, LoadError> {
        let slot = self.slot_mut(id)?;
        if slot.state == LoadState::Failed {
            slot.state = LoadState::Pending;
            slot.error = None;
            return Ok(true);
        }
        Ok(false)
    }

    /// Mounts a slot right away so it can be scrolled to. Returns true if the
    /// slot was not mounted before.
    pub fn force_mount(&mut self, id: &str) -> Result<bool, LoadError> {
        let slot = self.slot_mut(id)?;
        if slot.state == LoadState::Ready {
            return Ok(false);
        }
        slot.state = LoadState::Ready;
        slot.error = None;
        Ok(true)
    }

    fn request_where(&mut self, pred: impl Fn(&Slot) -> bool, limit: usize) -> Vec<&'static str> {
        let mut requested = Vec::new();
        for slot in self.slots.iter_mut() {
            if requested.len() >= limit {
                break;
            }
            if pred(slot) {
                slot.state = LoadState::Pending;
                requested.push(slot.id);
            }
        }
        requested
    }

    fn slot(&self, id: &str) -> Option<&Slot> {
        self.slots.iter().find(|s| s.id == id)
    }

    fn slot_mut(&mut self, id: &str) -> Result<&mut Slot, LoadError> {
        self.slots
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| LoadError::UnknownSection(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::PAGE_LAYOUT;

    fn loader() -> SectionLoader {
        SectionLoader::new(PAGE_LAYOUT)
    }

    #[test]
    fn test_first_slot_ready_at_mount() {
        let loader = loader();
        assert_eq!(loader.state("hero"), Some(LoadState::Ready));
        assert!(loader
            .iter()
            .skip(1)
            .all(|(_, state)| state == LoadState::NotRequested));
        assert!(!loader.is_complete());
    }

    #[test]
    fn test_first_slot_never_requested() {
        let mut loader = loader();
        assert_eq!(loader.request("hero"), Ok(false));
        assert!(!loader.prefetch(10).contains(&"hero"));
        assert_eq!(loader.state("hero"), Some(LoadState::Ready));
    }

    #[test]
    fn test_prefetch_takes_next_in_order() {
        let mut loader = loader();
        assert_eq!(loader.prefetch(PREFETCH_COUNT), vec!["about", "skills"]);
        assert_eq!(loader.state("about"), Some(LoadState::Pending));
        assert_eq!(loader.state("certifications"), Some(LoadState::NotRequested));
        // already pending slots are not handed out twice
        assert_eq!(loader.prefetch(1), vec!["certifications"]);
    }

    #[test]
    fn test_out_of_order_completion() {
        let mut loader = loader();
        let requested = loader.sweep();
        assert_eq!(requested.len(), PAGE_LAYOUT.len() - 1);

        assert_eq!(loader.complete("contact", Ok(())), Ok(LoadState::Ready));
        assert_eq!(loader.complete("skills", Ok(())), Ok(LoadState::Ready));
        assert_eq!(loader.state("about"), Some(LoadState::Pending));

        // slot order is unaffected by completion order
        let ids = loader.iter().map(|(id, _)| id).collect::<Vec<_>>();
        assert_eq!(ids, PAGE_LAYOUT.to_vec());
    }

    #[test]
    fn test_every_slot_eventually_ready() {
        let mut loader = loader();
        loader.prefetch(PREFETCH_COUNT);
        let pending = loader
            .iter()
            .filter(|(_, s)| *s == LoadState::Pending)
            .map(|(id, _)| id)
            .collect::<Vec<_>>();
        for id in pending.iter().rev() {
            loader.complete(id, Ok(())).unwrap();
        }
        // no scrolling happened, the sweep still picks up the rest
        for id in loader.sweep() {
            loader.complete(id, Ok(())).unwrap();
        }
        assert!(loader.is_complete());
    }

    #[test]
    fn test_failure_is_not_retried_automatically() {
        let mut loader = loader();
        loader.request("projects").unwrap();
        let err = LoadError::MissingContent("projects".to_string());
        assert_eq!(
            loader.complete("projects", Err(err.clone())),
            Ok(LoadState::Failed)
        );
        assert_eq!(loader.error("projects"), Some(&err));

        assert!(loader.sweep().iter().all(|id| *id != "projects"));
        assert_eq!(loader.request("projects"), Ok(false));
        assert_eq!(loader.state("projects"), Some(LoadState::Failed));

        assert_eq!(loader.retry("projects"), Ok(true));
        assert_eq!(loader.state("projects"), Some(LoadState::Pending));
        assert_eq!(loader.error("projects"), None);
        assert_eq!(loader.complete("projects", Ok(())), Ok(LoadState::Ready));
    }

    #[test]
    fn test_force_mount_from_any_state() {
        let mut loader = loader();
        assert_eq!(loader.force_mount("contact"), Ok(true));
        assert_eq!(loader.state("contact"), Some(LoadState::Ready));

        loader.request("about").unwrap();
        assert_eq!(loader.force_mount("about"), Ok(true));
        // the late completion for the earlier request is dropped
        assert_eq!(
            loader.complete("about", Err(LoadError::MissingContent("about".into()))),
            Ok(LoadState::Ready)
        );

        assert_eq!(loader.force_mount("hero"), Ok(false));
        assert_eq!(
            loader.force_mount("blog"),
            Err(LoadError::UnknownSection("blog".to_string()))
        );
    }

    #[test]
    fn test_request_near_viewport() {
        let mut loader = loader();
        let geo = |id: &str| match id {
            "slot-about" => Some(500.0),
            "slot-skills" => Some(950.0),
            "slot-certifications" => Some(1300.0),
            _ => None,
        };
        let requested = loader.request_near(&geo, 800.0, PROXIMITY_MARGIN);
        assert_eq!(requested, vec!["about", "skills"]);
        assert_eq!(loader.state("certifications"), Some(LoadState::NotRequested));
        assert!(loader.request_near(&geo, 800.0, PROXIMITY_MARGIN).is_empty());
    }

    #[test]
    fn test_unknown_slot() {
        let mut loader = loader();
        assert_eq!(loader.state("blog"), None);
        assert!(matches!(
            loader.complete("blog", Ok(())),
            Err(LoadError::UnknownSection(_))
        ));
    }
}
