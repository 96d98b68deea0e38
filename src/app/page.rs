use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use leptos::{ev, prelude::*};
use leptos_meta::Title;
use leptos_use::{use_event_listener, use_window};
use wasm_bindgen::JsCast;

use crate::loader::{slot_element_id, LoadError, LoadState, LoaderConfig, SectionLoader};
use crate::modal::{ModalController, ModalSelection};
use crate::nav::{activate_link, anchor_target, MobileMenu};
use crate::registry::{PAGE_LAYOUT, REGISTRY};
use crate::scroll::{ScrollState, ScrollTracker};

use super::about::About;
use super::certifications::Certifications;
use super::contact::Contact;
use super::footer::Footer;
use super::hero::Hero;
use super::learning::Learning;
use super::modal::DetailModal;
use super::navbar::Navbar;
use super::projects::Projects;
use super::skills::Skills;

/// Timeouts still waiting to fire. A handle is dropped from the map when its
/// callback runs, so only pending ones are cleared on cleanup.
#[derive(Default)]
struct PendingTimers {
    next: u64,
    handles: HashMap<u64, TimeoutHandle>,
}

type Timers = Arc<Mutex<PendingTimers>>;

/// Page-wide state shared with the navbar, the section slots and the modal.
#[derive(Clone, Copy)]
pub struct PageContext {
    pub scroll: ReadSignal<ScrollState>,
    pub loader: RwSignal<SectionLoader>,
    pub menu: RwSignal<MobileMenu>,
    pub modal: RwSignal<ModalController<ModalSelection>>,
    pub retry: Callback<&'static str>,
}

impl PageContext {
    pub fn open_modal(&self, selection: ModalSelection) {
        log::debug!("opening {:?} detail for `{}`", selection.kind(), selection.title());
        self.modal.update(|m| m.open(selection));
    }

    pub fn close_modal(&self) {
        self.modal.update(|m| {
            if let Some(closed) = m.close() {
                log::debug!("closed detail for `{}`", closed.title());
            }
        });
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageSection {
    Hero,
    About,
    Skills,
    Certifications,
    Learning,
    Projects,
    Contact,
}

impl PageSection {
    fn from_id(id: &str) -> Option<Self> {
        Some(match id {
            "hero" => Self::Hero,
            "about" => Self::About,
            "skills" => Self::Skills,
            "certifications" => Self::Certifications,
            "learning" => Self::Learning,
            "projects" => Self::Projects,
            "contact" => Self::Contact,
            _ => return None,
        })
    }

    fn render(self) -> AnyView {
        match self {
            Self::Hero => view! { <Hero /> }.into_any(),
            Self::About => view! { <About /> }.into_any(),
            Self::Skills => view! { <Skills /> }.into_any(),
            Self::Certifications => view! { <Certifications /> }.into_any(),
            Self::Learning => view! { <Learning /> }.into_any(),
            Self::Projects => view! { <Projects /> }.into_any(),
            Self::Contact => view! { <Contact /> }.into_any(),
        }
    }
}

fn dom_top_offset(id: &str) -> Option<f64> {
    document()
        .get_element_by_id(id)
        .map(|el| el.get_bounding_client_rect().top())
}

fn scroll_to_section(id: &str) {
    let Some(el) = document().get_element_by_id(id) else {
        log::warn!("navigation target #{id} is not in the document");
        return;
    };
    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

fn schedule(timers: &Timers, delay: Duration, cb: impl FnOnce() + 'static) {
    let Ok(mut pending) = timers.lock() else {
        return;
    };
    let key = pending.next;
    pending.next += 1;

    let fired = timers.clone();
    let run = move || {
        if let Ok(mut pending) = fired.lock() {
            pending.handles.remove(&key);
        }
        cb();
    };
    match set_timeout_with_handle(run, delay) {
        Ok(handle) => {
            pending.handles.insert(key, handle);
        }
        Err(e) => log::error!("couldn't schedule timer: {e:?}"),
    }
}

/// Starts loads for freshly requested slots. Each completes on its own timer,
/// so completions may land in any order.
fn start_loads(
    loader: RwSignal<SectionLoader>,
    timers: &Timers,
    stagger: Duration,
    ids: Vec<&'static str>,
) {
    for (i, id) in ids.into_iter().enumerate() {
        log::debug!("section `{id}` requested");
        schedule(timers, stagger * i as u32, move || {
            let result = match PageSection::from_id(id) {
                Some(_) => Ok(()),
                None => Err(LoadError::MissingContent(id.to_string())),
            };
            match loader.try_update(|l| l.complete(id, result)) {
                Some(Ok(LoadState::Ready)) => log::debug!("section `{id}` ready"),
                Some(Ok(LoadState::Failed)) => {
                    if let Some(e) = loader.with_untracked(|l| l.error(id).cloned()) {
                        log::warn!("section `{id}` failed to load: {e}");
                    }
                }
                Some(Err(e)) => log::warn!("{e}"),
                _ => {}
            }
        });
    }
}

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let config = LoaderConfig::default();
    let tracker = StoredValue::new(ScrollTracker::new(&REGISTRY));
    let (scroll, set_scroll) = signal(ScrollState::initial(&REGISTRY));
    let loader = RwSignal::new(SectionLoader::new(PAGE_LAYOUT));
    let menu = RwSignal::new(MobileMenu::default());
    let modal = RwSignal::new(ModalController::<ModalSelection>::new());
    let timers: Timers = Arc::new(Mutex::new(PendingTimers::default()));

    let sample = {
        let timers = timers.clone();
        move || {
            let win = window();
            let scroll_y = win.scroll_y().unwrap_or_default();
            let viewport = win
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or_default();

            let changed = tracker
                .try_update_value(|t| {
                    t.sample(scroll_y, &dom_top_offset).then(|| t.state().clone())
                })
                .flatten();
            if let Some(state) = changed {
                set_scroll.set(state);
            }

            let near = loader
                .try_update(|l| l.request_near(&dom_top_offset, viewport, config.proximity_margin))
                .unwrap_or_default();
            if !near.is_empty() {
                start_loads(loader, &timers, config.load_stagger, near);
            }
        }
    };

    let navigate = Callback::new(move |id: &'static str| {
        let result = loader
            .try_update(|l| menu.try_update(|m| activate_link(id, l, m)))
            .flatten();
        match result {
            Some(Ok(true)) => log::debug!("section `{id}` force-mounted for navigation"),
            Some(Err(e)) => log::warn!("{e}"),
            _ => {}
        }
        // the slot renders on the next tick
        request_animation_frame(move || scroll_to_section(id));
    });

    let retry = Callback::new({
        let timers = timers.clone();
        move |id: &'static str| {
            if loader.try_update(|l| l.retry(id)) == Some(Ok(true)) {
                log::debug!("retrying section `{id}`");
                start_loads(loader, &timers, config.load_stagger, vec![id]);
            }
        }
    });

    provide_context(PageContext {
        scroll,
        loader,
        menu,
        modal,
        retry,
    });

    // Scroll listener lives as long as the page; use_event_listener detaches
    // it on cleanup.
    let _ = use_event_listener(use_window(), ev::scroll, {
        let sample = sample.clone();
        move |_| sample()
    });

    // In-page anchor clicks anywhere on the page go through `navigate` so the
    // target is mounted before scrolling.
    let _ = use_event_listener(use_window(), ev::click, move |ev: ev::MouseEvent| {
        let Some(href) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest("a[href^='#']").ok().flatten())
            .and_then(|a| a.get_attribute("href"))
        else {
            return;
        };
        let target = anchor_target(&href).and_then(|id| PAGE_LAYOUT.into_iter().find(|s| *s == id));
        if let Some(id) = target {
            ev.prevent_default();
            navigate.run(id);
        }
    });

    let _ = use_event_listener(use_window(), ev::keydown, move |ev: ev::KeyboardEvent| {
        if modal.with_untracked(|m| m.is_open()) {
            modal.update(|m| {
                if m.handle_key(&ev.key()) {
                    log::debug!("modal closed from keyboard");
                }
            });
        }
    });

    // Effects only run in the browser: establish the initial scroll state and
    // kick off the prefetch and the idle sweep.
    Effect::new({
        let timers = timers.clone();
        move |_| {
            sample();

            let prefetch_timers = timers.clone();
            schedule(&timers, config.prefetch_delay, move || {
                let ids = loader
                    .try_update(|l| l.prefetch(config.prefetch_count))
                    .unwrap_or_default();
                start_loads(loader, &prefetch_timers, config.load_stagger, ids);
            });

            let sweep_timers = timers.clone();
            schedule(&timers, config.sweep_delay, move || {
                let ids = loader.try_update(|l| l.sweep()).unwrap_or_default();
                start_loads(loader, &sweep_timers, config.load_stagger, ids);
            });
        }
    });

    on_cleanup(move || {
        if let Ok(mut pending) = timers.lock() {
            for (_, handle) in pending.handles.drain() {
                handle.clear();
            }
        }
    });

    view! {
        <Title text="Portfolio" />
        <div class="relative bg-slate-900 text-white min-h-screen overflow-x-hidden">
            <Navbar />
            <main>
                {PAGE_LAYOUT.iter().map(|id| view! { <LazySlot id=*id /> }).collect_view()}
            </main>
            <Footer />
            <DetailModal />
        </div>
    }
}

/// Stable slot in document order holding a section, its placeholder, or its
/// load error.
#[component]
fn LazySlot(id: &'static str) -> impl IntoView {
    let ctx = expect_context::<PageContext>();
    let state = Memo::new(move |_| ctx.loader.with(|l| l.state(id)));

    view! {
        <div id=slot_element_id(id)>
            {move || match (state.get(), PageSection::from_id(id)) {
                (Some(LoadState::Ready), Some(section)) => section.render(),
                (Some(LoadState::Failed), _) | (Some(LoadState::Ready), None) => {
                    let message = ctx
                        .loader
                        .with_untracked(|l| l.error(id).map(|e| e.to_string()))
                        .unwrap_or_else(|| format!("Couldn't load the {id} section."));
                    view! { <SlotError id=id message=message /> }.into_any()
                }
                _ => view! { <SlotPlaceholder /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn SlotPlaceholder() -> impl IntoView {
    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20 md:py-32 min-h-screen" aria-busy="true">
            <div class="space-y-4">
                <div class="loading-skeleton h-8 rounded w-1/3 mx-auto"></div>
                <div class="loading-skeleton h-6 rounded w-2/3 mx-auto"></div>
                <div class="loading-skeleton h-48 rounded-2xl"></div>
                <div class="loading-skeleton h-6 rounded w-4/5"></div>
            </div>
        </div>
    }
}

#[component]
fn SlotError(id: &'static str, message: String) -> impl IntoView {
    let ctx = expect_context::<PageContext>();
    view! {
        <div class="max-w-3xl mx-auto px-4 py-20 text-center" role="alert">
            <p class="text-slate-400 mb-4">{message}</p>
            <button
                class="px-5 py-2.5 rounded-full border border-slate-700 hover:border-indigo-500/50 text-sm transition-colors"
                on:click=move |_| ctx.retry.run(id)
            >
                "Try again"
            </button>
        </div>
    }
}
