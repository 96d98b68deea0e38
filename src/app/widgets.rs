use leptos::prelude::*;
use leptos_use::{use_interval_fn, use_timeout_fn, utils::Pausable};

use crate::content::{initial, SocialLink};
use crate::motion::{count_up, COUNTER_DURATION_MS, COUNTER_STEPS};
use crate::theme::Accent;

#[component]
pub fn SectionWrapper(
    id: &'static str,
    #[prop(optional)] dark: bool,
    children: Children,
) -> impl IntoView {
    let bg = if dark { "bg-slate-950" } else { "bg-slate-900" };
    view! {
        <section id=id class=format!("relative py-20 md:py-32 scroll-mt-20 {bg}")>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">{children()}</div>
        </section>
    }
}

#[component]
pub fn SectionHeader(
    label: &'static str,
    title: &'static str,
    #[prop(into)] description: String,
) -> impl IntoView {
    view! {
        <div class="text-center mb-16 fade-in-up">
            <span class="inline-block px-4 py-1.5 mb-4 text-xs font-semibold tracking-wider uppercase rounded-full bg-indigo-500/10 text-indigo-400 border border-indigo-500/20">
                {label}
            </span>
            <h2 class="text-3xl md:text-5xl font-bold mb-4">
                <span class="gradient-text">{title}</span>
            </h2>
            <p class="text-slate-400 max-w-2xl mx-auto text-lg">{description}</p>
        </div>
    }
}

/// Pill list of skills or tags in an accent color.
#[component]
pub fn TagList(tags: &'static [String], accent: Accent) -> impl IntoView {
    let tag = accent.palette().tag;
    view! {
        <div class="flex flex-wrap gap-2">
            {tags
                .iter()
                .map(|t| {
                    view! {
                        <span class=format!(
                            "px-3 py-1 text-xs font-medium rounded-full border transition-colors {tag}",
                        )>{t.as_str()}</span>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Image that degrades to a lettered tile when the source is missing or fails
/// to load.
#[component]
pub fn AssetImage(
    src: Option<&'static str>,
    alt: &'static str,
    accent: Accent,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let (failed, set_failed) = signal(src.is_none());
    let gradient = accent.palette().gradient;
    let text = accent.palette().text;

    move || {
        if failed.get() {
            view! {
                <div class=format!(
                    "flex items-center justify-center bg-gradient-to-br {gradient} {class}",
                )>
                    <span class=format!("text-5xl font-bold {text}")>{initial(alt)}</span>
                </div>
            }
                .into_any()
        } else {
            view! {
                <img
                    src=src.unwrap_or_default()
                    alt=alt
                    loading="lazy"
                    class=format!("object-cover {class}")
                    on:error=move |_| {
                        log::debug!("image for `{alt}` failed to load");
                        set_failed.set(true);
                    }
                />
            }
                .into_any()
        }
    }
}

/// Number that counts up from zero once mounted.
#[component]
pub fn Counter(target: u32, #[prop(optional)] suffix: &'static str) -> impl IntoView {
    let (value, set_value) = signal(0u32);
    let (elapsed, set_elapsed) = signal(0.0f64);
    let step = COUNTER_DURATION_MS / COUNTER_STEPS as f64;

    let Pausable { pause, .. } = use_interval_fn(
        move || {
            let next = elapsed.get_untracked() + step;
            set_elapsed.set(next);
            set_value.set(count_up(next, COUNTER_DURATION_MS, target));
        },
        step as u64,
    );

    // the interval only has to run for the animation
    let settle = use_timeout_fn(
        move |_: ()| {
            pause();
            set_value.set(target);
        },
        COUNTER_DURATION_MS + step,
    );
    Effect::new(move |_| (settle.start)(()));

    view! { {move || format!("{}{suffix}", value.get())} }
}

/// Row of round social buttons.
#[component]
pub fn SocialLinks(links: &'static [SocialLink]) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3">
            {links
                .iter()
                .map(|link| {
                    let external = link.href.starts_with("http");
                    view! {
                        <a
                            href=link.href.as_str()
                            target=external.then_some("_blank")
                            rel=external.then_some("noopener noreferrer")
                            aria-label=link.name.as_str()
                            title=link.name.as_str()
                            class="w-11 h-11 rounded-full flex items-center justify-center border border-slate-700 text-slate-400 hover:text-white hover:border-indigo-500/50 hover:bg-indigo-500/10 transition-all"
                        >
                            <SocialGlyph icon=link.icon.as_str() />
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn SocialGlyph(icon: &'static str) -> impl IntoView {
    if icon.starts_with("devicon-") {
        view! { <i class=format!("{icon} text-lg")></i> }.into_any()
    } else {
        view! { <span class="text-lg">"✉"</span> }.into_any()
    }
}
