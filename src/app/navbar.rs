use leptos::prelude::*;

use crate::content::PORTFOLIO;
use crate::nav::{nav_links, Chrome};
use crate::registry::REGISTRY;

use super::page::PageContext;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = expect_context::<PageContext>();
    let chrome =
        Memo::new(move |_| Chrome::from_scroll(ctx.scroll.with(|s| s.is_past_threshold)));
    let links =
        Memo::new(move |_| nav_links(&REGISTRY, ctx.scroll.with(|s| s.active_section_id)));
    let menu_open = Memo::new(move |_| ctx.menu.with(|m| m.is_open()));
    let initials = PORTFOLIO.profile.initials.as_str();

    view! {
        <nav class=move || {
            format!("fixed top-0 inset-x-0 z-50 transition-all duration-300 {}", chrome.get().nav_class())
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class=move || {
                    format!(
                        "flex items-center justify-between rounded-2xl px-4 py-2 transition-all duration-300 {}",
                        chrome.get().pill_class(),
                    )
                }>
                    <a href="#hero" class="flex items-center gap-2 group" aria-label="Back to top">
                        <span class="w-9 h-9 rounded-xl bg-gradient-to-br from-indigo-500 to-purple-600 flex items-center justify-center font-bold text-sm group-hover:scale-110 transition-transform">
                            {initials}
                        </span>
                    </a>

                    <div class="hidden md:flex items-center gap-1">
                        <For
                            each=move || links.get()
                            key=|link| (link.id, link.active)
                            children=move |link| {
                                let class = if link.active {
                                    "relative px-4 py-2 text-sm font-medium rounded-full text-white bg-white/10"
                                } else {
                                    "relative px-4 py-2 text-sm font-medium rounded-full text-slate-400 hover:text-white transition-colors"
                                };
                                view! {
                                    <a href=link.href class=class aria-current=link.active.then_some("true")>
                                        {link.label}
                                    </a>
                                }
                            }
                        />
                    </div>

                    <a
                        href="#contact"
                        class="hidden md:inline-flex px-5 py-2 text-sm font-semibold rounded-full bg-gradient-to-r from-indigo-600 to-purple-600 hover:from-indigo-500 hover:to-purple-500 transition-all shadow-lg shadow-indigo-500/25"
                    >
                        "Let's Talk"
                    </a>

                    <button
                        class="md:hidden p-2 rounded-lg text-slate-300 hover:text-white hover:bg-white/10 transition-colors"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| ctx.menu.update(|m| m.toggle())
                    >
                        <span class=move || if menu_open.get() { "text-xl" } else { "hidden" }>"✕"</span>
                        <span class=move || if menu_open.get() { "hidden" } else { "text-xl" }>"☰"</span>
                    </button>
                </div>

                <Show when=move || menu_open.get()>
                    <div class="md:hidden mt-2 rounded-2xl glass-navbar shadow-navbar p-4 flex flex-col gap-1">
                        {move || {
                            links
                                .get()
                                .into_iter()
                                .map(|link| {
                                    let class = if link.active {
                                        "px-4 py-3 rounded-xl text-white bg-white/10"
                                    } else {
                                        "px-4 py-3 rounded-xl text-slate-400 hover:text-white hover:bg-white/5"
                                    };
                                    view! {
                                        <a href=link.href class=class>
                                            {link.label}
                                        </a>
                                    }
                                })
                                .collect_view()
                        }}
                        <a
                            href="#contact"
                            class="mt-2 px-4 py-3 rounded-xl text-center font-semibold bg-gradient-to-r from-indigo-600 to-purple-600"
                        >
                            "Let's Talk"
                        </a>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
