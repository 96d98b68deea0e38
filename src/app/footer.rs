use leptos::prelude::*;

use crate::build_info::{copyright_year, BuildInfo};
use crate::content::PORTFOLIO;
use crate::registry::REGISTRY;

fn scroll_to_top() {
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

#[component]
pub fn Footer() -> impl IntoView {
    let profile = &PORTFOLIO.profile;
    let built = BuildInfo::current().map(|b| format!("Last built {}", b.date_label()));

    view! {
        <footer class="relative border-t border-slate-800 bg-slate-950">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="flex flex-col md:flex-row items-center justify-between gap-8">
                    <a href="#hero" class="flex items-center gap-3">
                        <span class="w-10 h-10 rounded-xl bg-gradient-to-br from-indigo-500 to-purple-600 flex items-center justify-center font-bold">
                            {profile.initials.as_str()}
                        </span>
                        <span class="font-semibold">{profile.name.as_str()}</span>
                    </a>

                    <nav class="flex flex-wrap justify-center gap-6 text-sm text-slate-400">
                        {REGISTRY
                            .iter()
                            .map(|section| {
                                view! {
                                    <a href=section.anchor() class="hover:text-white transition-colors">
                                        {section.display_name}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>

                    <button
                        class="w-11 h-11 rounded-full flex items-center justify-center border border-slate-700 text-slate-400 hover:text-white hover:border-indigo-500/50 transition-all"
                        aria-label="Back to top"
                        on:click=move |_| scroll_to_top()
                    >
                        "↑"
                    </button>
                </div>

                <div class="mt-10 pt-8 border-t border-slate-800/60 flex flex-col md:flex-row items-center justify-between gap-2 text-sm text-slate-500">
                    <p>{format!("© {} {}. All rights reserved.", copyright_year(), profile.name)}</p>
                    {built.map(|label| view! { <p class="text-xs">{label}</p> })}
                </div>
            </div>
        </footer>
    }
}
