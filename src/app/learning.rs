use leptos::prelude::*;

use crate::content::PORTFOLIO;
use crate::motion::stagger_style;

use super::widgets::{SectionHeader, SectionWrapper, TagList};

#[component]
pub fn Learning() -> impl IntoView {
    view! {
        <SectionWrapper id="learning">
            <SectionHeader
                label="Currently Learning"
                title="Always Growing"
                description="Areas I'm actively studying to level up my skills"
            />

            <div class="grid md:grid-cols-3 gap-8">
                {PORTFOLIO
                    .learning
                    .iter()
                    .enumerate()
                    .map(|(i, item)| {
                        let palette = item.accent.palette();
                        view! {
                            <div
                                class=format!(
                                    "fade-in-up p-8 rounded-3xl border bg-slate-900/50 transition-all {} {}",
                                    palette.border,
                                    palette.border_hover,
                                )
                                style=stagger_style(i, 0.0, 0.15)
                            >
                                <div class="flex items-center justify-between mb-6">
                                    <div class=format!(
                                        "w-14 h-14 rounded-2xl flex items-center justify-center text-2xl {}",
                                        palette.chip,
                                    )>{item.icon.as_str()}</div>
                                    <span class=format!(
                                        "px-3 py-1 text-xs font-semibold rounded-full {} {}",
                                        palette.bg,
                                        palette.text,
                                    )>{item.status.as_str()}</span>
                                </div>
                                <h3 class="text-xl font-bold mb-2">{item.title.as_str()}</h3>
                                <p class="text-sm text-slate-400 mb-6">{item.description.as_str()}</p>

                                <div class="mb-6">
                                    <div class="flex justify-between text-sm mb-2">
                                        <span class="text-slate-400">"Progress"</span>
                                        <span class=palette.text>{format!("{}%", item.progress)}</span>
                                    </div>
                                    <div
                                        class="h-2 rounded-full bg-slate-800 overflow-hidden"
                                        role="progressbar"
                                        aria-valuemin="0"
                                        aria-valuemax="100"
                                        aria-valuenow=item.progress.to_string()
                                    >
                                        <div
                                            class=format!("h-full rounded-full grow-x {}", palette.bg_solid)
                                            style=format!("width: {}%", item.progress)
                                        ></div>
                                    </div>
                                </div>

                                <TagList tags=&item.topics accent=item.accent />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </SectionWrapper>
    }
}
