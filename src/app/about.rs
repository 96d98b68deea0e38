use leptos::prelude::*;

use crate::content::PORTFOLIO;
use crate::motion::stagger_style;
use crate::theme::Accent;

use super::widgets::{AssetImage, SectionHeader, SectionWrapper, TagList};

#[component]
pub fn About() -> impl IntoView {
    let portfolio = &*PORTFOLIO;
    let profile = &portfolio.profile;

    view! {
        <SectionWrapper id="about" dark=true>
            <SectionHeader
                label="About Me"
                title="Get to Know Me"
                description="Passionate about creating digital experiences that make a difference"
            />

            <div class="grid lg:grid-cols-5 gap-12 mb-20">
                <div class="lg:col-span-2 fade-in-up">
                    <div class="relative rounded-3xl overflow-hidden border border-slate-800 bg-slate-900/50 p-8">
                        <AssetImage
                            src=profile.avatar.as_deref()
                            alt=profile.name.as_str()
                            accent=Accent::Indigo
                            class="w-40 h-40 rounded-2xl mx-auto mb-6"
                        />
                        <h3 class="text-2xl font-bold text-center">{profile.name.as_str()}</h3>
                        <p class="text-indigo-400 text-center mb-4">{profile.role.as_str()}</p>
                        <p class="text-slate-500 text-sm text-center">"📍 " {profile.location.as_str()}</p>
                    </div>
                </div>

                <div class="lg:col-span-3 space-y-5">
                    {profile
                        .bio
                        .iter()
                        .enumerate()
                        .map(|(i, paragraph)| {
                            view! {
                                <p class="fade-in-up text-slate-300 leading-relaxed" style=stagger_style(i, 0.1, 0.1)>
                                    {paragraph.as_str()}
                                </p>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="relative border-l border-slate-800 ml-3 space-y-10 mb-20">
                {portfolio
                    .timeline
                    .iter()
                    .map(|entry| {
                        let palette = entry.accent.palette();
                        view! {
                            <div class="relative pl-8 fade-in-up">
                                <span class=format!(
                                    "absolute -left-[7px] top-1.5 w-3.5 h-3.5 rounded-full {}",
                                    palette.bg_solid,
                                )></span>
                                <span class=format!(
                                    "inline-block px-3 py-1 mb-2 text-xs font-semibold rounded-full {} {}",
                                    palette.bg,
                                    palette.text,
                                )>{entry.badge.as_str()}</span>
                                <h4 class="text-lg font-semibold">{entry.title.as_str()}</h4>
                                <p class="text-sm text-slate-500 mb-2">{entry.subtitle.as_str()}</p>
                                <p class="text-slate-400">{entry.description.as_str()}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-6 mb-20">
                {portfolio
                    .highlights
                    .iter()
                    .enumerate()
                    .map(|(i, item)| {
                        let palette = item.accent.palette();
                        view! {
                            <div
                                class=format!(
                                    "fade-in-up group p-6 rounded-2xl border border-slate-800 bg-slate-900/50 transition-all {}",
                                    palette.border_hover,
                                )
                                style=stagger_style(i, 0.0, 0.1)
                            >
                                <div class=format!(
                                    "w-12 h-12 mb-4 rounded-xl flex items-center justify-center text-2xl {}",
                                    palette.chip,
                                )>{item.icon.as_str()}</div>
                                <h4 class="font-semibold mb-2">{item.title.as_str()}</h4>
                                <p class="text-sm text-slate-400">{item.description.as_str()}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="grid md:grid-cols-2 gap-6">
                {portfolio
                    .skill_groups
                    .iter()
                    .map(|group| {
                        view! {
                            <div class="p-6 rounded-2xl border border-slate-800 bg-slate-900/50">
                                <h4 class=format!(
                                    "font-semibold mb-4 {}",
                                    group.accent.palette().text,
                                )>{group.title.as_str()}</h4>
                                <TagList tags=&group.skills accent=group.accent />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </SectionWrapper>
    }
}
