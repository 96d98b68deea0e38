use leptos::prelude::*;

use crate::content::PORTFOLIO;
use crate::motion::stagger_style;

use super::widgets::{Counter, SectionHeader, SectionWrapper, TagList};

const LEARNING_HOURS: u32 = 100;

#[component]
pub fn Skills() -> impl IntoView {
    let portfolio = &*PORTFOLIO;
    let skills = portfolio.all_skills();
    let counters = [
        (skills.len() as u32, "Technologies"),
        (portfolio.skill_categories.len() as u32, "Categories"),
        (LEARNING_HOURS, "Hours Learning"),
    ];

    // rendered twice so the marquee loops without a gap
    let marquee = skills
        .iter()
        .chain(skills.iter())
        .map(|skill| {
            view! {
                <span class="mx-3 px-5 py-2 rounded-full whitespace-nowrap text-sm text-slate-300 bg-white/5 border border-white/10">
                    {skill.to_string()}
                </span>
            }
        })
        .collect_view();

    view! {
        <SectionWrapper id="skills">
            <SectionHeader
                label="My Skills"
                title="Technical Expertise"
                description="Technologies and tools I use to bring ideas to life"
            />

            <div class="flex justify-center gap-12 mb-16">
                {counters
                    .into_iter()
                    .map(|(value, label)| {
                        view! {
                            <div class="text-center">
                                <div class="text-3xl font-bold gradient-text">
                                    <Counter target=value suffix="+" />
                                </div>
                                <div class="text-sm text-slate-500">{label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="grid md:grid-cols-3 gap-8 mb-16">
                {portfolio
                    .skill_categories
                    .iter()
                    .enumerate()
                    .map(|(i, category)| {
                        let palette = category.accent.palette();
                        view! {
                            <div
                                class=format!(
                                    "fade-in-up group relative p-8 rounded-3xl border bg-slate-900/50 transition-all duration-300 hover:-translate-y-1 {} {}",
                                    palette.border,
                                    palette.border_hover,
                                )
                                style=stagger_style(i, 0.0, 0.15)
                            >
                                <div class=format!(
                                    "absolute inset-0 rounded-3xl bg-gradient-to-br opacity-0 group-hover:opacity-100 transition-opacity {}",
                                    palette.gradient,
                                )></div>
                                <div class="relative">
                                    <div class=format!(
                                        "w-14 h-14 mb-6 rounded-2xl flex items-center justify-center text-2xl {}",
                                        palette.chip,
                                    )>{category.icon.as_str()}</div>
                                    <h3 class="text-xl font-bold mb-2">{category.title.as_str()}</h3>
                                    <p class="text-sm text-slate-400 mb-6">{category.description.as_str()}</p>
                                    <TagList tags=&category.skills accent=category.accent />
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="relative overflow-hidden py-4 marquee-mask">
                <div class="flex w-max animate-marquee">{marquee}</div>
            </div>
        </SectionWrapper>
    }
}
