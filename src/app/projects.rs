use leptos::prelude::*;

use crate::content::{Project, PORTFOLIO};
use crate::modal::ModalSelection;
use crate::motion::stagger_style;

use super::page::PageContext;
use super::widgets::{AssetImage, SectionHeader, SectionWrapper, TagList};

#[component]
pub fn Projects() -> impl IntoView {
    let ctx = expect_context::<PageContext>();

    view! {
        <SectionWrapper id="projects" dark=true>
            <SectionHeader
                label="Portfolio"
                title="Featured Projects"
                description="A selection of things I've built, from web platforms to data dashboards"
            />

            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                {PORTFOLIO
                    .projects
                    .iter()
                    .enumerate()
                    .map(|(i, project)| {
                        let palette = project.accent.palette();
                        view! {
                            <article
                                class=format!(
                                    "fade-in-up group flex flex-col rounded-3xl overflow-hidden border border-slate-800 bg-slate-900/50 transition-all duration-300 hover:-translate-y-1 cursor-pointer {}",
                                    palette.border_hover,
                                )
                                style=stagger_style(i, 0.0, 0.1)
                                on:click=move |_| ctx.open_modal(ModalSelection::Project(project))
                            >
                                <div class="relative">
                                    <AssetImage
                                        src=project.image.as_deref()
                                        alt=project.title.as_str()
                                        accent=project.accent
                                        class="w-full h-48"
                                    />
                                    <Show when=move || project.featured>
                                        <span class="absolute top-4 left-4 px-3 py-1 text-xs font-semibold rounded-full bg-amber-500/90 text-slate-900">
                                            "★ Featured"
                                        </span>
                                    </Show>
                                    <span class="absolute top-4 right-4 px-3 py-1 text-xs rounded-full bg-slate-900/80 text-slate-300">
                                        {project.category.as_str()}
                                    </span>
                                </div>
                                <div class="flex flex-col flex-1 p-6">
                                    <h3 class="text-lg font-bold mb-2">{project.title.as_str()}</h3>
                                    <p class="text-sm text-slate-400 mb-4 flex-1">{project.description.as_str()}</p>
                                    <TagList tags=&project.tags accent=project.accent />
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </SectionWrapper>
    }
}

#[component]
pub fn ProjectDetail(project: &'static Project) -> impl IntoView {
    let palette = project.accent.palette();

    view! {
        <AssetImage
            src=project.image.as_deref()
            alt=project.title.as_str()
            accent=project.accent
            class="w-full h-56 rounded-2xl mb-6"
        />
        <div class="flex items-center gap-3 mb-4 text-sm">
            <span class=format!(
                "px-3 py-1 rounded-full font-semibold {} {}",
                palette.bg,
                palette.text,
            )>{project.category.as_str()}</span>
            <Show when=move || project.featured>
                <span class="text-amber-400">"★ Featured"</span>
            </Show>
        </div>
        <p class="text-slate-300 leading-relaxed mb-6">{project.long_description.as_str()}</p>
        <div class="mb-8">
            <TagList tags=&project.tags accent=project.accent />
        </div>
        <div class="flex flex-wrap gap-4">
            <a
                href=project.github.as_str()
                target="_blank"
                rel="noopener noreferrer"
                class="inline-flex items-center gap-2 px-5 py-2.5 rounded-full text-sm font-semibold border border-slate-700 hover:border-slate-500 transition-colors"
            >
                <i class="devicon-github-plain"></i>
                "Source Code"
            </a>
            {project
                .demo
                .as_deref()
                .map(|demo| {
                    view! {
                        <a
                            href=demo
                            target="_blank"
                            rel="noopener noreferrer"
                            class=format!(
                                "inline-flex items-center gap-2 px-5 py-2.5 rounded-full text-sm font-semibold text-white {}",
                                palette.bg_solid,
                            )
                        >
                            "Live Demo ↗"
                        </a>
                    }
                })}
        </div>
    }
}
