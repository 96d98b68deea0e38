use leptos::prelude::*;

use crate::content::{Certificate, PORTFOLIO};
use crate::modal::ModalSelection;
use crate::motion::stagger_style;

use super::page::PageContext;
use super::widgets::{AssetImage, SectionHeader, SectionWrapper, TagList};

#[component]
pub fn Certifications() -> impl IntoView {
    let ctx = expect_context::<PageContext>();

    view! {
        <SectionWrapper id="certifications" dark=true>
            <SectionHeader
                label="Certifications"
                title="Professional Credentials"
                description="Verified programs that shaped my engineering and data skills"
            />

            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                {PORTFOLIO
                    .certifications
                    .iter()
                    .enumerate()
                    .map(|(i, cert)| {
                        let palette = cert.accent.palette();
                        view! {
                            <button
                                type="button"
                                class=format!(
                                    "fade-in-up group text-left rounded-3xl overflow-hidden border border-slate-800 bg-slate-900/50 transition-all duration-300 hover:-translate-y-1 {}",
                                    palette.border_hover,
                                )
                                style=stagger_style(i, 0.0, 0.15)
                                on:click=move |_| ctx.open_modal(ModalSelection::Certificate(cert))
                            >
                                <AssetImage
                                    src=cert.image.as_deref()
                                    alt=cert.title.as_str()
                                    accent=cert.accent
                                    class="w-full h-48"
                                />
                                <div class="p-6">
                                    <div class="flex items-center justify-between mb-3 text-xs">
                                        <span class=format!(
                                            "px-3 py-1 rounded-full font-semibold {} {}",
                                            palette.bg,
                                            palette.text,
                                        )>{cert.issuer.as_str()}</span>
                                        <span class="text-slate-500">{cert.date.as_str()}</span>
                                    </div>
                                    <h3 class="text-lg font-bold mb-1">{cert.title.as_str()}</h3>
                                    <p class="text-sm text-slate-400 mb-4">{cert.program.as_str()}</p>
                                    <span class=format!("text-sm font-medium {}", palette.text)>
                                        "View details →"
                                    </span>
                                </div>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <p class="text-center text-sm text-slate-500 mt-10">
                "Click on any certificate to view details and verify credentials"
            </p>
        </SectionWrapper>
    }
}

#[component]
pub fn CertificateDetail(cert: &'static Certificate) -> impl IntoView {
    let palette = cert.accent.palette();

    view! {
        <AssetImage
            src=cert.image.as_deref()
            alt=cert.title.as_str()
            accent=cert.accent
            class="w-full h-56 rounded-2xl mb-6"
        />
        <div class="flex flex-wrap items-center gap-3 mb-4 text-sm">
            <span class=format!(
                "px-3 py-1 rounded-full font-semibold {} {}",
                palette.bg,
                palette.text,
            )>{cert.issuer.as_str()}</span>
            <span class="text-slate-400">{cert.date.as_str()}</span>
            <span class="text-slate-600">"•"</span>
            <span class="text-slate-400">{cert.duration.as_str()}</span>
        </div>
        <p class="text-slate-500 text-sm mb-2">{cert.program.as_str()}</p>
        <p class="text-slate-300 leading-relaxed mb-6">{cert.description.as_str()}</p>
        <h4 class="text-sm font-semibold text-slate-400 uppercase tracking-wider mb-3">"Skills covered"</h4>
        <div class="mb-6">
            <TagList tags=&cert.skills accent=cert.accent />
        </div>
        <div class="flex flex-col sm:flex-row sm:items-center justify-between gap-4 p-4 rounded-2xl bg-slate-800/50">
            <div>
                <p class="text-xs text-slate-500 mb-1">"Credential ID"</p>
                <p class="text-white font-medium font-mono text-sm">{cert.credential_id.as_str()}</p>
            </div>
            <a
                href=cert.credential_url.as_str()
                target="_blank"
                rel="noopener noreferrer"
                class=format!(
                    "inline-flex items-center justify-center gap-2 px-5 py-2.5 rounded-full text-sm font-semibold text-white {}",
                    palette.bg_solid,
                )
            >
                "Verify Credential ↗"
            </a>
        </div>
    }
}
