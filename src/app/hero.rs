use leptos::prelude::*;

use crate::content::PORTFOLIO;
use crate::motion::stagger_style;

use super::widgets::{Counter, SocialLinks};

#[component]
pub fn Hero() -> impl IntoView {
    let portfolio = &*PORTFOLIO;
    let profile = &portfolio.profile;

    view! {
        <section
            id="hero"
            class="relative min-h-screen flex items-center justify-center overflow-hidden bg-[#030014]"
        >
            <div class="absolute inset-0 pointer-events-none" aria-hidden="true">
                <div class="absolute inset-0 bg-gradient-to-b from-indigo-950/20 via-[#030014] to-[#030014]"></div>
                <div class="absolute w-[500px] h-[500px] -top-48 -left-48 rounded-full blur-3xl bg-indigo-600/30 animate-pulse-slow"></div>
                <div class="absolute w-[400px] h-[400px] top-1/2 -right-32 rounded-full blur-3xl bg-purple-600/20 animate-pulse-slow"></div>
                <div class="absolute w-[300px] h-[300px] bottom-0 left-1/3 rounded-full blur-3xl bg-cyan-600/20 animate-pulse-slow"></div>
            </div>

            <div class="relative z-10 w-full max-w-6xl mx-auto px-6 py-20 text-center">
                <span class="fade-in-up inline-flex items-center gap-2 px-5 py-2.5 mb-8 bg-emerald-500/10 border border-emerald-500/30 rounded-full text-emerald-400 text-sm font-semibold">
                    <span class="relative flex h-2 w-2">
                        <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-emerald-400 opacity-75"></span>
                        <span class="relative inline-flex rounded-full h-2 w-2 bg-emerald-500"></span>
                    </span>
                    {profile.availability.as_str()}
                </span>

                <p class="fade-in-up text-slate-400 text-lg md:text-xl mb-4 font-medium" style=stagger_style(1, 0.0, 0.2)>
                    "Hello, I'm"
                </p>
                <h1 class="fade-in-up text-5xl sm:text-6xl md:text-7xl lg:text-8xl font-bold mb-6 tracking-tight" style=stagger_style(2, 0.0, 0.2)>
                    <span class="bg-gradient-to-r from-white via-slate-200 to-slate-400 bg-clip-text text-transparent">
                        {profile.name.as_str()}
                    </span>
                </h1>
                <p class="fade-in-up text-xl md:text-2xl lg:text-3xl font-semibold mb-6 gradient-text" style=stagger_style(3, 0.0, 0.2)>
                    {profile.role.as_str()}
                </p>
                <p class="fade-in-up text-base md:text-lg text-slate-400 max-w-2xl mx-auto mb-10 leading-relaxed" style=stagger_style(4, 0.0, 0.2)>
                    {profile.tagline.as_str()}
                </p>

                <div class="flex flex-wrap justify-center gap-3 mb-12">
                    {portfolio
                        .tech_stack
                        .iter()
                        .enumerate()
                        .map(|(i, tech)| {
                            view! {
                                <span
                                    class="fade-in-up px-4 py-2 text-sm font-medium rounded-full bg-white/5 border border-white/10 text-slate-300 hover:border-indigo-500/50 hover:text-white transition-colors"
                                    style=stagger_style(i, 1.2, 0.1)
                                >
                                    {tech.as_str()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4 mb-16">
                    <a
                        href="#projects"
                        class="group inline-flex items-center gap-2 px-8 py-4 rounded-full font-semibold bg-gradient-to-r from-indigo-600 to-purple-600 hover:from-indigo-500 hover:to-purple-500 shadow-lg shadow-indigo-500/25 transition-all"
                    >
                        "View My Work"
                        <span class="group-hover:translate-x-1 transition-transform">"→"</span>
                    </a>
                    <a
                        href=profile.resume.as_str()
                        download=profile.resume_download_name.as_str()
                        class="inline-flex items-center gap-2 px-8 py-4 rounded-full font-semibold border border-slate-700 hover:border-indigo-500/50 hover:bg-white/5 transition-all"
                    >
                        "Download Resume"
                    </a>
                    <a
                        href="#contact"
                        class="inline-flex items-center gap-2 px-8 py-4 rounded-full font-semibold text-slate-300 hover:text-white transition-colors"
                    >
                        "Get In Touch"
                    </a>
                </div>

                <div class="grid grid-cols-3 gap-6 max-w-lg mx-auto mb-12">
                    {portfolio
                        .stats
                        .iter()
                        .map(|stat| {
                            view! {
                                <div>
                                    <div class="text-3xl md:text-4xl font-bold gradient-text">
                                        <Counter target=stat.value suffix="+" />
                                    </div>
                                    <div class="text-sm text-slate-500 mt-1">{stat.label.as_str()}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="flex justify-center">
                    <SocialLinks links=&portfolio.socials />
                </div>
            </div>

            <a
                href="#about"
                class="absolute bottom-8 left-1/2 -translate-x-1/2 text-slate-500 hover:text-white animate-bounce transition-colors"
                aria-label="Scroll to about"
            >
                "⌄"
            </a>
        </section>
    }
}
