use leptos::{ev, prelude::*};
use leptos_use::use_timeout_fn;

use crate::contact::{ContactForm, Field, SubmitOutcome, SubmitStatus};
use crate::content::PORTFOLIO;

use super::widgets::{SectionHeader, SectionWrapper, SocialLinks};

#[component]
pub fn Contact() -> impl IntoView {
    let profile = &PORTFOLIO.profile;
    let form = RwSignal::new(ContactForm::new(PORTFOLIO.contact_config()));
    let status = Memo::new(move |_| form.with(|f| f.status()));
    let (submit_delay, success_display) = form.with_untracked(|f| {
        let config = f.config();
        (
            config.submit_delay.as_millis() as f64,
            config.success_display.as_millis() as f64,
        )
    });

    let revert = use_timeout_fn(move |_: ()| form.update(|f| f.revert()), success_display);
    let finish = use_timeout_fn(
        move |_: ()| {
            let Some(mail) = form.try_update(|f| f.finish()).flatten() else {
                return;
            };
            log::info!("opening mail client for {}", mail.recipient);
            if let Err(e) = window().location().set_href(&mail.href()) {
                log::error!("couldn't open mail client: {e:?}");
            }
            (revert.start)(());
        },
        submit_delay,
    );

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match form.try_update(|f| f.submit()) {
            Some(SubmitOutcome::Started) => (finish.start)(()),
            Some(SubmitOutcome::Invalid) => {
                let count = form.with_untracked(|f| f.errors().len());
                log::debug!("contact form has {count} invalid field(s)");
            }
            _ => {}
        }
    };

    view! {
        <SectionWrapper id="contact" dark=true>
            <SectionHeader
                label="Get In Touch"
                title="Let's Work Together"
                description="Have a project in mind or just want to say hello? My inbox is always open."
            />

            <div class="grid lg:grid-cols-5 gap-12">
                <div class="lg:col-span-2 space-y-6 fade-in-up">
                    <div class="p-8 rounded-3xl border border-slate-800 bg-slate-900/50">
                        <h3 class="text-xl font-bold mb-6">"Contact Information"</h3>
                        <a
                            href=format!("mailto:{}", profile.email)
                            class="flex items-center gap-4 mb-5 group"
                        >
                            <span class="w-12 h-12 rounded-xl flex items-center justify-center bg-indigo-500/10 text-indigo-400 group-hover:bg-indigo-500/20 transition-colors">
                                "✉"
                            </span>
                            <span>
                                <span class="block text-xs text-slate-500">"Email"</span>
                                <span class="text-slate-200 group-hover:text-white">{profile.email.as_str()}</span>
                            </span>
                        </a>
                        <div class="flex items-center gap-4">
                            <span class="w-12 h-12 rounded-xl flex items-center justify-center bg-purple-500/10 text-purple-400">
                                "📍"
                            </span>
                            <span>
                                <span class="block text-xs text-slate-500">"Location"</span>
                                <span class="text-slate-200">{profile.location.as_str()}</span>
                            </span>
                        </div>
                    </div>
                    <div class="p-8 rounded-3xl border border-slate-800 bg-slate-900/50">
                        <h3 class="text-lg font-semibold mb-4">"Find me online"</h3>
                        <SocialLinks links=&PORTFOLIO.socials />
                    </div>
                </div>

                <form
                    class="lg:col-span-3 p-8 rounded-3xl border border-slate-800 bg-slate-900/50 space-y-6 fade-in-up"
                    novalidate=true
                    on:submit=on_submit
                >
                    <FormField form=form field=Field::Name input_type="text" placeholder="Your name" />
                    <FormField
                        form=form
                        field=Field::Email
                        input_type="email"
                        placeholder="you@example.com"
                    />
                    <FormField
                        form=form
                        field=Field::Message
                        input_type="textarea"
                        placeholder="Tell me about your project..."
                    />

                    <button
                        type="submit"
                        disabled=move || status.get() != SubmitStatus::Idle
                        class=move || {
                            let state = match status.get() {
                                SubmitStatus::Success => "bg-emerald-600",
                                _ => "bg-gradient-to-r from-indigo-600 to-purple-600 hover:from-indigo-500 hover:to-purple-500",
                            };
                            format!(
                                "w-full py-4 rounded-2xl font-semibold transition-all disabled:cursor-not-allowed {state}",
                            )
                        }
                    >
                        {move || match status.get() {
                            SubmitStatus::Idle => "Send Message",
                            SubmitStatus::Submitting => "Sending...",
                            SubmitStatus::Success => "✓ Message Sent!",
                        }}
                    </button>
                </form>
            </div>
        </SectionWrapper>
    }
}

/// Labeled input bound to one form field, with its inline error.
#[component]
fn FormField(
    form: RwSignal<ContactForm>,
    field: Field,
    input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let (focused, set_focused) = signal(false);
    let error = Memo::new(move |_| form.with(|f| f.errors().message(field)));
    let value = move || form.with(|f| f.data().get(field).to_string());
    let on_input = move |ev: ev::Event| form.update(|f| f.edit(field, event_target_value(&ev)));

    let class = move || {
        let border = if error.with(Option::is_some) {
            "border-rose-500/60 focus:border-rose-400"
        } else if focused.get() {
            "border-indigo-500/60 shadow-lg shadow-indigo-500/10"
        } else {
            "border-slate-700 hover:border-slate-600"
        };
        format!(
            "w-full px-5 py-4 bg-slate-800/30 border rounded-2xl text-white placeholder-slate-500 focus:outline-none transition-all duration-300 {border}",
        )
    };
    let id = format!("contact-{}", field.as_str());

    let input = if input_type == "textarea" {
        view! {
            <textarea
                id=id.clone()
                name=field.as_str()
                rows="5"
                placeholder=placeholder
                class=move || format!("{} resize-none", class())
                prop:value=value
                on:input=on_input
                on:focus=move |_| set_focused.set(true)
                on:blur=move |_| set_focused.set(false)
            ></textarea>
        }
            .into_any()
    } else {
        view! {
            <input
                id=id.clone()
                name=field.as_str()
                type=input_type
                placeholder=placeholder
                class=class
                prop:value=value
                on:input=on_input
                on:focus=move |_| set_focused.set(true)
                on:blur=move |_| set_focused.set(false)
            />
        }
            .into_any()
    };

    view! {
        <div>
            <label for=id class="block text-sm font-medium text-slate-300 mb-2">
                {field.label()}
            </label>
            {input}
            {move || {
                error
                    .get()
                    .map(|message| {
                        view! { <p class="mt-2 text-sm text-rose-400" role="alert">{message}</p> }
                    })
            }}
        </div>
    }
}
