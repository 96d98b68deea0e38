use leptos::{ev, html, prelude::*};
use wasm_bindgen::JsCast;

use crate::modal::{cycle_focus, ModalSelection, FOCUSABLE};

use super::certifications::CertificateDetail;
use super::page::PageContext;
use super::projects::ProjectDetail;

/// Keeps Tab and Shift+Tab inside `dialog`.
fn trap_focus(dialog: &web_sys::HtmlElement, ev: &ev::KeyboardEvent) {
    let Ok(nodes) = dialog.query_selector_all(FOCUSABLE) else {
        return;
    };
    let focusable: Vec<web_sys::HtmlElement> = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .collect();
    let active = document().active_element();
    let current = active.and_then(|active| {
        focusable.iter().position(|el| {
            let el: &web_sys::Element = el.as_ref();
            *el == active
        })
    });

    ev.prevent_default();
    if let Some(next) = cycle_focus(current, focusable.len(), ev.shift_key()) {
        _ = focusable[next].focus();
    }
}

/// Overlay for the selected certificate or project. Backdrop click, the close
/// button and Escape all dismiss it; Tab cycles within it.
#[component]
pub fn DetailModal() -> impl IntoView {
    let ctx = expect_context::<PageContext>();
    let selection = Memo::new(move |_| ctx.modal.with(|m| m.selection().copied()));
    let close_ref = NodeRef::<html::Button>::new();
    let dialog_ref = NodeRef::<html::Div>::new();

    let close = move || ctx.close_modal();

    Effect::new(move |_| {
        if selection.get().is_some() {
            if let Some(button) = close_ref.get() {
                _ = button.focus();
            }
        }
    });

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() != "Tab" {
            return;
        }
        if let Some(dialog) = dialog_ref.get() {
            trap_focus(&dialog, &ev);
        }
    };

    move || {
        selection.get().map(|selected| {
            let body = match selected {
                ModalSelection::Certificate(cert) => {
                    view! { <CertificateDetail cert=cert /> }.into_any()
                }
                ModalSelection::Project(project) => {
                    view! { <ProjectDetail project=project /> }.into_any()
                }
            };
            view! {
                <div
                    class="fixed inset-0 z-[60] flex items-center justify-center p-4 bg-black/70 backdrop-blur-sm fade-in"
                    on:click=move |_| close()
                >
                    <div
                        node_ref=dialog_ref
                        class="relative w-full max-w-2xl max-h-[90vh] overflow-y-auto rounded-3xl border border-slate-800 bg-slate-900 p-8 shadow-2xl scale-in"
                        role="dialog"
                        aria-modal="true"
                        aria-label=selected.title()
                        on:click=|ev| ev.stop_propagation()
                        on:keydown=on_keydown
                    >
                        <div class="flex items-start justify-between gap-4 mb-6">
                            <h3 class="text-2xl font-bold">{selected.title()}</h3>
                            <button
                                node_ref=close_ref
                                class="shrink-0 w-10 h-10 rounded-full flex items-center justify-center text-slate-400 hover:text-white hover:bg-white/10 transition-colors"
                                aria-label="Close"
                                on:click=move |_| close()
                            >
                                "✕"
                            </button>
                        </div>
                        {body}
                    </div>
                </div>
            }
        })
    }
}
