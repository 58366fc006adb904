use leptos::prelude::*;

use crate::content::FAQS;

/// At most one open item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    /// First item open.
    pub fn new() -> Self {
        Self { open: Some(0) }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Open `index`, or close it if it is already open.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.is_open(index) { None } else { Some(index) };
    }
}

impl Default for Accordion {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn Faq() -> impl IntoView {
    let accordion = RwSignal::new(Accordion::new());

    view! {
        <section class="faq" id="faq">
            <div class="container narrow">
                <h2 class="section-title">"FAQ"</h2>
                <p class="section-subtitle">"Quick answers to common questions"</p>
                <div class="faq-list">
                    {FAQS
                        .iter()
                        .enumerate()
                        .map(|(i, item)| {
                            let open = move || accordion.with(|a| a.is_open(i));
                            view! {
                                <div class=move || if open() { "faq-item open" } else { "faq-item" }>
                                    <button
                                        class="faq-question"
                                        aria-expanded=move || open().to_string()
                                        on:click=move |_| accordion.update(|a| a.toggle(i))
                                    >
                                        <span>{item.question}</span>
                                        <span class="faq-icon">{move || if open() { "−" } else { "+" }}</span>
                                    </button>
                                    <Show when=open>
                                        <p class="faq-answer">{item.answer}</p>
                                    </Show>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
