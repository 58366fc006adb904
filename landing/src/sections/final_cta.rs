use leptos::prelude::*;

use crate::content::CTA_LABEL;

#[component]
pub fn FinalCta() -> impl IntoView {
    view! {
        <section class="final-cta" id="contact">
            <div class="container final-cta-inner">
                <h2 class="final-cta-title">
                    "Ready to make growth "
                    <span class="gradient-text">"inevitable"</span>
                    "?"
                </h2>
                <a href="mailto:hello@omw.agency" class="btn btn-primary btn-large">
                    {CTA_LABEL}
                    <span class="btn-arrow">"→"</span>
                </a>
            </div>
        </section>
    }
}
