use leptos::prelude::*;

use crate::content::BRANDS;

#[component]
pub fn TrustedBy() -> impl IntoView {
    // two copies so the marquee can scroll by half its width and wrap
    let strip = BRANDS
        .iter()
        .chain(BRANDS.iter())
        .map(|brand| view! { <span class="brand-chip">{*brand}</span> })
        .collect_view();

    view! {
        <section class="trusted-by" id="work">
            <div class="container">
                <h3 class="section-title small">"Trusted By"</h3>
                <p class="section-subtitle">
                    "Leading brands who trust us to accelerate their growth"
                </p>
            </div>
            <div class="marquee">
                <div class="marquee-track">{strip}</div>
            </div>
        </section>
    }
}
