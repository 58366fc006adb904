use leptos::prelude::*;

use super::use_scroll_y;
use crate::content::{CTA_LABEL, METRICS};
use crate::motion::parallax;

#[component]
pub fn Hero() -> impl IntoView {
    let scroll_y = use_scroll_y();

    let cards = METRICS
        .iter()
        .enumerate()
        .map(|(i, metric)| {
            let style = move || {
                format!(
                    "transform: translateY({}px);",
                    parallax(scroll_y.get(), metric.travel)
                )
            };
            view! {
                <div class=format!("metric-card metric-card-{i}") style=style>
                    <div class="metric-value">{metric.value}</div>
                    <div class="metric-caption">{metric.caption}</div>
                    <div class="metric-label">{metric.label}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="hero" id="home">
            <div class="container hero-grid">
                <div class="hero-content">
                    <h1 class="hero-title">
                        "Make Growth Feel "
                        <span class="gradient-text">"Inevitable"</span>
                        "."
                    </h1>
                    <p class="hero-description">
                        "Precision targeting. AI-driven performance. "
                        <span class="hero-emphasis">"A growth engine built for scale."</span>
                    </p>
                    <a href="#contact" class="btn btn-primary btn-large">
                        {CTA_LABEL}
                        <span class="btn-arrow">"→"</span>
                    </a>
                </div>
                <div class="hero-cards">{cards}</div>
            </div>
        </section>
    }
}
