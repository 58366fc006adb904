use leptos::prelude::*;

use crate::content::SERVICE_GROUPS;

#[component]
pub fn ServicesGrid() -> impl IntoView {
    view! {
        <section class="services" id="services">
            <div class="container">
                <h2 class="section-title">"What We Do"</h2>
                <p class="section-subtitle">"Minimal services. Maximum impact."</p>
                {SERVICE_GROUPS
                    .iter()
                    .map(|group| {
                        view! {
                            <div class="service-group">
                                <h3 class="service-category">{group.category}</h3>
                                <div class="service-grid">
                                    {group
                                        .services
                                        .iter()
                                        .map(|service| {
                                            view! {
                                                <div class="service-card">
                                                    <h4 class="service-title">{service.title}</h4>
                                                    <p class="service-subtitle">{service.subtitle}</p>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
