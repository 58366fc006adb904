use leptos::prelude::*;

#[component]
pub fn OneLiner() -> impl IntoView {
    view! {
        <section class="one-liner">
            <div class="container">
                <p class="one-liner-text">
                    "We align your "
                    <span class="gradient-text blue">"audience"</span>
                    ", "
                    <span class="gradient-text pink">"message"</span>
                    ", and "
                    <span class="gradient-text green">"systems"</span>
                    " — so your next campaign is "
                    <span class="underline">"never"</span>
                    " a shot in the dark."
                </p>
            </div>
        </section>
    }
}
