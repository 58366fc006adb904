use leptos::prelude::*;

#[component]
pub fn SplashScreen() -> impl IntoView {
    view! {
        <div class="splash" role="presentation">
            <div class="splash-ripple"></div>
            <div class="splash-logo">
                <span class="splash-mark">"OMW"</span>
                <div class="splash-glow"></div>
            </div>
            <div class="splash-bar"></div>
        </div>
    }
}
