// OMW landing page, Leptos 0.8 CSR

mod content;
mod motion;
mod sections;

use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let (ready, set_ready) = signal(false);
    set_timeout(move || set_ready.set(true), motion::SPLASH_DURATION);

    view! {
        <Show when=move || ready.get() fallback=|| view! { <SplashScreen /> }>
            <Header />
            <main class="page">
                <Hero />
                <OneLiner />
                <ThreeMoves />
                <ServicesGrid />
                <Reviews />
                <TrustedBy />
                <FinalCta />
                <Faq />
            </main>
        </Show>
    }
}
