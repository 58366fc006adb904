use leptos::prelude::*;

use super::use_scroll_y;
use crate::content::{CTA_LABEL, NAV_LINKS};
use crate::motion::is_scrolled;

#[component]
pub fn Header() -> impl IntoView {
    let scroll_y = use_scroll_y();
    let (menu_open, set_menu_open) = signal(false);

    let links = move || {
        NAV_LINKS
            .iter()
            .map(|link| {
                view! {
                    <a
                        href=link.href
                        class="nav-link"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        {link.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class=move || if is_scrolled(scroll_y.get()) { "header scrolled" } else { "header" }>
            <div class="header-inner">
                <a href="#" class="brand">"OMW"</a>
                <nav class="nav-links">{links}</nav>
                <a href="#contact" class="btn btn-primary nav-cta">{CTA_LABEL}</a>
                <button
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <nav class="mobile-menu">{links}</nav>
            </Show>
        </header>
    }
}
