// Landing page sections

use leptos::ev;
use leptos::prelude::*;

mod faq;
mod final_cta;
mod header;
mod hero;
mod one_liner;
mod reviews;
mod services_grid;
mod splash;
mod three_moves;
mod trusted_by;

pub use faq::Faq;
pub use final_cta::FinalCta;
pub use header::Header;
pub use hero::Hero;
pub use one_liner::OneLiner;
pub use reviews::Reviews;
pub use services_grid::ServicesGrid;
pub use splash::SplashScreen;
pub use three_moves::ThreeMoves;
pub use trusted_by::TrustedBy;

/// Window scroll position as a signal, listener removed on unmount.
fn use_scroll_y() -> ReadSignal<f64> {
    let read = || window().scroll_y().unwrap_or(0.0);
    let (scroll_y, set_scroll_y) = signal(read());
    let handle = window_event_listener(ev::scroll, move |_| set_scroll_y.set(read()));
    on_cleanup(move || handle.remove());
    scroll_y
}
