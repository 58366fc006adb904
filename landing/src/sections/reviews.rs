//! Reviews section: the looping testimonial carousel.
//!
//! The [`Carousel`] lives in one signal and is the only source of truth for
//! the index. A [`Spring`] in a second signal is what actually gets drawn;
//! it chases the carousel offset every animation frame and reports back
//! through `settle()` once it comes to rest.

use leptos::prelude::*;
use omw_carousel::Update as CarouselUpdate;
use omw_carousel::{Carousel, CarouselConfig, LoopedItem, Role, Spring, SpringConfig};
use wasm_bindgen::JsCast;

use crate::content;
use crate::motion::{self, AUTOPLAY_POLL, Emphasis};

fn perf_now() -> f64 {
    window()
        .performance()
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

fn now_ms() -> u64 {
    perf_now() as u64
}

#[component]
pub fn Reviews() -> impl IntoView {
    let config = CarouselConfig::default();
    let carousel = content::testimonials()
        .and_then(|repository| Carousel::new(repository, &config, now_ms()));
    let carousel = match carousel {
        Ok(carousel) => Some(carousel),
        Err(e) => {
            web_sys::console::error_1(&format!("[omw] reviews disabled: {e}").into());
            None
        }
    };

    view! {
        <section class="reviews" id="reviews">
            <div class="container">
                <h2 class="section-title">"Real wins, fast."</h2>
                <div class="title-rule"></div>
            </div>
            {carousel.map(|carousel| {
                view! { <TestimonialCarousel carousel=carousel spring=config.spring /> }
            })}
        </section>
    }
}

/// Run a carousel mutation and bring the spring along.
fn dispatch(
    carousel: RwSignal<Carousel>,
    spring: RwSignal<Spring>,
    mutate: impl FnOnce(&mut Carousel) -> CarouselUpdate,
) {
    let applied = carousel.try_update(|c| {
        let update = mutate(c);
        (update, c.offset(), c.is_dragging(), c.card_width())
    });
    if let Some((update, offset, dragging, card_width)) = applied {
        spring.update(|s| motion::follow(s, &update, offset, dragging, card_width));
    }
}

/// One animation frame; reschedules itself until the component is disposed.
fn animate(carousel: RwSignal<Carousel>, spring: RwSignal<Spring>, last: f64) {
    let Some(dragging) = carousel.try_with_untracked(Carousel::is_dragging) else {
        return;
    };
    let now = perf_now();

    if !dragging && !spring.with_untracked(Spring::is_settled) {
        let dt = ((now - last) / 1000.0).max(0.0);
        spring.update(|s| {
            s.step(dt);
        });
    }
    let rest = !dragging && spring.with_untracked(Spring::is_settled);
    if rest && carousel.with_untracked(|c| c.pending_rewind().is_some()) {
        dispatch(carousel, spring, Carousel::settle);
    }

    request_animation_frame(move || animate(carousel, spring, now));
}

#[component]
fn TestimonialCarousel(carousel: Carousel, spring: SpringConfig) -> impl IntoView {
    let base_len = carousel.repository().len();
    let items: Vec<LoopedItem> = carousel.repository().looped().iter().cloned().collect();
    let spring = RwSignal::new(Spring::new(spring, carousel.offset()));
    let carousel = RwSignal::new(carousel);
    let drag_origin = StoredValue::new(None::<f64>);

    // autoplay
    let poll = move || {
        let now = now_ms();
        let due = carousel
            .try_with_untracked(|c| c.next_deadline().is_some_and(|deadline| now >= deadline))
            .unwrap_or(false);
        if due {
            dispatch(carousel, spring, |c| c.tick(now));
        }
    };
    match set_interval_with_handle(poll, AUTOPLAY_POLL) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => web_sys::console::error_1(&e),
    }
    on_cleanup(move || {
        carousel.try_update(Carousel::teardown);
    });

    request_animation_frame(move || animate(carousel, spring, perf_now()));

    let end_drag = move |client_x: Option<f64>| {
        let Some(origin) = drag_origin.get_value() else {
            return;
        };
        drag_origin.set_value(None);
        let dx = client_x.map_or(0.0, |x| x - origin);
        dispatch(carousel, spring, |c| c.on_drag_end(dx));
    };

    let on_pointer_down = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        if let Some(target) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        {
            if let Err(e) = target.set_pointer_capture(ev.pointer_id()) {
                web_sys::console::warn_1(&e);
            }
        }
        drag_origin.set_value(Some(ev.client_x() as f64));
        let anchor = spring.with_untracked(Spring::position);
        carousel.update(|c| c.on_drag_start_at(anchor));
    };

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        let Some(origin) = drag_origin.get_value() else {
            return;
        };
        let dx = ev.client_x() as f64 - origin;
        if let Some(offset) = carousel.try_update(|c| {
            c.on_drag_move(dx);
            c.visual_offset()
        }) {
            spring.update(|s| s.snap_to(offset));
        }
    };

    let on_key_down = move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "ArrowLeft" => {
            ev.prevent_default();
            dispatch(carousel, spring, Carousel::navigate_left);
        }
        "ArrowRight" => {
            ev.prevent_default();
            dispatch(carousel, spring, Carousel::navigate_right);
        }
        _ => {}
    };

    let cards = items
        .into_iter()
        .map(|item| {
            let index = item.index;
            let record = item.record.clone();
            let role = move || carousel.with(|c| c.role(index));
            view! {
                <div
                    class="review-slot"
                    data-key=item.key()
                    style=move || Emphasis::for_role(role()).style()
                >
                    <div class=move || {
                        if role() == Role::Current { "review-card current" } else { "review-card" }
                    }>
                        <div class="review-photo">
                            <img src=record.photo.clone() alt=record.name.clone() draggable="false" />
                        </div>
                        <p class="review-quote">{format!("\u{201c}{}\u{201d}", record.quote)}</p>
                        <div class="review-name">{record.name.clone()}</div>
                        <div class="review-company">{record.company.clone()}</div>
                    </div>
                </div>
            }
        })
        .collect_view();

    let dots = (0..base_len)
        .map(|dot| {
            view! {
                <button
                    class=move || {
                        if carousel.with(|c| c.progress_dot_index()) == dot { "dot active" } else { "dot" }
                    }
                    aria-label=format!("Go to testimonial {}", dot + 1)
                    on:click=move |_| dispatch(carousel, spring, move |c| c.go_to_slide(dot))
                ></button>
            }
        })
        .collect_view();

    view! {
        <div
            class="carousel"
            on:mouseenter=move |_| carousel.update(Carousel::pause)
            on:mouseleave=move |_| carousel.update(|c| c.resume(now_ms()))
        >
            <button
                class="carousel-arrow left"
                aria-label="Previous testimonial"
                disabled=move || !carousel.with(Carousel::can_navigate_left)
                on:click=move |_| dispatch(carousel, spring, Carousel::navigate_left)
            >
                "‹"
            </button>
            <button
                class="carousel-arrow right"
                aria-label="Next testimonial"
                disabled=move || !carousel.with(Carousel::can_navigate_right)
                on:click=move |_| dispatch(carousel, spring, Carousel::navigate_right)
            >
                "›"
            </button>
            <div class="carousel-mask left"></div>
            <div class="carousel-mask right"></div>
            <div
                class=move || {
                    if carousel.with(Carousel::is_paused) { "carousel-viewport grab" } else { "carousel-viewport" }
                }
                tabindex="0"
                role="region"
                aria-roledescription="carousel"
                aria-label="Testimonials"
                on:keydown=on_key_down
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=move |ev: web_sys::PointerEvent| end_drag(Some(ev.client_x() as f64))
                on:pointercancel=move |_| end_drag(None)
            >
                <div
                    class=move || {
                        if carousel.with(Carousel::is_dragging) { "carousel-strip dragging" } else { "carousel-strip" }
                    }
                    style=move || motion::strip_style(spring.with(Spring::position))
                >
                    {cards}
                </div>
            </div>
            <div class="carousel-dots">{dots}</div>
            <p class="carousel-hint">"Drag to scroll • Hover to pause"</p>
        </div>
    }
}
