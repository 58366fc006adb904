use leptos::prelude::*;

use crate::content::MOVES;

#[component]
pub fn ThreeMoves() -> impl IntoView {
    view! {
        <section class="three-moves" id="process">
            <div class="container">
                <h2 class="section-title">"The Three Moves"</h2>
                <div class="moves-grid">
                    {MOVES
                        .iter()
                        .enumerate()
                        .map(|(i, step)| {
                            view! {
                                <article class="move-card">
                                    <span class="move-number">{format!("0{}", i + 1)}</span>
                                    <h3 class="move-title">{step.title}</h3>
                                    <p class="move-description">{step.description}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
