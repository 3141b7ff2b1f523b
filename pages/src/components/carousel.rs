//! Image carousel markup.
//!
//! Renders every slide with the first one active plus previous/next
//! controls and dot indicators. Navigation state lives client-side; the
//! application script (or the WASM module, when loaded) steps the index
//! with the same wrap-around arithmetic as
//! [`Carousel`](crate::types::Carousel).

use super::{Icon, ICON_CARET_LEFT, ICON_CARET_RIGHT};
use crate::types::Slide;
use leptos::prelude::*;

/// Cyclic image browser over a fixed slide list.
///
/// An empty slide list renders nothing at all, the markup-level twin of
/// [`Carousel::new`](crate::types::Carousel::new) refusing empty input.
#[component]
pub fn ImageCarousel(slides: Vec<Slide>) -> impl IntoView {
    (!slides.is_empty()).then(|| {
        let count = slides.len();
        let images = slides
            .iter()
            .enumerate()
            .map(|(idx, slide)| {
                let class = if idx == 0 {
                    "carousel-slide active"
                } else {
                    "carousel-slide"
                };
                view! {
                    <img class=class src=slide.src.clone() alt=slide.alt.clone() />
                }
            })
            .collect::<Vec<_>>();
        let dots = (0..count)
            .map(|idx| {
                let class = if idx == 0 {
                    "carousel-dot active"
                } else {
                    "carousel-dot"
                };
                let label = format!("Go to image {}", idx + 1);
                view! {
                    <button class=class data-goto=idx.to_string() aria-label=label></button>
                }
            })
            .collect::<Vec<_>>();

        view! {
            <div class="carousel" data-carousel=count.to_string()>
                <div class="carousel-viewport">
                    <button class="carousel-btn prev" data-role="carousel-prev" aria-label="Previous image">
                        <Icon path=ICON_CARET_LEFT size="24" />
                    </button>
                    {images}
                    <button class="carousel-btn next" data-role="carousel-next" aria-label="Next image">
                        <Icon path=ICON_CARET_RIGHT size="24" />
                    </button>
                </div>
                <div class="carousel-dots">
                    {dots}
                </div>
            </div>
        }
    })
}
