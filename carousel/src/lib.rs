//! # omw-carousel
//!
//! Testimonial carousel engine for the OMW landing page.
//!
//! The carousel shows a finite list of testimonials as an endless strip. It
//! lays three copies of the list end to end, walks an index across them, and
//! silently rewinds into the middle copy so that the viewer only ever sees
//! forward motion.
//!
//! ## Features
//!
//! - **Sans-IO core** - [`Carousel`] takes the time as an argument and never
//!   reads a clock, so it runs unchanged in the browser and under test
//! - **Autoplay** - one card every 4 s, paused on hover, fresh interval on resume
//! - **Drag** - release past a third of a card to step, elastic past the ends
//! - **Exact offsets** - `-(index) × card_width` from the integer, every time
//! - **Tokio driver** (feature `runtime`) - a single task owning the carousel
//!
//! ## Quick Start
//!
//! ```rust
//! use omw_carousel::{Carousel, CarouselConfig, ItemRepository};
//!
//! let json = r#"[
//!     {"id": 1, "name": "Sarah", "company": "TechVision", "quote": "Revenue up 40%.", "photo": "a.jpg"},
//!     {"id": 2, "name": "Marcus", "company": "GrowthWorks", "quote": "Predictable pipeline.", "photo": "b.jpg"}
//! ]"#;
//! let repo = ItemRepository::from_json_str(json).unwrap();
//! let mut carousel = Carousel::new(repo, &CarouselConfig::default(), 0).unwrap();
//!
//! carousel.tick(4000);
//! assert_eq!(carousel.current_index(), 1);
//! assert_eq!(carousel.offset(), -380.0);
//! ```
//!
//! ## Architecture
//!
//! - [`repository`] - static records and the tripled sequence
//! - [`state`] - the authoritative index and silent rewinds
//! - [`scheduler`] - autoplay timer with pause/resume
//! - [`gesture`] - drag release decisions and elastic drag offset
//! - [`role`] / [`position`] - pure per-render readers
//! - [`spring`] - spring animator used by renderers
//! - [`carousel`] - the facade tying it together
//! - `runtime` - tokio driver (feature `runtime`)

pub mod carousel;
pub mod config;
pub mod error;
pub mod gesture;
pub mod position;
pub mod repository;
pub mod role;
#[cfg(feature = "runtime")]
pub mod runtime;
pub mod scheduler;
pub mod spring;
pub mod state;

pub use carousel::{Carousel, CarouselSnapshot};
pub use config::CarouselConfig;
pub use error::{CarouselError, Result};
pub use gesture::StepDecision;
pub use repository::{ItemRepository, LoopedItem, TestimonialRecord};
pub use role::Role;
pub use scheduler::AutoplayState;
pub use spring::{Spring, SpringConfig};
pub use state::{Motion, Transition, Update};
