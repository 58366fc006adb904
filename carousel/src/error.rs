//! Error type for content and configuration loading.
//!
//! The carousel state machine itself never fails: every index is clamped.
//! Errors only surface while turning static configuration into a
//! [`crate::Carousel`].

use std::path::PathBuf;

/// Errors raised while building a carousel from configuration.
#[derive(Debug, thiserror::Error)]
pub enum CarouselError {
    /// The testimonial list is empty; there is nothing to loop over.
    #[error("testimonial list is empty; the carousel needs at least one record")]
    EmptyRepository,
    /// Two records share the same id.
    #[error("duplicate testimonial id {0}")]
    DuplicateId(u32),
    /// A configuration value is out of range.
    #[error("invalid carousel config: {0}")]
    InvalidConfig(String),
    /// A content or config file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path that failed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
    /// Testimonial JSON did not parse.
    #[error("failed to parse testimonials: {0}")]
    Json(#[from] serde_json::Error),
    /// Carousel TOML config did not parse.
    #[error("failed to parse carousel config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CarouselError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        assert!(
            CarouselError::EmptyRepository
                .to_string()
                .contains("empty")
        );
        assert_eq!(
            CarouselError::DuplicateId(7).to_string(),
            "duplicate testimonial id 7"
        );

        let io = CarouselError::Io {
            path: PathBuf::from("content/testimonials.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let msg = io.to_string();
        assert!(msg.contains("content/testimonials.json"));
        assert!(msg.contains("gone"));
    }
}
