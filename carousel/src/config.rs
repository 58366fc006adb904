//! Carousel tuning loaded from an optional TOML file.
//!
//! Every field has a default, so an empty file (or no file) gives the
//! stock landing-page behaviour.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CarouselError, Result};
use crate::spring::SpringConfig;

/// Root configuration structure
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Autoplay cadence in milliseconds
    pub autoplay_interval_ms: u64,
    /// Card width plus gap, in pixels
    pub card_width: f64,
    /// Fraction of the pointer overshoot applied past the ends of the strip
    pub drag_elastic: f64,
    pub spring: SpringConfig,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: crate::scheduler::DEFAULT_INTERVAL.as_millis() as u64,
            card_width: 380.0,
            drag_elastic: 0.1,
            spring: SpringConfig::default(),
        }
    }
}

impl CarouselConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file. Any failure is an error.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CarouselError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load a config file, falling back to defaults.
    ///
    /// A missing file is silent; an unreadable or invalid one is logged.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_path(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "using default carousel config");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.autoplay_interval_ms == 0 {
            return Err(invalid("autoplay_interval_ms must be greater than 0"));
        }
        if !(self.card_width.is_finite() && self.card_width > 0.0) {
            return Err(invalid("card_width must be a positive number"));
        }
        if !(0.0..=1.0).contains(&self.drag_elastic) {
            return Err(invalid("drag_elastic must be within [0, 1]"));
        }
        let SpringConfig {
            stiffness,
            damping,
            mass,
        } = self.spring;
        for (name, value) in [("stiffness", stiffness), ("damping", damping), ("mass", mass)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(&format!("spring.{name} must be a positive number")));
            }
        }
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }
}

fn invalid(msg: &str) -> CarouselError {
    CarouselError::InvalidConfig(msg.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_the_landing_page() {
        let config = CarouselConfig::default();
        assert_eq!(config.autoplay_interval_ms, 4000);
        assert_eq!(config.card_width, 380.0);
        assert_eq!(config.drag_elastic, 0.1);
        assert_eq!(config.spring.stiffness, 200.0);
        assert_eq!(config.spring.damping, 30.0);
        assert_eq!(config.spring.mass, 0.8);
        assert_eq!(config.interval(), Duration::from_secs(4));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = CarouselConfig::from_toml_str(
            r#"
card_width = 360.0

[spring]
damping = 25.0
"#,
        )
        .expect("parse");
        assert_eq!(config.card_width, 360.0);
        assert_eq!(config.autoplay_interval_ms, 4000);
        assert_eq!(config.spring.damping, 25.0);
        assert_eq!(config.spring.stiffness, 200.0);
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(
            CarouselConfig::from_toml_str("").expect("parse"),
            CarouselConfig::default()
        );
    }

    #[test]
    fn invalid_values_are_rejected() {
        for toml in [
            "autoplay_interval_ms = 0",
            "card_width = -1.0",
            "card_width = 0.0",
            "drag_elastic = 1.5",
            "[spring]\nmass = 0.0",
        ] {
            let err = CarouselConfig::from_toml_str(toml).expect_err(toml);
            assert!(matches!(err, CarouselError::InvalidConfig(_)), "{toml}: {err}");
        }
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = CarouselConfig::from_toml_str("card_width = \"wide\"").expect_err("type");
        assert!(matches!(err, CarouselError::Toml(_)));
    }

    #[test]
    fn load_from_path_reads_file() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("carousel.toml");
        let mut file = std::fs::File::create(&path).expect("create config");
        writeln!(file, "autoplay_interval_ms = 2500").expect("write config");

        let config = CarouselConfig::load_from_path(&path).expect("load");
        assert_eq!(config.interval(), Duration::from_millis(2500));
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let temp = TempDir::new().expect("temp dir");
        let err = CarouselConfig::load_from_path(&temp.path().join("nope.toml"))
            .expect_err("missing");
        assert!(matches!(err, CarouselError::Io { .. }));
    }

    #[test]
    fn load_or_default_falls_back() {
        let temp = TempDir::new().expect("temp dir");
        let missing = temp.path().join("missing.toml");
        assert_eq!(
            CarouselConfig::load_or_default(&missing),
            CarouselConfig::default()
        );

        let broken = temp.path().join("broken.toml");
        std::fs::write(&broken, "drag_elastic = 7.0").expect("write config");
        assert_eq!(
            CarouselConfig::load_or_default(&broken),
            CarouselConfig::default()
        );
    }
}
