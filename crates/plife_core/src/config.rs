use serde::{Deserialize, Serialize};

use crate::color::ParticleColor;

/// Width of the last-cutoff sampling window above the first-cutoff lower bound
pub const LAST_CUT_SPAN: f64 = 100.0;

/// Recipe generation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeConfig {
    /// Board size in pixels (width, height)
    pub window_size: (u32, u32),
    /// Colors that receive particles and rules, in emission order
    pub colors: Vec<ParticleColor>,
    /// Particles spawned per color
    pub particles_per_color: u32,
    /// Uniform sampling bounds for friction
    pub friction_range: (f64, f64),
    /// Uniform sampling bounds for a rule's first cutoff distance
    pub first_cut_range: (f64, f64),
    /// Uniform sampling bounds for a rule's peak strength
    pub peak_range: (f64, f64),
    /// Random seed for deterministic generation; None draws a fresh one
    pub seed: Option<u64>,
}

impl Default for RecipeConfig {
    fn default() -> Self {
        Self {
            window_size: (800, 600),
            colors: vec![
                ParticleColor::Red,
                ParticleColor::Cyan,
                ParticleColor::Blue,
                ParticleColor::Green,
            ],
            particles_per_color: 1000,
            friction_range: (0.05, 0.4),
            first_cut_range: (1.0, 7.0),
            peak_range: (0.0, 1.0),
            seed: None,
        }
    }
}

impl RecipeConfig {
    /// Sampling bounds for a rule's last cutoff distance.
    /// Anchored at the lower bound of `first_cut_range` — never at the
    /// sampled first cutoff, so a rule may end up with last_cut < first_cut.
    pub fn last_cut_range(&self) -> (f64, f64) {
        (self.first_cut_range.0, self.first_cut_range.0 + LAST_CUT_SPAN)
    }

    /// Check bounds that user-supplied parameter files may violate.
    /// A config that passes here can always be sampled from.
    pub fn validate(&self) -> Result<(), String> {
        if self.colors.is_empty() {
            return Err("At least one color is required".into());
        }
        for (i, color) in self.colors.iter().enumerate() {
            if self.colors[..i].contains(color) {
                return Err(format!("Duplicate color: {color}"));
            }
        }
        let (width, height) = self.window_size;
        if width == 0 || height == 0 {
            return Err(format!("Window size must be positive, got {width}x{height}"));
        }
        let ranges = [
            ("friction", self.friction_range),
            ("first_cut", self.first_cut_range),
            ("peak", self.peak_range),
        ];
        for (name, (low, high)) in ranges {
            // NaN bounds fail this comparison as well
            if !(low <= high) {
                return Err(format!("Invalid {name} range: ({low}, {high})"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_validates() {
        assert!(RecipeConfig::default().validate().is_ok());
    }

    #[test]
    fn test_last_cut_range_derivation() {
        let mut config = RecipeConfig::default();
        assert_eq!(config.last_cut_range(), (1.0, 101.0));

        // Tracks the lower bound only; the upper bound has no influence
        config.first_cut_range = (2.5, 3.0);
        assert_eq!(config.last_cut_range(), (2.5, 102.5));
        config.first_cut_range = (2.5, 80.0);
        assert_eq!(config.last_cut_range(), (2.5, 102.5));
    }

    #[test]
    fn test_validate_rejects_empty_colors() {
        let config = RecipeConfig {
            colors: vec![],
            ..RecipeConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_colors() {
        let config = RecipeConfig {
            colors: vec![ParticleColor::Red, ParticleColor::Blue, ParticleColor::Red],
            ..RecipeConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let config = RecipeConfig {
            friction_range: (0.4, 0.05),
            ..RecipeConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_window() {
        let config = RecipeConfig {
            window_size: (800, 0),
            ..RecipeConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ron_roundtrip() {
        let config = RecipeConfig {
            seed: Some(42),
            ..RecipeConfig::default()
        };
        let text = ron::to_string(&config).unwrap();
        let back: RecipeConfig = ron::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
