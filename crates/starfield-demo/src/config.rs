use anyhow::{ensure, Result};
use starfield_engine::coords::Viewport;

use crate::starfield::SpeedRange;

/// Tunables for the starfield demo.
#[derive(Debug, Clone, PartialEq)]
pub struct StarfieldConfig {
    /// Logical resolution all geometry is expressed in.
    pub logical_size: Viewport,
    pub point_count: usize,
    /// Point speed range in logical pixels per second (inclusive).
    pub speed: SpeedRange,
    /// Half-width/height of the ship triangle.
    pub ship_size: f32,
    pub glow_radius: u32,
    pub glow_rgb: [u8; 3],
    /// Alpha modulation applied to every glow blit (`0` = invisible).
    pub glow_alpha_mod: u8,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            logical_size: Viewport::new(640.0, 480.0),
            point_count: 500,
            speed: SpeedRange::new(30.0, 960.0),
            ship_size: 20.0,
            glow_radius: 40,
            glow_rgb: [255, 255, 200],
            glow_alpha_mod: 40,
        }
    }
}

impl StarfieldConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.logical_size.is_valid(),
            "logical size must be positive, got {}x{}",
            self.logical_size.width,
            self.logical_size.height
        );
        ensure!(
            self.speed.min.is_finite() && self.speed.max.is_finite() && self.speed.min >= 0.0,
            "speed range must be finite and non-negative"
        );
        ensure!(
            self.speed.min <= self.speed.max,
            "speed range is inverted: [{}, {}]",
            self.speed.min,
            self.speed.max
        );
        ensure!(
            self.ship_size.is_finite() && self.ship_size > 0.0,
            "ship size must be positive"
        );
        ensure!(self.glow_radius > 0, "glow radius must be positive");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = StarfieldConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.point_count, 500);
        assert_eq!(config.speed, SpeedRange::new(30.0, 960.0));
    }

    #[test]
    fn rejects_degenerate_logical_size() {
        let config = StarfieldConfig {
            logical_size: Viewport::new(0.0, 480.0),
            ..StarfieldConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_inverted_speed_range() {
        let config = StarfieldConfig {
            speed: SpeedRange::new(960.0, 30.0),
            ..StarfieldConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("inverted"));
    }

    #[test]
    fn rejects_zero_glow_radius() {
        let config = StarfieldConfig { glow_radius: 0, ..StarfieldConfig::default() };
        assert!(config.validate().is_err());
    }
}
