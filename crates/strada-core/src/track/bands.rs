// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Lane bands and the ground color palette.
//!
//! The ground has no texture. Its look comes entirely from per-vertex colors:
//! the world X coordinate picks a lane band, and the world Z coordinate picks
//! one of that band's two shades, switching every [`BAND_PERIOD`] units.

use crate::math::LinearRgba;

/// Distance along Z, in world units, covered by one shade before it alternates.
pub const BAND_PERIOD: i32 = 32;

/// One of the fixed world-X intervals of the ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaneBand {
    /// The dashed line in the middle of each half of the road, `16 < |x| < 24`.
    CenterStripe,
    /// The asphalt, `|x| < 64` outside of the center stripe.
    Road,
    /// The red and white curb along the road edge, `64 <= |x| < 80`.
    ShoulderStripe,
    /// Everything beyond the curb.
    Grass,
}

/// Which of a band's two colors applies at a given depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shade {
    Dark,
    Light,
}

/// The pair of colors a [`LaneBand`] alternates between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandShades {
    pub dark: LinearRgba,
    pub light: LinearRgba,
}

const CENTER_STRIPE_SHADES: BandShades = BandShades {
    dark: LinearRgba::rgb(0.4, 0.4, 0.4),
    light: LinearRgba::rgb(1.0, 1.0, 1.0),
};

const ROAD_SHADES: BandShades = BandShades {
    dark: LinearRgba::rgb(0.4, 0.4, 0.4),
    light: LinearRgba::rgb(0.6, 0.6, 0.6),
};

const SHOULDER_STRIPE_SHADES: BandShades = BandShades {
    dark: LinearRgba::rgb(1.0, 0.0, 0.0),
    light: LinearRgba::rgb(1.0, 1.0, 1.0),
};

const GRASS_SHADES: BandShades = BandShades {
    dark: LinearRgba::rgb(0.0, 0.6, 0.0),
    light: LinearRgba::rgb(0.0, 0.8, 0.0),
};

impl LaneBand {
    /// Classifies a world X coordinate. Only the distance from the center line matters.
    pub fn classify(world_x: f32) -> Self {
        let abs_x = world_x.abs();
        if abs_x > 16.0 && abs_x < 24.0 {
            Self::CenterStripe
        } else if abs_x < 64.0 {
            Self::Road
        } else if abs_x < 80.0 {
            Self::ShoulderStripe
        } else {
            Self::Grass
        }
    }

    /// Returns the two colors of this band.
    pub const fn shades(self) -> BandShades {
        match self {
            Self::CenterStripe => CENTER_STRIPE_SHADES,
            Self::Road => ROAD_SHADES,
            Self::ShoulderStripe => SHOULDER_STRIPE_SHADES,
            Self::Grass => GRASS_SHADES,
        }
    }
}

impl Shade {
    /// Picks the shade for a world Z coordinate.
    ///
    /// The coordinate is truncated toward zero first, so the band boundaries sit
    /// on whole units and the pattern mirrors around `z = 0`.
    pub fn for_depth(world_z: f32) -> Self {
        let depth = (world_z as i32).abs();
        if (depth / BAND_PERIOD) % 2 == 0 {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

impl BandShades {
    /// Returns the color for `shade`.
    pub const fn pick(&self, shade: Shade) -> LinearRgba {
        match shade {
            Shade::Dark => self.dark,
            Shade::Light => self.light,
        }
    }
}

/// Returns the ground color at a world-space position.
pub fn ground_color(world_x: f32, world_z: f32) -> LinearRgba {
    LaneBand::classify(world_x)
        .shades()
        .pick(Shade::for_depth(world_z))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries_are_strict() {
        assert_eq!(LaneBand::classify(0.0), LaneBand::Road);
        assert_eq!(LaneBand::classify(16.0), LaneBand::Road);
        assert_eq!(LaneBand::classify(16.5), LaneBand::CenterStripe);
        assert_eq!(LaneBand::classify(23.9), LaneBand::CenterStripe);
        assert_eq!(LaneBand::classify(24.0), LaneBand::Road);
        assert_eq!(LaneBand::classify(63.9), LaneBand::Road);
        assert_eq!(LaneBand::classify(64.0), LaneBand::ShoulderStripe);
        assert_eq!(LaneBand::classify(79.9), LaneBand::ShoulderStripe);
        assert_eq!(LaneBand::classify(80.0), LaneBand::Grass);
        assert_eq!(LaneBand::classify(512.0), LaneBand::Grass);
    }

    #[test]
    fn test_classify_is_symmetric() {
        for x in [0.0, 18.0, 40.0, 70.0, 100.0] {
            assert_eq!(LaneBand::classify(x), LaneBand::classify(-x));
        }
    }

    #[test]
    fn test_shade_alternates_every_period() {
        assert_eq!(Shade::for_depth(0.0), Shade::Dark);
        assert_eq!(Shade::for_depth(-31.9), Shade::Dark);
        assert_eq!(Shade::for_depth(-32.0), Shade::Light);
        assert_eq!(Shade::for_depth(-63.9), Shade::Light);
        assert_eq!(Shade::for_depth(-64.0), Shade::Dark);
        assert_eq!(Shade::for_depth(-1024.0), Shade::Dark);
        // Truncation toward zero mirrors the pattern around the origin.
        assert_eq!(Shade::for_depth(31.9), Shade::Dark);
        assert_eq!(Shade::for_depth(-0.5), Shade::Dark);
    }

    #[test]
    fn test_ground_color_palette() {
        assert_eq!(ground_color(0.0, 0.0), LinearRgba::rgb(0.4, 0.4, 0.4));
        assert_eq!(ground_color(0.0, -40.0), LinearRgba::rgb(0.6, 0.6, 0.6));
        assert_eq!(ground_color(20.0, -40.0), LinearRgba::WHITE);
        assert_eq!(ground_color(-70.0, -10.0), LinearRgba::RED);
        assert_eq!(ground_color(300.0, -10.0), LinearRgba::rgb(0.0, 0.6, 0.0));
        assert_eq!(ground_color(300.0, -40.0), LinearRgba::rgb(0.0, 0.8, 0.0));
    }
}
