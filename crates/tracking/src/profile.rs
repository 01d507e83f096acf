//! Built-in color profiles.
//!
//! The set of trackable colors is closed: each [`TrackedColor`] carries its
//! HSV bound pair as a constant, and [`resolve`] is the only place a free-form
//! name is turned into one.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr, VariantNames};

use crate::{
    error::{Result, TrackingError},
    types::Hsv,
};

#[derive(
    Debug, Clone, Copy, Default,
    Serialize, Deserialize, JsonSchema,
    Display, EnumString, EnumIter, VariantNames, IntoStaticStr,
    PartialEq, Eq, Hash
)]
pub enum TrackedColor {
    Red,
    #[default]
    Blue,
}

impl TrackedColor {
    /// The other built-in color. Applying it twice is the identity.
    pub fn cycle(self) -> Self {
        match self {
            Self::Blue => Self::Red,
            Self::Red => Self::Blue,
        }
    }

    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn profile(self) -> ColorProfile {
        match self {
            Self::Blue => ColorProfile {
                color: self,
                lower_bound: Hsv::new(90, 50, 50),
                upper_bound: Hsv::new(130, 255, 255),
            },
            // These are the bounds the tracker has always shipped under "Red";
            // they select hues 80..160 degrees.
            Self::Red => ColorProfile {
                color: self,
                lower_bound: Hsv::new(40, 50, 50),
                upper_bound: Hsv::new(80, 255, 255),
            },
        }
    }
}

/// An inclusive HSV acceptance range for one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ColorProfile {
    pub color: TrackedColor,
    pub lower_bound: Hsv,
    pub upper_bound: Hsv,
}

impl ColorProfile {
    pub fn name(&self) -> &'static str {
        self.color.name()
    }

    pub fn accepts(&self, hsv: &Hsv) -> bool {
        hsv.within(&self.lower_bound, &self.upper_bound)
    }
}

/// Look up a built-in profile by its canonical name.
pub fn resolve(name: &str) -> Result<ColorProfile> {
    name.parse::<TrackedColor>()
        .map(TrackedColor::profile)
        .map_err(|_| TrackingError::UnsupportedColor(name.to_string()))
}

/// Name of the profile that follows `current`.
pub fn cycle(current: &str) -> Result<&'static str> {
    let color: TrackedColor = resolve(current)?.color;
    Ok(color.cycle().name())
}
