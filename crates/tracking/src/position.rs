//! Where the tracked object sits relative to the frame center.
//!
//! The frame is split into a 3x3 grid whose bands sit a third of the way
//! from the midpoint to each edge. Labels are recomputed from scratch every
//! frame, so a centroid hovering on a band edge will flip between labels.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};

#[derive(
    Debug, Clone, Copy,
    Serialize, Deserialize, JsonSchema,
    Display, EnumIter, IntoStaticStr,
    PartialEq, Eq, Hash
)]
pub enum PositionLabel {
    #[strum(serialize = "UPPER LEFT")]
    #[serde(rename = "UPPER LEFT")]
    UpperLeft,
    #[strum(serialize = "UPPER MIDDLE")]
    #[serde(rename = "UPPER MIDDLE")]
    UpperMiddle,
    #[strum(serialize = "UPPER RIGHT")]
    #[serde(rename = "UPPER RIGHT")]
    UpperRight,
    #[strum(serialize = "MIDDLE LEFT")]
    #[serde(rename = "MIDDLE LEFT")]
    MiddleLeft,
    #[strum(serialize = "MIDDLE")]
    #[serde(rename = "MIDDLE")]
    Middle,
    #[strum(serialize = "MIDDLE RIGHT")]
    #[serde(rename = "MIDDLE RIGHT")]
    MiddleRight,
    #[strum(serialize = "DOWN LEFT")]
    #[serde(rename = "DOWN LEFT")]
    DownLeft,
    #[strum(serialize = "DOWN MIDDLE")]
    #[serde(rename = "DOWN MIDDLE")]
    DownMiddle,
    #[strum(serialize = "DOWN RIGHT")]
    #[serde(rename = "DOWN RIGHT")]
    DownRight,
    #[strum(serialize = "NO CONTOURS")]
    #[serde(rename = "NO CONTOURS")]
    NoContours,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Band {
    Low,
    Center,
    High,
}

impl Band {
    fn of(offset: i32, half_extent: i32) -> Self {
        let limit = half_extent as f64 / 3.0;
        let offset = offset as f64;
        if offset > limit {
            Band::High
        } else if offset < -limit {
            Band::Low
        } else {
            Band::Center
        }
    }
}

impl PositionLabel {
    fn from_bands(vertical: Band, horizontal: Band) -> Self {
        use Band::*;
        match (vertical, horizontal) {
            (High, Low) => Self::UpperLeft,
            (High, Center) => Self::UpperMiddle,
            (High, High) => Self::UpperRight,
            (Center, Low) => Self::MiddleLeft,
            // Center-center collapses to a single word rather than "MIDDLE MIDDLE"
            (Center, Center) => Self::Middle,
            (Center, High) => Self::MiddleRight,
            (Low, Low) => Self::DownLeft,
            (Low, Center) => Self::DownMiddle,
            (Low, High) => Self::DownRight,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// A classified centroid. Offsets are absent, not zero, when nothing was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Position {
    pub label: PositionLabel,
    /// Positive toward the right edge
    pub offset_x: Option<i32>,
    /// Positive toward the top edge
    pub offset_y: Option<i32>,
}

impl Position {
    pub const NONE: Position = Position {
        label: PositionLabel::NoContours,
        offset_x: None,
        offset_y: None,
    };
}

/// Integer center of a `width` x `height` frame.
pub fn midpoint(width: u32, height: u32) -> (i32, i32) {
    ((width / 2) as i32, (height / 2) as i32)
}

pub fn classify(centroid: Option<(i32, i32)>, midpoint: (i32, i32)) -> Position {
    let Some((cx, cy)) = centroid else {
        return Position::NONE;
    };
    let (mx, my) = midpoint;

    let offset_x = cx - mx;
    let offset_y = my - cy;

    let vertical = Band::of(offset_y, my);
    let horizontal = Band::of(offset_x, mx);

    Position {
        label: PositionLabel::from_bands(vertical, horizontal),
        offset_x: Some(offset_x),
        offset_y: Some(offset_y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MID: (i32, i32) = (150, 150);

    fn label_at(x: i32, y: i32) -> PositionLabel {
        classify(Some((x, y)), MID).label
    }

    #[test]
    fn centroid_at_midpoint_is_middle() {
        let pos = classify(Some(MID), MID);
        assert_eq!(pos.label, PositionLabel::Middle);
        assert_eq!((pos.offset_x, pos.offset_y), (Some(0), Some(0)));
    }

    #[test]
    fn absent_centroid_has_no_offsets() {
        let pos = classify(None, MID);
        assert_eq!(pos, Position::NONE);
        assert_eq!(pos.label.to_string(), "NO CONTOURS");
    }

    #[test]
    fn y_axis_points_up() {
        let pos = classify(Some((150, 20)), MID);
        assert_eq!(pos.offset_y, Some(130));
        assert_eq!(pos.label, PositionLabel::UpperMiddle);
    }

    #[test]
    fn all_nine_cells() {
        assert_eq!(label_at(10, 10), PositionLabel::UpperLeft);
        assert_eq!(label_at(150, 10), PositionLabel::UpperMiddle);
        assert_eq!(label_at(290, 10), PositionLabel::UpperRight);
        assert_eq!(label_at(10, 150), PositionLabel::MiddleLeft);
        assert_eq!(label_at(150, 150), PositionLabel::Middle);
        assert_eq!(label_at(290, 150), PositionLabel::MiddleRight);
        assert_eq!(label_at(10, 290), PositionLabel::DownLeft);
        assert_eq!(label_at(150, 290), PositionLabel::DownMiddle);
        assert_eq!(label_at(290, 290), PositionLabel::DownRight);
    }

    #[test]
    fn horizontal_middle_only_named_off_the_center_row() {
        // Same horizontal offset, different rows
        assert_eq!(label_at(160, 150).to_string(), "MIDDLE");
        assert_eq!(label_at(160, 10).to_string(), "UPPER MIDDLE");
        assert_eq!(label_at(160, 290).to_string(), "DOWN MIDDLE");
    }

    #[test]
    fn band_edges_are_exclusive() {
        // Threshold is 50 for a midpoint of 150
        assert_eq!(label_at(200, 150), PositionLabel::Middle);
        assert_eq!(label_at(201, 150), PositionLabel::MiddleRight);
        assert_eq!(label_at(100, 150), PositionLabel::Middle);
        assert_eq!(label_at(99, 150), PositionLabel::MiddleLeft);
        assert_eq!(label_at(150, 100), PositionLabel::Middle);
        assert_eq!(label_at(150, 99), PositionLabel::UpperMiddle);
    }

    #[test]
    fn midpoint_uses_integer_halves() {
        assert_eq!(midpoint(640, 480), (320, 240));
        assert_eq!(midpoint(301, 7), (150, 3));
    }
}
