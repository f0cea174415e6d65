use serde::{Deserialize, Serialize};

use crate::error::{BrushError, BrushResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> BrushResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(BrushError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Stroke applied to every segment of one draw call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub stroke_width: f64,
    pub color: Color,
}

impl LineStyle {
    #[must_use]
    pub const fn new(stroke_width: f64, color: Color) -> Self {
        Self {
            stroke_width,
            color,
        }
    }

    /// Muted grey used for the full dataset behind the selection.
    #[must_use]
    pub const fn background() -> Self {
        Self::new(1.0, Color::rgba(0.6, 0.6, 0.6, 0.8))
    }

    /// Dark red used for selected series.
    #[must_use]
    pub const fn highlight() -> Self {
        Self::new(1.0, Color::rgba(0.5, 0.0, 0.0, 0.8))
    }

    /// Outline of the selection wedge.
    #[must_use]
    pub const fn wedge() -> Self {
        Self::new(2.0, Color::rgba(0.0, 1.0, 1.0, 0.6))
    }

    pub fn validate(self) -> BrushResult<()> {
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(BrushError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
