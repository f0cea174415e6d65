use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{BrushError, BrushResult};

/// Invertible linear mapping from a value domain to a pixel range.
///
/// A zero-width domain (`start == end`) is accepted and maps every value to
/// the middle of the range, so flat categories render on the axis midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> BrushResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() {
            return Err(BrushError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(BrushError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_start == self.domain_end
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        if self.is_degenerate() {
            return (self.range_start + self.range_end) * 0.5;
        }
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let span = self.range_end - self.range_start;
        if self.is_degenerate() || span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }
}

/// Discrete ordinal scale assigning equal-width slots to categories.
///
/// `position` returns the slot start, matching band-scale semantics with no
/// padding.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    slots: IndexMap<String, usize>,
    range_width: f64,
}

impl BandScale {
    pub fn new(categories: &[String], range_width: f64) -> BrushResult<Self> {
        if categories.is_empty() {
            return Err(BrushError::InvalidData(
                "band scale needs at least one category".to_owned(),
            ));
        }
        if !range_width.is_finite() || range_width <= 0.0 {
            return Err(BrushError::InvalidData(
                "band scale range must be finite and > 0".to_owned(),
            ));
        }

        let mut slots = IndexMap::with_capacity(categories.len());
        for (index, category) in categories.iter().enumerate() {
            if slots.insert(category.clone(), index).is_some() {
                return Err(BrushError::InvalidData(format!(
                    "duplicate band category `{category}`"
                )));
            }
        }

        Ok(Self { slots, range_width })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.range_width / self.slots.len() as f64
    }

    #[must_use]
    pub fn range_width(&self) -> f64 {
        self.range_width
    }

    #[must_use]
    pub fn position(&self, category: &str) -> Option<f64> {
        self.slots
            .get(category)
            .map(|index| self.position_at(*index))
    }

    /// Slot start for the category at `index`, in axis order.
    #[must_use]
    pub fn position_at(&self, index: usize) -> f64 {
        index as f64 * self.step()
    }

    #[must_use]
    pub fn index_of(&self, category: &str) -> Option<usize> {
        self.slots.get(category).copied()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }
}
