use indexmap::{IndexMap, IndexSet};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{BrushError, BrushResult};

/// Field name reserved for the series identifier.
pub const NAME_FIELD: &str = "name";

/// One dataset row: a unique series name plus one numeric value per category.
///
/// Deserializes from a flat object such as `{"name": "a", "mpg": 21.0}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    #[serde(flatten)]
    pub values: IndexMap<String, f64>,
}

impl Record {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_value(mut self, category: impl Into<String>, value: f64) -> Self {
        self.values.insert(category.into(), value);
        self
    }

    #[must_use]
    pub fn value(&self, category: &str) -> Option<f64> {
        self.values.get(category).copied()
    }
}

/// Validated, immutable record collection.
///
/// The category list is taken from the first record in field order and stays
/// fixed for the lifetime of the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
    categories: Vec<String>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> BrushResult<Self> {
        let first = records.first().ok_or(BrushError::EmptyDataset)?;
        let categories: Vec<String> = first
            .values
            .keys()
            .filter(|key| key.as_str() != NAME_FIELD)
            .cloned()
            .collect();
        if categories.is_empty() {
            return Err(BrushError::InvalidData(
                "dataset must define at least one numeric category".to_owned(),
            ));
        }

        let mut names = IndexSet::with_capacity(records.len());
        for record in &records {
            if !names.insert(record.name.as_str()) {
                return Err(BrushError::DuplicateSeriesName(record.name.clone()));
            }
            for category in &categories {
                let value =
                    record
                        .value(category)
                        .ok_or_else(|| BrushError::MissingCategoryValue {
                            series: record.name.clone(),
                            category: category.clone(),
                        })?;
                if !value.is_finite() {
                    return Err(BrushError::InvalidData(format!(
                        "series `{}` has a non-finite value for `{category}`",
                        record.name
                    )));
                }
            }
            let field_count = record
                .values
                .keys()
                .filter(|key| key.as_str() != NAME_FIELD)
                .count();
            if field_count != categories.len() {
                return Err(BrushError::InvalidData(format!(
                    "series `{}` does not share the dataset category set",
                    record.name
                )));
            }
        }

        Ok(Self {
            records,
            categories,
        })
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn record(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.name == name)
    }

    /// Returns `(min, max)` of one category across all records.
    #[must_use]
    pub fn category_extent(&self, category: &str) -> Option<(f64, f64)> {
        let values = self
            .records
            .iter()
            .filter_map(|record| record.value(category))
            .map(OrderedFloat);
        let min = values.clone().min()?;
        let max = values.max()?;
        Some((min.into_inner(), max.into_inner()))
    }
}
