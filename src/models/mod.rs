// src/models/mod.rs

use indexmap::{map::Entry, IndexMap};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ───────────────────────────────────────
// Survey results
// ───────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("category `{category}` was returned more than once")]
pub struct DuplicateCategory {
    pub category: String,
}

/// Votes per category, in the order the rows were read.
///
/// Unlike a plain map, inserting a category that is already present is an
/// error rather than an overwrite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    counts: IndexMap<String, u64>,
}

impl CategoryCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_insert(&mut self, category: String, count: u64) -> Result<(), DuplicateCategory> {
        match self.counts.entry(category) {
            Entry::Occupied(e) => Err(DuplicateCategory { category: e.key().clone() }),
            Entry::Vacant(e) => {
                e.insert(count);
                Ok(())
            }
        }
    }

    pub fn try_from_counts<I>(rows: I) -> Result<Self, DuplicateCategory>
    where
        I: IntoIterator<Item = CategoryCount>,
    {
        let mut counts = Self::new();
        for row in rows {
            counts.try_insert(row.category, row.count)?;
        }
        Ok(counts)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

// ───────────────────────────────────────
// Chart.js configuration
// ───────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartJs {
    #[serde(rename = "type")]
    pub chart_type: String,
    pub options: ChartOptions,
    pub data: ChartData,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintain_aspect_ratio: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
}
