//! Category Distribution
//!
//! Labels and counts for the category pie, embedded as two JSON arrays.

use serde::de::DeserializeOwned;

use crate::dom;

/// Ordered category labels and drug counts, paired by index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryDistribution {
    pub labels: Vec<String>,
    pub counts: Vec<u64>,
}

impl CategoryDistribution {
    /// Build from the marker's JSON attribute strings. A missing or
    /// malformed side degrades to an empty list.
    pub fn from_attrs(labels: Option<&str>, counts: Option<&str>) -> Self {
        Self {
            labels: parse_json_array(labels, "data-category-labels"),
            counts: parse_json_array(counts, "data-category-counts"),
        }
    }

    /// The pie is drawn only when both sides carry data.
    pub fn is_renderable(&self) -> bool {
        !self.labels.is_empty() && !self.counts.is_empty()
    }

    /// Label/count pairs, stopping at the shorter side.
    pub fn pairs(&self) -> impl Iterator<Item = (String, u64)> + '_ {
        self.labels.iter().cloned().zip(self.counts.iter().copied())
    }
}

fn parse_json_array<T: DeserializeOwned>(raw: Option<&str>, attr: &str) -> Vec<T> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str(raw) {
        Ok(values) => values,
        Err(err) => {
            dom::warn(&format!("ignoring malformed {}: {}", attr, err));
            Vec::new()
        }
    }
}
