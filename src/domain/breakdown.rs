// src/domain/breakdown.rs

use crate::domain::naics::OTHER_SECTOR;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// Label -> count, kept in the order labels were first seen.
/// Serializes as a JSON object in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breakdown {
    entries: Vec<(String, usize)>,
}

impl Breakdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, label: &str) {
        match self.entries.iter_mut().find(|(l, _)| l == label) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((label.to_string(), 1)),
        }
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, count)| *count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(l, c)| (l.as_str(), *c))
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|(l, _)| l.as_str()).collect()
    }

    /// Highest count first. Stable, so equal counts keep first-seen order.
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

impl<'a> FromIterator<&'a str> for Breakdown {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut breakdown = Breakdown::new();
        for label in iter {
            breakdown.increment(label);
        }
        breakdown
    }
}

impl Serialize for Breakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, count) in &self.entries {
            map.serialize_entry(label, count)?;
        }
        map.end()
    }
}

pub const DEFAULT_TOP_INDUSTRIES: usize = 5;

/// Key of the trailing catch-all bucket. Distinct from the "Other" sector
/// name so an unmapped-prefix sector can still rank on its own.
pub const OTHER_BUCKET_KEY: &str = "other";

/// One slice of the top-industries chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndustryBucket {
    pub key: String,
    pub label: String,
    pub count: usize,
    /// 1-based chart palette slot.
    pub color_slot: usize,
    pub color: String,
}

impl IndustryBucket {
    fn new(key: &str, label: &str, count: usize, color_slot: usize) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            count,
            color_slot,
            color: format!("var(--chart-{color_slot})"),
        }
    }
}

/// Ranked sectors followed by a catch-all bucket for the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopIndustries {
    ranked: Vec<IndustryBucket>,
    other: IndustryBucket,
}

impl TopIndustries {
    /// Keeps the `limit` largest sectors of `breakdown` and folds the
    /// remainder into the catch-all, which always comes last.
    ///
    /// The unmapped-prefix sector is itself labelled "Other", so when it ranks
    /// the result carries two buckets with that label. They stay apart by
    /// key: the ranked sector keeps `"Other"`, the catch-all is
    /// [`OTHER_BUCKET_KEY`].
    pub fn from_breakdown(breakdown: &Breakdown, limit: usize) -> Self {
        let ranked_all = breakdown.ranked();
        let split = limit.min(ranked_all.len());
        let (kept, folded) = ranked_all.split_at(split);

        let ranked: Vec<IndustryBucket> = kept
            .iter()
            .enumerate()
            .map(|(i, (label, count))| IndustryBucket::new(label, label, *count, i + 1))
            .collect();

        let folded_count = folded.iter().map(|(_, count)| count).sum();
        let other = IndustryBucket::new(
            OTHER_BUCKET_KEY,
            OTHER_SECTOR,
            folded_count,
            ranked.len() + 1,
        );

        Self { ranked, other }
    }

    pub fn ranked(&self) -> &[IndustryBucket] {
        &self.ranked
    }

    pub fn other(&self) -> &IndustryBucket {
        &self.other
    }

    /// All buckets in display order.
    pub fn buckets(&self) -> impl Iterator<Item = &IndustryBucket> {
        self.ranked.iter().chain(std::iter::once(&self.other))
    }

    pub fn labels(&self) -> Vec<&str> {
        self.buckets().map(|b| b.label.as_str()).collect()
    }

    pub fn counts(&self) -> Vec<usize> {
        self.buckets().map(|b| b.count).collect()
    }

    pub fn total(&self) -> usize {
        self.buckets().map(|b| b.count).sum()
    }
}

impl Serialize for TopIndustries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.ranked.len() + 1))?;
        for bucket in self.buckets() {
            seq.serialize_element(bucket)?;
        }
        seq.end()
    }
}
