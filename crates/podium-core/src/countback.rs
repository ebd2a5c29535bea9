use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::result::ResultRecord;

/// Finishing profile used to break ties on points.
///
/// Entry `k` counts finishes in position `k + 1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Countback(Vec<u32>);

impl Countback {
    pub fn zeroed(positions: usize) -> Self {
        Self(vec![0; positions])
    }

    /// Count finishing positions `1..=positions` across `records`.
    /// Positions past the end are ignored.
    pub fn from_records<'a>(
        records: impl IntoIterator<Item = &'a ResultRecord>,
        positions: usize,
    ) -> Self {
        let mut counts = vec![0; positions];
        for record in records {
            if let Some(pos) = record.finish_pos
                && pos >= 1
                && let Some(slot) = counts.get_mut(pos as usize - 1)
            {
                *slot += 1;
            }
        }
        Self(counts)
    }

    pub fn from_counts(counts: Vec<u32>) -> Self {
        Self(counts)
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of finishes in 1-based position `pos`.
    pub fn finishes_in(&self, pos: u32) -> u32 {
        if pos == 0 {
            return 0;
        }
        self.0.get(pos as usize - 1).copied().unwrap_or(0)
    }

    /// Element-wise add `other` into `self`, growing if it is longer.
    pub fn merge(&mut self, other: &Countback) {
        if other.0.len() > self.0.len() {
            self.0.resize(other.0.len(), 0);
        }
        for (slot, count) in self.0.iter_mut().zip(&other.0) {
            *slot += count;
        }
    }

    pub fn merged<'a>(profiles: impl IntoIterator<Item = &'a Countback>) -> Self {
        let mut total = Countback::default();
        for profile in profiles {
            total.merge(profile);
        }
        total
    }

    /// Compare finishing profiles, best position first.
    ///
    /// `Greater` means `self` ranks above `other`: at the first position where
    /// the counts differ, `self` has more finishes. Missing trailing entries
    /// count as zero.
    pub fn rank_cmp(&self, other: &Countback) -> Ordering {
        let len = self.0.len().max(other.0.len());
        for i in 0..len {
            let a = self.0.get(i).copied().unwrap_or(0);
            let b = other.0.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}
