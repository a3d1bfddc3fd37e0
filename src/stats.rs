//! Escape-iteration histogram gathered while rendering.

use fnv::FnvHashMap;

use crate::escape::Escape;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub interior: u64,
    /// Escape iteration → number of pixels that escaped at it.
    pub escaped: FnvHashMap<u32, u64>,
}

impl Stats {
    pub fn record(&mut self, escape: Escape) {
        match escape {
            Escape::Interior => self.interior += 1,
            Escape::Escaped(n) => *self.escaped.entry(n).or_insert(0) += 1,
        }
    }

    /// Combine the counts of two disjoint sets of pixels.
    pub fn merge(mut self, other: Self) -> Self {
        self.interior += other.interior;
        for (n, count) in other.escaped {
            *self.escaped.entry(n).or_insert(0) += count;
        }
        self
    }

    pub fn escaped_total(&self) -> u64 {
        self.escaped.values().sum()
    }

    pub fn total(&self) -> u64 {
        self.interior + self.escaped_total()
    }

    /// The most common escape iteration, lowest iteration first on ties.
    pub fn mode(&self) -> Option<(u32, u64)> {
        self.escaped
            .iter()
            .map(|(n, count)| (*n, *count))
            .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))
    }
}
