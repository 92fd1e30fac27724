use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq)]
pub struct LanguageStat {
    pub name: String,
    pub percent: f64,
    pub additions: u64,
    pub deletions: u64,
    pub file_count: usize,
}

impl LanguageStat {
    pub fn changes(&self) -> u64 {
        self.additions + self.deletions
    }
}

/// One language entry of the classifier's breakdown.
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageShare {
    pub percentage: String,
    #[serde(default)]
    pub files: Vec<String>,
}

pub type Breakdown = BTreeMap<String, LanguageShare>;

/// Orders by descending share, then by name.
pub fn sort_by_share(stats: &mut [LanguageStat]) {
    stats.sort_by(|a, b| {
        b.percent
            .total_cmp(&a.percent)
            .then_with(|| a.name.cmp(&b.name))
    });
}
