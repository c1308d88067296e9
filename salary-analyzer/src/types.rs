use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

/// Salary statistics for one search keyword
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageStats {
    /// Match count as reported by the platform, not the number of postings walked.
    pub vacancies_found: u64,
    /// Postings that produced a salary estimate.
    pub vacancies_processed: u64,
    pub average_salary: u64,
}

/// Per-language statistics in the order the languages were requested.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateReport {
    entries: Vec<(String, LanguageStats)>,
}

impl AggregateReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, language: impl Into<String>, stats: LanguageStats) {
        let language = language.into();
        match self.entries.iter_mut().find(|(name, _)| *name == language) {
            Some((_, existing)) => *existing = stats,
            None => self.entries.push((language, stats)),
        }
    }

    pub fn get(&self, language: &str) -> Option<&LanguageStats> {
        self.entries
            .iter()
            .find(|(name, _)| name == language)
            .map(|(_, stats)| stats)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageStats)> {
        self.entries
            .iter()
            .map(|(name, stats)| (name.as_str(), stats))
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for AggregateReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (language, stats) in &self.entries {
            map.serialize_entry(language, stats)?;
        }
        map.end()
    }
}
