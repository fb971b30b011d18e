use std::collections::HashMap;

/// Occurrence count per normalized token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCounts {
    counts: HashMap<String, usize>,
}

impl WordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `word`.
    pub fn add(&mut self, word: &str) {
        match self.counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.to_string(), 1);
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens counted.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Words ordered by count (descending), ties broken alphabetically so the
    /// order does not depend on hash iteration.
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> =
            self.counts.iter().map(|(w, c)| (w.as_str(), *c)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }
}

impl<S: Into<String>> FromIterator<(S, usize)> for WordCounts {
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
        let mut counts = HashMap::new();
        for (word, count) in iter {
            if count > 0 {
                *counts.entry(word.into()).or_insert(0) += count;
            }
        }
        Self { counts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_total() {
        let mut counts = WordCounts::new();
        counts.add("a");
        counts.add("b");
        counts.add("a");
        assert_eq!(counts.get("a"), Some(2));
        assert_eq!(counts.get("b"), Some(1));
        assert_eq!(counts.get("c"), None);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_ranked_breaks_ties_alphabetically() {
        let counts: WordCounts = [("pear", 1), ("apple", 3), ("fig", 1), ("kiwi", 3)]
            .into_iter()
            .collect();
        assert_eq!(
            counts.ranked(),
            vec![("apple", 3), ("kiwi", 3), ("fig", 1), ("pear", 1)]
        );
    }

    #[test]
    fn test_from_iter_skips_zero_counts() {
        let counts: WordCounts = [("ghost", 0), ("real", 2)].into_iter().collect();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.total(), 2);
    }
}
