//! Result scoring and ranking.
//!
//! Predictions from any source pass through [`Ranker`] before they reach a
//! [`PredictionResult`](super::result::PredictionResult): duplicates are
//! merged, entries are ordered by score, and the list is truncated.

use crate::prediction::entities::SubQueryPrediction;
use crate::query::normalizer::dedup_key;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Ranking limits
#[derive(Debug, Clone, PartialEq)]
pub struct RankingPolicy {
    /// Maximum number of predictions kept
    pub max_results: usize,
    /// Predictions scoring below this are dropped
    pub min_probability: f64,
}

impl Default for RankingPolicy {
    fn default() -> Self {
        Self {
            max_results: 10,
            min_probability: 0.0,
        }
    }
}

/// Deduplicates, orders and truncates predictions.
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    policy: RankingPolicy,
}

impl Ranker {
    pub fn new(policy: RankingPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &RankingPolicy {
        &self.policy
    }

    /// Rank predictions.
    ///
    /// - duplicates (case/whitespace-insensitive) keep the higher score,
    ///   the earlier one on equal scores
    /// - order is descending by score, then by generation order
    /// - the list is cut to `max_results`
    pub fn rank(&self, predictions: Vec<SubQueryPrediction>) -> Vec<SubQueryPrediction> {
        self.rank_inner(None, predictions)
    }

    /// Like [`rank`](Self::rank), additionally dropping predictions equal
    /// to the query itself.
    pub fn rank_excluding(
        &self,
        query: &str,
        predictions: Vec<SubQueryPrediction>,
    ) -> Vec<SubQueryPrediction> {
        self.rank_inner(Some(dedup_key(query)), predictions)
    }

    fn rank_inner(
        &self,
        excluded: Option<String>,
        predictions: Vec<SubQueryPrediction>,
    ) -> Vec<SubQueryPrediction> {
        let mut kept: Vec<(usize, SubQueryPrediction)> = Vec::with_capacity(predictions.len());
        let mut slots: HashMap<String, usize> = HashMap::new();

        for (order, prediction) in predictions.into_iter().enumerate() {
            let key = prediction.key();
            if key.is_empty() || excluded.as_deref() == Some(key.as_str()) {
                continue;
            }
            if prediction.probability.value() < self.policy.min_probability {
                continue;
            }
            match slots.get(&key) {
                Some(&slot) => {
                    if prediction.probability > kept[slot].1.probability {
                        kept[slot] = (order, prediction);
                    }
                }
                None => {
                    slots.insert(key, kept.len());
                    kept.push((order, prediction));
                }
            }
        }

        kept.sort_by(|(order_a, a), (order_b, b)| {
            b.probability
                .partial_cmp(&a.probability)
                .unwrap_or(Ordering::Equal)
                .then(order_a.cmp(order_b))
        });
        kept.truncate(self.policy.max_results);
        kept.into_iter().map(|(_, prediction)| prediction).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::probability::Probability;

    fn pred(text: &str, score: f64) -> SubQueryPrediction {
        SubQueryPrediction::new(text, Probability::try_new(score).unwrap())
    }

    fn texts(predictions: &[SubQueryPrediction]) -> Vec<&str> {
        predictions.iter().map(|p| p.text.as_str()).collect()
    }

    #[test]
    fn test_sorts_descending() {
        let ranked = Ranker::default().rank(vec![pred("a", 0.2), pred("b", 0.9), pred("c", 0.5)]);
        assert_eq!(texts(&ranked), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_ties_keep_generation_order() {
        let ranked = Ranker::default().rank(vec![
            pred("first", 0.5),
            pred("second", 0.7),
            pred("third", 0.5),
            pred("fourth", 0.5),
        ]);
        assert_eq!(texts(&ranked), vec!["second", "first", "third", "fourth"]);
    }

    #[test]
    fn test_duplicates_keep_higher_score() {
        let ranked = Ranker::default().rank(vec![
            pred("Phone Reviews", 0.4),
            pred("other", 0.6),
            pred("phone  reviews", 0.8),
        ]);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].text, "phone  reviews");
        assert_eq!(ranked[0].probability.value(), 0.8);
    }

    #[test]
    fn test_duplicate_with_equal_score_keeps_first() {
        let ranked = Ranker::default().rank(vec![pred("A b", 0.5), pred("a B", 0.5)]);
        assert_eq!(texts(&ranked), vec!["A b"]);
    }

    #[test]
    fn test_truncates_to_max_keeping_highest() {
        let ranker = Ranker::new(RankingPolicy {
            max_results: 3,
            ..Default::default()
        });
        let input: Vec<_> = (0..8)
            .map(|i| pred(&format!("q{}", i), i as f64 / 10.0))
            .collect();
        let ranked = ranker.rank(input);
        assert_eq!(ranked.len(), 3);
        assert_eq!(texts(&ranked), vec!["q7", "q6", "q5"]);
    }

    #[test]
    fn test_min_probability_filter() {
        let ranker = Ranker::new(RankingPolicy {
            max_results: 10,
            min_probability: 0.5,
        });
        let ranked = ranker.rank(vec![pred("keep", 0.5), pred("drop", 0.49)]);
        assert_eq!(texts(&ranked), vec!["keep"]);
    }

    #[test]
    fn test_excludes_query_itself() {
        let ranked = Ranker::default().rank_excluding(
            "best smartphones 2024",
            vec![
                pred("Best Smartphones  2024", 0.99),
                pred("best smartphones 2024 reviews", 0.87),
            ],
        );
        assert_eq!(texts(&ranked), vec!["best smartphones 2024 reviews"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(Ranker::default().rank(Vec::new()).is_empty());
    }
}
