/**
 * SvdReco
 * Copyright (C) 2018 Sebastian Schelter
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use error::{Error, Result};
use svd::Factorization;

/// Heap entry used to find the top-n weights of a topic vector.
#[derive(PartialEq, Debug)]
struct ScoredTerm {
    index: usize,
    weight: f64,
}

/// Ordering for our heap, the greatest entry is the worst one kept so far: lower weight first,
/// then higher index. We need a special implementation as there is no total order on floating
/// point numbers.
fn cmp_worst_first(a: &ScoredTerm, b: &ScoredTerm) -> Ordering {
    match b.weight.partial_cmp(&a.weight) {
        Some(Ordering::Equal) | None => a.index.cmp(&b.index),
        Some(ordering) => ordering,
    }
}

impl Eq for ScoredTerm {}

impl Ord for ScoredTerm {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_worst_first(self, other)
    }
}

impl PartialOrd for ScoredTerm {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(cmp_worst_first(self, other))
    }
}

/// A term and its weight in a latent topic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicTerm {
    pub term: String,
    pub weight: f64,
}

/// The highest weighted terms of one row of `V^T`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Topic {
    pub topic: usize,
    pub terms: Vec<TopicTerm>,
}

impl Topic {

    /// Human readable label, the terms joined by spaces.
    pub fn label(&self) -> String {
        self.terms.iter()
            .map(|topic_term| topic_term.term.as_str())
            .collect::<Vec<&str>>()
            .join(" ")
    }
}

/// Indices and weights of the `n` largest weights in descending order, ties broken by
/// ascending index.
pub fn top_indices(weights: &[f64], n: usize) -> Vec<(usize, f64)> {

    if n == 0 {
        return Vec::new();
    }

    let mut heap = BinaryHeap::with_capacity(n);

    for (index, weight) in weights.iter().enumerate() {
        let scored_term = ScoredTerm { index, weight: *weight };

        if heap.len() < n {
            heap.push(scored_term);
        } else if let Some(mut top) = heap.peek_mut() {
            if scored_term < *top {
                *top = scored_term;
            }
        }
    }

    heap.into_sorted_vec()
        .into_iter()
        .map(|scored_term| (scored_term.index, scored_term.weight))
        .collect()
}

pub fn top_terms(weights: &[f64], vocabulary: &[String], n: usize) -> Result<Vec<TopicTerm>> {

    if weights.len() != vocabulary.len() {
        return Err(Error::LengthMismatch { expected: vocabulary.len(), actual: weights.len() });
    }

    let terms = top_indices(weights, n).into_iter()
        .map(|(index, weight)| TopicTerm { term: vocabulary[index].clone(), weight })
        .collect();

    Ok(terms)
}

/// Top `num_terms` terms for each of the first `num_topics` rows of the right singular vectors.
pub fn topics(
    factorization: &Factorization,
    vocabulary: &[String],
    num_topics: usize,
    num_terms: usize,
) -> Result<Vec<Topic>> {

    factorization.check_rank(num_topics)?;

    let mut topics = Vec::with_capacity(num_topics);

    for (topic, row) in factorization.v_t.row_iter().take(num_topics).enumerate() {
        let weights: Vec<f64> = row.iter().cloned().collect();
        let terms = top_terms(&weights, vocabulary, num_terms)?;

        topics.push(Topic { topic, terms });
    }

    Ok(topics)
}


#[cfg(test)]
mod tests {

    use nalgebra::{DMatrix, DVector};

    use error::Error;
    use svd::Factorization;
    use topics;
    use topics::ScoredTerm;

    fn vocabulary() -> Vec<String> {
        vec!["apple", "banana", "cherry", "date", "elder"].into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn scored_term_ordering_puts_worst_first() {
        let term_a = ScoredTerm { index: 1, weight: 0.5 };
        let term_b = ScoredTerm { index: 2, weight: 1.5 };
        let term_c = ScoredTerm { index: 3, weight: 0.5 };

        assert!(term_a > term_b);
        assert!(term_c > term_a);
        assert!(term_b < term_c);
    }

    #[test]
    fn topn() {
        let weights = [0.5, 1.5, 0.3, 3.5, 2.5];

        let top = topics::top_indices(&weights, 3);

        assert_eq!(top, vec![(3, 3.5), (4, 2.5), (1, 1.5)]);
    }

    #[test]
    fn ties_break_by_index() {
        let weights = [1.0, 2.0, 1.0, 2.0, 1.0];

        let top = topics::top_indices(&weights, 3);

        assert_eq!(top, vec![(1, 2.0), (3, 2.0), (0, 1.0)]);
    }

    #[test]
    fn more_terms_than_weights() {
        let top = topics::top_indices(&[0.1, -0.2], 5);
        assert_eq!(top, vec![(0, 0.1), (1, -0.2)]);

        assert!(topics::top_indices(&[0.1, -0.2], 0).is_empty());
    }

    #[test]
    fn top_terms_are_deterministic() {
        let weights = [0.2, -0.4, 0.9, 0.2, 0.0];

        let first = topics::top_terms(&weights, &vocabulary(), 3).unwrap();
        let second = topics::top_terms(&weights, &vocabulary(), 3).unwrap();

        assert_eq!(first, second);

        let terms: Vec<&str> = first.iter().map(|t| t.term.as_str()).collect();
        assert_eq!(terms, vec!["cherry", "apple", "date"]);
    }

    #[test]
    fn vocabulary_must_match_weights() {
        match topics::top_terms(&[1.0, 2.0], &vocabulary(), 1) {
            Err(Error::LengthMismatch { expected: 5, actual: 2 }) => {},
            other => panic!("Expected LengthMismatch, got {:?}", other),
        }
    }

    #[test]
    fn one_topic_per_row_of_v() {
        let factorization = Factorization {
            u: DMatrix::identity(2, 2),
            singular_values: DVector::from_vec(vec![2.0, 1.0]),
            v_t: DMatrix::from_row_slice(2, 5, &[
                0.1, 0.7, 0.0, 0.0, 0.7,
                0.9, 0.0, 0.4, 0.1, 0.0,
            ]),
        };

        let topics = topics::topics(&factorization, &vocabulary(), 2, 2).unwrap();

        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].label(), "banana elder");
        assert_eq!(topics[1].label(), "apple cherry");
        assert_eq!(topics[1].topic, 1);

        assert!(topics::topics(&factorization, &vocabulary(), 3, 2).is_err());
    }
}
