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

extern crate fnv;

use fnv::FnvHashSet;

use error::Result;
use svd::Factorization;
use topics;
use topics::Topic;
use types::{DenseMatrix, Observation};
use utility;

/// Terms we never want to see in a topic.
const STOP_WORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "an", "and", "any", "are", "as", "at", "be", "been",
    "but", "by", "can", "could", "did", "do", "does", "for", "from", "had", "has", "have", "he",
    "her", "his", "how", "if", "in", "into", "is", "it", "its", "more", "no", "not", "of", "on",
    "one", "or", "our", "out", "she", "so", "some", "than", "that", "the", "their", "them",
    "then", "there", "these", "they", "this", "to", "up", "was", "we", "were", "what", "when",
    "which", "who", "will", "with", "would", "you", "your",
];

/// Lowercased alphanumeric tokens of a text, without stop words and single characters.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() > 1)
        .map(|token| token.to_lowercase())
        .filter(|token| !STOP_WORDS.contains(&token.as_str()))
        .collect()
}

/// Document x term count matrix. Rows are the documents that contain at least one term, in
/// input order; columns follow the vocabulary.
#[derive(Debug, Clone)]
pub struct TermDocumentMatrix {
    matrix: DenseMatrix,
    documents: Vec<usize>,
    vocabulary: Vec<String>,
}

impl TermDocumentMatrix {

    pub fn from_documents<S: AsRef<str>>(documents: &[S]) -> Self {

        let mut observations: Vec<Observation<usize, String>> = Vec::new();

        for (document, text) in documents.iter().enumerate() {

            let tokens = tokenize(text.as_ref());

            // One count per distinct term, in the order the terms first occur
            let mut seen = FnvHashSet::default();
            for token in tokens.iter() {
                if seen.insert(token.as_str()) {
                    let count = tokens.iter().filter(|other| *other == token).count();
                    observations.push(Observation::new(document, token.clone(), count as f64));
                }
            }
        }

        let (matrix, data_dict) = utility::utility_matrix(&observations);

        TermDocumentMatrix {
            matrix: utility::fill_missing(&matrix, 0.0),
            documents: data_dict.users().names().to_vec(),
            vocabulary: data_dict.items().names().to_vec(),
        }
    }

    pub fn matrix(&self) -> &DenseMatrix {
        &self.matrix
    }

    /// Input position of the document behind each row.
    pub fn documents(&self) -> &[usize] {
        &self.documents
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Latent semantic indexing: factorizes the (uncentered) count matrix and reads the
    /// `num_terms` highest weighted terms off each of the first `num_topics` right singular
    /// vectors.
    pub fn topics(&self, num_topics: usize, num_terms: usize) -> Result<Vec<Topic>> {
        let factorization = Factorization::compute(&self.matrix)?;

        info!("Extracting {} topics from {} documents over {} terms",
            num_topics, self.documents.len(), self.vocabulary.len());

        topics::topics(&factorization, &self.vocabulary, num_topics, num_terms)
    }
}
