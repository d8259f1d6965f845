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

extern crate csv;
extern crate fnv;
extern crate nalgebra;
extern crate scoped_pool;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate thiserror;
#[macro_use]
extern crate log;

#[cfg(test)]
extern crate rand;

use std::fmt::Debug;
use std::hash::Hash;
use std::time::Instant;

pub mod error;
pub mod evaluation;
pub mod impute;
pub mod io;
pub mod predict;
pub mod split;
pub mod stats;
pub mod svd;
pub mod text;
pub mod topics;
pub mod types;
pub mod utility;
pub mod utils;
mod usage_tests;

pub use error::{Error, Result};
pub use stats::DataDictionary;
pub use svd::Factorization;
pub use text::TermDocumentMatrix;
pub use types::Observation;

use types::{DenseMatrix, DenseVector};


/// Truncated SVD rating model. Missing ratings are imputed with their item's mean, the matrix is
/// centered by the same means and factorized once; predictions for any rank up to
/// `max_rank()` are read off the reconstruction with the means added back.
pub struct RatingModel<U: Eq + Hash, I: Eq + Hash> {
    data_dict: DataDictionary<U, I>,
    column_means: DenseVector,
    factorization: Factorization,
}

impl<U, I> RatingModel<U, I>
    where U: Eq + Hash + Clone + Debug, I: Eq + Hash + Clone {

    pub fn fit(observations: &[Observation<U, I>]) -> Result<Self> {

        let start = Instant::now();

        let (utility_matrix, data_dict) = utility::utility_matrix(observations);

        info!("Found {} ratings between {} users and {} items, {} cells to impute",
            data_dict.num_observations(), data_dict.num_users(), data_dict.num_items(),
            utility::num_missing(&utility_matrix));

        let (imputed, column_means) = impute::impute(&utility_matrix)?;
        let centered = impute::center(&imputed, &column_means)?;
        let factorization = Factorization::compute(&centered)?;

        info!("Fitted rating model of maximum rank {} in {}ms",
            factorization.max_rank(), utils::to_millis(start.elapsed()));

        Ok(RatingModel { data_dict, column_means, factorization })
    }

    pub fn max_rank(&self) -> usize {
        self.factorization.max_rank()
    }

    pub fn data_dict(&self) -> &DataDictionary<U, I> {
        &self.data_dict
    }

    pub fn column_means(&self) -> &DenseVector {
        &self.column_means
    }

    pub fn factorization(&self) -> &Factorization {
        &self.factorization
    }

    /// Dense rank-k rating predictions for all users and items seen during training.
    pub fn reconstruct(&self, rank: usize) -> Result<DenseMatrix> {
        let centered = self.factorization.reconstruct(rank)?;
        svd::uncenter(&centered, &self.column_means)
    }

    pub fn predict(&self, rank: usize, held_out: &[Observation<U, I>]) -> Result<Vec<f64>> {
        let reconstruction = self.reconstruct(rank)?;
        predict::predict(&reconstruction, &self.data_dict, held_out)
    }
}
