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

extern crate scoped_pool;

use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Mutex;
use std::time::Instant;

use scoped_pool::Pool;

use error::{Error, Result};
use svd::Factorization;
use types::{DenseMatrix, Observation};
use utils;
use RatingModel;

/// Prediction error of a model truncated to a given rank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankError {
    pub rank: usize,
    pub mse: f64,
    pub rmse: f64,
}

/// Mean squared error `(1/N) * sum((truth_i - prediction_i)^2)`.
pub fn mse(truth: &[f64], predictions: &[f64]) -> Result<f64> {

    if truth.len() != predictions.len() {
        return Err(Error::LengthMismatch { expected: truth.len(), actual: predictions.len() });
    }

    if truth.is_empty() {
        return Err(Error::InvalidInput(String::from("no values to evaluate")));
    }

    let sum_of_squared_errors: f64 = truth.iter()
        .zip(predictions.iter())
        .map(|(true_value, prediction)| (true_value - prediction).powi(2))
        .sum();

    Ok(sum_of_squared_errors / truth.len() as f64)
}

/// Root mean squared error, the square root of `mse`.
pub fn rmse(truth: &[f64], predictions: &[f64]) -> Result<f64> {
    mse(truth, predictions).map(f64::sqrt)
}

/// Frobenius norm of the difference between a matrix and its rank-k reconstruction.
pub fn reconstruction_error(
    factorization: &Factorization,
    matrix: &DenseMatrix,
    rank: usize,
) -> Result<f64> {

    let reconstruction = factorization.reconstruct(rank)?;

    if reconstruction.shape() != matrix.shape() {
        return Err(Error::InvalidInput(format!(
            "factorization of a {:?} matrix cannot reconstruct a {:?} matrix",
            reconstruction.shape(), matrix.shape())));
    }

    Ok((matrix - reconstruction).norm())
}

pub fn evaluate<U, I>(
    model: &RatingModel<U, I>,
    rank: usize,
    held_out: &[Observation<U, I>],
) -> Result<RankError>
    where U: Eq + Hash + Clone + Debug, I: Eq + Hash + Clone {

    let predictions = model.predict(rank, held_out)?;
    let truth: Vec<f64> = held_out.iter().map(|observation| observation.value).collect();

    let mse = mse(&truth, &predictions)?;

    Ok(RankError { rank, mse, rmse: mse.sqrt() })
}

/// Evaluates the model on the held-out data for each of the given ranks. Ranks are evaluated in
/// parallel on `pool_size` threads, the results come back in the order of `ranks`.
pub fn sweep<U, I>(
    model: &RatingModel<U, I>,
    held_out: &[Observation<U, I>],
    ranks: &[usize],
    pool_size: usize,
) -> Result<Vec<RankError>>
    where U: Eq + Hash + Clone + Debug + Sync, I: Eq + Hash + Clone + Sync {

    for rank in ranks.iter() {
        model.factorization().check_rank(*rank)?;
    }

    let pool = Pool::new(pool_size.max(1));
    let start = Instant::now();

    let slots: Vec<Mutex<Option<Result<RankError>>>> =
        ranks.iter().map(|_| Mutex::new(None)).collect();

    pool.scoped(|scope| {
        for (rank, slot) in ranks.iter().zip(slots.iter()) {
            scope.execute(move || {
                let result = evaluate(model, *rank, held_out);
                *slot.lock().unwrap() = Some(result);
            });
        }
    });

    pool.shutdown();

    info!("Evaluated {} ranks on {} held-out observations in {}ms",
        ranks.len(), held_out.len(), utils::to_millis(start.elapsed()));

    let mut errors = Vec::with_capacity(ranks.len());

    for (rank, slot) in ranks.iter().zip(slots.into_iter()) {
        match slot.into_inner() {
            Ok(Some(result)) => {
                let rank_error = result?;
                debug!("rank {}: mse {:.4}, rmse {:.4}", rank, rank_error.mse, rank_error.rmse);
                errors.push(rank_error);
            },
            _ => return Err(Error::InvalidInput(
                format!("evaluation of rank {} did not complete", rank))),
        }
    }

    Ok(errors)
}
