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

extern crate nalgebra;

use std::cmp::Ordering;
use std::f64;
use std::time::Instant;

use nalgebra::DMatrix;

use error::{Error, Result};
use types::{DenseMatrix, DenseVector};
use utils;

/// Thin singular value decomposition `M = U * diag(singular_values) * V^T` with the singular
/// values sorted in descending order. For an `n x m` input, `u` is `n x r`, `v_t` is `r x m`
/// with `r = min(n, m)`.
#[derive(Debug, Clone)]
pub struct Factorization {
    pub u: DenseMatrix,
    pub singular_values: DenseVector,
    pub v_t: DenseMatrix,
}

impl Factorization {

    pub fn compute(matrix: &DenseMatrix) -> Result<Self> {

        let (num_rows, num_columns) = matrix.shape();

        if num_rows == 0 || num_columns == 0 {
            return Err(Error::InvalidInput(
                format!("cannot factorize a {}x{} matrix", num_rows, num_columns)));
        }

        let start = Instant::now();

        // A max_niter of zero keeps iterating until convergence
        let svd = matrix.clone()
            .try_svd(true, true, f64::EPSILON, 0)
            .ok_or(Error::NoConvergence)?;

        let (u, v_t) = match (svd.u, svd.v_t) {
            (Some(u), Some(v_t)) => (u, v_t),
            _ => return Err(Error::NoConvergence),
        };

        let factorization = Factorization::descending(u, svd.singular_values, v_t);

        info!("Factorized {}x{} matrix in {}ms, largest singular value {:.4}",
            num_rows, num_columns, utils::to_millis(start.elapsed()),
            factorization.singular_values[0]);

        Ok(factorization)
    }

    /// Reorders the components by descending singular value and moves the sign of any negative
    /// singular value into the corresponding column of `u`. Ties keep their original order.
    /// Signs are then fixed so that the largest magnitude entry of every row of `v_t` is
    /// positive, flipping the matching column of `u` along with it.
    fn descending(u: DenseMatrix, singular_values: DenseVector, v_t: DenseMatrix) -> Self {

        let rank = singular_values.len();

        let mut order: Vec<usize> = (0..rank).collect();
        order.sort_by(|&a, &b| {
            singular_values[b].abs().partial_cmp(&singular_values[a].abs())
                .unwrap_or(Ordering::Equal)
                .then(a.cmp(&b))
        });

        let signs: Vec<f64> = singular_values.iter()
            .map(|value| if *value < 0.0 { -1.0 } else { 1.0 })
            .collect();

        let mut sorted_u = DMatrix::from_fn(u.nrows(), rank, |row, component| {
            u[(row, order[component])] * signs[order[component]]
        });

        let sorted_singular_values =
            DenseVector::from_fn(rank, |component, _| singular_values[order[component]].abs());

        let mut sorted_v_t = DMatrix::from_fn(rank, v_t.ncols(), |component, column| {
            v_t[(order[component], column)]
        });

        for component in 0..rank {
            let dominant = sorted_v_t.row(component).iter()
                .fold(0.0, |dominant: f64, value| {
                    if value.abs() > dominant.abs() { *value } else { dominant }
                });

            if dominant < 0.0 {
                sorted_v_t.row_mut(component).neg_mut();
                sorted_u.column_mut(component).neg_mut();
            }
        }

        Factorization { u: sorted_u, singular_values: sorted_singular_values, v_t: sorted_v_t }
    }

    /// Largest admissible truncation rank, `min(n, m)`.
    pub fn max_rank(&self) -> usize {
        self.singular_values.len()
    }

    pub fn check_rank(&self, rank: usize) -> Result<()> {
        if rank == 0 || rank > self.max_rank() {
            Err(Error::InvalidRank { rank, max_rank: self.max_rank() })
        } else {
            Ok(())
        }
    }

    /// Keeps only the first `rank` components.
    pub fn truncate(&self, rank: usize) -> Result<Self> {
        self.check_rank(rank)?;

        Ok(Factorization {
            u: self.u.columns(0, rank).into_owned(),
            singular_values: self.singular_values.rows(0, rank).into_owned(),
            v_t: self.v_t.rows(0, rank).into_owned(),
        })
    }

    /// Rank-k approximation of the factorized matrix. The singular values are split
    /// symmetrically, we scale the first k columns of `u` and the first k rows of `v_t` by their
    /// square roots and multiply the two scaled factors.
    pub fn reconstruct(&self, rank: usize) -> Result<DenseMatrix> {
        self.check_rank(rank)?;

        let roots = self.singular_values.rows(0, rank).map(|value| value.sqrt());

        let mut left = self.u.columns(0, rank).into_owned();
        for (mut column, root) in left.column_iter_mut().zip(roots.iter()) {
            column *= *root;
        }

        let mut right = self.v_t.rows(0, rank).into_owned();
        for (mut row, root) in right.row_iter_mut().zip(roots.iter()) {
            row *= *root;
        }

        Ok(left * right)
    }
}

/// Adds the column means that were subtracted before factorization back to every row.
pub fn uncenter(reconstruction: &DenseMatrix, means: &DenseVector) -> Result<DenseMatrix> {

    if reconstruction.ncols() != means.len() {
        return Err(Error::LengthMismatch {
            expected: reconstruction.ncols(),
            actual: means.len(),
        });
    }

    let mut uncentered = reconstruction.clone();
    for (column_index, mut column) in uncentered.column_iter_mut().enumerate() {
        column.add_scalar_mut(means[column_index]);
    }

    Ok(uncentered)
}

pub fn truncated_reconstruction(matrix: &DenseMatrix, rank: usize) -> Result<DenseMatrix> {
    Factorization::compute(matrix)?.reconstruct(rank)
}


#[cfg(test)]
mod tests {

    use nalgebra::DMatrix;
    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;

    use error::Error;
    use svd;
    use svd::Factorization;
    use types::DenseMatrix;

    fn random_matrix(rng: &mut StdRng, num_rows: usize, num_columns: usize) -> DenseMatrix {
        DMatrix::from_fn(num_rows, num_columns, |_, _| rng.gen_range(-5.0..5.0))
    }

    fn max_abs_difference(a: &DenseMatrix, b: &DenseMatrix) -> f64 {
        (a - b).iter().fold(0.0, |max, value| f64::max(max, value.abs()))
    }

    #[test]
    fn full_rank_of_two_by_two_is_exact() {
        let matrix = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);

        let reconstruction = svd::truncated_reconstruction(&matrix, 2).unwrap();

        assert!(max_abs_difference(&matrix, &reconstruction) < 1e-9);
    }

    #[test]
    fn full_rank_is_exact_for_random_shapes() {
        let mut rng = StdRng::seed_from_u64(42);

        for &(num_rows, num_columns) in &[(5, 3), (3, 7), (6, 6), (1, 4), (4, 1)] {
            let matrix = random_matrix(&mut rng, num_rows, num_columns);
            let factorization = Factorization::compute(&matrix).unwrap();

            assert_eq!(factorization.max_rank(), num_rows.min(num_columns));
            assert_eq!(factorization.u.shape(), (num_rows, factorization.max_rank()));
            assert_eq!(factorization.v_t.shape(), (factorization.max_rank(), num_columns));

            let reconstruction = factorization.reconstruct(factorization.max_rank()).unwrap();
            assert!(max_abs_difference(&matrix, &reconstruction) < 1e-9);
        }
    }

    #[test]
    fn singular_values_descending_and_non_negative() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..10 {
            let matrix = random_matrix(&mut rng, 8, 5);
            let factorization = Factorization::compute(&matrix).unwrap();
            let values = factorization.singular_values.as_slice();

            assert!(values.iter().all(|value| *value >= 0.0));
            for pair in values.windows(2) {
                assert!(pair[0] >= pair[1]);
            }
        }
    }

    #[test]
    fn dominant_entry_of_each_right_vector_is_positive() {
        let mut rng = StdRng::seed_from_u64(5);
        let matrix = random_matrix(&mut rng, 4, 6);
        let factorization = Factorization::compute(&matrix).unwrap();

        for row in factorization.v_t.row_iter() {
            let dominant = row.iter()
                .fold(0.0, |dominant: f64, value| {
                    if value.abs() > dominant.abs() { *value } else { dominant }
                });
            assert!(dominant > 0.0);
        }

        let reconstruction = factorization.reconstruct(4).unwrap();
        assert!(max_abs_difference(&matrix, &reconstruction) < 1e-9);
    }

    #[test]
    fn rank_one_matrix_needs_one_component() {
        let matrix = DMatrix::from_row_slice(3, 3, &[
            1.0, 2.0, 3.0,
            2.0, 4.0, 6.0,
            3.0, 6.0, 9.0,
        ]);

        let factorization = Factorization::compute(&matrix).unwrap();
        let reconstruction = factorization.reconstruct(1).unwrap();

        assert!(max_abs_difference(&matrix, &reconstruction) < 1e-9);
        assert!(factorization.singular_values[1] < 1e-9);
    }

    #[test]
    fn symmetric_split_matches_direct_product() {
        let mut rng = StdRng::seed_from_u64(3);
        let matrix = random_matrix(&mut rng, 6, 4);
        let factorization = Factorization::compute(&matrix).unwrap();

        let truncated = factorization.truncate(2).unwrap();
        let direct = &truncated.u * DMatrix::from_diagonal(&truncated.singular_values)
            * &truncated.v_t;

        let reconstruction = factorization.reconstruct(2).unwrap();

        assert!(max_abs_difference(&direct, &reconstruction) < 1e-9);
    }

    #[test]
    fn invalid_ranks() {
        let matrix = DMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let factorization = Factorization::compute(&matrix).unwrap();

        assert_eq!(factorization.reconstruct(0).unwrap_err(),
            Error::InvalidRank { rank: 0, max_rank: 2 });
        assert_eq!(factorization.reconstruct(3).unwrap_err(),
            Error::InvalidRank { rank: 3, max_rank: 2 });
        assert!(factorization.truncate(3).is_err());
    }

    #[test]
    fn empty_matrix_is_rejected() {
        let matrix: DenseMatrix = DMatrix::zeros(0, 3);

        match Factorization::compute(&matrix) {
            Err(Error::InvalidInput(_)) => {},
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn uncenter_adds_means_to_every_row() {
        let centered = DMatrix::from_row_slice(2, 2, &[-1.0, -5.0, 1.0, 5.0]);
        let means = ::types::DenseVector::from_vec(vec![2.0, 15.0]);

        let uncentered = svd::uncenter(&centered, &means).unwrap();

        assert_eq!(uncentered, DMatrix::from_row_slice(2, 2, &[1.0, 10.0, 3.0, 20.0]));
    }
}
