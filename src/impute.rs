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

use error::{Error, Result};
use types;
use types::{DenseMatrix, DenseVector};

/// Mean of every column over its non-missing cells. Fails if a column has no observed cell, as
/// its mean would be undefined.
pub fn column_means(matrix: &DenseMatrix) -> Result<DenseVector> {

    let mut means = DenseVector::zeros(matrix.ncols());

    for (column_index, column) in matrix.column_iter().enumerate() {

        let mut sum = 0.0;
        let mut count = 0;

        for value in column.iter().filter(|value| !types::is_missing(**value)) {
            sum += *value;
            count += 1;
        }

        if count == 0 {
            return Err(Error::InvalidInput(
                format!("column {} has no observed values", column_index)));
        }

        means[column_index] = sum / count as f64;
    }

    Ok(means)
}

/// Replaces each missing cell by the mean of its column. Returns the fully populated matrix
/// together with the column means used.
pub fn impute(matrix: &DenseMatrix) -> Result<(DenseMatrix, DenseVector)> {

    let means = column_means(matrix)?;

    let mut imputed = matrix.clone();
    for (column_index, mut column) in imputed.column_iter_mut().enumerate() {
        for value in column.iter_mut() {
            if types::is_missing(*value) {
                *value = means[column_index];
            }
        }
    }

    Ok((imputed, means))
}

/// Subtracts the column means from every row.
pub fn center(matrix: &DenseMatrix, means: &DenseVector) -> Result<DenseMatrix> {

    if matrix.ncols() != means.len() {
        return Err(Error::LengthMismatch { expected: matrix.ncols(), actual: means.len() });
    }

    let mut centered = matrix.clone();
    for (column_index, mut column) in centered.column_iter_mut().enumerate() {
        column.add_scalar_mut(-means[column_index]);
    }

    Ok(centered)
}
