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

use std::hash::Hash;

use stats::DataDictionary;
use types;
use types::{DenseMatrix, Observation};

/// Builds a dense utility matrix with one row per user and one column per item. Cells without
/// an observation are `types::MISSING`. If a (user, item) pair is observed more than once, the
/// last observation wins.
pub fn utility_matrix<U, I>(
    observations: &[Observation<U, I>],
) -> (DenseMatrix, DataDictionary<U, I>)
    where U: Eq + Hash + Clone, I: Eq + Hash + Clone {

    let data_dict = DataDictionary::from(
        observations.iter().map(|observation| (&observation.user, &observation.item)));

    let mut matrix = types::new_utility_matrix(data_dict.num_users(), data_dict.num_items());

    for observation in observations.iter() {
        // Both lookups succeed, the dictionary was built from the same observations
        if let (Some(row), Some(column)) = (
            data_dict.user_index(&observation.user),
            data_dict.item_index(&observation.item),
        ) {
            matrix[(row, column)] = observation.value;
        }
    }

    debug!("Built {}x{} utility matrix from {} observations",
        matrix.nrows(), matrix.ncols(), data_dict.num_observations());

    (matrix, data_dict)
}

/// Replaces all missing cells with a constant, for matrices where absence means zero counts.
pub fn fill_missing(matrix: &DenseMatrix, value: f64) -> DenseMatrix {
    matrix.map(|cell| if types::is_missing(cell) { value } else { cell })
}

pub fn num_missing(matrix: &DenseMatrix) -> usize {
    matrix.iter().filter(|cell| types::is_missing(**cell)).count()
}
