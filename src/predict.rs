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

use std::fmt::Debug;
use std::hash::Hash;

use error::{Error, Result};
use stats::DataDictionary;
use types::{DenseMatrix, Observation};

/// Predicted value for a single (user, item) pair. Items never seen during training fall back
/// to the mean of the user's reconstructed row, unknown users are an error.
pub fn predict_one<U, I>(
    reconstruction: &DenseMatrix,
    data_dict: &DataDictionary<U, I>,
    user: &U,
    item: &I,
) -> Result<f64>
    where U: Eq + Hash + Clone + Debug, I: Eq + Hash + Clone {

    let user_index = match data_dict.user_index(user) {
        Some(user_index) if user_index < reconstruction.nrows() => user_index,
        _ => return Err(Error::NotFound(format!("user {:?}", user))),
    };

    match data_dict.item_index(item) {
        Some(item_index) if item_index < reconstruction.ncols() =>
            Ok(reconstruction[(user_index, item_index)]),
        _ => Ok(reconstruction.row(user_index).mean()),
    }
}

/// One prediction per held-out observation, in input order.
pub fn predict<U, I>(
    reconstruction: &DenseMatrix,
    data_dict: &DataDictionary<U, I>,
    held_out: &[Observation<U, I>],
) -> Result<Vec<f64>>
    where U: Eq + Hash + Clone + Debug, I: Eq + Hash + Clone {

    let mut predictions = Vec::with_capacity(held_out.len());

    for observation in held_out.iter() {
        let prediction =
            predict_one(reconstruction, data_dict, &observation.user, &observation.item)?;
        predictions.push(prediction);
    }

    Ok(predictions)
}
