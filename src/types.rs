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

use std::f64;

use nalgebra::{DMatrix, DVector};

pub type DenseMatrix = DMatrix<f64>;
pub type DenseVector = DVector<f64>;

/// Marks a cell of a utility matrix for which we have no observation.
pub const MISSING: f64 = f64::NAN;

pub fn is_missing(value: f64) -> bool {
    value.is_nan()
}

pub fn new_utility_matrix(num_rows: usize, num_columns: usize) -> DenseMatrix {
    DMatrix::from_element(num_rows, num_columns, MISSING)
}

/// A single observed (user, item, value) triple, e.g. a rating or a term count.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation<U, I> {
    pub user: U,
    pub item: I,
    pub value: f64,
}

impl<U, I> Observation<U, I> {
    pub fn new(user: U, item: I, value: f64) -> Self {
        Observation { user, item, value }
    }
}
