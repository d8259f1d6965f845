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

use std;

use thiserror::Error;

/// Failures surfaced by the factorization core. All operations are deterministic, so none of
/// these are worth retrying.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid rank {rank}, expected a value between 1 and {max_rank}")]
    InvalidRank { rank: usize, max_rank: usize },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("length mismatch, expected {expected} values but got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("singular value decomposition did not converge")]
    NoConvergence,
}

pub type Result<T> = std::result::Result<T, Error>;
