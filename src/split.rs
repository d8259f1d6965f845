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

use fnv::FnvHashMap;

use error::{Error, Result};
use io::Rating;

/// Splits ratings into a training and a test set along time. For every user, the latest
/// `floor(test_fraction * n)` ratings (at least one) go to the test set. Users with a single
/// rating are kept in training only. Ties in time keep their input order.
pub fn temporal_split(ratings: &[Rating], test_fraction: f64) -> Result<(Vec<Rating>, Vec<Rating>)> {

    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(Error::InvalidInput(
            format!("test fraction {} must lie strictly between 0 and 1", test_fraction)));
    }

    let mut user_order: Vec<&str> = Vec::new();
    let mut histories: FnvHashMap<&str, Vec<&Rating>> =
        FnvHashMap::with_capacity_and_hasher(100, Default::default());

    for rating in ratings.iter() {
        let history = histories.entry(rating.user.as_str()).or_insert_with(Vec::new);
        if history.is_empty() {
            user_order.push(rating.user.as_str());
        }
        history.push(rating);
    }

    let mut train = Vec::with_capacity(ratings.len());
    let mut test = Vec::new();

    for user in user_order.iter() {
        let mut history = match histories.remove(user) {
            Some(history) => history,
            None => continue,
        };

        history.sort_by_key(|rating| rating.timestamp);

        let num_ratings = history.len();
        let num_test = if num_ratings < 2 {
            0
        } else {
            ((test_fraction * num_ratings as f64).floor() as usize).max(1).min(num_ratings - 1)
        };

        let (past, future) = history.split_at(num_ratings - num_test);
        train.extend(past.iter().map(|rating| (*rating).clone()));
        test.extend(future.iter().map(|rating| (*rating).clone()));
    }

    debug!("Split {} ratings into {} for training and {} for testing",
        ratings.len(), train.len(), test.len());

    Ok((train, test))
}
