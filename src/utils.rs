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

use std::time::Duration;

pub fn to_millis(duration: Duration) -> u64 {
    (duration.as_secs() * 1_000) + u64::from(duration.subsec_millis())
}

/// Parses an inclusive rank range of the form `FROM:TO`, e.g. `1:20`.
pub fn parse_rank_range(range: &str) -> Option<Vec<usize>> {
    let mut bounds = range.splitn(2, ':');

    let from: usize = bounds.next()?.trim().parse().ok()?;
    let to: usize = bounds.next()?.trim().parse().ok()?;

    if from == 0 || from > to {
        return None;
    }

    Some((from..=to).collect())
}


#[cfg(test)]
mod tests {

    use std::time::Duration;

    use utils;

    #[test]
    fn millis() {
        assert_eq!(utils::to_millis(Duration::new(2, 345_678_901)), 2_345);
    }

    #[test]
    fn rank_ranges() {
        assert_eq!(utils::parse_rank_range("1:4"), Some(vec![1, 2, 3, 4]));
        assert_eq!(utils::parse_rank_range("3:3"), Some(vec![3]));
        assert_eq!(utils::parse_rank_range("0:3"), None);
        assert_eq!(utils::parse_rank_range("5:2"), None);
        assert_eq!(utils::parse_rank_range("7"), None);
        assert_eq!(utils::parse_rank_range("a:b"), None);
    }
}
