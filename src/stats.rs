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

use std::hash::Hash;

use fnv::FnvHashMap;

/// Bijective mapping from external identifiers to the contiguous range `[0, len)`. Indices are
/// handed out in first-seen order and never change once the map is built.
#[derive(Debug, Clone)]
pub struct IndexMap<K: Eq + Hash> {
    indices: FnvHashMap<K, usize>,
    names: Vec<K>,
}

impl<K: Eq + Hash + Clone> IndexMap<K> {

    pub fn index(&self, name: &K) -> Option<usize> {
        self.indices.get(name).cloned()
    }

    pub fn name(&self, index: usize) -> Option<&K> {
        self.names.get(index)
    }

    /// Identifiers in index order, e.g. the vocabulary of a term-document matrix.
    pub fn names(&self) -> &[K] {
        &self.names
    }

    pub fn contains(&self, name: &K) -> bool {
        self.indices.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Incrementally assigns indices, consumed into an immutable `IndexMap`.
struct IndexMapBuilder<K: Eq + Hash> {
    indices: FnvHashMap<K, usize>,
    names: Vec<K>,
}

impl<K: Eq + Hash + Clone> IndexMapBuilder<K> {

    fn new() -> Self {
        IndexMapBuilder {
            indices: FnvHashMap::with_capacity_and_hasher(100, Default::default()),
            names: Vec::with_capacity(100),
        }
    }

    fn index_of(&mut self, name: &K) -> usize {
        if let Some(index) = self.indices.get(name) {
            return *index;
        }

        let index = self.names.len();
        self.indices.insert(name.clone(), index);
        self.names.push(name.clone());

        index
    }

    fn build(self) -> IndexMap<K> {
        IndexMap { indices: self.indices, names: self.names }
    }
}

/// Row and column index maps for a utility matrix, plus basic statistics of the data it was
/// built from.
#[derive(Debug, Clone)]
pub struct DataDictionary<U: Eq + Hash, I: Eq + Hash> {
    users: IndexMap<U>,
    items: IndexMap<I>,
    num_observations: u64,
}

impl<U: Eq + Hash + Clone, I: Eq + Hash + Clone> DataDictionary<U, I> {

    pub fn num_users(&self) -> usize {
        self.users.len()
    }

    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    pub fn num_observations(&self) -> u64 {
        self.num_observations
    }

    pub fn user_index(&self, user: &U) -> Option<usize> {
        self.users.index(user)
    }

    pub fn item_index(&self, item: &I) -> Option<usize> {
        self.items.index(item)
    }

    pub fn users(&self) -> &IndexMap<U> {
        &self.users
    }

    pub fn items(&self) -> &IndexMap<I> {
        &self.items
    }
}

impl<U: Eq + Hash + Clone, I: Eq + Hash + Clone> DataDictionary<U, I> {

    /// Single pass over the (user, item) pairs, assigning consecutive indices to unseen
    /// identifiers.
    pub fn from<'a, T>(pairs: T) -> Self
        where T: Iterator<Item=(&'a U, &'a I)>, U: 'a, I: 'a {

        let mut users = IndexMapBuilder::new();
        let mut items = IndexMapBuilder::new();
        let mut num_observations: u64 = 0;

        for (user, item) in pairs {
            users.index_of(user);
            items.index_of(item);
            num_observations += 1;
        }

        DataDictionary { users: users.build(), items: items.build(), num_observations }
    }
}
