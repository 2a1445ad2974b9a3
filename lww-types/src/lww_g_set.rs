use super::Merge;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

//grow-only set of timestamped elements, the building block for LwwSet.
//state is one map from element to the latest timestamp it was seen with:
//{"apple": 3, "banana": 7}. add only ever moves a timestamp forward and
//merge takes the per-element max, so entries never disappear and replaying
//the same adds in any order cannot change the outcome.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LwwGSet<T, TS>
where
    T: Eq + Hash,
{
    timestamps: HashMap<T, TS>,
}

impl<T: Eq + Hash, TS: Ord> LwwGSet<T, TS> {
    pub fn new() -> Self {
        LwwGSet {
            timestamps: HashMap::new(),
        }
    }

    pub fn lookup(&self, item: &T) -> Option<&TS> {
        self.timestamps.get(item)
    }

    //records item at timestamp. an existing entry with an equal or newer
    //timestamp wins, so duplicated or reordered adds are no-ops.
    pub fn add(&mut self, item: T, timestamp: TS) {
        match self.timestamps.entry(item) {
            Entry::Occupied(mut seen) => {
                if *seen.get() < timestamp {
                    seen.insert(timestamp);
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(timestamp);
            }
        }
    }

    //subset test over element presence, timestamp values are not compared.
    //the empty set is a subset of everything.
    pub fn compare(&self, other: &Self) -> bool {
        self.timestamps.keys().all(|item| other.lookup(item).is_some())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&T, &TS)> {
        self.timestamps.iter()
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

impl<T: Eq + Hash, TS: Ord> Default for LwwGSet<T, TS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, TS> Merge for LwwGSet<T, TS>
where
    T: Eq + Hash + Clone,
    TS: Ord + Clone,
{
    //union of both maps, keeping the max timestamp where both have an entry.
    //delegating to add keeps the staleness rule in one place.
    fn merge(&mut self, other: &Self) {
        for (item, timestamp) in &other.timestamps {
            self.add(item.clone(), timestamp.clone());
        }
    }
}
