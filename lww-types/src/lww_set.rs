use super::Merge;
use crate::lww_g_set::LwwGSet;
use serde::{Deserialize, Serialize};
use std::hash::Hash;
use tracing::trace;

//last-writer-wins element set, built out of two LwwGSets. adds land in
//add_set, removes land in remove_set, and membership is derived by comparing
//the two timestamps: an element is in the set iff it was added and not
//removed with an equal or later timestamp. on a tie the remove wins, which
//is what the strict > in lookup encodes. an example state after
//add(apple, 1), remove(apple, 4), add(banana, 2):
//add_set {apple: 1, banana: 2}, remove_set {apple: 4}, visible: {banana}.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LwwSet<T, TS>
where
    T: Eq + Hash,
{
    add_set: LwwGSet<T, TS>,
    remove_set: LwwGSet<T, TS>,
}

impl<T: Eq + Hash, TS: Ord> LwwSet<T, TS> {
    pub fn new() -> Self {
        LwwSet {
            add_set: LwwGSet::new(),
            remove_set: LwwGSet::new(),
        }
    }

    //the add timestamp of item if it is currently a member, None otherwise
    pub fn lookup(&self, item: &T) -> Option<&TS> {
        let added = self.add_set.lookup(item)?;
        match self.remove_set.lookup(item) {
            Some(removed) if added > removed => Some(added),
            Some(_) => None,
            None => Some(added),
        }
    }

    pub fn contains(&self, item: &T) -> bool {
        self.lookup(item).is_some()
    }

    //always recorded, even while the item is removed. a later add with a
    //higher timestamp than the tombstone resurrects the element.
    pub fn add(&mut self, item: T, timestamp: TS) {
        self.add_set.add(item, timestamp);
    }

    //a remove against something that is not currently a member leaves no
    //trace, so removing a never-added or already-removed item is a no-op
    pub fn remove(&mut self, item: T, timestamp: TS) {
        if self.lookup(&item).is_none() {
            return;
        }
        self.remove_set.add(item, timestamp);
    }

    //progress order, not membership equality: both underlying grow sets
    //must be subsets of the other replica's
    pub fn compare(&self, other: &Self) -> bool {
        self.add_set.compare(&other.add_set) && self.remove_set.compare(&other.remove_set)
    }

    //currently visible members with their add timestamps
    pub fn iter(&self) -> impl Iterator<Item = (&T, &TS)> {
        let removals = &self.remove_set;
        self.add_set
            .iter()
            .filter(move |&(item, added)| match removals.lookup(item) {
                Some(removed) => added > removed,
                None => true,
            })
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    //read-only views of the raw add and remove state, for replication
    //layers that serialize and ship the full set
    pub fn additions(&self) -> &LwwGSet<T, TS> {
        &self.add_set
    }

    pub fn removals(&self) -> &LwwGSet<T, TS> {
        &self.remove_set
    }
}

impl<T: Eq + Hash, TS: Ord> Default for LwwSet<T, TS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, TS> Merge for LwwSet<T, TS>
where
    T: Eq + Hash + Clone,
    TS: Ord + Clone,
{
    //both halves merge independently, so the composition inherits the
    //commutative/associative/idempotent laws from LwwGSet
    fn merge(&mut self, other: &Self) {
        self.add_set.merge(&other.add_set);
        self.remove_set.merge(&other.remove_set);
        trace!(
            adds = self.add_set.len(),
            removes = self.remove_set.len(),
            "merged remote replica state"
        );
    }
}
