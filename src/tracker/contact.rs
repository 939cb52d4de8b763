//! A small, slot-keyed set of live contacts.
//!
//! The reference implementation this crate supersedes used a singly
//! linked list with manual splice-and-free bookkeeping. Contact sets are
//! expected to stay under ~10 entries (a generous bound on simultaneous
//! fingers), so a flat `Vec` scanned linearly is both simpler and faster
//! than a list here.

use crate::geometry::{Point, Sample};

/// A live touch point, created on a Down event and destroyed on the
/// matching Up event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub slot: i32,
    pub start: Point,
    pub current: Point,
}

impl Contact {
    /// This contact's start and current position, detached from its slot,
    /// for consumption by [`crate::geometry`].
    pub fn sample(&self) -> Sample {
        Sample::new(self.start, self.current)
    }
}

/// Contacts belonging to one progress record, keyed by slot.
#[derive(Debug, Clone, Default)]
pub struct ContactSet {
    contacts: Vec<Contact>,
}

impl ContactSet {
    /// Insert a new contact. A caller inserting a slot that is already
    /// present replaces it, though the recognizer never does this: a Down
    /// event for a live slot would violate the "slots are pairwise
    /// distinct" invariant upstream.
    pub fn insert(&mut self, slot: i32, at: Point) {
        self.contacts.retain(|c| c.slot != slot);
        self.contacts.push(Contact { slot, start: at, current: at });
    }

    /// Remove the contact with the given slot, if present.
    pub fn remove(&mut self, slot: i32) {
        self.contacts.retain(|c| c.slot != slot);
    }

    /// Mutably borrow the contact with the given slot.
    pub fn get_mut(&mut self, slot: i32) -> Option<&mut Contact> {
        self.contacts.iter_mut().find(|c| c.slot == slot)
    }

    /// Drop every contact, returning the set to its initial empty state.
    pub fn clear(&mut self) {
        self.contacts.clear();
    }

    /// Detached geometry samples for every live contact, for feeding into
    /// [`crate::geometry::centroid`] and friends.
    pub fn samples(&self) -> Vec<Sample> {
        self.contacts.iter().map(Contact::sample).collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn insert_then_remove_round_trips() {
        let mut set = ContactSet::default();
        set.insert(0, (10.0, 10.0));
        set.insert(1, (20.0, 20.0));
        assert_eq!(set.samples().len(), 2);

        set.remove(0);
        assert_eq!(set.samples().len(), 1);
        assert!(set.get_mut(0).is_none());
        assert!(set.get_mut(1).is_some());
    }

    #[test]
    fn reinserting_a_slot_replaces_it() {
        let mut set = ContactSet::default();
        set.insert(0, (1.0, 1.0));
        set.insert(0, (2.0, 2.0));
        assert_eq!(set.samples().len(), 1);
    }
}
