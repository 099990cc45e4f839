use std::fmt::{self, Debug, Display};

use crate::{Error, Result};

/// An identifier paired with its priority key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry<K> {
    /// External identifier, always `>= 1`
    pub id: usize,
    /// Priority; smaller keys are extracted first
    pub key: K,
}

/// Indexed d-ary min-heap over `(id, key)` pairs.
///
/// Alongside the array-encoded tree the heap keeps a reverse index from each
/// identifier to the slot currently holding it, which makes [`contains`] O(1)
/// and lets [`decrease_key`] start its float-up without searching.
///
/// Slots are numbered from 1: the parent of slot `i` is `(i - 2) / d + 1` and
/// its children are `d*i - d + 2 ..= d*i + 1`. Slot `i` lives at `slots[i - 1]`.
///
/// Identifiers range over `1..=capacity`; the capacity is fixed at construction.
///
/// [`contains`]: IndexedDaryHeap::contains
/// [`decrease_key`]: IndexedDaryHeap::decrease_key
#[derive(Debug, Clone)]
pub struct IndexedDaryHeap<K>
where
    K: PartialOrd + Copy + Debug,
{
    /// Branching factor
    d: usize,

    /// Occupied slots in tree order
    slots: Vec<HeapEntry<K>>,

    /// id -> 1-based slot, 0 when absent. Length is `capacity + 1`.
    position: Vec<usize>,
}

impl<K> IndexedDaryHeap<K>
where
    K: PartialOrd + Copy + Debug,
{
    /// Creates an empty heap accepting identifiers `1..=capacity`
    pub fn new(capacity: usize, d: usize) -> Result<Self> {
        if d == 0 {
            return Err(Error::InvalidBranchingFactor(d));
        }

        Ok(IndexedDaryHeap {
            d,
            slots: Vec::with_capacity(capacity),
            position: vec![0; capacity + 1],
        })
    }

    /// Returns the number of entries in the heap
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the heap holds no entries
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Largest admissible identifier
    pub fn capacity(&self) -> usize {
        self.position.len() - 1
    }

    /// Returns the branching factor `d`
    pub fn branching_factor(&self) -> usize {
        self.d
    }

    /// Returns true if `id` is currently in the heap
    pub fn contains(&self, id: usize) -> Result<bool> {
        self.check_id(id)?;
        Ok(self.position[id] != 0)
    }

    /// Current key of `id`, or `None` if it is absent or out of range
    pub fn key_of(&self, id: usize) -> Option<K> {
        self.position_of(id).map(|slot| self.key_at(slot))
    }

    /// 1-based slot currently holding `id`
    pub fn position_of(&self, id: usize) -> Option<usize> {
        match self.position.get(id) {
            Some(&slot) if id != 0 && slot != 0 => Some(slot),
            _ => None,
        }
    }

    /// Returns the minimum entry without removing it
    pub fn peek(&self) -> Option<&HeapEntry<K>> {
        self.slots.first()
    }

    /// Entries in array order (slot 1 first)
    pub fn entries(&self) -> &[HeapEntry<K>] {
        &self.slots
    }

    /// Keys in array order (slot 1 first)
    pub fn keys(&self) -> Vec<K> {
        self.slots.iter().map(|entry| entry.key).collect()
    }

    /// Inserts `id` with priority `key`.
    ///
    /// Fails if `id` is out of range or already present. Identifiers are unique
    /// and bounded by the capacity, so a full heap rejects every further id
    /// through one of those two checks.
    pub fn insert(&mut self, id: usize, key: K) -> Result<()> {
        self.check_id(id)?;
        if self.position[id] != 0 {
            return Err(Error::DuplicateId(id));
        }

        self.slots.push(HeapEntry { id, key });
        let slot = self.slots.len();
        self.position[id] = slot;
        self.float_up(slot);
        Ok(())
    }

    /// Removes and returns the entry with the smallest key
    pub fn extract_min(&mut self) -> Result<HeapEntry<K>> {
        if self.slots.is_empty() {
            return Err(Error::HeapEmpty);
        }

        // swap_remove moves the last occupied slot into slot 1
        let min = self.slots.swap_remove(0);
        self.position[min.id] = 0;

        if let Some(moved) = self.slots.first() {
            self.position[moved.id] = 1;
            self.sink_down(1);
        }

        Ok(min)
    }

    /// Lowers the key of `id` to `new_key` and restores heap order.
    ///
    /// `new_key` must not exceed the current key: only a float-up is performed,
    /// so a larger key would break heap order. Such calls are rejected with
    /// [`Error::KeyIncrease`] and leave the heap untouched.
    pub fn decrease_key(&mut self, id: usize, new_key: K) -> Result<()> {
        self.check_id(id)?;
        let slot = self.position[id];
        if slot == 0 {
            return Err(Error::MissingId(id));
        }
        if new_key > self.key_at(slot) {
            return Err(Error::KeyIncrease(id));
        }

        self.slots[slot - 1].key = new_key;
        self.float_up(slot);
        Ok(())
    }

    /// Removes every entry, keeping the capacity
    pub fn clear(&mut self) {
        for entry in self.slots.drain(..) {
            self.position[entry.id] = 0;
        }
    }

    fn check_id(&self, id: usize) -> Result<()> {
        if id == 0 || id > self.capacity() {
            return Err(Error::IdOutOfRange {
                id,
                capacity: self.capacity(),
            });
        }
        Ok(())
    }

    fn key_at(&self, slot: usize) -> K {
        self.slots[slot - 1].key
    }

    fn parent(&self, slot: usize) -> usize {
        (slot - 2) / self.d + 1
    }

    /// Exchanges two slots, keeping the position map in step
    fn swap_slots(&mut self, a: usize, b: usize) {
        self.slots.swap(a - 1, b - 1);
        self.position[self.slots[a - 1].id] = a;
        self.position[self.slots[b - 1].id] = b;
    }

    fn float_up(&mut self, mut slot: usize) {
        while slot > 1 {
            let parent = self.parent(slot);
            if self.key_at(slot) < self.key_at(parent) {
                self.swap_slots(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    /// Smallest child of `slot`, first one wins on ties
    fn min_child(&self, slot: usize) -> Option<usize> {
        let first = self.d * (slot - 1) + 2;
        let last = (self.d * slot + 1).min(self.slots.len());
        if first > last {
            return None;
        }

        let mut best = first;
        for child in first + 1..=last {
            if self.key_at(child) < self.key_at(best) {
                best = child;
            }
        }
        Some(best)
    }

    fn sink_down(&mut self, mut slot: usize) {
        while let Some(child) = self.min_child(slot) {
            if self.key_at(child) < self.key_at(slot) {
                self.swap_slots(slot, child);
                slot = child;
            } else {
                break;
            }
        }
    }
}

impl<K> Display for IndexedDaryHeap<K>
where
    K: PartialOrd + Copy + Debug + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for entry in &self.slots {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", entry.key)?;
            first = false;
        }
        Ok(())
    }
}
