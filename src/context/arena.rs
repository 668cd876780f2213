use slab::Slab;
use std::num::Wrapping;

/// Slot index plus the generation it was issued under.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    index: usize,
    generation: u32,
}

/// `Slab` whose keys go stale once their entry is removed, even if the slot
/// is reused by a later insert.
pub(crate) struct Arena<T> {
    entries: Slab<(u32, T)>,
    generation: Wrapping<u32>,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Slab::new(),
            generation: Wrapping(0),
        }
    }

    pub(crate) fn insert(&mut self, value: T) -> Key {
        self.generation += Wrapping(1);
        let generation = self.generation.0;
        let index = self.entries.insert((generation, value));
        Key { index, generation }
    }

    pub(crate) fn get(&self, key: Key) -> Option<&T> {
        match self.entries.get(key.index) {
            Some((generation, value)) if *generation == key.generation => Some(value),
            _ => None,
        }
    }

    pub(crate) fn get_mut(&mut self, key: Key) -> Option<&mut T> {
        match self.entries.get_mut(key.index) {
            Some((generation, value)) if *generation == key.generation => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn contains(&self, key: Key) -> bool {
        self.get(key).is_some()
    }

    pub(crate) fn try_remove(&mut self, key: Key) -> Option<T> {
        if !self.contains(key) {
            return None;
        }
        self.entries.try_remove(key.index).map(|(_, value)| value)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.entries.drain().map(|(_, value)| value)
    }
}
