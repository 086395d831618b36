//! `SlotMap` — a generational arena.
//!
//! Values are addressed by a [`SlotKey`] made of a slot index and a
//! generation counter. Removing a value bumps the slot's generation, so every
//! key issued before the removal stops resolving, even after the slot is
//! reused (ABA protection).
//!
//! Implementation details:
//! - Uses a plain `Vec` of slots; a slot is either occupied or a link in the
//!   intrusive free list.
//! - Free slots are reused LIFO.
//! - `clear` invalidates every outstanding key but keeps the allocation.

/// A key for accessing a [`SlotMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotKey {
    index: usize,
    generation: u32,
}

impl SlotKey {
    fn new(index: usize, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Raw slot index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Generation the slot had when this key was issued.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

enum SlotState<T> {
    Occupied(T),
    Free { next_free: Option<usize> },
}

struct Slot<T> {
    generation: u32,
    state: SlotState<T>,
}

impl<T> Slot<T> {
    fn matches(&self, key: SlotKey) -> bool {
        self.generation == key.generation && matches!(self.state, SlotState::Occupied(_))
    }
}

/// A generational slot map.
pub struct SlotMap<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> SlotMap<T> {
    /// Creates a new empty slot map.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    /// Creates a new slot map with room for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    /// Reserves room for at least `additional` more values.
    pub fn reserve(&mut self, additional: usize) {
        self.slots.reserve(additional);
    }

    /// Number of live values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no value is live.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a value, returning its key.
    pub fn insert(&mut self, value: T) -> SlotKey {
        self.len += 1;

        if let Some(idx) = self.free_head {
            let slot = &mut self.slots[idx];
            if let SlotState::Free { next_free } = slot.state {
                self.free_head = next_free;
            }
            slot.state = SlotState::Occupied(value);
            SlotKey::new(idx, slot.generation)
        } else {
            let idx = self.slots.len();
            self.slots.push(Slot {
                generation: 0,
                state: SlotState::Occupied(value),
            });
            SlotKey::new(idx, 0)
        }
    }

    /// Returns a shared reference to the value behind `key`, if it is still live.
    pub fn get(&self, key: SlotKey) -> Option<&T> {
        match self.slots.get(key.index) {
            Some(Slot {
                generation,
                state: SlotState::Occupied(value),
            }) if *generation == key.generation => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to the value behind `key`, if it is still live.
    pub fn get_mut(&mut self, key: SlotKey) -> Option<&mut T> {
        match self.slots.get_mut(key.index) {
            Some(Slot {
                generation,
                state: SlotState::Occupied(value),
            }) if *generation == key.generation => Some(value),
            _ => None,
        }
    }

    /// Returns `true` if `key` still resolves.
    pub fn contains_key(&self, key: SlotKey) -> bool {
        self.slots.get(key.index).is_some_and(|slot| slot.matches(key))
    }

    /// Removes the value behind `key`, invalidating the key.
    pub fn remove(&mut self, key: SlotKey) -> Option<T> {
        let slot = self.slots.get_mut(key.index)?;
        if !slot.matches(key) {
            return None;
        }

        let vacated = core::mem::replace(
            &mut slot.state,
            SlotState::Free {
                next_free: self.free_head,
            },
        );
        slot.generation = slot.generation.wrapping_add(1);
        self.free_head = Some(key.index);
        self.len -= 1;

        match vacated {
            SlotState::Occupied(value) => Some(value),
            SlotState::Free { .. } => None,
        }
    }

    /// Drops every value. Keys issued before the call no longer resolve.
    pub fn clear(&mut self) {
        if self.slots.is_empty() {
            return;
        }

        let mut next_free = None;
        for (idx, slot) in self.slots.iter_mut().enumerate().rev() {
            if matches!(slot.state, SlotState::Occupied(_)) {
                slot.generation = slot.generation.wrapping_add(1);
            }
            slot.state = SlotState::Free { next_free };
            next_free = Some(idx);
        }

        self.free_head = next_free;
        self.len = 0;
    }

    /// Iterates over live `(key, value)` pairs in slot order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: self.slots.iter().enumerate(),
            remaining: self.len,
        }
    }
}

impl<T> Default for SlotMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the live entries of a [`SlotMap`].
pub struct Iter<'a, T> {
    slots: core::iter::Enumerate<core::slice::Iter<'a, Slot<T>>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (SlotKey, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        for (idx, slot) in self.slots.by_ref() {
            if let SlotState::Occupied(value) = &slot.state {
                self.remaining -= 1;
                return Some((SlotKey::new(idx, slot.generation), value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_map_basic() {
        let mut map = SlotMap::new();
        assert!(map.is_empty());

        let k1 = map.insert(10);
        let k2 = map.insert(20);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get(k1), Some(&10));
        assert_eq!(map.get(k2), Some(&20));

        *map.get_mut(k1).unwrap() = 11;
        assert_eq!(map.get(k1), Some(&11));

        assert_eq!(map.remove(k1), Some(11));
        assert_eq!(map.len(), 1);
        assert!(map.get(k1).is_none());
        assert!(!map.contains_key(k1));

        // Reuses k1's slot under a new generation.
        let k3 = map.insert(30);
        assert_eq!(k3.index(), k1.index());
        assert_ne!(k3.generation(), k1.generation());
        assert_eq!(map.get(k3), Some(&30));
        assert!(map.get(k1).is_none());
    }

    #[test]
    fn test_slot_map_double_remove() {
        let mut map = SlotMap::new();
        let k = map.insert("a");
        assert_eq!(map.remove(k), Some("a"));
        assert_eq!(map.remove(k), None);
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn test_slot_map_iter() {
        let mut map = SlotMap::new();
        let keys: Vec<_> = (0..10).map(|i| map.insert(i * 10)).collect();
        map.remove(keys[3]);

        let seen: Vec<_> = map.iter().collect();
        assert_eq!(seen.len(), 9);
        for (k, v) in seen {
            assert!(keys.contains(&k));
            assert_eq!(k.index() * 10, *v);
        }
    }

    #[test]
    fn test_slot_map_clear() {
        let mut map = SlotMap::new();
        let keys: Vec<_> = (0..10).map(|i| map.insert(i)).collect();
        assert_eq!(map.len(), 10);

        map.clear();
        assert_eq!(map.len(), 0);
        assert!(keys.iter().all(|&k| !map.contains_key(k)));

        for i in 0..5 {
            map.insert(i + 100);
        }
        assert_eq!(map.len(), 5);
        assert!(keys.iter().all(|&k| map.get(k).is_none()));
    }
}
