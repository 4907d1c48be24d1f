use std::cell::OnceCell;

/// Fixed-size table of lazily created views.
///
/// Each slot is populated at most once and keeps its view until the cache is dropped.
pub(crate) struct ViewCache<V> {
    slots: Box<[OnceCell<V>]>,
}

impl<V> ViewCache<V> {
    pub(crate) fn new(len: usize) -> Self {
        ViewCache {
            slots: (0..len).map(|_| OnceCell::new()).collect(),
        }
    }

    pub(crate) fn get(&self, index: usize) -> Option<&V> {
        self.slots.get(index).and_then(|slot| slot.get())
    }

    /// Returns the view in slot `index`, creating it with `create` if the slot is empty.
    ///
    /// Returns `None` if `index` is out of bounds. A failed `create` leaves the slot empty.
    pub(crate) fn get_or_try_insert_with<E, F>(
        &self,
        index: usize,
        create: F,
    ) -> Option<Result<&V, E>>
    where
        F: FnOnce() -> Result<V, E>,
    {
        let slot = self.slots.get(index)?;

        if let Some(view) = slot.get() {
            return Some(Ok(view));
        }

        Some(create().map(|view| slot.get_or_init(|| view)))
    }

    pub(crate) fn populated(&self) -> usize {
        self.slots.iter().filter(|slot| slot.get().is_some()).count()
    }

    /// Drops all cached views, returning how many there were.
    pub(crate) fn clear(&mut self) -> usize {
        let mut released = 0;

        for slot in self.slots.iter_mut() {
            if slot.take().is_some() {
                released += 1;
            }
        }

        released
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn slot_is_created_once() {
        let cache = ViewCache::<u32>::new(4);
        let calls = Cell::new(0);

        let create = || {
            calls.set(calls.get() + 1);

            Ok::<_, ()>(7)
        };

        let first = cache.get_or_try_insert_with(2, create).unwrap().unwrap() as *const u32;
        let second = cache
            .get_or_try_insert_with(2, || Ok::<_, ()>(8))
            .unwrap()
            .unwrap() as *const u32;

        assert_eq!(calls.get(), 1);
        assert_eq!(first, second);
        assert_eq!(cache.get(2), Some(&7));
        assert_eq!(cache.populated(), 1);
    }

    #[test]
    fn failed_creation_leaves_slot_empty() {
        let cache = ViewCache::<u32>::new(2);

        let result = cache.get_or_try_insert_with(0, || Err("refused"));

        assert_eq!(result, Some(Err("refused")));
        assert_eq!(cache.get(0), None);
        assert_eq!(cache.populated(), 0);
    }

    #[test]
    fn out_of_bounds_index_is_none() {
        let cache = ViewCache::<u32>::new(2);

        assert!(cache.get_or_try_insert_with(2, || Ok::<_, ()>(1)).is_none());
        assert_eq!(cache.get(5), None);
    }

    #[test]
    fn clear_releases_every_view() {
        let mut cache = ViewCache::<u32>::new(3);

        cache.get_or_try_insert_with(0, || Ok::<_, ()>(1));
        cache.get_or_try_insert_with(2, || Ok::<_, ()>(3));

        assert_eq!(cache.clear(), 2);
        assert_eq!(cache.populated(), 0);
    }
}
