//! Ordered list of id-bearing entities
//!
//! One generic implementation backs the map, detail, shape, preparation and
//! memo lists. Lookups return the first matching item.

/// Capability shared by every entity stored in a [`ListWithId`]
pub trait HasId {
    type Id: Clone + PartialEq;

    fn id(&self) -> &Self::Id;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListWithId<T> {
    items: Vec<T>,
}

impl<T> Default for ListWithId<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: HasId + Clone> ListWithId<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap items as-is. Id uniqueness is the caller's responsibility here.
    pub fn from_items(items: Vec<T>) -> Self {
        Self { items }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn find(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn find_index(&self, id: &T::Id) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn has_id(&self, id: &T::Id) -> bool {
        self.find_index(id).is_some()
    }

    pub fn at(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_not_empty(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn ids(&self) -> impl Iterator<Item = &T::Id> {
        self.items.iter().map(HasId::id)
    }

    // =========================================================================
    // Derived lists
    // =========================================================================

    pub fn filter(&self, mut predicate: impl FnMut(&T) -> bool) -> Self {
        Self {
            items: self.items.iter().filter(|item| predicate(item)).cloned().collect(),
        }
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Vec<U> {
        self.items.iter().map(f).collect()
    }

    /// Apply `f` to every item, keeping order.
    pub fn map_items(&self, f: impl FnMut(&T) -> T) -> Self {
        Self {
            items: self.items.iter().map(f).collect(),
        }
    }

    // =========================================================================
    // Updates
    // =========================================================================

    /// Append `item`; unchanged if an item with the same id already exists.
    pub fn added(&self, item: T) -> Self {
        if self.has_id(item.id()) {
            return self.clone();
        }
        let mut items = self.items.clone();
        items.push(item);
        Self { items }
    }

    /// Substitute the item sharing `item`'s id; unchanged if none does.
    pub fn replaced(&self, item: T) -> Self {
        let Some(index) = self.find_index(item.id()) else {
            return self.clone();
        };
        let mut items = self.items.clone();
        items[index] = item;
        Self { items }
    }

    /// Replace the item with `id` by `f(item)`; unchanged if absent.
    pub fn updated(&self, id: &T::Id, f: impl FnOnce(&T) -> T) -> Self {
        match self.find(id) {
            Some(item) => self.replaced(f(item)),
            None => self.clone(),
        }
    }

    pub fn removed(&self, id: &T::Id) -> Self {
        let Some(index) = self.find_index(id) else {
            return self.clone();
        };
        let mut items = self.items.clone();
        items.remove(index);
        Self { items }
    }

    /// Swap with the predecessor; no-op when absent or already first.
    pub fn moved_up(&self, id: &T::Id) -> Self {
        match self.find_index(id) {
            Some(index) if index > 0 => self.swapped(index - 1, index),
            _ => self.clone(),
        }
    }

    /// Swap with the successor; no-op when absent or already last.
    pub fn moved_down(&self, id: &T::Id) -> Self {
        match self.find_index(id) {
            Some(index) if index + 1 < self.items.len() => self.swapped(index, index + 1),
            _ => self.clone(),
        }
    }

    fn swapped(&self, a: usize, b: usize) -> Self {
        let mut items = self.items.clone();
        items.swap(a, b);
        Self { items }
    }
}

impl<T: HasId + Clone> FromIterator<T> for ListWithId<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a ListWithId<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for ListWithId<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
