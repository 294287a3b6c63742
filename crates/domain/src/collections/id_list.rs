//! Ordered set of bare identifiers, used for multi-select state

/// Insertion-ordered list of unique ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdList<Id> {
    ids: Vec<Id>,
}

impl<Id> Default for IdList<Id> {
    fn default() -> Self {
        Self { ids: Vec::new() }
    }
}

impl<Id: Clone + PartialEq> IdList<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from ids, keeping the first occurrence of each.
    pub fn from_ids(ids: impl IntoIterator<Item = Id>) -> Self {
        ids.into_iter()
            .fold(Self::new(), |list, id| list.added(id))
    }

    /// Append `id`; unchanged if it is already present.
    pub fn added(&self, id: Id) -> Self {
        if self.has_id(&id) {
            return self.clone();
        }
        let mut ids = self.ids.clone();
        ids.push(id);
        Self { ids }
    }

    /// Remove `id`; unchanged if absent.
    pub fn removed(&self, id: &Id) -> Self {
        Self {
            ids: self.ids.iter().filter(|it| *it != id).cloned().collect(),
        }
    }

    /// Add `id` if absent, remove it if present.
    pub fn toggled(&self, id: Id) -> Self {
        if self.has_id(&id) {
            self.removed(&id)
        } else {
            self.added(id)
        }
    }

    pub fn has_id(&self, id: &Id) -> bool {
        self.ids.contains(id)
    }

    pub fn at(&self, index: usize) -> Option<&Id> {
        self.ids.get(index)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_not_empty(&self) -> bool {
        !self.ids.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Id> {
        self.ids.iter()
    }

    /// Keep only the ids for which `keep` returns true.
    pub fn retained(&self, mut keep: impl FnMut(&Id) -> bool) -> Self {
        Self {
            ids: self.ids.iter().filter(|id| keep(id)).cloned().collect(),
        }
    }
}

impl<Id: Clone + PartialEq> FromIterator<Id> for IdList<Id> {
    fn from_iter<I: IntoIterator<Item = Id>>(iter: I) -> Self {
        Self::from_ids(iter)
    }
}

impl<'a, Id> IntoIterator for &'a IdList<Id> {
    type Item = &'a Id;
    type IntoIter = std::slice::Iter<'a, Id>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}
