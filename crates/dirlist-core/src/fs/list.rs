//! Growable, owned list of directory entries.

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::{DirEntry, EntryType};

/// Capacity a freshly read list starts with.
pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

/// Number of slots added each time a full list grows.
pub const DEFAULT_GROWTH_INCREMENT: usize = 10;

/// An ordered collection of [`DirEntry`] values with explicit capacity.
///
/// The list exclusively owns its entries. Capacity is tracked separately
/// from the backing `Vec` so that it is exactly what callers asked for:
/// `len() <= capacity()` always holds, and only the first `len()` slots
/// hold entries.
///
/// Dropping the list releases every entry. [`DirEntryList::free`] does the
/// same explicitly and reports how many entries were released.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryList {
    entries: Vec<DirEntry>,
    allocated: usize,
    growth_increment: usize,
}

impl DirEntryList {
    /// Creates an empty list with room for `capacity` entries.
    ///
    /// # Errors
    ///
    /// [`CoreError::AllocationFailed`] if the backing storage cannot be reserved.
    pub fn with_capacity(capacity: usize) -> CoreResult<Self> {
        let mut entries = Vec::new();
        entries.try_reserve_exact(capacity)?;
        Ok(Self {
            entries,
            allocated: capacity,
            growth_increment: DEFAULT_GROWTH_INCREMENT,
        })
    }

    /// Sets how many slots [`push`](Self::push) adds when the list is full.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidArgument`] if `increment` is zero.
    pub fn with_growth_increment(mut self, increment: usize) -> CoreResult<Self> {
        if increment == 0 {
            return Err(CoreError::InvalidArgument(
                "growth increment must be at least 1".to_string(),
            ));
        }
        self.growth_increment = increment;
        Ok(self)
    }

    /// Number of entries in the list.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the list holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of slots currently allocated. Never less than [`len`](Self::len).
    pub fn capacity(&self) -> usize {
        self.allocated
    }

    /// Returns the entry at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&DirEntry> {
        self.entries.get(index)
    }

    /// The entries as a slice, in insertion order.
    pub fn entries(&self) -> &[DirEntry] {
        &self.entries
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, DirEntry> {
        self.entries.iter()
    }

    /// Appends `entry`, growing capacity by the growth increment when full.
    ///
    /// # Errors
    ///
    /// [`CoreError::AllocationFailed`] if growing fails. The list is left
    /// unchanged in that case.
    pub fn push(&mut self, entry: DirEntry) -> CoreResult<()> {
        if self.entries.len() == self.allocated {
            let grown = self.allocated + self.growth_increment;
            tracing::trace!(from = self.allocated, to = grown, "growing entry list");
            self.resize(grown)?;
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Changes capacity to exactly `new_capacity`.
    ///
    /// Growing keeps every entry. Shrinking below [`len`](Self::len)
    /// releases the trailing entries so that `len() == new_capacity`.
    ///
    /// # Errors
    ///
    /// [`CoreError::AllocationFailed`] if growing fails.
    pub fn resize(&mut self, new_capacity: usize) -> CoreResult<()> {
        if new_capacity > self.allocated {
            let additional = new_capacity - self.entries.len();
            self.entries.try_reserve_exact(additional)?;
        } else {
            if new_capacity < self.entries.len() {
                let released = self.entries.drain(new_capacity..).count();
                tracing::trace!(released, new_capacity, "released trailing entries");
            }
            self.entries.shrink_to(new_capacity);
        }
        self.allocated = new_capacity;
        Ok(())
    }

    /// Shrinks capacity to the current length.
    pub fn shrink_to_fit(&mut self) {
        self.entries.shrink_to_fit();
        self.allocated = self.entries.len();
    }

    /// Calls `visit` once per entry, in order.
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&DirEntry),
    {
        for entry in &self.entries {
            visit(entry);
        }
    }

    /// Returns a new list holding copies of the entries whose type is `entry_type`.
    ///
    /// The source is not modified and the result shares nothing with it.
    /// When nothing matches the result is an empty list, never an error.
    ///
    /// # Errors
    ///
    /// [`CoreError::AllocationFailed`] if the result cannot be allocated.
    pub fn filter_by_type(&self, entry_type: EntryType) -> CoreResult<DirEntryList> {
        let mut filtered = DirEntryList::with_capacity(self.entries.len())?;
        for entry in self.entries.iter().filter(|e| e.entry_type() == entry_type) {
            filtered.push(entry.clone())?;
        }
        filtered.shrink_to_fit();
        Ok(filtered)
    }

    /// Releases every entry and the backing storage.
    ///
    /// Returns the number of entries released.
    pub fn free(self) -> usize {
        let released = self.entries.len();
        tracing::trace!(released, "freeing entry list");
        released
    }
}

impl Default for DirEntryList {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            allocated: 0,
            growth_increment: DEFAULT_GROWTH_INCREMENT,
        }
    }
}

impl<'a> IntoIterator for &'a DirEntryList {
    type Item = &'a DirEntry;
    type IntoIter = std::slice::Iter<'a, DirEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for DirEntryList {
    type Item = DirEntry;
    type IntoIter = std::vec::IntoIter<DirEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
