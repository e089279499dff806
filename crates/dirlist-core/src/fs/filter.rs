//! Sorting helpers over entry slices.

use crate::fs::entry::DirEntry;

/// Sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// A–Z first.
    Ascending,
    /// Z–A first.
    Descending,
}

/// Sorts entries by name (case-insensitive).
///
/// When `dirs_first` is `true`, directories always appear before other
/// entries. Returns a **new** `Vec<DirEntry>`; the input is never mutated.
pub fn sort_entries(entries: &[DirEntry], direction: SortDirection, dirs_first: bool) -> Vec<DirEntry> {
    let mut sorted: Vec<DirEntry> = entries.to_vec();

    sorted.sort_by(|a, b| {
        if dirs_first {
            let dir_cmp = b.is_dir().cmp(&a.is_dir());
            if dir_cmp != std::cmp::Ordering::Equal {
                return dir_cmp;
            }
        }

        let ord = a.name().to_lowercase().cmp(&b.name().to_lowercase());

        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });

    sorted
}
