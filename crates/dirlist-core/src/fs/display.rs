//! Human-readable rendering of entry types and entries.

use crate::fs::entry::{DirEntry, EntryType};

/// Short symbolic name for `entry_type`, e.g. `"directory-type"`.
pub fn describe_type(entry_type: EntryType) -> &'static str {
    entry_type.short_name()
}

/// Long description for `entry_type`, e.g. `"Directory"`.
pub fn describe_type_long(entry_type: EntryType) -> &'static str {
    entry_type.description()
}

/// Formats an entry as `"<name> [<short name>/<description>]"`.
///
/// ```
/// use dirlist_core::{entry_to_string, DirEntry, EntryType};
///
/// let entry = DirEntry::new("docs", EntryType::Directory);
/// assert_eq!(entry_to_string(&entry), "docs [directory-type/Directory]");
/// ```
pub fn entry_to_string(entry: &DirEntry) -> String {
    entry.to_string()
}

/// Writes [`entry_to_string`] followed by a newline to stdout.
pub fn print_entry(entry: &DirEntry) {
    println!("{}", entry_to_string(entry));
}
