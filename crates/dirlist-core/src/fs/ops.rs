//! Directory reading operations.

use std::path::Path;

use crate::config::settings::ListingConfig;
use crate::error::{CoreError, CoreResult};
use crate::fs::entry::{DirEntry, EntryType};
use crate::fs::list::DirEntryList;

/// Reads every entry of a directory.
///
/// Equivalent to [`read_directory_with`] with no type filter and the
/// default [`ListingConfig`].
///
/// # Examples
///
/// ```no_run
/// use dirlist_core::read_directory;
/// use std::path::Path;
///
/// let entries = read_directory(Path::new("/home/user")).unwrap();
/// for entry in &entries {
///     println!("{entry}");
/// }
/// ```
pub fn read_directory(path: &Path) -> CoreResult<DirEntryList> {
    read_directory_with(path, None, &ListingConfig::default())
}

/// Reads only the entries of a directory whose type is `entry_type`.
pub fn read_directory_for_type(path: &Path, entry_type: EntryType) -> CoreResult<DirEntryList> {
    read_directory_with(path, Some(entry_type), &ListingConfig::default())
}

/// Reads the immediate contents of a directory into a [`DirEntryList`].
///
/// Entries named `.` and `..` are always skipped. When `type_filter` is
/// `Some`, only entries of that type are kept. Entries appear in the order
/// the OS yields them, which is **unspecified**; sort afterwards if needed.
///
/// The list starts at `config.initial_capacity`, grows by
/// `config.growth_increment` and is shrunk to its exact length before it
/// is returned. Symlinks are reported as [`EntryType::Symlink`], never
/// followed. An entry that cannot be read mid-listing is skipped.
///
/// # Errors
///
/// - [`CoreError::InvalidArgument`] — `path` is empty or the growth increment is zero.
/// - [`CoreError::NotFound`] — the path does not exist.
/// - [`CoreError::NotADirectory`] — the path is not a directory.
/// - [`CoreError::PermissionDenied`] — the path cannot be searched or read.
/// - [`CoreError::AllocationFailed`] — the list could not grow.
/// - [`CoreError::Io`] — any other I/O error.
pub fn read_directory_with(
    path: &Path,
    type_filter: Option<EntryType>,
    config: &ListingConfig,
) -> CoreResult<DirEntryList> {
    if path.as_os_str().is_empty() {
        return Err(CoreError::InvalidArgument("empty directory path".to_string()));
    }
    let metadata = std::fs::metadata(path).map_err(|e| CoreError::from_io(path, e))?;
    if !metadata.is_dir() {
        return Err(CoreError::NotADirectory(path.to_path_buf()));
    }

    let read_dir = std::fs::read_dir(path).map_err(|e| CoreError::from_io(path, e))?;

    let mut entries = DirEntryList::with_capacity(config.initial_capacity)?
        .with_growth_increment(config.growth_increment)?;

    for dir_entry in read_dir {
        let dir_entry = match dir_entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!("skipping unreadable entry in {}: {e}", path.display());
                continue;
            }
        };

        let file_name = dir_entry.file_name();
        if file_name == "." || file_name == ".." {
            continue;
        }

        let entry_type = match dir_entry.file_type() {
            Ok(ft) => EntryType::from_file_type(ft),
            Err(e) => {
                tracing::warn!(
                    "cannot determine type of {}: {e}",
                    dir_entry.path().display()
                );
                EntryType::Unknown
            }
        };
        if type_filter.is_some_and(|wanted| wanted != entry_type) {
            continue;
        }

        let entry = DirEntry::from_os_name(&file_name, entry_type);
        if !config.show_hidden && entry.is_hidden() {
            continue;
        }
        entries.push(entry)?;
    }

    entries.shrink_to_fit();

    tracing::debug!(
        path = %path.display(),
        filter = ?type_filter,
        count = entries.len(),
        "read directory"
    );

    Ok(entries)
}
