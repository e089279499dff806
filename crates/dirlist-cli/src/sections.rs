//! The three listings the demo prints for a directory.

use std::path::{Path, PathBuf};

use dirlist_core::{
    read_directory_with, sort_entries, Config, CoreResult, DirEntry, DirEntryList, EntryType,
    SortDirection, SortMode,
};

/// Directories, regular files, and a read-time filtered subset of one path.
#[derive(Debug)]
pub struct Sections {
    pub path: PathBuf,
    pub directories: DirEntryList,
    pub files: DirEntryList,
    pub filter_type: EntryType,
    pub filtered: DirEntryList,
}

impl Sections {
    /// Reads `path` twice: once in full (split into directories and files
    /// by filtering) and once restricted to `config.output.filter_type`.
    pub fn collect(path: &Path, config: &Config) -> CoreResult<Self> {
        let all = read_directory_with(path, None, &config.listing)?;
        let directories = all.filter_by_type(EntryType::Directory)?;
        let files = all.filter_by_type(EntryType::RegularFile)?;
        let released = all.free();
        tracing::debug!(released, "released full listing");

        let filter_type = config.output.filter_type;
        let filtered = read_directory_with(path, Some(filter_type), &config.listing)?;

        Ok(Self {
            path: path.to_path_buf(),
            directories,
            files,
            filter_type,
            filtered,
        })
    }
}

/// Entries of `list` in the order requested by `sort`.
pub fn ordered(list: &DirEntryList, sort: SortMode) -> Vec<DirEntry> {
    match sort {
        SortMode::None => list.entries().to_vec(),
        SortMode::Name => sort_entries(list.entries(), SortDirection::Ascending, false),
    }
}
