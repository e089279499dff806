//! dirlist core library: typed directory listings.
//!
//! `dirlist-core` reads the immediate contents of a directory into an owned,
//! growable [`DirEntryList`], narrows lists by [`EntryType`], and renders
//! entries as text. It has no UI of its own; the `dirlist` binary is a thin
//! frontend over it.
//!
//! # Modules
//!
//! - [`fs`] — Entries, entry lists, directory reads, filtering and rendering.
//! - [`config`] — TOML-based listing and output settings.
//! - [`error`] — Unified error type ([`CoreError`]) and result alias ([`CoreResult`]).
//!
//! # Example
//!
//! ```no_run
//! use dirlist_core::{read_directory, EntryType};
//! use std::path::Path;
//!
//! let all = read_directory(Path::new(".")).unwrap();
//! let files = all.filter_by_type(EntryType::RegularFile).unwrap();
//! files.for_each(dirlist_core::print_entry);
//! ```

pub mod config;
pub mod error;
pub mod fs;

pub use config::settings::{Config, ListingConfig, OutputConfig, OutputFormat, SortMode};
pub use error::{CoreError, CoreResult};
pub use fs::display::{describe_type, describe_type_long, entry_to_string, print_entry};
pub use fs::entry::{DirEntry, EntryType};
pub use fs::filter::{sort_entries, SortDirection};
pub use fs::list::{DirEntryList, DEFAULT_GROWTH_INCREMENT, DEFAULT_INITIAL_CAPACITY};
pub use fs::ops::{read_directory, read_directory_for_type, read_directory_with};
