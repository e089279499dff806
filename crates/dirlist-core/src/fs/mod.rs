//! Directory listing primitives.
//!
//! This module provides the entry types ([`entry::DirEntry`],
//! [`entry::EntryType`]), the owned growable list ([`list::DirEntryList`]),
//! directory reads ([`ops::read_directory`]) and text rendering
//! ([`display::entry_to_string`]).

pub mod display;
pub mod entry;
pub mod filter;
pub mod list;
pub mod ops;
