//! Directory entry representation.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::error::CoreError;

/// The kind of filesystem object a directory entry refers to.
///
/// This is a closed set. "Accept every type" is not a variant: read
/// operations take an `Option<EntryType>` and use `None` for that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryType {
    /// Block device node.
    BlockDevice,
    /// Character device node.
    CharDevice,
    /// Directory.
    Directory,
    /// Named pipe (FIFO).
    NamedPipe,
    /// Symbolic link. Links are reported as themselves, never followed.
    Symlink,
    /// Regular file.
    RegularFile,
    /// UNIX domain socket.
    Socket,
    /// The filesystem did not report a type, or reported one outside this set.
    Unknown,
}

impl EntryType {
    /// Every defined entry type, in `d_type` code order.
    pub const ALL: [EntryType; 8] = [
        EntryType::Unknown,
        EntryType::NamedPipe,
        EntryType::CharDevice,
        EntryType::Directory,
        EntryType::BlockDevice,
        EntryType::RegularFile,
        EntryType::Symlink,
        EntryType::Socket,
    ];

    /// Classifies a [`std::fs::FileType`] obtained without following symlinks.
    pub fn from_file_type(file_type: std::fs::FileType) -> Self {
        if file_type.is_symlink() {
            return EntryType::Symlink;
        }
        if file_type.is_dir() {
            return EntryType::Directory;
        }
        if file_type.is_file() {
            return EntryType::RegularFile;
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::FileTypeExt;

            if file_type.is_block_device() {
                return EntryType::BlockDevice;
            }
            if file_type.is_char_device() {
                return EntryType::CharDevice;
            }
            if file_type.is_fifo() {
                return EntryType::NamedPipe;
            }
            if file_type.is_socket() {
                return EntryType::Socket;
            }
        }

        EntryType::Unknown
    }

    /// Maps a raw `d_type` byte to an entry type.
    ///
    /// Unrecognised bytes map to [`EntryType::Unknown`].
    pub fn from_dirent_type(raw: u8) -> Self {
        match raw {
            1 => EntryType::NamedPipe,
            2 => EntryType::CharDevice,
            4 => EntryType::Directory,
            6 => EntryType::BlockDevice,
            8 => EntryType::RegularFile,
            10 => EntryType::Symlink,
            12 => EntryType::Socket,
            _ => EntryType::Unknown,
        }
    }

    /// Short symbolic name, e.g. `"directory-type"`.
    pub fn short_name(self) -> &'static str {
        match self {
            EntryType::BlockDevice => "block-device-type",
            EntryType::CharDevice => "character-device-type",
            EntryType::Directory => "directory-type",
            EntryType::NamedPipe => "named-pipe-type",
            EntryType::Symlink => "symlink-type",
            EntryType::RegularFile => "regular-file-type",
            EntryType::Socket => "socket-type",
            EntryType::Unknown => "unknown-type",
        }
    }

    /// Human-readable description, e.g. `"Regular File"`.
    pub fn description(self) -> &'static str {
        match self {
            EntryType::BlockDevice => "Block Device",
            EntryType::CharDevice => "Character Device",
            EntryType::Directory => "Directory",
            EntryType::NamedPipe => "Named Pipe",
            EntryType::Symlink => "Symbolic Link",
            EntryType::RegularFile => "Regular File",
            EntryType::Socket => "UNIX Domain Socket",
            EntryType::Unknown => "Unknown File Type",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for EntryType {
    type Err = CoreError;

    /// Parses a type name. Accepts the short `*-type` names, common aliases
    /// such as `dir`, `file` and `link`, and raw `d_type` byte values.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(raw) = s.trim().parse::<u8>() {
            return Ok(EntryType::from_dirent_type(raw));
        }
        let lower = s.trim().to_ascii_lowercase();
        let name = lower.strip_suffix("-type").unwrap_or(&lower);
        match name {
            "block" | "block-device" | "blk" => Ok(EntryType::BlockDevice),
            "char" | "character-device" | "char-device" | "chr" => Ok(EntryType::CharDevice),
            "dir" | "directory" => Ok(EntryType::Directory),
            "fifo" | "pipe" | "named-pipe" => Ok(EntryType::NamedPipe),
            "link" | "symlink" | "lnk" => Ok(EntryType::Symlink),
            "file" | "regular-file" | "reg" => Ok(EntryType::RegularFile),
            "socket" | "sock" => Ok(EntryType::Socket),
            "unknown" => Ok(EntryType::Unknown),
            _ => Err(CoreError::InvalidArgument(format!("unknown entry type: {s}"))),
        }
    }
}

/// A single item of a directory listing.
///
/// The raw OS file name is the entry's identity. `name()` is its UTF-8
/// form (lossy only for non-UTF-8 names); NFC normalisation is applied
/// only when displaying. Entries are owned values; cloning one produces a
/// fully independent copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DirEntry {
    #[serde(skip)]
    file_name: OsString,
    name: String,
    #[serde(rename = "type")]
    entry_type: EntryType,
}

impl DirEntry {
    /// Creates an entry from a name and a type.
    pub fn new(name: impl Into<String>, entry_type: EntryType) -> Self {
        let name = name.into();
        Self {
            file_name: OsString::from(&name),
            name,
            entry_type,
        }
    }

    /// Creates an entry from a raw OS file name, keeping it unchanged.
    pub fn from_os_name(file_name: &OsStr, entry_type: EntryType) -> Self {
        Self {
            file_name: file_name.to_os_string(),
            name: file_name.to_string_lossy().into_owned(),
            entry_type,
        }
    }

    /// Returns the entry's file name as UTF-8.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the file name exactly as the OS reported it.
    pub fn file_name(&self) -> &OsStr {
        &self.file_name
    }

    /// Returns the path of this entry inside `dir`.
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(&self.file_name)
    }

    /// Returns the name normalised to NFC, so decomposed names (as stored
    /// by macOS) display correctly.
    pub fn display_name(&self) -> String {
        self.name.nfc().collect()
    }

    /// Returns the entry's type.
    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    /// Returns `true` if this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.entry_type == EntryType::Directory
    }

    /// Returns `true` if the name starts with `.`.
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

impl fmt::Display for DirEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}/{}]",
            self.display_name(),
            self.entry_type.short_name(),
            self.entry_type.description()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn dirent_codes_map_to_types() {
        let codes = [0u8, 1, 2, 4, 6, 8, 10, 12];
        for (raw, ty) in codes.into_iter().zip(EntryType::ALL) {
            assert_eq!(EntryType::from_dirent_type(raw), ty);
        }
    }

    #[test]
    fn parse_numeric_dirent_code() {
        assert_eq!("4".parse::<EntryType>().unwrap(), EntryType::Directory);
        assert_eq!("10".parse::<EntryType>().unwrap(), EntryType::Symlink);
        assert_eq!("200".parse::<EntryType>().unwrap(), EntryType::Unknown);
    }

    #[test]
    fn unrecognised_dirent_code_is_unknown() {
        for raw in [3u8, 5, 7, 9, 11, 13, 14, 63, 255] {
            assert_eq!(EntryType::from_dirent_type(raw), EntryType::Unknown);
        }
    }

    #[test]
    fn short_names_and_descriptions_are_distinct() {
        let shorts: std::collections::HashSet<_> =
            EntryType::ALL.iter().map(|t| t.short_name()).collect();
        let longs: std::collections::HashSet<_> =
            EntryType::ALL.iter().map(|t| t.description()).collect();

        assert_eq!(shorts.len(), EntryType::ALL.len());
        assert_eq!(longs.len(), EntryType::ALL.len());
    }

    #[test]
    fn parse_aliases() {
        assert_eq!("dir".parse::<EntryType>().unwrap(), EntryType::Directory);
        assert_eq!("Directory".parse::<EntryType>().unwrap(), EntryType::Directory);
        assert_eq!(
            "regular-file-type".parse::<EntryType>().unwrap(),
            EntryType::RegularFile
        );
        assert_eq!("link".parse::<EntryType>().unwrap(), EntryType::Symlink);
        assert_eq!("fifo".parse::<EntryType>().unwrap(), EntryType::NamedPipe);
        assert_eq!(" sock ".parse::<EntryType>().unwrap(), EntryType::Socket);
    }

    #[test]
    fn parse_rejects_unknown_name() {
        let err = "bogus".parse::<EntryType>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument(_)));
    }

    #[test]
    fn short_name_round_trips_through_parse() {
        for ty in EntryType::ALL {
            assert_eq!(ty.short_name().parse::<EntryType>().unwrap(), ty);
        }
    }

    #[test]
    fn file_type_of_regular_file_and_dir() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "x").unwrap();
        fs::create_dir(tmp.path().join("d")).unwrap();

        let file = fs::symlink_metadata(tmp.path().join("a.txt")).unwrap();
        let dir = fs::symlink_metadata(tmp.path().join("d")).unwrap();

        assert_eq!(EntryType::from_file_type(file.file_type()), EntryType::RegularFile);
        assert_eq!(EntryType::from_file_type(dir.file_type()), EntryType::Directory);
    }

    #[cfg(unix)]
    #[test]
    fn file_type_of_symlink_is_not_followed() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("target")).unwrap();
        std::os::unix::fs::symlink(tmp.path().join("target"), tmp.path().join("link")).unwrap();

        let meta = fs::symlink_metadata(tmp.path().join("link")).unwrap();
        assert_eq!(EntryType::from_file_type(meta.file_type()), EntryType::Symlink);
    }

    #[test]
    fn display_format() {
        let entry = DirEntry::new("README.md", EntryType::RegularFile);
        assert_eq!(entry.to_string(), "README.md [regular-file-type/Regular File]");
    }

    #[test]
    fn hidden_detection() {
        assert!(DirEntry::new(".env", EntryType::RegularFile).is_hidden());
        assert!(!DirEntry::new("env", EntryType::RegularFile).is_hidden());
    }

    #[test]
    fn os_name_kept_raw_and_displayed_as_nfc() {
        // "한" written as decomposed jamo
        let decomposed = "\u{1112}\u{1161}\u{11AB}.txt";
        let entry = DirEntry::from_os_name(OsStr::new(decomposed), EntryType::RegularFile);

        assert_eq!(entry.name(), decomposed);
        assert_eq!(entry.file_name(), OsStr::new(decomposed));
        assert_eq!(entry.display_name(), "한.txt");
        assert_eq!(entry.to_string(), "한.txt [regular-file-type/Regular File]");
    }

    #[test]
    fn composed_and_decomposed_names_are_distinct_entries() {
        let composed = DirEntry::from_os_name(OsStr::new("\u{00e9}.txt"), EntryType::RegularFile);
        let decomposed =
            DirEntry::from_os_name(OsStr::new("e\u{0301}.txt"), EntryType::RegularFile);

        assert_ne!(composed, decomposed);
        assert_ne!(composed.name(), decomposed.name());
        assert_eq!(composed.display_name(), decomposed.display_name());
    }

    #[test]
    fn path_in_joins_raw_name() {
        let entry = DirEntry::from_os_name(OsStr::new("e\u{0301}.txt"), EntryType::RegularFile);
        assert_eq!(
            entry.path_in(Path::new("/data")),
            PathBuf::from("/data/e\u{0301}.txt")
        );
    }

    #[test]
    fn serializes_with_kebab_case_type() {
        let entry = DirEntry::new("docs", EntryType::Directory);
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"name":"docs","type":"directory"}"#);
    }
}
