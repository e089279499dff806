//! Text and JSON rendering of [`Sections`].

use crossterm::style::Stylize;
use dirlist_core::{entry_to_string, DirEntry, SortMode};
use serde::Serialize;

use crate::sections::{ordered, Sections};

/// Renders one titled section: a `"<title> (<count>)"` heading followed by
/// one line per entry.
pub fn render_section(title: &str, entries: &[DirEntry], bold: bool) -> String {
    let heading = format!("{title} ({})", entries.len());
    let mut out = if bold {
        heading.as_str().bold().to_string()
    } else {
        heading
    };
    out.push('\n');
    for entry in entries {
        out.push_str(&entry_to_string(entry));
        out.push('\n');
    }
    out
}

/// Renders the directories, files and filtered sections separated by blank lines.
pub fn render_text(sections: &Sections, sort: SortMode, bold: bool) -> String {
    [
        render_section("Directories", &ordered(&sections.directories, sort), bold),
        render_section("Files", &ordered(&sections.files, sort), bold),
        render_section("Filtered", &ordered(&sections.filtered, sort), bold),
    ]
    .join("\n")
}

#[derive(Serialize)]
struct JsonReport<'a> {
    path: &'a std::path::Path,
    directories: Vec<DirEntry>,
    files: Vec<DirEntry>,
    filter_type: dirlist_core::EntryType,
    filtered: Vec<DirEntry>,
}

/// Renders all sections as a pretty-printed JSON document.
pub fn render_json(sections: &Sections, sort: SortMode) -> serde_json::Result<String> {
    let report = JsonReport {
        path: &sections.path,
        directories: ordered(&sections.directories, sort),
        files: ordered(&sections.files, sort),
        filter_type: sections.filter_type,
        filtered: ordered(&sections.filtered, sort),
    };
    serde_json::to_string_pretty(&report)
}
