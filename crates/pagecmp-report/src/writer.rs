use std::io::{self, Write};
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook, XlsxError};
use thiserror::Error;

use crate::compare::ComparisonRow;

const HEADER: [&str; 2] = ["Category Items", "Is Exist"];
const MATCHED_MARK: &str = "✓";
const MISSING_MARK: &str = "✕";
const MATCHED_COLOR: Color = Color::RGB(0x00FF00);
const MISSING_COLOR: Color = Color::RGB(0xFF0000);
const ITEM_COL_WIDTH: f64 = 80.0;
const MARK_COL_WIDTH: f64 = 25.0;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("couldn't build workbook")]
    Workbook(#[from] XlsxError),
    #[error("couldn't write {}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Renders the rows into the two-column styled sheet and replaces `path`
/// with it.
pub fn export(rows: &[ComparisonRow], path: &Path) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    let centered = Format::new()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);

    sheet.set_column_width(0, ITEM_COL_WIDTH)?;
    sheet.set_column_width(1, MARK_COL_WIDTH)?;
    sheet.write_string_with_format(0, 0, HEADER[0], &centered)?;
    sheet.write_string_with_format(0, 1, HEADER[1], &centered)?;

    for (i, row) in rows.iter().enumerate() {
        let r = i as u32 + 1;
        let (mark, color) = verdict(row.matched);
        sheet.write_string_with_format(r, 0, row.item.as_str(), &centered)?;
        sheet.write_string_with_format(r, 1, mark, &centered.clone().set_background_color(color))?;
    }

    let buf = workbook.save_to_buffer()?;
    persist(path, &buf).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

// Mark and fill for the second column; the pair never splits.
fn verdict(matched: bool) -> (&'static str, Color) {
    if matched {
        (MATCHED_MARK, MATCHED_COLOR)
    } else {
        (MISSING_MARK, MISSING_COLOR)
    }
}

// A failed run must never leave a truncated report behind, so the workbook
// lands in a sibling temp file that is renamed over the target.
fn persist(path: &Path, buf: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(buf)?;
    tmp.persist(path)?;
    Ok(())
}
