// crates/cli/src/presentation.rs
use comfy_table::presets::NOTHING;
use comfy_table::{Cell, CellAlignment, Table};
use delete_old_files_engine::record::{FileRecord, total_size};
use std::io::{self, Write};

/// Rows shown before the listing is cut short.
pub const TRUNCATE_LEN: usize = 30;

pub fn render_table(records: &[FileRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec!["FileName", "Size", "ModTime"]);

    for record in records.iter().take(TRUNCATE_LEN) {
        table.add_row(vec![
            Cell::new(record.name()),
            Cell::new(record.size.to_human()).set_alignment(CellAlignment::Right),
            Cell::new(record.mtime).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

/// Count and cumulative size over every record, not only the displayed ones.
pub fn summary_line(records: &[FileRecord]) -> String {
    let hint = format!(
        "Total: {} file(s), {}",
        records.len(),
        total_size(records).to_human()
    );
    if records.len() > TRUNCATE_LEN {
        format!("Showing first {TRUNCATE_LEN} files only, {hint}")
    } else {
        hint
    }
}

pub fn print_selection<W: Write>(out: &mut W, records: &[FileRecord]) -> io::Result<()> {
    writeln!(out, "{}", render_table(records))?;
    writeln!(out, "{}", summary_line(records))
}
