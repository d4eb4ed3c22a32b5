use std::io::{self, Write};
use std::path::PathBuf;

use chrono::NaiveDateTime;
use docs_core::{Mode, OutputLayout, OutputMode, ResultTable};
use docs_logging::docs_info;

use crate::filename::results_filename;
use crate::persist::{AtomicFileWriter, PersistError};

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
}

/// Sends `table` where `output` asks: stdout (plain or pretty) or a CSV file
/// under the results directory. Returns the file path in file mode.
pub fn control_output(
    table: &ResultTable,
    output: Option<OutputMode>,
    mode: Mode,
    layout: &OutputLayout,
    at: NaiveDateTime,
    console: &mut dyn Write,
) -> Result<Option<PathBuf>, OutputError> {
    match output {
        None => {
            console.write_all(render_plain(table).as_bytes())?;
            Ok(None)
        }
        Some(OutputMode::Pretty) => {
            console.write_all(render_pretty(table).as_bytes())?;
            Ok(None)
        }
        Some(OutputMode::File) => {
            let filename = results_filename(mode.as_str(), at);
            let path = write_csv(table, layout, &filename)?;
            docs_info!("Results saved to {}", path.display());
            Ok(Some(path))
        }
    }
}

/// One line per row, cells separated by a space.
pub fn render_plain(table: &ResultTable) -> String {
    let mut out = String::new();
    for row in table.all_rows() {
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}

/// ASCII borders, a rule under the header and no rules between rows.
const PRETTY_PRESET: &str = "||--+-++|    ++++++";

/// Bordered table with left-aligned columns padded to the widest cell.
pub fn render_pretty(table: &ResultTable) -> String {
    let mut pretty = comfy_table::Table::new();
    pretty
        .load_preset(PRETTY_PRESET)
        .set_header(table.header())
        .add_rows(table.rows());
    format!("{pretty}\n")
}

/// Writes `table` as CSV (every field quoted, `\n` line ends) to
/// `results/{filename}`.
pub fn write_csv(
    table: &ResultTable,
    layout: &OutputLayout,
    filename: &str,
) -> Result<PathBuf, OutputError> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for row in table.all_rows() {
        writer.write_record(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| OutputError::Io(err.into_error()))?;

    let path = AtomicFileWriter::new(layout.results_dir()).write_bytes(filename, &bytes)?;
    Ok(path)
}
