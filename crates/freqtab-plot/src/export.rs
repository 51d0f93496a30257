//! CSV export of a generated table

use std::io::Write;

use freqtab_core::{Error, Result};
use freqtab_table::FrequencyTable;

/// Write the table as delimited rows.
///
/// Columns: class index (1-based), interval label, class midpoint,
/// absolute frequency, cumulative absolute frequency, and the relative
/// frequency as a percentage.
pub fn write_csv<W: Write>(table: &FrequencyTable, writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record([
        "class",
        "interval",
        "midpoint",
        "absolute",
        "cumulative_absolute",
        "relative_percentage",
    ])
    .map_err(to_error)?;

    for (i, row) in table.rows().iter().enumerate() {
        csv.write_record([
            (i + 1).to_string(),
            row.interval.label.clone(),
            format!("{:.4}", row.interval.midpoint()),
            row.absolute.to_string(),
            row.cumulative_absolute.to_string(),
            format!("{:.2}", row.percentage),
        ])
        .map_err(to_error)?;
    }

    csv.flush()
        .map_err(|e| Error::Export(format!("CSV flush failed: {e}")))?;
    Ok(())
}

/// Render the table to a CSV string.
pub fn csv_string(table: &FrequencyTable) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(table, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| Error::Export(format!("CSV not UTF-8: {e}")))
}

fn to_error(e: csv::Error) -> Error {
    Error::Export(format!("CSV write failed: {e}"))
}
