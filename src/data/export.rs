use anyhow::{Context, Result};

use super::model::Table;

// ---------------------------------------------------------------------------
// CSV export – "Download Dataset as CSV"
// ---------------------------------------------------------------------------

/// Serialize a table back to comma-delimited bytes, header row first.
///
/// Rows go through serde (`CellValue` is an untagged enum), which keeps the
/// output re-parseable into the same cells: floats always carry a decimal
/// point, integers never do, nulls become empty fields.
pub fn to_csv(table: &Table) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(&table.column_names)
        .context("writing CSV header")?;

    for (row_no, row) in table.rows.iter().enumerate() {
        writer
            .serialize(row)
            .with_context(|| format!("writing CSV row {row_no}"))?;
    }

    writer.into_inner().context("flushing CSV buffer")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_delimited;

    #[test]
    fn export_round_trips_through_the_parser() {
        let csv = "PassengerId,Name,Age,Fare,Survived\n\
                   1,Braund,22.0,7.25,0\n\
                   2,Cumings,,71.2833,1\n\
                   3,Heikkinen,26.0,7.925,1\n";
        let table = parse_delimited(csv.as_bytes(), b',').unwrap();

        let bytes = to_csv(&table).unwrap();
        let reparsed = parse_delimited(bytes.as_slice(), b',').unwrap();

        assert_eq!(table, reparsed);
    }

    #[test]
    fn floats_keep_their_decimal_point() {
        let csv = "Age\n22.0\n";
        let table = parse_delimited(csv.as_bytes(), b',').unwrap();
        let out = String::from_utf8(to_csv(&table).unwrap()).unwrap();
        // "22" would reload as an integer; the export must say "22.0".
        assert_eq!(out, "Age\n22.0\n");
    }
}
