use std::io::Read;
use std::path::Path;

use anyhow::Context;

use super::catalog::{DataError, DatasetId};
use super::model::{CellValue, Table};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load one of the fixed datasets from `path` and validate it against the
/// columns its view handler needs. Any read or parse failure is fatal to
/// the caller; there is no retry and no partial table.
pub fn load(id: DatasetId, path: &Path) -> Result<Table, DataError> {
    let file = std::fs::File::open(path).map_err(|source| DataError::MissingFile {
        path: path.to_path_buf(),
        source,
    })?;

    let table = parse_delimited(file, id.delimiter())
        .with_context(|| format!("parsing {}", path.display()))?;

    if table.is_empty() {
        return Err(DataError::EmptyDataset {
            dataset: id.label(),
        });
    }
    for &column in id.required_columns() {
        if table.column_index(column).is_none() {
            return Err(DataError::MissingColumn {
                dataset: id.label(),
                column,
            });
        }
    }
    Ok(table)
}

// ---------------------------------------------------------------------------
// Delimited-text parser
// ---------------------------------------------------------------------------

/// Parse delimited text (header row first) into a [`Table`], inferring the
/// type of each cell independently. Short rows are padded with nulls so the
/// table stays rectangular.
pub fn parse_delimited(reader: impl Read, delimiter: u8) -> anyhow::Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(reader);

    let column_names: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let mut row: Vec<CellValue> = record.iter().map(infer_cell).collect();
        row.resize(column_names.len(), CellValue::Null);
        rows.push(row);
    }

    Ok(Table::new(column_names, rows))
}

/// Guess a cell's type from its text: int → float → bool → string.
/// Empty fields become nulls (how the source files mark missing ages etc.).
fn infer_cell(s: &str) -> CellValue {
    let s = s.trim();
    if s.is_empty() {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    if s == "true" || s == "false" {
        return CellValue::Bool(s == "true");
    }
    CellValue::String(s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn infers_cell_types_per_field() {
        let csv = "Id,SepalLengthCm,Species,Flag\n1,5.1,setosa,true\n2,4.9,versicolor,false\n";
        let table = parse_delimited(csv.as_bytes(), b',').unwrap();

        assert_eq!(
            table.column_names,
            vec!["Id", "SepalLengthCm", "Species", "Flag"]
        );
        assert_eq!(table.rows[0][0], CellValue::Integer(1));
        assert_eq!(table.rows[0][1], CellValue::Float(5.1));
        assert_eq!(table.rows[0][2], CellValue::String("setosa".into()));
        assert_eq!(table.rows[0][3], CellValue::Bool(true));
    }

    #[test]
    fn empty_fields_become_nulls() {
        let csv = "Age,Fare\n22,7.25\n,8.05\n";
        let table = parse_delimited(csv.as_bytes(), b',').unwrap();
        assert_eq!(table.rows[1][0], CellValue::Null);
        assert_eq!(table.numeric_values("Age"), vec![22.0]);
    }

    #[test]
    fn short_rows_are_padded_rectangular() {
        let csv = "a,b,c\n1,2\n";
        let table = parse_delimited(csv.as_bytes(), b',').unwrap();
        assert_eq!(table.rows[0].len(), 3);
        assert_eq!(table.rows[0][2], CellValue::Null);
    }

    #[test]
    fn load_rejects_missing_required_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("iris.csv");
        fs::write(&path, "Id,SepalLengthCm\n1,5.1\n").unwrap();

        let err = load(DatasetId::Iris, &path).unwrap_err();
        assert!(matches!(
            err,
            DataError::MissingColumn {
                dataset: "Iris",
                column: "SepalWidthCm",
            }
        ));
    }

    #[test]
    fn load_rejects_header_only_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wine.csv");
        fs::write(&path, "quality,alcohol\n").unwrap();

        let err = load(DatasetId::RedWine, &path).unwrap_err();
        assert!(matches!(err, DataError::EmptyDataset { .. }));
    }

    #[test]
    fn load_accepts_a_complete_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("titanic.csv");
        fs::write(
            &path,
            "PassengerId,Survived,Pclass,Name,Sex,Age,Fare\n\
             1,0,3,Braund,male,22,7.25\n\
             2,1,1,Cumings,female,38,71.2833\n",
        )
        .unwrap();

        let table = load(DatasetId::Titanic, &path).unwrap();
        assert_eq!(table.len(), 2);
        for column in DatasetId::Titanic.required_columns() {
            assert!(table.column_index(column).is_some(), "missing {column}");
        }
    }
}
