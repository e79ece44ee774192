use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// CellValue – a single cell of a loaded table
// ---------------------------------------------------------------------------

/// A dynamically-typed table cell mirroring the dtypes found in the source
/// CSV files. Used as `BTreeMap` / `BTreeSet` keys downstream (grouping,
/// category colors) so `CellValue` must be `Ord`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

// -- Manual Eq/Ord so we can put CellValue in BTreeSet --

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use CellValue::*;
        fn discriminant(v: &CellValue) -> u8 {
            match v {
                Null => 0,
                Bool(_) => 1,
                Integer(_) => 2,
                Float(_) => 3,
                String(_) => 4,
            }
        }
        // Numeric cells compare by value across Integer/Float so mixed
        // columns (e.g. ages "22" and "29.5") sort sensibly.
        if let (Some(a), Some(b)) = (self.as_f64(), other.as_f64()) {
            return a
                .total_cmp(&b)
                .then_with(|| discriminant(self).cmp(&discriminant(other)));
        }
        let da = discriminant(self);
        let db = discriminant(other);
        if da != db {
            return da.cmp(&db);
        }
        match (self, other) {
            (Null, Null) => std::cmp::Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (String(a), String(b)) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        }
    }
}

impl std::hash::Hash for CellValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            CellValue::String(s) => s.hash(state),
            CellValue::Integer(i) => i.hash(state),
            CellValue::Float(f) => f.to_bits().hash(state),
            CellValue::Bool(b) => b.hash(state),
            CellValue::Null => {}
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => Ok(()),
        }
    }
}

impl CellValue {
    /// Interpret the cell as an `f64` for statistics and plotting.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Table – the complete loaded dataset
// ---------------------------------------------------------------------------

/// A parsed tabular dataset: named columns over uniform-length rows.
/// Every row has exactly `column_names.len()` cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Column names in file order.
    pub column_names: Vec<String>,
    /// Row-major cell storage.
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(column_names: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Table { column_names, rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.column_names.iter().position(|c| c == name)
    }

    /// The first `n` rows, for previews.
    pub fn head(&self, n: usize) -> &[Vec<CellValue>] {
        &self.rows[..self.rows.len().min(n)]
    }

    /// Names of the numeric columns: every cell is Integer, Float, or Null,
    /// and at least one cell is non-null.
    pub fn numeric_columns(&self) -> Vec<String> {
        self.column_names
            .iter()
            .enumerate()
            .filter(|(idx, _)| {
                let mut any_number = false;
                for row in &self.rows {
                    match &row[*idx] {
                        CellValue::Integer(_) | CellValue::Float(_) => any_number = true,
                        CellValue::Null => {}
                        _ => return false,
                    }
                }
                any_number
            })
            .map(|(_, name)| name.clone())
            .collect()
    }

    /// The non-null numeric values of one column, in row order.
    pub fn numeric_values(&self, name: &str) -> Vec<f64> {
        let Some(idx) = self.column_index(name) else {
            return Vec::new();
        };
        self.rows
            .iter()
            .filter_map(|row| row[idx].as_f64())
            .collect()
    }

    /// Sorted distinct values of one column (categorical legends, grouping).
    pub fn unique_values(&self, name: &str) -> BTreeSet<CellValue> {
        let Some(idx) = self.column_index(name) else {
            return BTreeSet::new();
        };
        self.rows.iter().map(|row| row[idx].clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(
            vec!["name".into(), "score".into(), "age".into()],
            vec![
                vec![
                    CellValue::String("a".into()),
                    CellValue::Float(1.5),
                    CellValue::Integer(30),
                ],
                vec![
                    CellValue::String("b".into()),
                    CellValue::Float(2.5),
                    CellValue::Null,
                ],
                vec![
                    CellValue::String("a".into()),
                    CellValue::Float(3.0),
                    CellValue::Integer(41),
                ],
            ],
        )
    }

    #[test]
    fn numeric_columns_skip_strings_and_allow_nulls() {
        let t = sample();
        assert_eq!(
            t.numeric_columns(),
            vec!["score".to_string(), "age".to_string()]
        );
    }

    #[test]
    fn numeric_values_drop_nulls() {
        let t = sample();
        assert_eq!(t.numeric_values("age"), vec![30.0, 41.0]);
        assert_eq!(t.numeric_values("score"), vec![1.5, 2.5, 3.0]);
    }

    #[test]
    fn unique_values_are_sorted_and_deduped() {
        let t = sample();
        let names: Vec<String> = t
            .unique_values("name")
            .into_iter()
            .map(|v| v.to_string())
            .collect();
        assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn head_clamps_to_len() {
        let t = sample();
        assert_eq!(t.head(2).len(), 2);
        assert_eq!(t.head(10).len(), 3);
    }

    #[test]
    fn mixed_numeric_cells_order_by_value() {
        assert!(CellValue::Integer(2) < CellValue::Float(2.5));
        assert!(CellValue::Float(1.5) < CellValue::Integer(3));
    }
}
