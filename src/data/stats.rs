use std::collections::BTreeMap;

use super::model::{CellValue, Table};

// ---------------------------------------------------------------------------
// Descriptive statistics
// ---------------------------------------------------------------------------

/// Standard describe fields for one numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub name: String,
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (ddof = 1); NaN when count < 2.
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Per-numeric-column summaries, in column order. Non-numeric columns are
/// excluded; nulls within a numeric column are skipped.
pub fn describe(table: &Table) -> Vec<ColumnSummary> {
    table
        .numeric_columns()
        .into_iter()
        .filter_map(|name| {
            let values = table.numeric_values(&name);
            summarize(&name, &values)
        })
        .collect()
}

fn summarize(name: &str, values: &[f64]) -> Option<ColumnSummary> {
    if values.is_empty() {
        return None;
    }
    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    let std = if count > 1 {
        let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        (ss / (count - 1) as f64).sqrt()
    } else {
        f64::NAN
    };

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    Some(ColumnSummary {
        name: name.to_string(),
        count,
        mean,
        std,
        min: sorted[0],
        q25: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q75: quantile(&sorted, 0.75),
        max: sorted[count - 1],
    })
}

/// Quantile with linear interpolation between closest ranks.
/// `sorted` must be ascending and non-empty.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let rank = q * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let frac = rank - lo as f64;
        sorted[lo] * (1.0 - frac) + sorted[hi] * frac
    }
}

// ---------------------------------------------------------------------------
// Correlation matrix
// ---------------------------------------------------------------------------

/// Pairwise Pearson coefficients over numeric columns. Square, symmetric,
/// `values[i][j]` correlates `columns[i]` with `columns[j]`.
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

/// Correlate every numeric column not named in `exclude` against every
/// other, using the rows where both cells are non-null.
pub fn correlation_matrix(table: &Table, exclude: &[&str]) -> CorrelationMatrix {
    let (columns, indices): (Vec<String>, Vec<usize>) = table
        .numeric_columns()
        .into_iter()
        .filter(|c| !exclude.contains(&c.as_str()))
        .filter_map(|c| {
            let idx = table.column_index(&c)?;
            Some((c, idx))
        })
        .unzip();

    let n = columns.len();
    let mut values = vec![vec![f64::NAN; n]; n];
    for i in 0..n {
        values[i][i] = 1.0;
        for j in (i + 1)..n {
            let mut xs = Vec::new();
            let mut ys = Vec::new();
            for row in &table.rows {
                if let (Some(x), Some(y)) =
                    (row[indices[i]].as_f64(), row[indices[j]].as_f64())
                {
                    xs.push(x);
                    ys.push(y);
                }
            }
            let r = pearson(&xs, &ys);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    CorrelationMatrix { columns, values }
}

/// Pearson correlation coefficient; NaN when either side is constant or
/// fewer than two paired observations exist.
fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len();
    if n < 2 {
        return f64::NAN;
    }
    let mean_x = xs.iter().sum::<f64>() / n as f64;
    let mean_y = ys.iter().sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return f64::NAN;
    }
    cov / (var_x.sqrt() * var_y.sqrt())
}

// ---------------------------------------------------------------------------
// Histogram binning
// ---------------------------------------------------------------------------

/// One equal-width histogram bin; `[lower, upper)`, final bin closed.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

pub fn histogram_bins(values: &[f64], n_bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || n_bins == 0 {
        return Vec::new();
    }
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    // Degenerate range: everything lands in one bin of unit width.
    if max - min <= f64::EPSILON {
        return vec![HistogramBin {
            lower: min - 0.5,
            upper: min + 0.5,
            count: values.len(),
        }];
    }

    let width = (max - min) / n_bins as f64;
    let mut bins: Vec<HistogramBin> = (0..n_bins)
        .map(|i| HistogramBin {
            lower: min + i as f64 * width,
            upper: min + (i + 1) as f64 * width,
            count: 0,
        })
        .collect();

    for &v in values {
        let idx = (((v - min) / width) as usize).min(n_bins - 1);
        bins[idx].count += 1;
    }
    bins
}

// ---------------------------------------------------------------------------
// Box plot statistics
// ---------------------------------------------------------------------------

/// Five-number summary with whiskers at the most extreme data points within
/// 1.5 × IQR of the quartiles.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub whisker_low: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_high: f64,
}

pub fn box_stats(values: &[f64]) -> Option<BoxStats> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let q1 = quantile(&sorted, 0.25);
    let median = quantile(&sorted, 0.5);
    let q3 = quantile(&sorted, 0.75);
    let iqr = q3 - q1;
    let lo_fence = q1 - 1.5 * iqr;
    let hi_fence = q3 + 1.5 * iqr;

    let whisker_low = sorted
        .iter()
        .copied()
        .find(|v| *v >= lo_fence)
        .unwrap_or(q1);
    let whisker_high = sorted
        .iter()
        .rev()
        .copied()
        .find(|v| *v <= hi_fence)
        .unwrap_or(q3);

    Some(BoxStats {
        whisker_low,
        q1,
        median,
        q3,
        whisker_high,
    })
}

// ---------------------------------------------------------------------------
// Group counts
// ---------------------------------------------------------------------------

/// Row counts per distinct combination of the named columns, keyed by the
/// cell values in the order the columns were given. Unknown column names
/// contribute nulls.
pub fn group_counts(table: &Table, columns: &[&str]) -> BTreeMap<Vec<CellValue>, usize> {
    let indices: Vec<Option<usize>> =
        columns.iter().map(|c| table.column_index(c)).collect();

    let mut counts: BTreeMap<Vec<CellValue>, usize> = BTreeMap::new();
    for row in &table.rows {
        let key: Vec<CellValue> = indices
            .iter()
            .map(|idx| idx.map(|i| row[i].clone()).unwrap_or(CellValue::Null))
            .collect();
        *counts.entry(key).or_default() += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_delimited;

    fn table() -> Table {
        let csv = "Id,value,label\n1,2.0,x\n2,4.0,x\n3,4.0,y\n4,4.0,y\n5,5.0,y\n6,5.0,x\n7,7.0,y\n8,9.0,x\n";
        parse_delimited(csv.as_bytes(), b',').unwrap()
    }

    #[test]
    fn describe_covers_exactly_the_numeric_columns() {
        let summaries = describe(&table());
        let names: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Id", "value"]);
    }

    #[test]
    fn describe_matches_hand_computed_values() {
        let summaries = describe(&table());
        let value = &summaries[1];
        // 2,4,4,4,5,5,7,9: mean 5, sample std 2.138, quartiles interpolated
        assert_eq!(value.count, 8);
        assert!((value.mean - 5.0).abs() < 1e-12);
        assert!((value.std - 2.138089935299395).abs() < 1e-9);
        assert_eq!(value.min, 2.0);
        assert_eq!(value.q25, 4.0);
        assert_eq!(value.median, 4.5);
        assert!((value.q75 - 5.5).abs() < 1e-12);
        assert_eq!(value.max, 9.0);
    }

    #[test]
    fn quantile_interpolates_between_ranks() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert!((quantile(&sorted, 0.25) - 1.75).abs() < 1e-12);
        assert!((quantile(&sorted, 0.5) - 2.5).abs() < 1e-12);
        assert_eq!(quantile(&sorted, 0.0), 1.0);
        assert_eq!(quantile(&sorted, 1.0), 4.0);
    }

    #[test]
    fn pearson_hits_the_endpoints() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let up = [2.0, 4.0, 6.0, 8.0];
        let down = [8.0, 6.0, 4.0, 2.0];
        assert!((pearson(&xs, &up) - 1.0).abs() < 1e-12);
        assert!((pearson(&xs, &down) + 1.0).abs() < 1e-12);
        assert!(pearson(&xs, &[1.0, 1.0, 1.0, 1.0]).is_nan());
    }

    #[test]
    fn correlation_matrix_excludes_and_is_symmetric() {
        let m = correlation_matrix(&table(), &["Id"]);
        assert_eq!(m.columns, vec!["value"]);
        assert_eq!(m.values[0][0], 1.0);

        let full = correlation_matrix(&table(), &[]);
        assert_eq!(full.columns.len(), 2);
        assert!((full.values[0][1] - full.values[1][0]).abs() < 1e-12);
    }

    #[test]
    fn correlation_skips_rows_with_nulls() {
        let csv = "a,b\n1,2\n2,\n3,6\n4,8\n";
        let t = parse_delimited(csv.as_bytes(), b',').unwrap();
        let m = correlation_matrix(&t, &[]);
        // Paired rows are (1,2),(3,6),(4,8) – perfectly linear.
        assert!((m.values[0][1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn histogram_bins_partition_the_range() {
        let values = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0];
        let bins = histogram_bins(&values, 5);
        assert_eq!(bins.len(), 5);
        assert_eq!(bins[0].lower, 0.0);
        assert_eq!(bins[4].upper, 10.0);
        let total: usize = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, values.len());
        // Maximum lands in the final (closed) bin.
        assert_eq!(bins[4].count, 2);
    }

    #[test]
    fn box_stats_clamp_whiskers_to_fences() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
        let b = box_stats(&values).unwrap();
        assert_eq!(b.whisker_low, 1.0);
        // 100 sits far outside q3 + 1.5*IQR, so the whisker stops at 5.
        assert_eq!(b.whisker_high, 5.0);
        assert!(b.q1 <= b.median && b.median <= b.q3);
    }

    #[test]
    fn group_counts_by_two_columns() {
        let counts = group_counts(&table(), &["label", "Id"]);
        assert_eq!(counts.len(), 8); // Id is unique per row
        let by_label = group_counts(&table(), &["label"]);
        assert_eq!(by_label[&vec![CellValue::String("x".into())]], 4);
        assert_eq!(by_label[&vec![CellValue::String("y".into())]], 4);
    }
}
