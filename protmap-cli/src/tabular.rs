//! Delimited table transform
//!
//! Loads a delimited table, projects a subset of columns, sorts rows by a
//! numeric field, writes the result back out. Values are carried as raw
//! strings; no schema is enforced on the data.

use std::cmp::Ordering;
use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use csv::{ReaderBuilder, WriterBuilder};

/// An in-memory delimited table: one header row plus data rows.
#[derive(Debug, Clone)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { header, rows }
    }

    /// Reads a delimited table from `path`.
    pub fn read(path: &Path, delimiter: u8) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        Self::from_reader(file, delimiter)
    }

    fn from_reader<R: io::Read>(reader: R, delimiter: u8) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_reader(reader);

        let header = reader
            .headers()
            .context("Failed to read header row")?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.context("Failed to read data row")?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { header, rows })
    }

    /// Writes the table to `path`.
    pub fn write(&self, path: &Path, delimiter: u8) -> Result<()> {
        let file =
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
        self.to_writer(file, delimiter)
    }

    fn to_writer<W: io::Write>(&self, writer: W, delimiter: u8) -> Result<()> {
        let mut writer = WriterBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_writer(writer);

        writer
            .write_record(&self.header)
            .context("Failed to write header row")?;
        for row in &self.rows {
            writer.write_record(row).context("Failed to write data row")?;
        }
        writer.flush().context("Failed to flush output")?;

        Ok(())
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Keeps only the named columns, in the given order. An empty selection
    /// keeps every column.
    pub fn project(&self, columns: &[String]) -> Result<Table> {
        if columns.is_empty() {
            return Ok(self.clone());
        }

        let indices = columns
            .iter()
            .map(|name| self.column_index(name))
            .collect::<Result<Vec<_>>>()?;

        let rows = self
            .rows
            .iter()
            .map(|row| {
                indices
                    .iter()
                    .map(|&i| row.get(i).cloned().unwrap_or_default())
                    .collect()
            })
            .collect();

        Ok(Table::new(columns.to_vec(), rows))
    }

    /// Sorts rows ascending by the numeric value of `column`. Rows whose
    /// value does not parse as a number keep their relative order after all
    /// numeric rows.
    pub fn sort_by_numeric(mut self, column: &str) -> Result<Table> {
        let index = self.column_index(column)?;

        self.rows.sort_by(|a, b| {
            let left = numeric_key(a, index);
            let right = numeric_key(b, index);
            match (left, right) {
                (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        });

        Ok(self)
    }

    fn column_index(&self, name: &str) -> Result<usize> {
        self.header
            .iter()
            .position(|column| column == name)
            .ok_or_else(|| {
                anyhow!(
                    "No column named '{}' (available: {})",
                    name,
                    self.header.join(", ")
                )
            })
    }
}

fn numeric_key(row: &[String], index: usize) -> Option<f64> {
    row.get(index).and_then(|value| value.parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn growth_table() -> Table {
        Table::new(
            vec![
                "taxon_oid".to_string(),
                "genome_name".to_string(),
                "doubling_predicted".to_string(),
            ],
            vec![
                vec!["1001".to_string(), "E. coli".to_string(), "0.58".to_string()],
                vec!["1002".to_string(), "M. tuberculosis".to_string(), "23.1".to_string()],
                vec!["1003".to_string(), "V. natriegens".to_string(), "0.16".to_string()],
                vec!["1004".to_string(), "unknown".to_string(), "n/a".to_string()],
            ],
        )
    }

    #[test]
    fn test_sort_by_numeric_ascending() {
        let sorted = growth_table().sort_by_numeric("doubling_predicted").unwrap();

        let ids: Vec<&str> = sorted.rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(ids, vec!["1003", "1001", "1002", "1004"]);
    }

    #[test]
    fn test_non_numeric_rows_sort_last() {
        let sorted = growth_table().sort_by_numeric("doubling_predicted").unwrap();
        assert_eq!(sorted.rows.last().unwrap()[2], "n/a");
    }

    #[test]
    fn test_project_reorders_columns() {
        let projected = growth_table()
            .project(&["doubling_predicted".to_string(), "genome_name".to_string()])
            .unwrap();

        assert_eq!(projected.header, ["doubling_predicted", "genome_name"]);
        assert_eq!(projected.rows[0], vec!["0.58", "E. coli"]);
    }

    #[test]
    fn test_project_empty_selection_keeps_all() {
        let projected = growth_table().project(&[]).unwrap();
        assert_eq!(projected.header, growth_table().header);
        assert_eq!(projected.len(), 4);
    }

    #[test]
    fn test_project_unknown_column() {
        let err = growth_table()
            .project(&["missing".to_string()])
            .unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_tab_delimited_round_trip() {
        let input = b"a\tb\n1\tx\n2\ty\n";
        let table = Table::from_reader(&input[..], b'\t').unwrap();
        assert_eq!(table.header, ["a", "b"]);
        assert_eq!(table.len(), 2);

        let mut output = Vec::new();
        table.to_writer(&mut output, b'\t').unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn test_short_rows_project_to_empty_fields() {
        let input = b"a\tb\tc\n1\t2\n";
        let table = Table::from_reader(&input[..], b'\t').unwrap();

        let projected = table
            .project(&["c".to_string(), "a".to_string()])
            .unwrap();
        assert_eq!(projected.rows[0], vec!["", "1"]);
    }
}
