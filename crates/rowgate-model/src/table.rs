#![deny(unsafe_code)]

use crate::CellValue;

/// One row of the input table.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    /// 1-based source line number (the header row is line 1, so the
    /// first data record is line 2).
    pub line: u64,
    /// Cells aligned positionally with [`Table::columns`].
    pub cells: Vec<CellValue>,
}

impl Record {
    pub fn new(line: u64, cells: Vec<CellValue>) -> Self {
        Self { line, cells }
    }
}

/// An in-memory table: ordered columns plus ordered records.
///
/// Read-only during validation; every record shares the column set.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub records: Vec<Record>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            records: Vec::new(),
        }
    }

    pub fn push_record(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Position of a column by name, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// All cells of one column, top to bottom.
    ///
    /// Records shorter than the header (ragged input) contribute
    /// [`CellValue::Missing`] for the absent positions.
    pub fn column(&self, index: usize) -> Vec<&CellValue> {
        static MISSING: CellValue = CellValue::Missing;
        self.records
            .iter()
            .map(|record| record.cells.get(index).unwrap_or(&MISSING))
            .collect()
    }
}
