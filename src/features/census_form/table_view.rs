use crate::features::residents::models::{ResidentEntry, ResidentField};

/// Every stored row, projected onto the listed columns
#[derive(Debug, Clone, Default)]
pub struct TableView {
    columns: Vec<ResidentField>,
    rows: Vec<ResidentEntry>,
}

impl TableView {
    pub fn new(rows: Vec<ResidentEntry>) -> Self {
        Self {
            columns: ResidentField::table_columns(),
            rows,
        }
    }

    pub fn columns(&self) -> &[ResidentField] {
        &self.columns
    }

    pub fn rows(&self) -> &[ResidentEntry] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&ResidentEntry> {
        self.rows.get(index)
    }

    /// Cell texts of row `index`, in column order
    pub fn cells(&self, index: usize) -> Option<Vec<String>> {
        let row = self.row(index)?;
        Some(
            self.columns
                .iter()
                .map(|field| row.record.display(*field))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
