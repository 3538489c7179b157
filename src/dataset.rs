// src/dataset.rs

use crate::data_loader::TableData;

pub struct Dataset {
    pub data: TableData,
}

impl Dataset {
    pub fn new(data: TableData) -> Self {
        Dataset { data }
    }

    pub fn row_count(&self) -> usize {
        if self.data.columns.is_empty() {
            0
        } else {
            self.data.columns[0].len()
        }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.data.headers.iter().position(|h| h == name)
    }
}
