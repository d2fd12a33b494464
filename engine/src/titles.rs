use std::collections::HashMap;

use crate::catalog::Catalog;

/// Lowercased title → catalog row. Duplicate titles collapse to one entry
/// with the last-seen row winning; that is a deliberate policy, not an
/// accident of map insertion order.
#[derive(Debug, Clone, Default)]
pub struct TitleIndex {
    rows: HashMap<String, usize>,
}

impl TitleIndex {
    pub fn build(catalog: &Catalog) -> Self {
        let mut rows = HashMap::with_capacity(catalog.len());
        for (row, record) in catalog.records().iter().enumerate() {
            rows.insert(record.original_title.to_lowercase(), row);
        }
        Self { rows }
    }

    /// Exact lowercase match only; `None` when the title is absent, which the
    /// caller surfaces as a user-facing message rather than an error.
    pub fn lookup(&self, title: &str) -> Option<usize> {
        self.rows.get(&title.to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
