use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecError {
    /// A required column is missing from an input table, or a cell in that
    /// column cannot be parsed. Raised before any vectorization work starts.
    #[error("table '{table}': required column '{column}' is missing or invalid")]
    Schema { table: String, column: String },

    /// Every overview was empty after cleaning, so the vocabulary has zero
    /// dimensions and no meaningful similarity can be computed.
    #[error("empty overview corpus: vocabulary has zero dimensions")]
    DegenerateModel,
}
