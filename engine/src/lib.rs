pub mod catalog;
pub mod error;
pub mod model;
pub mod recommend;
pub mod similarity;
pub mod sparse;
pub mod table;
pub mod titles;
pub mod tokenizer;
pub mod vectorizer;

pub use catalog::{Catalog, MovieRecord};
pub use error::RecError;
pub use model::ModelState;
pub use recommend::Recommendation;
pub use similarity::SimilarityMatrix;
pub use table::Table;
pub use titles::TitleIndex;
pub use vectorizer::{TfidfVectorizer, Vocabulary};
