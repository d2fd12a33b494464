use crate::error::RecError;
use crate::sparse::CsrMatrix;

const COEF0: f32 = 1.0;

/// Dense N×N pairwise similarity matrix, row-major. Symmetric, values in
/// (-1, 1), row i = similarity of movie i to every movie including itself.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    n: usize,
    scores: Vec<f32>,
}

impl SimilarityMatrix {
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn score(&self, i: usize, j: usize) -> f32 {
        self.scores[i * self.n + j]
    }

    pub fn row(&self, i: usize) -> &[f32] {
        &self.scores[i * self.n..(i + 1) * self.n]
    }
}

/// Sigmoid kernel `tanh(gamma · xᵢ·xⱼ + coef0)` over every pair of feature
/// rows, with gamma = 1/dimensionality and coef0 = 1. The dot products come
/// from one sparse Gram multiply, the kernel is applied elementwise.
pub fn compute(features: &CsrMatrix) -> Result<SimilarityMatrix, RecError> {
    if features.cols() == 0 {
        // Every overview was empty: an all-tanh(1) matrix would rank noise.
        return Err(RecError::DegenerateModel);
    }
    let gamma = 1.0 / features.cols() as f32;
    let mut scores = features.gram();
    for score in scores.iter_mut() {
        *score = (gamma * *score + COEF0).tanh();
    }
    Ok(SimilarityMatrix { n: features.rows(), scores })
}
