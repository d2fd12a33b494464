/// Compressed sparse row matrix over `f32`. Rows are appended in order and
/// column indices within a row are strictly increasing.
#[derive(Debug, Clone)]
pub struct CsrMatrix {
    cols: usize,
    indptr: Vec<usize>,
    indices: Vec<usize>,
    data: Vec<f32>,
}

impl CsrMatrix {
    pub fn new(cols: usize) -> Self {
        Self { cols, indptr: vec![0], indices: Vec::new(), data: Vec::new() }
    }

    pub fn rows(&self) -> usize {
        self.indptr.len() - 1
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn nnz(&self) -> usize {
        self.data.len()
    }

    /// Append a row from (column, value) entries sorted by column.
    pub fn push_row(&mut self, entries: Vec<(usize, f32)>) {
        debug_assert!(entries.windows(2).all(|w| w[0].0 < w[1].0));
        for (col, val) in entries {
            debug_assert!(col < self.cols);
            self.indices.push(col);
            self.data.push(val);
        }
        self.indptr.push(self.indices.len());
    }

    /// Column indices and values of row `i`.
    pub fn row(&self, i: usize) -> (&[usize], &[f32]) {
        let (start, end) = (self.indptr[i], self.indptr[i + 1]);
        (&self.indices[start..end], &self.data[start..end])
    }

    /// Dense Gram matrix `A · Aᵀ` (every pairwise row dot product), row-major.
    /// Each row is scattered into a dense accumulator once, then every sparse
    /// row at or above it is dotted against the accumulator, touching only
    /// stored entries; the result is mirrored across the diagonal.
    pub fn gram(&self) -> Vec<f32> {
        let n = self.rows();
        let mut gram = vec![0.0f32; n * n];
        let mut scatter = vec![0.0f32; self.cols];
        for i in 0..n {
            let (icols, ivals) = self.row(i);
            for (&c, &v) in icols.iter().zip(ivals) {
                scatter[c] = v;
            }
            for j in i..n {
                let (jcols, jvals) = self.row(j);
                let mut dot = 0.0f32;
                for (&c, &v) in jcols.iter().zip(jvals) {
                    dot += v * scatter[c];
                }
                gram[i * n + j] = dot;
                gram[j * n + i] = dot;
            }
            for &c in icols {
                scatter[c] = 0.0;
            }
        }
        gram
    }
}
