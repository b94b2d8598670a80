use std::fmt;

use super::MathError;

/// Dense row-major matrix of `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self { rows, cols, data: vec![0.0; rows * cols] }
    }

    /// Builds a matrix from rows. Every row must have the same length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, MathError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(MathError::DimensionMismatch { expected: cols, actual: row.len() });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { rows: rows.len(), cols, data })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, r: usize, c: usize) -> Option<f64> {
        (r < self.rows && c < self.cols).then(|| self.data[r * self.cols + c])
    }

    pub fn row(&self, r: usize) -> Option<&[f64]> {
        (r < self.rows).then(|| &self.data[r * self.cols..(r + 1) * self.cols])
    }

    pub fn column(&self, c: usize) -> Option<Vec<f64>> {
        (c < self.cols).then(|| (0..self.rows).map(|r| self.data[r * self.cols + c]).collect())
    }

    pub fn set_row(&mut self, r: usize, values: &[f64]) -> Result<(), MathError> {
        if r >= self.rows {
            return Err(MathError::DimensionMismatch { expected: self.rows, actual: r + 1 });
        }
        if values.len() != self.cols {
            return Err(MathError::DimensionMismatch { expected: self.cols, actual: values.len() });
        }
        self.data[r * self.cols..(r + 1) * self.cols].copy_from_slice(values);
        Ok(())
    }

    pub fn set_column(&mut self, c: usize, values: &[f64]) -> Result<(), MathError> {
        if c >= self.cols {
            return Err(MathError::DimensionMismatch { expected: self.cols, actual: c + 1 });
        }
        if values.len() != self.rows {
            return Err(MathError::DimensionMismatch { expected: self.rows, actual: values.len() });
        }
        for (r, v) in values.iter().enumerate() {
            self.data[r * self.cols + c] = *v;
        }
        Ok(())
    }

    /// Element-wise sum. Both matrices must have the same shape.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, MathError> {
        if self.rows != other.rows {
            return Err(MathError::DimensionMismatch { expected: self.rows, actual: other.rows });
        }
        if self.cols != other.cols {
            return Err(MathError::DimensionMismatch { expected: self.cols, actual: other.cols });
        }
        let data = self.data.iter().zip(&other.data).map(|(a, b)| a + b).collect();
        Ok(Matrix { rows: self.rows, cols: self.cols, data })
    }

    /// Matrix product `self · other`.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, MathError> {
        if self.cols != other.rows {
            return Err(MathError::DimensionMismatch { expected: self.cols, actual: other.rows });
        }
        let mut out = Matrix::zeros(self.rows, other.cols);
        for r in 0..self.rows {
            for c in 0..other.cols {
                out.data[r * other.cols + c] = (0..self.cols)
                    .map(|k| self.data[r * self.cols + k] * other.data[k * other.cols + c])
                    .sum();
            }
        }
        Ok(out)
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> Result<f64, MathError> {
        if self.rows != self.cols {
            return Err(MathError::NotSquare { rows: self.rows, cols: self.cols });
        }
        if self.rows == 0 {
            return Err(MathError::Empty);
        }
        Ok(cofactor_det(&self.data, self.rows))
    }
}

fn cofactor_det(m: &[f64], n: usize) -> f64 {
    match n {
        1 => m[0],
        2 => m[0] * m[3] - m[2] * m[1],
        _ => {
            let mut sum = 0.0;
            let mut minor = Vec::with_capacity((n - 1) * (n - 1));
            for col in 0..n {
                minor.clear();
                for r in 1..n {
                    for c in (0..n).filter(|&c| c != col) {
                        minor.push(m[r * n + c]);
                    }
                }
                let sign = if col % 2 == 0 { 1.0 } else { -1.0 };
                sum += sign * m[col] * cofactor_det(&minor, n - 1);
            }
            sum
        }
    }
}

impl fmt::Display for Matrix {
    /// Rows are written as `|a b c|`, framed by underscore rules as wide as
    /// the widest row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = (0..self.rows)
            .map(|r| {
                let items: Vec<String> =
                    self.data[r * self.cols..(r + 1) * self.cols].iter().map(f64::to_string).collect();
                format!("|{}|", items.join(" "))
            })
            .collect();
        let width = lines.iter().map(|l| l.len() - 1).max().unwrap_or(0);
        let rule = "_".repeat(width);
        writeln!(f, "{rule}")?;
        for line in &lines {
            writeln!(f, "{line}")?;
        }
        write!(f, "{rule}")
    }
}
