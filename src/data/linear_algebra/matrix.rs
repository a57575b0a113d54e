//! # Dense matrix
//!
//! Row-major storage for the simplex tableau. All rows have the same length, which is fixed at
//! creation but can shrink by removing columns.
use crate::algorithm::utilities::remove_indices;
use crate::data::linear_algebra::EPSILON;

/// Uses a `Vec<Vec<f64>>` as underlying data structure.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix {
    data: Vec<Vec<f64>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl DenseMatrix {
    /// Create a `DenseMatrix` from the provided data.
    ///
    /// # Arguments
    ///
    /// * `data`: Rows of the matrix, all of equal length.
    pub fn from_data(data: Vec<Vec<f64>>) -> Self {
        let (nr_rows, nr_columns) = get_data_dimensions(&data);

        Self { data, nr_rows, nr_columns }
    }

    /// Create a dense matrix of zero's of dimension `nr_rows` x `nr_columns`.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        debug_assert!(nr_rows > 0);
        debug_assert!(nr_columns > 0);

        Self {
            data: vec![vec![0f64; nr_columns]; nr_rows],
            nr_rows,
            nr_columns,
        }
    }

    /// Get the value at coordinate (`i`, `j`).
    pub fn get_value(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j]
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    pub fn set_value(&mut self, i: usize, j: usize, value: f64) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j] = value;
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> &[f64] {
        debug_assert!(i < self.nr_rows);

        &self.data[i]
    }

    /// Get all values in column `j` of this matrix, top to bottom.
    pub fn column(&self, j: usize) -> impl Iterator<Item = f64> + '_ {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(move |row| row[j])
    }

    /// All rows of this matrix, top to bottom.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.data
    }

    /// Multiply row `i` with a factor `factor`.
    pub fn multiply_row(&mut self, i: usize, factor: f64) {
        debug_assert!(i < self.nr_rows);

        for value in &mut self.data[i] {
            *value *= factor;
        }
    }

    /// Add a multiple of row `read_row` to row `write_row`.
    pub fn mul_add_rows(&mut self, read_row: usize, write_row: usize, factor: f64) {
        debug_assert!(read_row < self.nr_rows);
        debug_assert!(write_row < self.nr_rows);
        debug_assert_ne!(read_row, write_row);

        for j in 0..self.nr_columns {
            self.data[write_row][j] += factor * self.data[read_row][j];
        }
    }

    /// Set all values in row `i` with an absolute value below `EPSILON` to exactly zero.
    pub fn snap_row_to_zero(&mut self, i: usize) {
        debug_assert!(i < self.nr_rows);

        for value in &mut self.data[i] {
            if value.abs() <= EPSILON {
                *value = 0f64;
            }
        }
    }

    /// Remove rows from this matrix.
    ///
    /// # Arguments
    ///
    /// * `indices`: Indices of the rows to remove, sorted and without duplicates.
    pub fn remove_rows(&mut self, indices: &[usize]) {
        debug_assert!(indices.len() < self.nr_rows);

        remove_indices(&mut self.data, indices);
        self.nr_rows -= indices.len();
    }

    /// Remove columns from this matrix.
    ///
    /// # Arguments
    ///
    /// * `indices`: Indices of the columns to remove, sorted and without duplicates.
    pub fn remove_columns(&mut self, indices: &[usize]) {
        debug_assert!(indices.len() < self.nr_columns);

        for row in &mut self.data {
            remove_indices(row, indices);
        }
        self.nr_columns -= indices.len();
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Get the data of this matrix.
    pub fn data(self) -> Vec<Vec<f64>> {
        self.data
    }
}

/// If all row sizes agree, return the dimensions of the vector `data`.
fn get_data_dimensions(data: &[Vec<f64>]) -> (usize, usize) {
    debug_assert!(!data.is_empty());

    let nr_rows = data.len();
    let nr_columns = data[0].len();

    debug_assert!(nr_columns > 0);
    debug_assert!(
        data.iter().all(|row| row.len() == nr_columns),
        "Row lengths not equal: first row has length {}", nr_columns,
    );

    (nr_rows, nr_columns)
}
