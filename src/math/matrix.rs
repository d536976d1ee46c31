use rand::Rng;
use serde::{Serialize, Deserialize};
use std::f64::consts::PI;
use std::ops::{Add, Sub, Mul};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Entries uniform on [-1, 1): `2u - 1` with `u` drawn from [0, 1).
    ///
    /// Takes the rng as a parameter so callers can seed it; entries are drawn
    /// in row-major order, which fixes the bit pattern for a given seed.
    pub fn random_uniform<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen::<f64>() * 2.0 - 1.0;
            }
        }
        res
    }

    /// Samples a single value from N(0, 1) using the Box-Muller transform.
    /// Both uniforms are shifted into (0, 1] to avoid log(0).
    fn sample_standard_normal<R: Rng>(rng: &mut R) -> f64 {
        let u1: f64 = 1.0 - rng.gen::<f64>();
        let u2: f64 = 1.0 - rng.gen::<f64>();
        (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    }

    /// Entries drawn from the standard normal distribution N(0, 1),
    /// in row-major order.
    pub fn random_normal<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = Matrix::sample_standard_normal(rng);
            }
        }
        res
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data.first().map_or(0, |row| row.len()),
            data
        }
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix::from_data(
            self.data
                .iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect()
        )
    }

    /// Element-wise (Hadamard) product of two same-shape matrices.
    pub fn hadamard(&self, rhs: &Matrix) -> Matrix {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!(
                "hadamard shape mismatch: ({}, {}) vs ({}, {})",
                self.rows, self.cols, rhs.rows, rhs.cols
            );
        }
        let data = self.data.iter().zip(rhs.data.iter())
            .map(|(row_a, row_b)| {
                row_a.iter().zip(row_b.iter()).map(|(x, y)| x * y).collect()
            })
            .collect();
        Matrix::from_data(data)
    }

    /// Sum of squared entries.
    pub fn sum_sq(&self) -> f64 {
        self.data.iter()
            .flat_map(|row| row.iter())
            .map(|x| x * x)
            .sum()
    }

    /// Mean of the absolute values of all entries.
    pub fn mean_abs(&self) -> f64 {
        let count = (self.rows * self.cols) as f64;
        let total: f64 = self.data.iter()
            .flat_map(|row| row.iter())
            .map(|x| x.abs())
            .sum();
        total / count
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}

impl Add for Matrix {
    type Output = Matrix;

    fn add(self, rhs: Self) -> Self::Output {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!(
                "add shape mismatch: ({}, {}) vs ({}, {})",
                self.rows, self.cols, rhs.rows, rhs.cols
            );
        }

        let mut res = Matrix::zeros(self.rows, self.cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = self.data[i][j] + rhs.data[i][j];
            }
        }

        res
    }
}

impl Sub for Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Self) -> Self::Output {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!(
                "sub shape mismatch: ({}, {}) vs ({}, {})",
                self.rows, self.cols, rhs.rows, rhs.cols
            );
        }

        let mut res = Matrix::zeros(self.rows, self.cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = self.data[i][j] - rhs.data[i][j];
            }
        }

        res
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.cols != rhs.rows {
            panic!(
                "mul shape mismatch: ({}, {}) x ({}, {})",
                self.rows, self.cols, rhs.rows, rhs.cols
            );
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;

                for k in 0..self.cols {
                    sum += self.data[i][k] * rhs.data[k][j];
                }

                res.data[i][j] = sum;
            }
        }

        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_mul_shapes_and_values() {
        let a = Matrix::from_data(vec![
            vec![1.0, 2.0],
            vec![3.0, 4.0],
            vec![5.0, 6.0],
        ]);
        let b = Matrix::from_data(vec![
            vec![7.0, 8.0, 9.0],
            vec![10.0, 11.0, 12.0],
        ]);

        let c = a * b;

        assert_eq!(c.rows, 3);
        assert_eq!(c.cols, 3);
        assert_eq!(c.data[0], vec![27.0, 30.0, 33.0]);
        assert_eq!(c.data[2], vec![95.0, 106.0, 117.0]);
    }

    #[test]
    #[should_panic(expected = "mul shape mismatch")]
    fn test_mul_dimension_mismatch_panics() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 3);
        let _ = a * b;
    }

    #[test]
    fn test_transpose_round_trip() {
        let a = Matrix::from_data(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
        ]);
        let t = a.transpose();

        assert_eq!(t.rows, 3);
        assert_eq!(t.cols, 2);
        assert_eq!(t.data[1][0], 2.0);
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn test_hadamard() {
        let a = Matrix::from_data(vec![vec![1.0, -2.0], vec![3.0, 0.5]]);
        let b = Matrix::from_data(vec![vec![2.0, 2.0], vec![-1.0, 4.0]]);
        let c = a.hadamard(&b);

        assert_eq!(c.data, vec![vec![2.0, -4.0], vec![-3.0, 2.0]]);
    }

    #[test]
    fn test_sum_sq_and_mean_abs() {
        let a = Matrix::from_data(vec![vec![1.0, -2.0], vec![2.0, 0.0]]);

        assert_eq!(a.sum_sq(), 9.0);
        assert_eq!(a.mean_abs(), 1.25);
    }

    #[test]
    fn test_random_uniform_is_deterministic_and_bounded() {
        let a = Matrix::random_uniform(4, 3, &mut StdRng::seed_from_u64(7));
        let b = Matrix::random_uniform(4, 3, &mut StdRng::seed_from_u64(7));

        assert_eq!(a, b);
        for row in &a.data {
            for &v in row {
                assert!((-1.0..1.0).contains(&v));
            }
        }
    }

    #[test]
    fn test_random_normal_is_deterministic() {
        let a = Matrix::random_normal(5, 2, &mut StdRng::seed_from_u64(0));
        let b = Matrix::random_normal(5, 2, &mut StdRng::seed_from_u64(0));

        assert_eq!(a, b);
    }
}
