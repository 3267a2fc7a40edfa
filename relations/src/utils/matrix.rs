use ark_ff::Field;
use ark_std::vec::Vec;

/// A sparse representation of constraint matrices.
pub type Matrix<F> = Vec<Vec<(F, usize)>>;

/// Multiply a matrix by a vector. Columns beyond the end of `vector` read
/// as zero.
pub fn mat_vec_mul<F: Field>(matrix: &Matrix<F>, vector: &[F]) -> Vec<F> {
    matrix
        .iter()
        .map(|row| {
            row.iter()
                .filter_map(|(value, col)| vector.get(*col).map(|v| *v * value))
                .sum()
        })
        .collect()
}
