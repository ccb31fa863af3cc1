/// Gate application on dense state vectors.
pub mod matrix_ops;
/// Measurement probabilities, sampling and collapse.
pub mod measurement_ops;
