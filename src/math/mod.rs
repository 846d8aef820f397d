pub mod hilbert;
pub mod matrix;
pub mod power;
pub mod vector;
