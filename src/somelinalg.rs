/// tridiagonal systems, Thomas algorithm
pub mod Thomas;
