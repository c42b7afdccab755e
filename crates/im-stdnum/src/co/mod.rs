//! Colombia

pub mod nit;
