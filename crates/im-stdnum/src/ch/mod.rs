//! Switzerland

pub mod ssn;
pub mod uid;
