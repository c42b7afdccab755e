//! San Marino

pub mod coe;
