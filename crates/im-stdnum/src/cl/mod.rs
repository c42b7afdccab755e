//! Chile

pub mod rut;
