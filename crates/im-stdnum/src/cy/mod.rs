//! Cyprus

pub mod vat;
