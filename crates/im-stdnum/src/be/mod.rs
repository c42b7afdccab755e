//! Belgium

pub mod vat;
