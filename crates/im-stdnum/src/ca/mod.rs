//! Canada

pub mod bn;
pub mod sin;
