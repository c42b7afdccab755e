//! Guinea

pub mod nifp;
