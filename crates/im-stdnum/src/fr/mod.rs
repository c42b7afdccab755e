//! France

pub mod siren;
