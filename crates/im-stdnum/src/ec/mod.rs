//! Ecuador

pub mod ci;
