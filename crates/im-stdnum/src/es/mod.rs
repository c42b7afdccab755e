//! Spain

pub mod dni;
pub mod nie;
