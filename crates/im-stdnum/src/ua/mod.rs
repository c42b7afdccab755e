//! Ukraine

pub mod rntrc;
