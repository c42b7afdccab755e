//! South Africa

pub mod tin;
