//! Lithuania

pub mod asmens;
