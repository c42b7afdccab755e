//! Estonia

pub mod ik;
