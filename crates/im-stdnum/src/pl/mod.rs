//! Poland

pub mod nip;
