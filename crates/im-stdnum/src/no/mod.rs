//! Norway

pub mod orgnr;
