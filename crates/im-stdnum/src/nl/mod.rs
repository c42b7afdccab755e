//! Netherlands

pub mod bsn;
pub mod postcode;
