//! Slovenia

pub mod ddv;
