//! United States

pub mod rtn;
