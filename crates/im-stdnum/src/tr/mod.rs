//! Turkey

pub mod vkn;
