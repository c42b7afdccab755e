//! Brazil

pub mod cpf;
