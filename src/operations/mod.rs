//! Operation orchestration for Baler commands

pub mod generate;
