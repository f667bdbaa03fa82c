//! Helpers shared by the day modules

pub mod parse;
