mod command;
pub mod recipe;
pub mod shopping;

pub use command::*;
