pub mod command;
#[allow(clippy::module_inception)]
pub mod parser;
