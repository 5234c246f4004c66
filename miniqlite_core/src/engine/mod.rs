pub mod execute;
pub mod format;
pub mod outcome;

pub use execute::execute_command;
pub use format::format_select;
pub use outcome::{Outcome, ResultSet};
