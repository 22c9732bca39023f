pub mod check;
pub mod list;

pub use check::check_command;
pub use list::list_command;
