pub mod console;
pub mod confirm;
pub mod display;

pub use console::Console;
pub use confirm::{confirm, Decision};
pub use display::{format_elapsed, print_deletion_report, print_matches};
