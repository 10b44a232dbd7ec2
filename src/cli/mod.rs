pub mod algorithm;
pub mod args;
pub mod exit;

pub use algorithm::{Algorithm, Width};
pub use args::{Cli, USAGE};
pub use exit::{Outcome, exit_code};
