mod common;
mod fact_cli;

pub use common::*;
pub use fact_cli::*;
