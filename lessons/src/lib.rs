//! Shared glue for the example programs: connection flags, logging setup and
//! console formatting.

pub mod cli;
pub mod logging;

pub use cli::{banner, rule, Connection};
pub use logging::init_logging;
