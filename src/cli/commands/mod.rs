//! CLI commands implementation.

mod check;
mod serve;
mod show;

pub use check::cmd_check;
pub use serve::cmd_serve;
pub use show::cmd_show;
