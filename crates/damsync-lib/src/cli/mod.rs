mod args;
mod mirror;
mod params;
mod resolved_command;
mod serve;

pub use args::{Args, Command, parse_args};
pub use mirror::run_mirror_job;
pub use params::{MirrorParams, ServeParams};
pub use resolved_command::{ResolvedCommand, resolve_command};
pub use serve::run_serve;
