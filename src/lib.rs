mod config;
mod link;
mod rel_path;

pub use self::config::*;
pub use self::link::*;
pub use self::rel_path::RelPath;

type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;
