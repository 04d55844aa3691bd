pub mod cli;
pub mod error;
pub mod media;
pub mod organize;
pub mod plan;
pub mod report;
pub mod resolve;

pub use cli::Cli;
pub use error::PhotorgError;
pub use organize::{OrganizeConfig, OrganizeStats, organize};
pub use plan::plan;
pub use report::{ConsoleReporter, NullReporter, Reporter};
pub use resolve::{CaptureTimestamp, ResolvePolicy, resolve};
