pub mod cli;
pub mod error;
pub mod message;
pub mod metrics;
pub mod package;
pub mod source;
pub mod training;
pub mod types;

pub use cli::run;
pub use error::TrackerError;
pub use message::InfoMessage;
pub use metrics::Metrics;
pub use package::read_package;
pub use source::{packages_from_json, sample_packages, Package};
pub use training::{Reading, Running, SportsWalking, Swimming, Training, Workout, WorkoutKind};
pub use types::{ErrorPolicy, RunConfig, RunReport};
