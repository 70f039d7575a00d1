pub mod config;
pub mod error;
pub mod grade;
pub mod loader;
pub mod output;
pub mod record;
pub mod roster;
pub mod utility;

pub use error::{EmptyRoster, LoadError, RecordError};
pub use grade::Grade;
pub use loader::{Loaded, load_or_sample, load_roster, parse_roster, sample_roster};
pub use record::StudentRecord;
pub use roster::Roster;
