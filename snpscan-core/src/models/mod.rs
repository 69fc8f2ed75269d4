pub mod application;
pub mod observation;
pub mod reference;
pub mod result;
pub mod summary;

// re-export for cleaner imports
pub use self::application::Application;
pub use self::observation::{GenotypeCall, Observation};
pub use self::reference::ReferenceEntry;
pub use self::result::{MatchedRow, RowFault, RowScore, ScoredRow};
pub use self::summary::{ConditionSummary, GroupScore, Verdict};
