pub mod error;
pub mod pattern;
pub mod privilege;
pub mod finder;
pub mod deleter;
pub mod rename;
pub mod swap;

pub use error::{FindDeleteError, Result};
pub use pattern::{MatchMode, NamePredicate, PatternMatcher};
pub use privilege::PrivilegeLevel;
pub use finder::{find, MatchResult, SearchOutcome, SearchRequest};
pub use deleter::{delete, DeletionOutcome, DeletionReport, ItemConfirm, ItemOutcome};
pub use rename::{PunctuationStripper, RenameOutcome};
pub use swap::{swap_versions, SwapOutcome, VersionPair};
