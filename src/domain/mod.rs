pub mod disclosure;
pub mod grouping;
pub mod record;

pub use disclosure::DisclosureState;
pub use grouping::{find_group, group_by_date, DateGroup};
pub use record::{Record, RecordId, UNKNOWN_DATE};
