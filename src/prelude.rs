pub use crate::builder::MtfTableBuilder;
pub use crate::ds::{IntrusiveList, SlotArena, SlotId};
pub use crate::error::{AllocError, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::TableMetricsSnapshot;
#[cfg(feature = "metrics")]
pub use crate::metrics::traits::{MetricsExporter, MetricsSnapshotProvider};
pub use crate::table::{Deleter, MtfTable};
pub use crate::traits::{KeyComparator, MtfLookupTable, OrdComparator};
