//! Stream entries and the replies of the stream commands.

pub mod entry;
pub mod fields;
pub mod info;
pub mod pending;
pub mod read;

pub use entry::StreamEntry;
pub use fields::FieldMap;
pub use info::{ConsumerInfo, GroupInfo, StreamInfo};
pub use pending::{PendingConsumer, PendingEntry, PendingSummary};
pub use read::StreamReadReply;
