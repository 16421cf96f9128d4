use crate::decode::{decode_array, require_len, Decode, DecodeError, DecodeOptional};
use crate::frame::Frame;

/// Summary form of the XPENDING reply.
///
/// Redis answers a group without pending entries with a zero count and null ids, which is
/// reported as `None` rather than as a decode failure.
///
/// Ref: <https://redis.io/docs/latest/commands/xpending/>
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSummary {
    pub count: u64,
    pub smallest_id: String,
    pub greatest_id: String,
    pub consumers: Vec<PendingConsumer>,
}

/// Pending entries held by one consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingConsumer {
    pub name: String,
    pub pending: u64,
}

impl Decode for PendingConsumer {
    fn decode(frame: &Frame) -> Result<Self, DecodeError> {
        let items = decode_array(frame)?;
        require_len(items, 2)?;

        Ok(Self {
            name: String::decode(&items[0])?,
            // Sent as a bulk string by the server.
            pending: u64::decode(&items[1])?,
        })
    }
}

impl PendingSummary {
    fn decode_fields(frame: &Frame) -> Result<Option<Self>, DecodeError> {
        let items = decode_array(frame)?;
        require_len(items, 4)?;

        let count = u64::decode(&items[0])?;
        // The remaining fields are null here and must not be decoded.
        if count == 0 {
            return Ok(None);
        }

        Ok(Some(Self {
            count,
            smallest_id: String::decode(&items[1])?,
            greatest_id: String::decode(&items[2])?,
            consumers: Vec::<PendingConsumer>::decode(&items[3])?,
        }))
    }
}

impl DecodeOptional for PendingSummary {
    fn decode_optional(frame: &Frame) -> Result<Option<Self>, DecodeError> {
        Self::decode_fields(frame).map_err(|e| DecodeError::composite::<Self>(frame, e))
    }
}

/// One element of the extended XPENDING reply (with a range and count).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEntry {
    pub id: String,
    pub consumer: String,
    /// Milliseconds since the entry was last delivered.
    pub idle: u64,
    pub delivery_count: u64,
}

impl Decode for PendingEntry {
    fn decode(frame: &Frame) -> Result<Self, DecodeError> {
        let items = decode_array(frame)?;
        require_len(items, 4)?;
        if items.len() > 4 {
            return Err(DecodeError::type_mismatch::<Self>(frame));
        }

        Ok(Self {
            id: String::decode(&items[0])?,
            consumer: String::decode(&items[1])?,
            idle: u64::decode(&items[2])?,
            delivery_count: u64::decode(&items[3])?,
        })
    }
}
