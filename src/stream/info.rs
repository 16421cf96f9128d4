use crate::decode::{decode_array, decode_keyed, Decode, DecodeError};
use crate::frame::Frame;
use crate::stream::StreamEntry;

/// Reply of `XINFO STREAM`.
///
/// Ref: <https://redis.io/docs/latest/commands/xinfo-stream/>
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamInfo {
    pub length: u64,
    pub radix_tree_keys: u64,
    pub radix_tree_nodes: u64,
    pub groups: u64,
    pub last_generated_id: String,
    /// `None` for an empty stream.
    pub first_entry: Option<StreamEntry>,
    /// `None` for an empty stream.
    pub last_entry: Option<StreamEntry>,
}

impl StreamInfo {
    fn decode_fields(frame: &Frame) -> Result<Self, DecodeError> {
        let items = decode_array(frame)?;

        Ok(Self {
            length: decode_keyed(items, 0, "length")?,
            radix_tree_keys: decode_keyed(items, 2, "radix-tree-keys")?,
            radix_tree_nodes: decode_keyed(items, 4, "radix-tree-nodes")?,
            groups: decode_keyed(items, 6, "groups")?,
            last_generated_id: decode_keyed(items, 8, "last-generated-id")?,
            first_entry: decode_keyed(items, 10, "first-entry")?,
            last_entry: decode_keyed(items, 12, "last-entry")?,
        })
    }
}

impl Decode for StreamInfo {
    fn decode(frame: &Frame) -> Result<Self, DecodeError> {
        Self::decode_fields(frame).map_err(|e| DecodeError::composite::<Self>(frame, e))
    }
}

/// One element of the `XINFO GROUPS` reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupInfo {
    pub name: String,
    pub consumers: u64,
    pub pending: u64,
    pub last_delivered_id: String,
}

impl GroupInfo {
    fn decode_fields(frame: &Frame) -> Result<Self, DecodeError> {
        let items = decode_array(frame)?;

        Ok(Self {
            name: decode_keyed(items, 0, "name")?,
            consumers: decode_keyed(items, 2, "consumers")?,
            pending: decode_keyed(items, 4, "pending")?,
            last_delivered_id: decode_keyed(items, 6, "last-delivered-id")?,
        })
    }
}

impl Decode for GroupInfo {
    fn decode(frame: &Frame) -> Result<Self, DecodeError> {
        Self::decode_fields(frame).map_err(|e| DecodeError::composite::<Self>(frame, e))
    }
}

/// One element of the `XINFO CONSUMERS` reply. `idle` is in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumerInfo {
    pub name: String,
    pub pending: u64,
    pub idle: u64,
}

impl ConsumerInfo {
    fn decode_fields(frame: &Frame) -> Result<Self, DecodeError> {
        let items = decode_array(frame)?;

        Ok(Self {
            name: decode_keyed(items, 0, "name")?,
            pending: decode_keyed(items, 2, "pending")?,
            idle: decode_keyed(items, 4, "idle")?,
        })
    }
}

impl Decode for ConsumerInfo {
    fn decode(frame: &Frame) -> Result<Self, DecodeError> {
        Self::decode_fields(frame).map_err(|e| DecodeError::composite::<Self>(frame, e))
    }
}
