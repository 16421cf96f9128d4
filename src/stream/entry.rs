use crate::decode::{decode_array, require_len, Decode, DecodeError};
use crate::frame::Frame;
use crate::stream::FieldMap;

/// A single stream entry, `[id, [field, value, ...]]` on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamEntry {
    pub id: String,
    pub fields: FieldMap,
}

impl StreamEntry {
    pub fn new(id: impl Into<String>, fields: FieldMap) -> StreamEntry {
        StreamEntry {
            id: id.into(),
            fields,
        }
    }
}

impl Decode for StreamEntry {
    fn decode(frame: &Frame) -> Result<Self, DecodeError> {
        let items = decode_array(frame)?;
        require_len(items, 2)?;

        Ok(Self {
            id: String::decode(&items[0])?,
            fields: FieldMap::decode(&items[1])?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_entry() {
        let frame = Frame::Array(vec![
            Frame::bulk("1622793600000-0"),
            Frame::Array(vec![Frame::bulk("temperature"), Frame::bulk("22.5")]),
        ]);

        assert_eq!(
            StreamEntry::decode(&frame),
            Ok(StreamEntry::new(
                "1622793600000-0",
                FieldMap::from([("temperature", "22.5")])
            ))
        );
    }

    #[test]
    fn decode_entry_without_fields() {
        let frame = Frame::Array(vec![Frame::bulk("1622793600000-0")]);

        assert_eq!(
            StreamEntry::decode(&frame),
            Err(DecodeError::ArrayOutOfBounds { needed: 2, len: 1 })
        );
    }

    #[test]
    fn decode_entry_with_malformed_fields() {
        let frame = Frame::Array(vec![Frame::bulk("1-0"), Frame::Integer(3)]);

        assert!(matches!(
            StreamEntry::decode(&frame),
            Err(DecodeError::TypeMismatch { .. })
        ));
    }
}
