use std::collections::hash_map::{self, HashMap};

use crate::decode::{decode_array, require_len, Decode, DecodeError};
use crate::frame::Frame;
use crate::stream::StreamEntry;

/// Reply of XREAD and XREADGROUP: the new entries of every stream that had any, by stream key.
///
/// A blocking read that times out comes back as a null reply and decodes to an empty
/// `StreamReadReply`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamReadReply {
    streams: HashMap<String, Vec<StreamEntry>>,
}

impl StreamReadReply {
    pub fn new() -> StreamReadReply {
        StreamReadReply::default()
    }

    pub fn get(&self, key: &str) -> Option<&[StreamEntry]> {
        self.streams.get(key).map(|entries| entries.as_slice())
    }

    pub fn insert(&mut self, key: impl Into<String>, entries: Vec<StreamEntry>) {
        self.streams.insert(key.into(), entries);
    }

    /// Number of streams in the reply.
    pub fn len(&self) -> usize {
        self.streams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.streams.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, Vec<StreamEntry>> {
        self.streams.iter()
    }
}

impl IntoIterator for StreamReadReply {
    type Item = (String, Vec<StreamEntry>);
    type IntoIter = hash_map::IntoIter<String, Vec<StreamEntry>>;

    fn into_iter(self) -> Self::IntoIter {
        self.streams.into_iter()
    }
}

impl<'a> IntoIterator for &'a StreamReadReply {
    type Item = (&'a String, &'a Vec<StreamEntry>);
    type IntoIter = hash_map::Iter<'a, String, Vec<StreamEntry>>;

    fn into_iter(self) -> Self::IntoIter {
        self.streams.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<StreamEntry>)> for StreamReadReply {
    fn from_iter<I: IntoIterator<Item = (K, Vec<StreamEntry>)>>(iter: I) -> Self {
        let mut reply = StreamReadReply::new();
        for (key, entries) in iter {
            reply.insert(key, entries);
        }
        reply
    }
}

impl Decode for StreamReadReply {
    fn decode(frame: &Frame) -> Result<Self, DecodeError> {
        if frame.is_null() {
            return Ok(StreamReadReply::new());
        }

        let mut reply = StreamReadReply::new();
        for stream in decode_array(frame)? {
            let values = decode_array(stream)?;
            require_len(values, 2)?;

            let key = String::decode(&values[0])?;
            let entries = Vec::<StreamEntry>::decode(&values[1])?;
            reply.insert(key, entries);
        }
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::FieldMap;

    fn entry_frame(id: &str, field: &str, value: &str) -> Frame {
        Frame::Array(vec![
            Frame::from(id),
            Frame::Array(vec![Frame::from(field), Frame::from(value)]),
        ])
    }

    #[test]
    fn decode_multiple_streams() {
        let frame = Frame::Array(
            (0..3)
                .map(|s| {
                    Frame::Array(vec![
                        Frame::from(format!("sensor:{}", s)),
                        Frame::Array(
                            (0..4)
                                .map(|e| entry_frame(&format!("{}-0", e), "n", &e.to_string()))
                                .collect(),
                        ),
                    ])
                })
                .collect(),
        );

        let reply = StreamReadReply::decode(&frame).unwrap();

        assert_eq!(reply.len(), 3);
        for s in 0..3 {
            let entries = reply.get(&format!("sensor:{}", s)).unwrap();
            let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
            assert_eq!(ids, vec!["0-0", "1-0", "2-0", "3-0"]);
            assert_eq!(entries[2].fields.get::<u32>("n"), Some(2));
        }
    }

    #[test]
    fn decode_null_reply_is_empty() {
        let reply = StreamReadReply::decode(&Frame::Null).unwrap();

        assert!(reply.is_empty());
    }

    #[test]
    fn decode_empty_array_is_empty() {
        let reply = StreamReadReply::decode(&Frame::Array(vec![])).unwrap();

        assert!(reply.is_empty());
    }

    #[test]
    fn decode_stream_without_entries_array() {
        let frame = Frame::Array(vec![Frame::Array(vec![Frame::from("sensor:1")])]);

        assert_eq!(
            StreamReadReply::decode(&frame),
            Err(DecodeError::ArrayOutOfBounds { needed: 2, len: 1 })
        );
    }

    #[test]
    fn decode_rejects_scalar_reply() {
        assert!(matches!(
            StreamReadReply::decode(&Frame::Integer(0)),
            Err(DecodeError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn collect_from_pairs() {
        let entry = StreamEntry::new("1-0", FieldMap::from([("a", "b")]));
        let reply: StreamReadReply = vec![("s", vec![entry.clone()])].into_iter().collect();

        assert_eq!(reply.get("s"), Some(&[entry][..]));
        assert_eq!(reply.keys().collect::<Vec<_>>(), vec!["s"]);
    }
}
