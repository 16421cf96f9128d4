// https://redis.io/docs/reference/protocol-spec

use std::fmt;

use bytes::Bytes;

/// An already-parsed RESP value.
///
/// Requests are sent as arrays of bulk strings and replies come back as an arbitrary tree of
/// frames. Byte-level framing is left to the transport; this type only models the tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Frame {
    Simple(String),
    Error(String),
    Integer(i64),
    Bulk(Bytes),
    // RESP2 has both a null bulk string and a null array, both end up here.
    Null,
    Array(Vec<Frame>),
}

impl Frame {
    pub fn bulk(value: impl Into<Bytes>) -> Frame {
        Frame::Bulk(value.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Frame::Null)
    }

    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Frame::Simple(_) => "simple string",
            Frame::Error(_) => "error",
            Frame::Integer(_) => "integer",
            Frame::Bulk(_) => "bulk string",
            Frame::Null => "null",
            Frame::Array(_) => "array",
        }
    }
}

impl From<&str> for Frame {
    fn from(value: &str) -> Self {
        Frame::Bulk(Bytes::copy_from_slice(value.as_bytes()))
    }
}

impl From<String> for Frame {
    fn from(value: String) -> Self {
        Frame::Bulk(Bytes::from(value))
    }
}

impl From<&String> for Frame {
    fn from(value: &String) -> Self {
        Frame::from(value.as_str())
    }
}

impl From<Bytes> for Frame {
    fn from(value: Bytes) -> Self {
        Frame::Bulk(value)
    }
}

// Numbers travel as bulk strings in requests, Redis parses them on its side.
impl From<i64> for Frame {
    fn from(value: i64) -> Self {
        Frame::from(value.to_string())
    }
}

impl From<u64> for Frame {
    fn from(value: u64) -> Self {
        Frame::from(value.to_string())
    }
}

impl From<usize> for Frame {
    fn from(value: usize) -> Self {
        Frame::from(value.to_string())
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frame::Simple(s) => write!(f, "+{}", s),
            Frame::Error(s) => write!(f, "-{}", s),
            Frame::Integer(i) => write!(f, ":{}", i),
            Frame::Bulk(bytes) => write!(f, "{:?}", String::from_utf8_lossy(bytes)),
            Frame::Null => write!(f, "(nil)"),
            Frame::Array(arr) => {
                write!(f, "[")?;
                for (i, frame) in arr.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", frame)?;
                }
                write!(f, "]")
            }
        }
    }
}
