use std::fmt;
use std::str::FromStr;

use strum_macros::EnumString;

use crate::decode::{Decode, DecodeError};
use crate::frame::Frame;

/// Type of the value stored at a key, as reported by `TYPE`.
///
/// Ref: <https://redis.io/docs/latest/commands/type/>
#[derive(Debug, Clone, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum KeyType {
    String,
    List,
    Set,
    Zset,
    Hash,
    Stream,
    /// The key does not exist.
    None,
    /// A type this crate does not know about, e.g. one added by a module.
    #[strum(default)]
    Unknown(String),
}

impl KeyType {
    pub fn as_str(&self) -> &str {
        match self {
            KeyType::String => "string",
            KeyType::List => "list",
            KeyType::Set => "set",
            KeyType::Zset => "zset",
            KeyType::Hash => "hash",
            KeyType::Stream => "stream",
            KeyType::None => "none",
            KeyType::Unknown(name) => name,
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Decode for KeyType {
    fn decode(frame: &Frame) -> Result<Self, DecodeError> {
        let name = String::decode(frame)?;
        KeyType::from_str(&name).map_err(|_| DecodeError::type_mismatch::<Self>(frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_known_types() {
        assert_eq!(
            KeyType::decode(&Frame::Simple("stream".to_string())),
            Ok(KeyType::Stream)
        );
        assert_eq!(
            KeyType::decode(&Frame::Simple("none".to_string())),
            Ok(KeyType::None)
        );
        assert_eq!(
            KeyType::decode(&Frame::Simple("zset".to_string())),
            Ok(KeyType::Zset)
        );
    }

    #[test]
    fn decode_unknown_type() {
        let key_type = KeyType::decode(&Frame::Simple("ReJSON-RL".to_string())).unwrap();

        assert_eq!(key_type, KeyType::Unknown("ReJSON-RL".to_string()));
        assert_eq!(key_type.to_string(), "ReJSON-RL");
    }

    #[test]
    fn decode_rejects_integer() {
        assert!(KeyType::decode(&Frame::Integer(1)).is_err());
    }
}
