use crate::commands::{CommandBuilder, Request};
use crate::decode::{Decode, DecodeError};
use crate::frame::Frame;
use crate::key_type::KeyType;

/// Returns the type of the value stored at `key`, `none` when the key does not exist.
///
/// Useful to check that a key holds a stream before issuing stream commands against it.
///
/// Ref: <https://redis.io/docs/latest/commands/type/>
#[derive(Debug, Clone, PartialEq)]
pub struct Type {
    pub key: String,
}

impl Request for Type {
    type Output = KeyType;

    const NAME: &'static str = "TYPE";

    fn write_args(&self, args: &mut CommandBuilder) {
        args.push(&self.key);
    }

    fn parse_reply(reply: &Frame) -> Result<Self::Output, DecodeError> {
        KeyType::decode(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existing_key() {
        let cmd = Type {
            key: String::from("key1"),
        };

        assert_eq!(
            cmd.to_frame(),
            Frame::Array(vec![Frame::from("TYPE"), Frame::from("key1")])
        );
        assert_eq!(
            Type::parse_reply(&Frame::Simple("stream".to_string())),
            Ok(KeyType::Stream)
        );
    }

    #[test]
    fn missing_key() {
        assert_eq!(
            Type::parse_reply(&Frame::Simple("none".to_string())),
            Ok(KeyType::None)
        );
    }
}
