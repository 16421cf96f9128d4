use crate::commands::{CommandBuilder, Request};
use crate::decode::{Decode, DecodeError};
use crate::frame::Frame;

/// Removes one or more messages from the pending entries list of a consumer group. Replies with
/// the number of messages acknowledged.
///
/// Ref: <https://redis.io/docs/latest/commands/xack/>
#[derive(Debug, Clone, PartialEq)]
pub struct Xack {
    pub key: String,
    pub group: String,
    pub ids: Vec<String>,
}

impl Xack {
    pub fn new<I, S>(key: impl Into<String>, group: impl Into<String>, ids: I) -> Xack
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Xack {
            key: key.into(),
            group: group.into(),
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }
}

impl Request for Xack {
    type Output = u64;

    const NAME: &'static str = "XACK";

    fn write_args(&self, args: &mut CommandBuilder) {
        args.push(&self.key);
        args.push(&self.group);
        args.extend(&self.ids);
    }

    fn parse_reply(reply: &Frame) -> Result<Self::Output, DecodeError> {
        u64::decode(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args() {
        let cmd = Xack::new("sensor:1", "workers", ["1-0", "2-0"]);

        assert_eq!(
            cmd.to_frame(),
            Frame::Array(vec![
                Frame::from("XACK"),
                Frame::from("sensor:1"),
                Frame::from("workers"),
                Frame::from("1-0"),
                Frame::from("2-0"),
            ])
        );
    }

    #[test]
    fn reply() {
        assert_eq!(Xack::parse_reply(&Frame::Integer(2)), Ok(2));
    }
}
