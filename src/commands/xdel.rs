use crate::commands::{CommandBuilder, Request};
use crate::decode::{Decode, DecodeError};
use crate::frame::Frame;

/// Removes the specified entries from a stream. Replies with the number of entries deleted,
/// which may be lower than the number of ids passed when some do not exist.
///
/// Ref: <https://redis.io/docs/latest/commands/xdel/>
#[derive(Debug, Clone, PartialEq)]
pub struct Xdel {
    pub key: String,
    pub ids: Vec<String>,
}

impl Xdel {
    pub fn new<I, S>(key: impl Into<String>, ids: I) -> Xdel
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Xdel {
            key: key.into(),
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }
}

impl Request for Xdel {
    type Output = u64;

    const NAME: &'static str = "XDEL";

    fn write_args(&self, args: &mut CommandBuilder) {
        args.push(&self.key);
        args.extend(&self.ids);
    }

    fn parse_reply(reply: &Frame) -> Result<Self::Output, DecodeError> {
        u64::decode(reply)
    }
}
