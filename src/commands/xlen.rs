use crate::commands::{CommandBuilder, Request};
use crate::decode::{Decode, DecodeError};
use crate::frame::Frame;

/// Returns the number of entries inside a stream. A missing key has length 0.
///
/// Ref: <https://redis.io/docs/latest/commands/xlen/>
#[derive(Debug, Clone, PartialEq)]
pub struct Xlen {
    pub key: String,
}

impl Request for Xlen {
    type Output = u64;

    const NAME: &'static str = "XLEN";

    fn write_args(&self, args: &mut CommandBuilder) {
        args.push(&self.key);
    }

    fn parse_reply(reply: &Frame) -> Result<Self::Output, DecodeError> {
        u64::decode(reply)
    }
}
