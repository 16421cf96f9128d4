use crate::commands::{CommandBuilder, Request};
use crate::decode::{Decode, DecodeError};
use crate::frame::Frame;
use crate::stream::{ConsumerInfo, GroupInfo, StreamInfo};

/// `XINFO STREAM`
///
/// Ref: <https://redis.io/docs/latest/commands/xinfo-stream/>
#[derive(Debug, Clone, PartialEq)]
pub struct XinfoStream {
    pub key: String,
}

impl Request for XinfoStream {
    type Output = StreamInfo;

    const NAME: &'static str = "XINFO";

    fn write_args(&self, args: &mut CommandBuilder) {
        args.push("STREAM");
        args.push(&self.key);
    }

    fn parse_reply(reply: &Frame) -> Result<Self::Output, DecodeError> {
        StreamInfo::decode(reply)
    }
}

/// `XINFO GROUPS`
///
/// Ref: <https://redis.io/docs/latest/commands/xinfo-groups/>
#[derive(Debug, Clone, PartialEq)]
pub struct XinfoGroups {
    pub key: String,
}

impl Request for XinfoGroups {
    type Output = Vec<GroupInfo>;

    const NAME: &'static str = "XINFO";

    fn write_args(&self, args: &mut CommandBuilder) {
        args.push("GROUPS");
        args.push(&self.key);
    }

    fn parse_reply(reply: &Frame) -> Result<Self::Output, DecodeError> {
        Vec::<GroupInfo>::decode(reply)
    }
}

/// `XINFO CONSUMERS`
///
/// Ref: <https://redis.io/docs/latest/commands/xinfo-consumers/>
#[derive(Debug, Clone, PartialEq)]
pub struct XinfoConsumers {
    pub key: String,
    pub group: String,
}

impl Request for XinfoConsumers {
    type Output = Vec<ConsumerInfo>;

    const NAME: &'static str = "XINFO";

    fn write_args(&self, args: &mut CommandBuilder) {
        args.push("CONSUMERS");
        args.push(&self.key);
        args.push(&self.group);
    }

    fn parse_reply(reply: &Frame) -> Result<Self::Output, DecodeError> {
        Vec::<ConsumerInfo>::decode(reply)
    }
}
