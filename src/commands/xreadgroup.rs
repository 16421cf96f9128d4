use crate::commands::xread::write_streams;
use crate::commands::{CommandBuilder, Request};
use crate::decode::{Decode, DecodeError};
use crate::frame::Frame;
use crate::stream::StreamReadReply;

/// XREAD on behalf of `consumer` in a consumer group. Use `>` as id to get messages never
/// delivered to any consumer of the group, any other id to re-read the consumer's own pending
/// messages.
///
/// Ref: <https://redis.io/docs/latest/commands/xreadgroup/>
#[derive(Debug, Clone, PartialEq)]
pub struct Xreadgroup {
    pub group: String,
    pub consumer: String,
    /// `(key, id)` pairs.
    pub streams: Vec<(String, String)>,
    pub count: Option<u64>,
    pub block: Option<u64>,
    /// `NOACK`: do not add the messages to the pending entries list.
    pub noack: bool,
}

impl Xreadgroup {
    pub fn new(group: impl Into<String>, consumer: impl Into<String>) -> Xreadgroup {
        Xreadgroup {
            group: group.into(),
            consumer: consumer.into(),
            streams: Vec::new(),
            count: None,
            block: None,
            noack: false,
        }
    }

    pub fn stream(mut self, key: impl Into<String>, id: impl Into<String>) -> Xreadgroup {
        self.streams.push((key.into(), id.into()));
        self
    }

    pub fn count(mut self, count: u64) -> Xreadgroup {
        self.count = Some(count);
        self
    }

    pub fn block(mut self, ms: u64) -> Xreadgroup {
        self.block = Some(ms);
        self
    }

    pub fn noack(mut self) -> Xreadgroup {
        self.noack = true;
        self
    }
}

impl Request for Xreadgroup {
    type Output = StreamReadReply;

    const NAME: &'static str = "XREADGROUP";

    fn write_args(&self, args: &mut CommandBuilder) {
        args.push("GROUP");
        args.push(&self.group);
        args.push(&self.consumer);
        args.push_option("COUNT", self.count);
        args.push_option("BLOCK", self.block);
        args.push_flag("NOACK", self.noack);
        write_streams(&self.streams, args);
    }

    fn parse_reply(reply: &Frame) -> Result<Self::Output, DecodeError> {
        StreamReadReply::decode(reply)
    }
}
