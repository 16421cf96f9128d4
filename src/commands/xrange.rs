use crate::commands::{CommandBuilder, Request};
use crate::decode::{Decode, DecodeError};
use crate::frame::Frame;
use crate::stream::StreamEntry;

/// Returns the entries with ids between `start` and `end`, both inclusive. `-` and `+` stand for
/// the smallest and greatest ids.
///
/// Ref: <https://redis.io/docs/latest/commands/xrange/>
#[derive(Debug, Clone, PartialEq)]
pub struct Xrange {
    pub key: String,
    pub start: String,
    pub end: String,
    pub count: Option<u64>,
}

impl Xrange {
    pub fn new(key: impl Into<String>, start: impl Into<String>, end: impl Into<String>) -> Xrange {
        Xrange {
            key: key.into(),
            start: start.into(),
            end: end.into(),
            count: None,
        }
    }

    pub fn count(mut self, count: u64) -> Xrange {
        self.count = Some(count);
        self
    }
}

impl Request for Xrange {
    type Output = Vec<StreamEntry>;

    const NAME: &'static str = "XRANGE";

    fn write_args(&self, args: &mut CommandBuilder) {
        args.push(&self.key);
        args.push(&self.start);
        args.push(&self.end);
        args.push_option("COUNT", self.count);
    }

    fn parse_reply(reply: &Frame) -> Result<Self::Output, DecodeError> {
        Vec::<StreamEntry>::decode(reply)
    }
}

/// Like [`Xrange`] in reverse order; note that the greater id (`end`) comes first.
///
/// Ref: <https://redis.io/docs/latest/commands/xrevrange/>
#[derive(Debug, Clone, PartialEq)]
pub struct Xrevrange {
    pub key: String,
    pub end: String,
    pub start: String,
    pub count: Option<u64>,
}

impl Xrevrange {
    pub fn new(
        key: impl Into<String>,
        end: impl Into<String>,
        start: impl Into<String>,
    ) -> Xrevrange {
        Xrevrange {
            key: key.into(),
            end: end.into(),
            start: start.into(),
            count: None,
        }
    }

    pub fn count(mut self, count: u64) -> Xrevrange {
        self.count = Some(count);
        self
    }
}

impl Request for Xrevrange {
    type Output = Vec<StreamEntry>;

    const NAME: &'static str = "XREVRANGE";

    fn write_args(&self, args: &mut CommandBuilder) {
        args.push(&self.key);
        args.push(&self.end);
        args.push(&self.start);
        args.push_option("COUNT", self.count);
    }

    fn parse_reply(reply: &Frame) -> Result<Self::Output, DecodeError> {
        Vec::<StreamEntry>::decode(reply)
    }
}
