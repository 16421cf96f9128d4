use crate::commands::{CommandBuilder, Request};
use crate::decode::{decode_ok, Decode, DecodeError};
use crate::frame::Frame;

/// `XGROUP CREATE`: creates a consumer group starting after `id` (`$` for new entries only,
/// `0` for the whole stream).
///
/// Ref: <https://redis.io/docs/latest/commands/xgroup-create/>
#[derive(Debug, Clone, PartialEq)]
pub struct XgroupCreate {
    pub key: String,
    pub group: String,
    pub id: String,
    /// `MKSTREAM`: create an empty stream when `key` does not exist.
    pub mkstream: bool,
}

impl XgroupCreate {
    pub fn new(key: impl Into<String>, group: impl Into<String>) -> XgroupCreate {
        XgroupCreate {
            key: key.into(),
            group: group.into(),
            id: String::from("0"),
            mkstream: false,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> XgroupCreate {
        self.id = id.into();
        self
    }

    pub fn mkstream(mut self) -> XgroupCreate {
        self.mkstream = true;
        self
    }
}

impl Request for XgroupCreate {
    type Output = bool;

    const NAME: &'static str = "XGROUP";

    fn write_args(&self, args: &mut CommandBuilder) {
        args.push("CREATE");
        args.push(&self.key);
        args.push(&self.group);
        args.push(&self.id);
        args.push_flag("MKSTREAM", self.mkstream);
    }

    fn parse_reply(reply: &Frame) -> Result<Self::Output, DecodeError> {
        decode_ok(reply)
    }
}

/// `XGROUP SETID`: moves the last delivered id of a group.
///
/// Ref: <https://redis.io/docs/latest/commands/xgroup-setid/>
#[derive(Debug, Clone, PartialEq)]
pub struct XgroupSetId {
    pub key: String,
    pub group: String,
    pub id: String,
}

impl Request for XgroupSetId {
    type Output = bool;

    const NAME: &'static str = "XGROUP";

    fn write_args(&self, args: &mut CommandBuilder) {
        args.push("SETID");
        args.push(&self.key);
        args.push(&self.group);
        args.push(&self.id);
    }

    fn parse_reply(reply: &Frame) -> Result<Self::Output, DecodeError> {
        decode_ok(reply)
    }
}

/// `XGROUP DESTROY`: replies with the number of destroyed groups, 0 or 1.
///
/// Ref: <https://redis.io/docs/latest/commands/xgroup-destroy/>
#[derive(Debug, Clone, PartialEq)]
pub struct XgroupDestroy {
    pub key: String,
    pub group: String,
}

impl Request for XgroupDestroy {
    type Output = u64;

    const NAME: &'static str = "XGROUP";

    fn write_args(&self, args: &mut CommandBuilder) {
        args.push("DESTROY");
        args.push(&self.key);
        args.push(&self.group);
    }

    fn parse_reply(reply: &Frame) -> Result<Self::Output, DecodeError> {
        u64::decode(reply)
    }
}

/// `XGROUP DELCONSUMER`: replies with the number of pending messages the consumer had.
///
/// Ref: <https://redis.io/docs/latest/commands/xgroup-delconsumer/>
#[derive(Debug, Clone, PartialEq)]
pub struct XgroupDelConsumer {
    pub key: String,
    pub group: String,
    pub consumer: String,
}

impl Request for XgroupDelConsumer {
    type Output = u64;

    const NAME: &'static str = "XGROUP";

    fn write_args(&self, args: &mut CommandBuilder) {
        args.push("DELCONSUMER");
        args.push(&self.key);
        args.push(&self.group);
        args.push(&self.consumer);
    }

    fn parse_reply(reply: &Frame) -> Result<Self::Output, DecodeError> {
        u64::decode(reply)
    }
}

/// `XGROUP HELP`
#[derive(Debug, Clone, PartialEq)]
pub struct XgroupHelp;

impl Request for XgroupHelp {
    type Output = Vec<String>;

    const NAME: &'static str = "XGROUP";

    fn write_args(&self, args: &mut CommandBuilder) {
        args.push("HELP");
    }

    fn parse_reply(reply: &Frame) -> Result<Self::Output, DecodeError> {
        Vec::<String>::decode(reply)
    }
}
