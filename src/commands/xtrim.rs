use crate::commands::{CommandBuilder, Request};
use crate::decode::{Decode, DecodeError};
use crate::frame::Frame;

/// `MAXLEN [~] <count>` trimming strategy, shared by XTRIM and XADD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trim {
    pub max_len: u64,
    /// Without it Redis may keep a few more entries than `max_len` (`~`), which is cheaper.
    pub exact: bool,
}

impl Trim {
    pub fn approx(max_len: u64) -> Trim {
        Trim {
            max_len,
            exact: false,
        }
    }

    pub fn exact(max_len: u64) -> Trim {
        Trim {
            max_len,
            exact: true,
        }
    }

    pub(crate) fn write_args(&self, args: &mut CommandBuilder) {
        args.push("MAXLEN");
        args.push_flag("~", !self.exact);
        args.push(self.max_len);
    }
}

/// Trims the stream to a maximum number of entries. Replies with the number of entries evicted.
///
/// Ref: <https://redis.io/docs/latest/commands/xtrim/>
#[derive(Debug, Clone, PartialEq)]
pub struct Xtrim {
    pub key: String,
    pub trim: Trim,
}

impl Request for Xtrim {
    type Output = u64;

    const NAME: &'static str = "XTRIM";

    fn write_args(&self, args: &mut CommandBuilder) {
        args.push(&self.key);
        self.trim.write_args(args);
    }

    fn parse_reply(reply: &Frame) -> Result<Self::Output, DecodeError> {
        u64::decode(reply)
    }
}
