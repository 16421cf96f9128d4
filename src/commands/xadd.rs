use crate::commands::{CommandBuilder, Request, Trim};
use crate::decode::{Decode, DecodeError};
use crate::frame::Frame;
use crate::stream::FieldMap;

/// Appends an entry to the stream at `key`, creating the stream if needed, and optionally trims
/// it in the same call. Replies with the id of the new entry.
///
/// Ref: <https://redis.io/docs/latest/commands/xadd/>
#[derive(Debug, Clone, PartialEq)]
pub struct Xadd {
    pub key: String,
    /// `*` lets the server generate the id.
    pub id: String,
    pub fields: FieldMap,
    pub trim: Option<Trim>,
}

impl Xadd {
    pub fn new(key: impl Into<String>, fields: FieldMap) -> Xadd {
        Xadd {
            key: key.into(),
            id: String::from("*"),
            fields,
            trim: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Xadd {
        self.id = id.into();
        self
    }

    pub fn trim(mut self, trim: Trim) -> Xadd {
        self.trim = Some(trim);
        self
    }
}

impl Request for Xadd {
    type Output = String;

    const NAME: &'static str = "XADD";

    fn write_args(&self, args: &mut CommandBuilder) {
        args.push(&self.key);
        if let Some(trim) = &self.trim {
            trim.write_args(args);
        }
        args.push(&self.id);
        args.extend(self.fields.flatten());
    }

    fn parse_reply(reply: &Frame) -> Result<Self::Output, DecodeError> {
        String::decode(reply)
    }
}
