use crate::commands::{CommandBuilder, Request};
use crate::decode::{Decode, DecodeError, DecodeOptional};
use crate::frame::Frame;
use crate::stream::{PendingEntry, PendingSummary};

/// XPENDING in its summary form. Replies with `None` when the group has no pending messages.
///
/// Ref: <https://redis.io/docs/latest/commands/xpending/>
#[derive(Debug, Clone, PartialEq)]
pub struct Xpending {
    pub key: String,
    pub group: String,
}

impl Request for Xpending {
    type Output = Option<PendingSummary>;

    const NAME: &'static str = "XPENDING";

    fn write_args(&self, args: &mut CommandBuilder) {
        args.push(&self.key);
        args.push(&self.group);
    }

    fn parse_reply(reply: &Frame) -> Result<Self::Output, DecodeError> {
        PendingSummary::decode_optional(reply)
    }
}

/// XPENDING in its extended form: details about up to `count` pending messages with ids between
/// `start` and `end`, optionally only those of one consumer.
#[derive(Debug, Clone, PartialEq)]
pub struct XpendingRange {
    pub key: String,
    pub group: String,
    pub start: String,
    pub end: String,
    pub count: u64,
    /// `IDLE <ms>`: only messages idle for at least this long.
    pub min_idle_time: Option<u64>,
    pub consumer: Option<String>,
}

impl XpendingRange {
    pub fn new(
        key: impl Into<String>,
        group: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
        count: u64,
    ) -> XpendingRange {
        XpendingRange {
            key: key.into(),
            group: group.into(),
            start: start.into(),
            end: end.into(),
            count,
            min_idle_time: None,
            consumer: None,
        }
    }

    pub fn min_idle_time(mut self, ms: u64) -> XpendingRange {
        self.min_idle_time = Some(ms);
        self
    }

    pub fn consumer(mut self, consumer: impl Into<String>) -> XpendingRange {
        self.consumer = Some(consumer.into());
        self
    }
}

impl Request for XpendingRange {
    type Output = Vec<PendingEntry>;

    const NAME: &'static str = "XPENDING";

    fn write_args(&self, args: &mut CommandBuilder) {
        args.push(&self.key);
        args.push(&self.group);
        args.push_option("IDLE", self.min_idle_time);
        args.push(&self.start);
        args.push(&self.end);
        args.push(self.count);
        if let Some(consumer) = &self.consumer {
            args.push(consumer);
        }
    }

    fn parse_reply(reply: &Frame) -> Result<Self::Output, DecodeError> {
        Vec::<PendingEntry>::decode(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary() {
        let cmd = Xpending {
            key: String::from("sensor:1"),
            group: String::from("workers"),
        };

        assert_eq!(
            cmd.to_frame(),
            Frame::Array(vec![
                Frame::from("XPENDING"),
                Frame::from("sensor:1"),
                Frame::from("workers"),
            ])
        );
        assert_eq!(
            Xpending::parse_reply(&Frame::Array(vec![
                Frame::Integer(0),
                Frame::Null,
                Frame::Null,
                Frame::Null,
            ])),
            Ok(None)
        );
    }

    #[test]
    fn range() {
        let cmd = XpendingRange::new("sensor:1", "workers", "-", "+", 10);

        assert_eq!(
            cmd.args(),
            vec![
                Frame::from("sensor:1"),
                Frame::from("workers"),
                Frame::from("-"),
                Frame::from("+"),
                Frame::from("10"),
            ]
        );
    }

    #[test]
    fn range_with_idle_and_consumer() {
        let cmd = XpendingRange::new("sensor:1", "workers", "-", "+", 10)
            .min_idle_time(60000)
            .consumer("alice");

        assert_eq!(
            cmd.args(),
            vec![
                Frame::from("sensor:1"),
                Frame::from("workers"),
                Frame::from("IDLE"),
                Frame::from("60000"),
                Frame::from("-"),
                Frame::from("+"),
                Frame::from("10"),
                Frame::from("alice"),
            ]
        );
    }

    #[test]
    fn range_reply() {
        let reply = Frame::Array(vec![Frame::Array(vec![
            Frame::from("1-0"),
            Frame::from("alice"),
            Frame::Integer(100),
            Frame::Integer(2),
        ])]);

        assert_eq!(
            XpendingRange::parse_reply(&reply),
            Ok(vec![PendingEntry {
                id: "1-0".to_string(),
                consumer: "alice".to_string(),
                idle: 100,
                delivery_count: 2,
            }])
        );
    }
}
