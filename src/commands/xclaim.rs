use crate::commands::{CommandBuilder, Request};
use crate::decode::{Decode, DecodeError};
use crate::frame::Frame;
use crate::stream::StreamEntry;

/// Changes the ownership of pending messages of a consumer group to `consumer`, for messages
/// idle for at least `min_idle_time` milliseconds. Replies with the claimed entries.
///
/// Ref: <https://redis.io/docs/latest/commands/xclaim/>
#[derive(Debug, Clone, PartialEq)]
pub struct Xclaim {
    pub key: String,
    pub group: String,
    pub consumer: String,
    pub min_idle_time: u64,
    pub ids: Vec<String>,
    /// `IDLE <ms>`: idle time to set on the claimed messages.
    pub idle: Option<u64>,
    /// `TIME <unix ms>`: like `idle` but as an absolute time.
    pub time: Option<u64>,
    /// `RETRYCOUNT <count>`: delivery counter to set on the claimed messages.
    pub retry_count: Option<u64>,
    /// `FORCE`: create pending entries for ids that are not pending yet.
    pub force: bool,
}

impl Xclaim {
    pub fn new<I, S>(
        key: impl Into<String>,
        group: impl Into<String>,
        consumer: impl Into<String>,
        min_idle_time: u64,
        ids: I,
    ) -> Xclaim
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Xclaim {
            key: key.into(),
            group: group.into(),
            consumer: consumer.into(),
            min_idle_time,
            ids: ids.into_iter().map(Into::into).collect(),
            idle: None,
            time: None,
            retry_count: None,
            force: false,
        }
    }

    pub fn idle(mut self, ms: u64) -> Xclaim {
        self.idle = Some(ms);
        self
    }

    pub fn time(mut self, unix_ms: u64) -> Xclaim {
        self.time = Some(unix_ms);
        self
    }

    pub fn retry_count(mut self, count: u64) -> Xclaim {
        self.retry_count = Some(count);
        self
    }

    pub fn force(mut self) -> Xclaim {
        self.force = true;
        self
    }

    /// Claims the same messages but only gets their ids back.
    pub fn just_id(self) -> XclaimJustId {
        XclaimJustId(self)
    }
}

impl Request for Xclaim {
    type Output = Vec<StreamEntry>;

    const NAME: &'static str = "XCLAIM";

    fn write_args(&self, args: &mut CommandBuilder) {
        args.push(&self.key);
        args.push(&self.group);
        args.push(&self.consumer);
        args.push(self.min_idle_time);
        args.extend(&self.ids);
        args.push_option("IDLE", self.idle);
        args.push_option("TIME", self.time);
        args.push_option("RETRYCOUNT", self.retry_count);
        args.push_flag("FORCE", self.force);
    }

    fn parse_reply(reply: &Frame) -> Result<Self::Output, DecodeError> {
        Vec::<StreamEntry>::decode(reply)
    }
}

/// XCLAIM with `JUSTID`: the reply holds only the ids of the claimed messages, and their
/// delivery counter is not incremented.
#[derive(Debug, Clone, PartialEq)]
pub struct XclaimJustId(pub Xclaim);

impl Request for XclaimJustId {
    type Output = Vec<String>;

    const NAME: &'static str = Xclaim::NAME;

    fn write_args(&self, args: &mut CommandBuilder) {
        self.0.write_args(args);
        args.push("JUSTID");
    }

    fn parse_reply(reply: &Frame) -> Result<Self::Output, DecodeError> {
        Vec::<String>::decode(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::FieldMap;

    #[test]
    fn args_without_options() {
        let cmd = Xclaim::new("sensor:1", "workers", "alice", 3600000, ["1-0", "2-0"]);

        assert_eq!(
            cmd.args(),
            vec![
                Frame::from("sensor:1"),
                Frame::from("workers"),
                Frame::from("alice"),
                Frame::from("3600000"),
                Frame::from("1-0"),
                Frame::from("2-0"),
            ]
        );
    }

    #[test]
    fn args_with_all_options() {
        let cmd = Xclaim::new("sensor:1", "workers", "alice", 10, ["1-0"])
            .idle(5)
            .time(1622793600000)
            .retry_count(3)
            .force();

        assert_eq!(
            cmd.args(),
            vec![
                Frame::from("sensor:1"),
                Frame::from("workers"),
                Frame::from("alice"),
                Frame::from("10"),
                Frame::from("1-0"),
                Frame::from("IDLE"),
                Frame::from("5"),
                Frame::from("TIME"),
                Frame::from("1622793600000"),
                Frame::from("RETRYCOUNT"),
                Frame::from("3"),
                Frame::from("FORCE"),
            ]
        );
    }

    #[test]
    fn retry_count_is_written_once() {
        let cmd = Xclaim::new("s", "g", "c", 0, ["1-0"]).retry_count(7);

        let count = cmd
            .args()
            .iter()
            .filter(|arg| **arg == Frame::from("RETRYCOUNT"))
            .count();

        assert_eq!(count, 1);
    }

    #[test]
    fn just_id_args_and_reply() {
        let cmd = Xclaim::new("s", "g", "c", 0, ["1-0"]).force().just_id();

        assert_eq!(
            cmd.to_frame(),
            Frame::Array(vec![
                Frame::from("XCLAIM"),
                Frame::from("s"),
                Frame::from("g"),
                Frame::from("c"),
                Frame::from("0"),
                Frame::from("1-0"),
                Frame::from("FORCE"),
                Frame::from("JUSTID"),
            ])
        );
        assert_eq!(
            XclaimJustId::parse_reply(&Frame::Array(vec![Frame::from("1-0")])),
            Ok(vec!["1-0".to_string()])
        );
    }

    #[test]
    fn reply_with_entries() {
        let reply = Frame::Array(vec![Frame::Array(vec![
            Frame::from("1-0"),
            Frame::Array(vec![Frame::from("unit"), Frame::from("C")]),
        ])]);

        assert_eq!(
            Xclaim::parse_reply(&reply),
            Ok(vec![StreamEntry::new("1-0", FieldMap::from([("unit", "C")]))])
        );
    }
}
