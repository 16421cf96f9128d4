use crate::commands::{CommandBuilder, Request};
use crate::decode::{Decode, DecodeError};
use crate::frame::Frame;
use crate::stream::StreamReadReply;

/// Reads entries with an id greater than the given one from one or more streams, optionally
/// blocking until data arrives.
///
/// Ref: <https://redis.io/docs/latest/commands/xread/>
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Xread {
    /// `(key, id)` pairs. `$` as id means "only entries added from now on".
    pub streams: Vec<(String, String)>,
    pub count: Option<u64>,
    /// `BLOCK <ms>`, 0 blocks forever. A timeout replies with no streams.
    pub block: Option<u64>,
}

impl Xread {
    pub fn new() -> Xread {
        Xread::default()
    }

    pub fn stream(mut self, key: impl Into<String>, id: impl Into<String>) -> Xread {
        self.streams.push((key.into(), id.into()));
        self
    }

    pub fn count(mut self, count: u64) -> Xread {
        self.count = Some(count);
        self
    }

    pub fn block(mut self, ms: u64) -> Xread {
        self.block = Some(ms);
        self
    }
}

/// `STREAMS key1 key2 ... id1 id2 ...`
pub(crate) fn write_streams(streams: &[(String, String)], args: &mut CommandBuilder) {
    args.push("STREAMS");
    args.extend(streams.iter().map(|(key, _)| key));
    args.extend(streams.iter().map(|(_, id)| id));
}

impl Request for Xread {
    type Output = StreamReadReply;

    const NAME: &'static str = "XREAD";

    fn write_args(&self, args: &mut CommandBuilder) {
        args.push_option("COUNT", self.count);
        args.push_option("BLOCK", self.block);
        write_streams(&self.streams, args);
    }

    fn parse_reply(reply: &Frame) -> Result<Self::Output, DecodeError> {
        StreamReadReply::decode(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_list_keys_then_ids() {
        let cmd = Xread::new()
            .stream("sensor:1", "0")
            .stream("sensor:2", "1622793600000-0")
            .count(10)
            .block(5000);

        assert_eq!(
            cmd.to_frame(),
            Frame::Array(vec![
                Frame::from("XREAD"),
                Frame::from("COUNT"),
                Frame::from("10"),
                Frame::from("BLOCK"),
                Frame::from("5000"),
                Frame::from("STREAMS"),
                Frame::from("sensor:1"),
                Frame::from("sensor:2"),
                Frame::from("0"),
                Frame::from("1622793600000-0"),
            ])
        );
    }

    #[test]
    fn args_without_options() {
        let cmd = Xread::new().stream("sensor:1", "$");

        assert_eq!(
            cmd.args(),
            vec![
                Frame::from("STREAMS"),
                Frame::from("sensor:1"),
                Frame::from("$"),
            ]
        );
    }

    #[test]
    fn timed_out_reply() {
        assert_eq!(Xread::parse_reply(&Frame::Null), Ok(StreamReadReply::new()));
    }
}
