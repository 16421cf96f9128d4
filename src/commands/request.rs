use crate::commands::CommandBuilder;
use crate::decode::DecodeError;
use crate::frame::Frame;

/// A typed stream command: how to write its arguments and how to read its reply.
pub trait Request {
    type Output;

    /// The command verb, e.g. `XADD`.
    const NAME: &'static str;

    fn write_args(&self, args: &mut CommandBuilder);

    fn parse_reply(reply: &Frame) -> Result<Self::Output, DecodeError>;

    /// Arguments following the command name.
    fn args(&self) -> Vec<Frame> {
        let mut builder = CommandBuilder::new();
        self.write_args(&mut builder);
        builder.finish()
    }

    /// The complete request array, command name first.
    fn to_frame(&self) -> Frame {
        let mut builder = CommandBuilder::new();
        builder.push(Self::NAME);
        self.write_args(&mut builder);
        Frame::Array(builder.finish())
    }
}
