pub mod request;
pub mod type_;
pub mod xack;
pub mod xadd;
pub mod xclaim;
pub mod xdel;
pub mod xgroup;
pub mod xinfo;
pub mod xlen;
pub mod xpending;
pub mod xrange;
pub mod xread;
pub mod xreadgroup;
pub mod xtrim;

use std::fmt::Display;

use crate::frame::Frame;

pub use request::Request;
pub use type_::Type;
pub use xack::Xack;
pub use xadd::Xadd;
pub use xclaim::{Xclaim, XclaimJustId};
pub use xdel::Xdel;
pub use xgroup::{XgroupCreate, XgroupDelConsumer, XgroupDestroy, XgroupHelp, XgroupSetId};
pub use xinfo::{XinfoConsumers, XinfoGroups, XinfoStream};
pub use xlen::Xlen;
pub use xpending::{Xpending, XpendingRange};
pub use xrange::{Xrange, Xrevrange};
pub use xread::Xread;
pub use xreadgroup::Xreadgroup;
pub use xtrim::{Trim, Xtrim};

/// Accumulates the arguments of a command, in order, as bulk strings.
#[derive(Debug, Default)]
pub struct CommandBuilder {
    parts: Vec<Frame>,
}

impl CommandBuilder {
    pub fn new() -> CommandBuilder {
        CommandBuilder::default()
    }

    pub fn with_capacity(capacity: usize) -> CommandBuilder {
        CommandBuilder {
            parts: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, arg: impl Into<Frame>) {
        self.parts.push(arg.into());
    }

    /// Pushes a number (or anything else with a textual form) as a bulk string.
    pub fn push_display(&mut self, arg: impl Display) {
        self.parts.push(Frame::from(arg.to_string()));
    }

    pub fn extend<I>(&mut self, args: I)
    where
        I: IntoIterator,
        I::Item: Into<Frame>,
    {
        self.parts.extend(args.into_iter().map(Into::into));
    }

    /// Pushes `flag` only when it is set.
    pub fn push_flag(&mut self, flag: &'static str, set: bool) {
        if set {
            self.push(flag);
        }
    }

    /// Pushes `name value` when the option has a value.
    pub fn push_option(&mut self, name: &'static str, value: Option<impl Display>) {
        if let Some(value) = value {
            self.push(name);
            self.push_display(value);
        }
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn finish(self) -> Vec<Frame> {
        self.parts
    }
}
