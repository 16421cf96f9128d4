//! Typed Redis Streams commands on top of RESP frames.
//!
//! Every stream command is a request struct (see [`commands`]) that knows how to lay out its
//! arguments and how to decode its reply into a typed value (see [`stream`]). The network side
//! is left to a [`Transport`]; [`Client`] ties the two together.

pub mod client;
pub mod commands;
pub mod connection;
pub mod decode;
pub mod frame;
pub mod key_type;
pub mod stream;

use thiserror::Error as ThisError;

pub use client::Client;
pub use connection::Transport;
pub use decode::{Decode, DecodeError, DecodeOptional};
pub use frame::Frame;
pub use key_type::KeyType;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, ThisError)]
pub enum Error {
    /// The transport failed to deliver the request or to read the reply.
    #[error("transport error: {0}")]
    Transport(BoxError),
    /// The server replied with an error.
    #[error("redis error: {0}")]
    Redis(String),
    /// The reply did not have the shape the command expects.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

pub type Result<T> = std::result::Result<T, Error>;
