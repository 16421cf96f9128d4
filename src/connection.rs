use bytes::Bytes;
use futures::future::BoxFuture;
use redis::aio::MultiplexedConnection;
use redis::{RedisError, Value};

use crate::frame::Frame;
use crate::BoxError;

/// Sends a command and hands back the parsed reply.
///
/// Connection handling and RESP framing live behind this trait. Server error replies may be
/// returned either as an `Err` or as a [`Frame::Error`] reply, the client handles both.
pub trait Transport: Send {
    fn send<'a>(
        &'a mut self,
        command: &'static str,
        args: Vec<Frame>,
    ) -> BoxFuture<'a, Result<Frame, BoxError>>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send<'a>(
        &'a mut self,
        command: &'static str,
        args: Vec<Frame>,
    ) -> BoxFuture<'a, Result<Frame, BoxError>> {
        (**self).send(command, args)
    }
}

impl Transport for MultiplexedConnection {
    fn send<'a>(
        &'a mut self,
        command: &'static str,
        args: Vec<Frame>,
    ) -> BoxFuture<'a, Result<Frame, BoxError>> {
        Box::pin(async move {
            let cmd = to_redis_cmd(command, &args)?;
            match cmd.query_async::<_, Value>(self).await {
                Ok(value) => Ok(Frame::from(value)),
                Err(e) => server_error(&e).map(Frame::Error).ok_or_else(|| BoxError::from(e)),
            }
        })
    }
}

/// Error replies sent by the server carry a code, e.g. `BUSYGROUP`. Anything else is a
/// connection or protocol failure.
fn server_error(e: &RedisError) -> Option<String> {
    match (e.code(), e.detail()) {
        (Some(code), Some(detail)) => Some(format!("{} {}", code, detail)),
        (Some(code), None) => Some(code.to_string()),
        (None, _) => None,
    }
}

fn to_redis_cmd(command: &str, args: &[Frame]) -> Result<redis::Cmd, BoxError> {
    let mut cmd = redis::cmd(command);
    for arg in args {
        match arg {
            Frame::Bulk(bytes) => cmd.arg(&bytes[..]),
            Frame::Simple(s) => cmd.arg(s.as_str()),
            Frame::Integer(i) => cmd.arg(*i),
            frame => {
                return Err(format!(
                    "protocol error; invalid argument, expected bulk string, got {}",
                    frame.kind()
                )
                .into())
            }
        };
    }
    Ok(cmd)
}

impl From<Value> for Frame {
    fn from(value: Value) -> Self {
        match value {
            Value::Nil => Frame::Null,
            Value::Int(i) => Frame::Integer(i),
            Value::Data(bytes) => Frame::Bulk(Bytes::from(bytes)),
            Value::Bulk(values) => Frame::Array(values.into_iter().map(Frame::from).collect()),
            Value::Status(s) => Frame::Simple(s),
            Value::Okay => Frame::Simple("OK".to_string()),
        }
    }
}
