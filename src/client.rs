use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::commands::{
    Request, Trim, Type, Xack, Xadd, Xclaim, XclaimJustId, Xdel, XgroupCreate, XgroupDelConsumer,
    XgroupDestroy, XgroupHelp, XgroupSetId, XinfoConsumers, XinfoGroups, XinfoStream, Xlen,
    Xpending, XpendingRange, Xrange, Xread, Xreadgroup, Xrevrange, Xtrim,
};
use crate::connection::Transport;
use crate::frame::Frame;
use crate::key_type::KeyType;
use crate::stream::{
    ConsumerInfo, FieldMap, GroupInfo, PendingEntry, PendingSummary, StreamEntry, StreamInfo,
    StreamReadReply,
};
use crate::{Error, Result};

/// Issues typed stream commands over a [`Transport`].
pub struct Client<T> {
    pub id: Uuid,
    transport: T,
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T) -> Client<T> {
        Client {
            id: Uuid::new_v4(),
            transport,
        }
    }

    pub fn into_inner(self) -> T {
        self.transport
    }

    /// Sends `request` and decodes the reply into the request's output type.
    ///
    /// An error reply from the server is returned as [`Error::Redis`] and never reaches the
    /// decoder.
    #[instrument(
        name = "request",
        skip(self, request),
        fields(client_id = %self.id, command = R::NAME)
    )]
    pub async fn send<R: Request>(&mut self, request: R) -> Result<R::Output> {
        let args = request.args();
        debug!("Sending request with {} arguments", args.len());

        let reply = self
            .transport
            .send(R::NAME, args)
            .await
            .map_err(Error::Transport)?;
        debug!("Received reply: {}", reply);

        if let Frame::Error(message) = reply {
            warn!("Server replied with an error: {}", message);
            return Err(Error::Redis(message));
        }

        R::parse_reply(&reply).map_err(|e| {
            warn!("Failed to decode reply: {}", e);
            Error::Decode(e)
        })
    }

    /// Appends an entry with an auto-generated id and returns that id.
    pub async fn xadd(&mut self, key: impl Into<String>, fields: FieldMap) -> Result<String> {
        self.send(Xadd::new(key, fields)).await
    }

    pub async fn xack<I, S>(
        &mut self,
        key: impl Into<String>,
        group: impl Into<String>,
        ids: I,
    ) -> Result<u64>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.send(Xack::new(key, group, ids)).await
    }

    /// Claiming no ids is answered locally with no entries.
    pub async fn xclaim(&mut self, request: Xclaim) -> Result<Vec<StreamEntry>> {
        if request.ids.is_empty() {
            return Ok(Vec::new());
        }
        self.send(request).await
    }

    pub async fn xclaim_just_id(&mut self, request: Xclaim) -> Result<Vec<String>> {
        if request.ids.is_empty() {
            return Ok(Vec::new());
        }
        self.send(XclaimJustId(request)).await
    }

    pub async fn xdel<I, S>(&mut self, key: impl Into<String>, ids: I) -> Result<u64>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.send(Xdel::new(key, ids)).await
    }

    pub async fn xgroup_create(&mut self, request: XgroupCreate) -> Result<bool> {
        self.send(request).await
    }

    pub async fn xgroup_set_id(
        &mut self,
        key: impl Into<String>,
        group: impl Into<String>,
        id: impl Into<String>,
    ) -> Result<bool> {
        self.send(XgroupSetId {
            key: key.into(),
            group: group.into(),
            id: id.into(),
        })
        .await
    }

    pub async fn xgroup_destroy(
        &mut self,
        key: impl Into<String>,
        group: impl Into<String>,
    ) -> Result<u64> {
        self.send(XgroupDestroy {
            key: key.into(),
            group: group.into(),
        })
        .await
    }

    pub async fn xgroup_del_consumer(
        &mut self,
        key: impl Into<String>,
        group: impl Into<String>,
        consumer: impl Into<String>,
    ) -> Result<u64> {
        self.send(XgroupDelConsumer {
            key: key.into(),
            group: group.into(),
            consumer: consumer.into(),
        })
        .await
    }

    pub async fn xgroup_help(&mut self) -> Result<Vec<String>> {
        self.send(XgroupHelp).await
    }

    pub async fn xinfo_stream(&mut self, key: impl Into<String>) -> Result<StreamInfo> {
        self.send(XinfoStream { key: key.into() }).await
    }

    pub async fn xinfo_groups(&mut self, key: impl Into<String>) -> Result<Vec<GroupInfo>> {
        self.send(XinfoGroups { key: key.into() }).await
    }

    pub async fn xinfo_consumers(
        &mut self,
        key: impl Into<String>,
        group: impl Into<String>,
    ) -> Result<Vec<ConsumerInfo>> {
        self.send(XinfoConsumers {
            key: key.into(),
            group: group.into(),
        })
        .await
    }

    pub async fn xlen(&mut self, key: impl Into<String>) -> Result<u64> {
        self.send(Xlen { key: key.into() }).await
    }

    pub async fn xpending(
        &mut self,
        key: impl Into<String>,
        group: impl Into<String>,
    ) -> Result<Option<PendingSummary>> {
        self.send(Xpending {
            key: key.into(),
            group: group.into(),
        })
        .await
    }

    pub async fn xpending_range(&mut self, request: XpendingRange) -> Result<Vec<PendingEntry>> {
        self.send(request).await
    }

    pub async fn xrange(&mut self, request: Xrange) -> Result<Vec<StreamEntry>> {
        self.send(request).await
    }

    pub async fn xrevrange(&mut self, request: Xrevrange) -> Result<Vec<StreamEntry>> {
        self.send(request).await
    }

    pub async fn xread(&mut self, request: Xread) -> Result<StreamReadReply> {
        self.send(request).await
    }

    pub async fn xreadgroup(&mut self, request: Xreadgroup) -> Result<StreamReadReply> {
        self.send(request).await
    }

    pub async fn xtrim(&mut self, key: impl Into<String>, trim: Trim) -> Result<u64> {
        self.send(Xtrim {
            key: key.into(),
            trim,
        })
        .await
    }

    pub async fn key_type(&mut self, key: impl Into<String>) -> Result<KeyType> {
        self.send(Type { key: key.into() }).await
    }
}
