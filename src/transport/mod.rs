//! Peer channel abstraction.
//!
//! A `Transport` is one end of a bidirectional message channel. `recv`
//! returning an error is the close notification: once it fails the
//! channel is gone for good.

use crate::protocol::Message;

#[async_trait::async_trait]
pub trait Transport: Send {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()>;
    async fn recv(&mut self) -> anyhow::Result<Message>;
}

pub mod in_memory;
pub mod tcp;
