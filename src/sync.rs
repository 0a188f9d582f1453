#![cfg(feature = "std")]

//! Mapping between state machine effects/events and wire messages.

use log::{debug, warn};

use crate::core::{Effect, Event, ObservedFleet, Point};
use crate::protocol::Message;

/// Outbound message for an effect, if the effect concerns the peer.
pub fn to_wire(effect: &Effect) -> Option<Message> {
    match effect {
        Effect::SendReady(planes) => Some(Message::Ready {
            planes: planes.clone(),
        }),
        Effect::SendAttack(p) => Some(Message::Attack { r: p.r, c: p.c }),
        Effect::SendResult { target, outcome } => Some(Message::Result {
            r: target.r,
            c: target.c,
            status: outcome.status,
            killed_plane_id: outcome.killed,
        }),
        Effect::AiTurnDue | Effect::Notify(_) => None,
    }
}

/// State machine event for an inbound message. Messages that cannot be
/// turned into an event (malformed fleets, turn hints) yield `None`.
pub fn from_wire(msg: Message) -> Option<Event> {
    match msg {
        Message::Ready { planes } => match ObservedFleet::from_snapshot(planes) {
            Ok(fleet) => Some(Event::RemoteReady(fleet)),
            Err(e) => {
                warn!("peer announced an invalid fleet: {}", e);
                None
            }
        },
        Message::Attack { r, c } => Some(Event::RemoteAttack(Point::new(r, c))),
        Message::Result { r, c, status, .. } => Some(Event::RemoteResult {
            target: Point::new(r, c),
            status,
        }),
        Message::SyncTurn { next_player } => {
            debug!("ignoring turn hint for player {}", next_player);
            None
        }
    }
}
