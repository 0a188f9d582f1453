#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod core;
pub mod player;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod local;
#[cfg(feature = "std")]
pub mod protocol;
#[cfg(feature = "std")]
pub mod session;
#[cfg(feature = "std")]
pub mod settings;
#[cfg(feature = "std")]
pub mod sync;
#[cfg(feature = "std")]
pub mod transport;

pub use crate::core::*;
pub use player::{AiPlayer, Player};
#[cfg(feature = "std")]
pub use local::LocalMatch;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use player::CliPlayer;
#[cfg(feature = "std")]
pub use protocol::Message;
#[cfg(feature = "std")]
pub use session::PeerSession;
#[cfg(feature = "std")]
pub use settings::Settings;
#[cfg(feature = "std")]
pub use transport::{in_memory::InMemoryTransport, tcp::TcpTransport, Transport};
