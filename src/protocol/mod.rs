//! Wire protocol: framing, primitives, the card catalogue, and dispatch.

pub mod card;
pub mod crc32;
pub mod dispatch;
pub mod frame;
pub mod login;
pub mod primitive;
pub mod service;

pub use dispatch::{dispatch, Action};
pub use frame::FrameCodec;
