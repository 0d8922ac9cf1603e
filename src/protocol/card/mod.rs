//! Card catalogue encoding.
//!
//! Cards are tagged-variant polymorphic records: a category byte, a
//! VarInt-length-prefixed ID, then category-specific fields. Deliberately
//! not a `Writable` trait with an auto length-prefixing `write` — every
//! inline sub-record here (`Reward`, `Price`, `Bonuses`) has no length
//! prefix of its own, and a trait shaped around "write and prefix" would
//! silently corrupt that.

pub mod bonuses;
pub mod catalogue;
pub mod logic_action_points;
pub mod logic_chat;
pub mod logic_main;
pub mod logic_skins;
pub mod price;
pub mod reward;

use bytes::BytesMut;

/// One entry in the card catalogue pushed to a client after login.
#[derive(Debug, Clone, PartialEq)]
pub enum Card {
    LogicMain(logic_main::LogicMain),
    LogicActionPoints(logic_action_points::LogicActionPoints),
    LogicChat(logic_chat::LogicChat),
    LogicSkins(logic_skins::LogicSkins),
}

/// Write a single card's category byte, ID, and fields into `buf`.
pub fn write(buf: &mut BytesMut, card: &Card) {
    match card {
        Card::LogicMain(c) => logic_main::write(buf, c),
        Card::LogicActionPoints(c) => logic_action_points::write(buf, c),
        Card::LogicChat(c) => logic_chat::write(buf, c),
        Card::LogicSkins(c) => logic_skins::write(buf, c),
    }
}
