//! The catalogue push: every card the client needs, sent unsolicited right
//! after a connection is accepted.

use bytes::{BufMut, Bytes, BytesMut};

use crate::protocol::card::{logic_action_points, logic_chat, logic_main, logic_skins, write, Card};
use crate::protocol::primitive::write_varint;
use crate::protocol::service::SERVICE_CARDS;

/// Build the default catalogue: `logic_main`, `logic_action_points`,
/// `logic_chat` (seeded with the known player ids), and `skins`.
pub fn default_catalogue(known_player_ids: Vec<u32>) -> Vec<Card> {
    vec![
        Card::LogicMain(logic_main::default_card()),
        Card::LogicActionPoints(logic_action_points::default_card()),
        Card::LogicChat(logic_chat::default_card(known_player_ids)),
        Card::LogicSkins(logic_skins::default_card()),
    ]
}

/// Encode the catalogue push: ServiceID(Cards) + FunctionID(0) + VarInt
/// count + each card concatenated in turn. `ServiceCards` messages carry no
/// RPCID.
pub fn encode_catalogue(cards: &[Card]) -> Bytes {
    let mut buf = BytesMut::new();
    buf.put_u8(SERVICE_CARDS);
    buf.put_u8(0); // FunctionID = 0 (catalogue push)
    write_varint(&mut buf, cards.len() as u32);
    for card in cards {
        write(&mut buf, card);
    }
    buf.freeze()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_starts_with_service_and_function_id() {
        let cards = default_catalogue(vec![]);
        let bytes = encode_catalogue(&cards);
        assert_eq!(bytes[0], SERVICE_CARDS);
        assert_eq!(bytes[1], 0);
    }

    #[test]
    fn catalogue_count_matches_card_list_length() {
        let cards = default_catalogue(vec![1, 2, 3]);
        let bytes = encode_catalogue(&cards);
        assert_eq!(bytes[2], cards.len() as u8);
    }

    #[test]
    fn default_catalogue_has_four_cards() {
        assert_eq!(default_catalogue(vec![]).len(), 4);
    }
}
