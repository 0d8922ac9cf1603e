//! The `skins` card: cosmetic catalogues.

use bytes::{BufMut, BytesMut};

use crate::protocol::primitive::{write_varint, write_varint_string};

pub const CATEGORY: u8 = 0x11;
pub const ID: &str = "skins";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorseHairSkin {
    pub main: Color,
    pub spec: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogicSkins {
    pub horse_skins: Vec<String>,
    pub horse_tail_skins: Vec<String>,
    pub player_skins: Vec<String>,
    pub horse_hair_skins: Vec<HorseHairSkin>,
}

pub fn default_card() -> LogicSkins {
    LogicSkins {
        horse_skins: vec![],
        horse_tail_skins: vec![],
        player_skins: vec![],
        horse_hair_skins: vec![HorseHairSkin {
            main: Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 },
            spec: Color { r: 0.0, g: 1.0, b: 0.0, a: 1.0 },
        }],
    }
}

fn write_string_list(buf: &mut BytesMut, items: &[String]) {
    write_varint(buf, items.len() as u32);
    for item in items {
        write_varint_string(buf, item);
    }
}

fn write_color(buf: &mut BytesMut, color: &Color) {
    buf.put_f32_le(color.r);
    buf.put_f32_le(color.g);
    buf.put_f32_le(color.b);
    buf.put_f32_le(color.a);
}

pub fn write(buf: &mut BytesMut, card: &LogicSkins) {
    buf.put_u8(CATEGORY);
    write_varint_string(buf, ID);

    write_string_list(buf, &card.horse_skins);
    write_string_list(buf, &card.horse_tail_skins);
    write_string_list(buf, &card.player_skins);

    write_varint(buf, card.horse_hair_skins.len() as u32);
    for skin in &card.horse_hair_skins {
        write_color(buf, &skin.main);
        write_color(buf, &skin.spec);
    }
}
