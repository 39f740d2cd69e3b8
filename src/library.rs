use std::{fmt::Display, str::FromStr};

use crate::{
    error::{Error, Result},
    pattern::Pattern,
};

// Still lifes.

pub const BLOCK: &[&[u8]] = &[
    &[1, 1],
    &[1, 1],
];

pub const BEEHIVE: &[&[u8]] = &[
    &[0, 1, 1, 0],
    &[1, 0, 0, 1],
    &[0, 1, 1, 0],
];

pub const POND: &[&[u8]] = &[
    &[0, 1, 1, 0],
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
    &[0, 1, 1, 0],
];

// Oscillators.

pub const BLINKER: &[&[u8]] = &[
    &[1, 1, 1],
];

pub const TOAD: &[&[u8]] = &[
    &[0, 1, 1, 1],
    &[1, 1, 1, 0],
];

pub const PULSAR: &[&[u8]] = &[
    &[0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
    &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
    &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
    &[0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
    &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
    &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
    &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
];

// Spaceships.

pub const GLIDER: &[&[u8]] = &[
    &[0, 1, 0],
    &[0, 0, 1],
    &[1, 1, 1],
];

pub const LWSS: &[&[u8]] = &[
    &[0, 1, 0, 0, 1],
    &[1, 0, 0, 0, 0],
    &[1, 0, 0, 0, 1],
    &[1, 1, 1, 1, 0],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Named {
    Block,
    Beehive,
    Pond,
    Blinker,
    Toad,
    Pulsar,
    Glider,
    /// Lightweight spaceship.
    Lwss,
}

impl Named {
    pub const ALL: [Named; 8] = [
        Named::Block,
        Named::Beehive,
        Named::Pond,
        Named::Blinker,
        Named::Toad,
        Named::Pulsar,
        Named::Glider,
        Named::Lwss,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Named::Block => "block",
            Named::Beehive => "beehive",
            Named::Pond => "pond",
            Named::Blinker => "blinker",
            Named::Toad => "toad",
            Named::Pulsar => "pulsar",
            Named::Glider => "glider",
            Named::Lwss => "lwss",
        }
    }

    pub fn table(self) -> &'static [&'static [u8]] {
        match self {
            Named::Block => BLOCK,
            Named::Beehive => BEEHIVE,
            Named::Pond => POND,
            Named::Blinker => BLINKER,
            Named::Toad => TOAD,
            Named::Pulsar => PULSAR,
            Named::Glider => GLIDER,
            Named::Lwss => LWSS,
        }
    }

    pub fn pattern(self) -> Pattern {
        Pattern::from_table(self.table())
    }
}

impl Display for Named {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Named {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim().to_ascii_lowercase();
        if s == "lightweight-spaceship" {
            return Ok(Named::Lwss);
        }
        Named::ALL
            .into_iter()
            .find(|named| named.name() == s)
            .ok_or(Error::UnknownPattern(s))
    }
}
