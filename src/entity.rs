//! Board entities and the fixed numbers attached to each of their kinds.

use crate::config::{POWER_UP_DURATION, POWER_UP_LIFETIME};
use crate::grid::Cell;

/// Constants carried by a [`FoodKind`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FoodProfile {
    pub points: i64,
    pub growth: u32,
    /// Ticks on the board before expiring. `None` never expires.
    pub max_age: Option<u32>,
    pub spawn_weight: u32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FoodKind {
    Normal,
    Golden,
    Poison,
}

impl FoodKind {
    pub const ALL: [FoodKind; 3] = [FoodKind::Normal, FoodKind::Golden, FoodKind::Poison];

    pub const fn profile(self) -> FoodProfile {
        match self {
            FoodKind::Normal => FoodProfile { points: 10, growth: 1, max_age: None, spawn_weight: 70 },
            FoodKind::Golden => FoodProfile { points: 50, growth: 2, max_age: Some(300), spawn_weight: 20 },
            FoodKind::Poison => FoodProfile { points: -20, growth: 0, max_age: Some(200), spawn_weight: 10 },
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Food {
    pub cell: Cell,
    pub kind: FoodKind,
    pub age: u32,
}

impl Food {
    pub fn new(cell: Cell, kind: FoodKind) -> Self {
        Self { cell, kind, age: 0 }
    }

    /// Ages by one tick; returns whether the food is still on the board.
    pub fn tick(&mut self) -> bool {
        self.age += 1;
        match self.kind.profile().max_age {
            Some(max) => self.age < max,
            None => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PowerUpKind {
    Speed,
    Invincible,
    DoubleScore,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [PowerUpKind::Speed, PowerUpKind::Invincible, PowerUpKind::DoubleScore];

    pub fn label(self) -> &'static str {
        match self {
            PowerUpKind::Speed => "speed",
            PowerUpKind::Invincible => "invincible",
            PowerUpKind::DoubleScore => "double_score",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PowerUp {
    pub cell: Cell,
    pub kind: PowerUpKind,
    pub age: u32,
}

impl PowerUp {
    pub fn new(cell: Cell, kind: PowerUpKind) -> Self {
        Self { cell, kind, age: 0 }
    }

    pub fn tick(&mut self) -> bool {
        self.age += 1;
        self.age < POWER_UP_LIFETIME
    }
}

/// The single effect currently running after a power-up was eaten.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ActivePowerUp {
    pub kind: PowerUpKind,
    pub remaining: u32,
}

impl ActivePowerUp {
    pub fn new(kind: PowerUpKind) -> Self {
        Self { kind, remaining: POWER_UP_DURATION }
    }
}
