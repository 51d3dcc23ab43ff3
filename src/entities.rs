//! All game entity types. Pure data, no rules.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

use crate::error::HackerError;

// ── Display symbols ───────────────────────────────────────────────────────────

pub const PLAYER: char = 'P';
pub const DESTROYABLE: char = 'D';
pub const COLLECTABLE: char = 'C';
pub const BLOCKER: char = 'B';

// ── Position ──────────────────────────────────────────────────────────────────

/// A cell coordinate: `x` is the column, `y` the row.  Row 0 is the top
/// (the player's row).
///
/// Ordering compares the row first, so "smaller" means closer to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Entity ────────────────────────────────────────────────────────────────────

/// Anything that can occupy a grid cell.  Entities carry no position and no
/// state; two entities of the same kind are interchangeable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Entity {
    Player,
    /// Can be destroyed but not collected.
    Destroyable,
    /// Can be destroyed or collected.
    Collectable,
    /// Cannot be destroyed or collected; shots pass by it.
    Blocker,
}

impl Entity {
    /// Single-character symbol used in text dumps and serialisation.
    pub fn symbol(&self) -> char {
        match self {
            Entity::Player => PLAYER,
            Entity::Destroyable => DESTROYABLE,
            Entity::Collectable => COLLECTABLE,
            Entity::Blocker => BLOCKER,
        }
    }

    pub fn from_symbol(symbol: char) -> Result<Entity, HackerError> {
        match symbol {
            PLAYER => Ok(Entity::Player),
            DESTROYABLE => Ok(Entity::Destroyable),
            COLLECTABLE => Ok(Entity::Collectable),
            BLOCKER => Ok(Entity::Blocker),
            other => Err(HackerError::UnknownSymbol(other)),
        }
    }
}

impl TryFrom<char> for Entity {
    type Error = HackerError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Entity::from_symbol(symbol)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ── Player actions ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column offset applied by a rotation.
    pub fn offset(&self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShotKind {
    /// Removes any non-blocker target; only Destroyables count.
    Destroy,
    /// Removes Collectables only.
    Collect,
}

// ── Game status ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    InProgress,
    Won,
    Lost,
}
