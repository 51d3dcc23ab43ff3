//! The sparse, bounded board the entities live on.

use std::collections::BTreeMap;
use std::fmt;

use crate::entities::{Entity, Position};
use crate::error::HackerError;

/// A `size × size` board mapping positions to entities.
///
/// Row 0 belongs to the player and is never stored: every key satisfies
/// `0 <= x < size` and `1 <= y < size`.  Iteration follows `Position`
/// ordering (row, then column), so it is deterministic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    entities: BTreeMap<Position, Entity>,
}

impl Grid {
    /// An empty grid with `size` rows and `size` columns.
    pub fn new(size: usize) -> Self {
        Grid {
            size,
            entities: BTreeMap::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Store `entity` at `position`.  Out-of-bounds positions are ignored.
    pub fn add(&mut self, position: Position, entity: Entity) {
        if self.in_bounds(position) {
            self.entities.insert(position, entity);
        }
    }

    pub fn get(&self, position: Position) -> Option<Entity> {
        self.entities.get(&position).copied()
    }

    /// Remove and return the entity at `position`.
    pub fn remove(&mut self, position: Position) -> Result<Entity, HackerError> {
        self.entities
            .remove(&position)
            .ok_or(HackerError::NotFound(position))
    }

    pub fn entities(&self) -> &BTreeMap<Position, Entity> {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Empty the grid, handing back everything it held.
    pub fn take_entities(&mut self) -> BTreeMap<Position, Entity> {
        std::mem::take(&mut self.entities)
    }

    pub fn in_bounds(&self, position: Position) -> bool {
        let size = self.size as i32;
        (0..size).contains(&position.x()) && (1..size).contains(&position.y())
    }

    /// Project the grid onto raw `(x, y)` pairs and display symbols.
    pub fn serialize(&self) -> BTreeMap<(i32, i32), char> {
        self.entities
            .iter()
            .map(|(pos, entity)| ((pos.x(), pos.y()), entity.symbol()))
            .collect()
    }
}

/// One line per row, top row first, `.` for an empty cell.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size as i32 {
            let row: String = (0..self.size as i32)
                .map(|x| {
                    self.get(Position::new(x, y))
                        .map(|e| e.symbol())
                        .unwrap_or('.')
                })
                .collect();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
