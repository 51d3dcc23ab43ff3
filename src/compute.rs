//! Game rules.
//!
//! `Game` owns the grid and the score counters.  Every mutating operation
//! (`rotate`, `step`, `fire`) works in place; the only randomness is the
//! RNG handed to `step`, so callers control determinism (tests pass a
//! seeded RNG).

use log::{debug, info, warn};
use rand::seq::index;
use rand::Rng;

use crate::entities::{Direction, Entity, Outcome, Position, ShotKind};
use crate::grid::Grid;

// ── Tuning ───────────────────────────────────────────────────────────────────

/// Default board size (rows = columns).
pub const GRID_SIZE: usize = 7;

/// Collectables needed to win.
pub const COLLECTION_TARGET: u32 = 7;

/// Offset applied to every entity on each step (one row toward the player).
const STEP_OFFSET: Position = Position::new(0, -1);

/// Kinds drawn for a spawned row; a blocker is rolled separately.
const SPAWNABLE: [Entity; 2] = [Entity::Destroyable, Entity::Collectable];

// ── Game ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Game {
    grid: Grid,
    collection_target: u32,
    collected: u32,
    destroyed: u32,
    total_shots: u32,
    outcome: Outcome,
    /// Where Destroyables have reached the player row, in order.
    breaches: Vec<Position>,
}

impl Game {
    /// A fresh game on an empty `size × size` grid with the default target.
    pub fn new(size: usize) -> Self {
        Game::with_target(size, COLLECTION_TARGET)
    }

    pub fn with_target(size: usize, collection_target: u32) -> Self {
        Game {
            grid: Grid::new(size),
            collection_target,
            collected: 0,
            destroyed: 0,
            total_shots: 0,
            outcome: Outcome::InProgress,
            breaches: Vec::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access for setting up a board directly.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Top row, centre column.  Constant for the lifetime of the game.
    pub fn player_position(&self) -> Position {
        Position::new((self.grid.size() / 2) as i32, 0)
    }

    pub fn num_collected(&self) -> u32 {
        self.collected
    }

    pub fn num_destroyed(&self) -> u32 {
        self.destroyed
    }

    pub fn total_shots(&self) -> u32 {
        self.total_shots
    }

    pub fn collection_target(&self) -> u32 {
        self.collection_target
    }

    /// Last outcome recorded by `has_won` / `has_lost`.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn breaches(&self) -> &[Position] {
        &self.breaches
    }

    // ── Rotation ─────────────────────────────────────────────────────────────

    /// Shift every entity one column left or right, wrapping at the edges.
    pub fn rotate(&mut self, direction: Direction) {
        let size = self.grid.size() as i32;
        // All old keys leave the grid before any new key goes in.
        for (pos, entity) in self.grid.take_entities() {
            let x = (pos.x() + direction.offset()).rem_euclid(size);
            self.grid.add(Position::new(x, pos.y()), entity);
        }
        debug!("rotated {:?}: {} entities", direction, self.grid.len());
    }

    // ── Step ─────────────────────────────────────────────────────────────────

    /// One tick: move everything a row toward the player, then spawn a new
    /// bottom row.
    pub fn step(&mut self, rng: &mut impl Rng) {
        self.advance();
        self.spawn_row(rng);
        debug!("step: {} entities on the grid", self.grid.len());
    }

    /// Move every entity up one row and drop what leaves the grid.
    /// Destroyables landing on the player row are recorded as breaches.
    fn advance(&mut self) {
        for (pos, entity) in self.grid.take_entities() {
            let next = pos + STEP_OFFSET;
            if next.y() == 0 && entity == Entity::Destroyable {
                debug!("destroyable reached the player row at {}", next);
                self.breaches.push(next);
            }
            self.grid.add(next, entity);
        }
    }

    /// Fill random columns of the bottom row.
    ///
    /// Draws `k` in `0..=size-3` kinds uniformly from Destroyable/Collectable,
    /// adds a Blocker with probability 1/4, and places them in distinct
    /// columns.
    pub fn spawn_row(&mut self, rng: &mut impl Rng) {
        let size = self.grid.size();
        if size == 0 {
            return;
        }

        let count = rng.gen_range(0..=size.saturating_sub(3));
        let mut kinds: Vec<Entity> = (0..count)
            .map(|_| SPAWNABLE[rng.gen_range(0..SPAWNABLE.len())])
            .collect();
        if rng.gen_ratio(1, 4) {
            kinds.push(Entity::Blocker);
        }

        let row = size as i32 - 1;
        let columns = index::sample(rng, size, kinds.len());
        for (column, entity) in columns.into_iter().zip(kinds) {
            self.grid.add(Position::new(column as i32, row), entity);
        }
    }

    // ── Fire ─────────────────────────────────────────────────────────────────

    /// Shoot down the player's column at the nearest non-blocker.
    ///
    /// Returns the entity removed, if any.  `total_shots` counts every call.
    pub fn fire(&mut self, shot: ShotKind) -> Option<Entity> {
        self.total_shots += 1;

        let column = self.player_position().x();
        let (target, entity) = self
            .grid
            .entities()
            .iter()
            .filter(|(pos, entity)| pos.x() == column && **entity != Entity::Blocker)
            .map(|(pos, entity)| (*pos, *entity))
            .min_by_key(|(pos, _)| *pos)?;

        let removable = match shot {
            ShotKind::Destroy => matches!(entity, Entity::Destroyable | Entity::Collectable),
            ShotKind::Collect => entity == Entity::Collectable,
        };
        if !removable {
            debug!("{:?} shot hit {:?} at {}: no effect", shot, entity, target);
            return None;
        }

        if let Err(err) = self.grid.remove(target) {
            warn!("{:?} shot lost its target: {}", shot, err);
            return None;
        }
        match (shot, entity) {
            (ShotKind::Destroy, Entity::Destroyable) => self.destroyed += 1,
            (ShotKind::Collect, Entity::Collectable) => self.collected += 1,
            _ => {}
        }
        debug!("{:?} shot removed {:?} at {}", shot, entity, target);
        Some(entity)
    }

    // ── Termination ──────────────────────────────────────────────────────────

    pub fn has_won(&mut self) -> bool {
        if self.collected >= self.collection_target {
            if self.outcome != Outcome::Won {
                info!("won with {} collected", self.collected);
            }
            self.outcome = Outcome::Won;
            return true;
        }
        false
    }

    /// True once any Destroyable has reached the player row.
    pub fn has_lost(&mut self) -> bool {
        if !self.breaches.is_empty() {
            if self.outcome != Outcome::Lost {
                info!("lost after {} shots", self.total_shots);
            }
            self.outcome = Outcome::Lost;
            return true;
        }
        false
    }
}
