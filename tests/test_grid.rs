use hacker::entities::*;
use hacker::error::HackerError;
use hacker::grid::Grid;

// ── in_bounds ─────────────────────────────────────────────────────────────────

#[test]
fn in_bounds_matches_definition() {
    let grid = Grid::new(7);
    for x in -2..9 {
        for y in -2..9 {
            let expected = (0..7).contains(&x) && (1..7).contains(&y);
            assert_eq!(grid.in_bounds(Position::new(x, y)), expected, "({x}, {y})");
        }
    }
}

#[test]
fn player_row_is_never_in_bounds() {
    let grid = Grid::new(10);
    for x in 0..10 {
        assert!(!grid.in_bounds(Position::new(x, 0)));
    }
}

// ── add / get / remove ────────────────────────────────────────────────────────

#[test]
fn add_then_get() {
    let mut grid = Grid::new(7);
    grid.add(Position::new(2, 3), Entity::Collectable);
    assert_eq!(grid.get(Position::new(2, 3)), Some(Entity::Collectable));
    assert_eq!(grid.get(Position::new(3, 2)), None);
    assert_eq!(grid.len(), 1);
}

#[test]
fn add_out_of_bounds_is_ignored() {
    let mut grid = Grid::new(7);
    grid.add(Position::new(3, 0), Entity::Destroyable);
    grid.add(Position::new(7, 3), Entity::Destroyable);
    grid.add(Position::new(-1, 3), Entity::Destroyable);
    grid.add(Position::new(3, 7), Entity::Destroyable);
    assert!(grid.is_empty());
}

#[test]
fn add_replaces_existing_entity() {
    let mut grid = Grid::new(7);
    grid.add(Position::new(1, 1), Entity::Collectable);
    grid.add(Position::new(1, 1), Entity::Blocker);
    assert_eq!(grid.get(Position::new(1, 1)), Some(Entity::Blocker));
    assert_eq!(grid.len(), 1);
}

#[test]
fn remove_returns_the_entity() {
    let mut grid = Grid::new(7);
    grid.add(Position::new(4, 4), Entity::Blocker);
    assert_eq!(grid.remove(Position::new(4, 4)).unwrap(), Entity::Blocker);
    assert!(grid.is_empty());
}

#[test]
fn remove_absent_position_is_not_found() {
    let mut grid = Grid::new(7);
    grid.add(Position::new(4, 4), Entity::Blocker);
    let err = grid.remove(Position::new(1, 1)).unwrap_err();
    assert!(matches!(err, HackerError::NotFound(p) if p == Position::new(1, 1)));
    assert_eq!(grid.len(), 1);
}

// ── serialize / text dump ─────────────────────────────────────────────────────

#[test]
fn serialize_projects_symbols_without_mutating() {
    let mut grid = Grid::new(7);
    grid.add(Position::new(0, 1), Entity::Destroyable);
    grid.add(Position::new(6, 6), Entity::Collectable);
    let before = grid.clone();

    let raw = grid.serialize();
    assert_eq!(raw.len(), 2);
    assert_eq!(raw.get(&(0, 1)), Some(&'D'));
    assert_eq!(raw.get(&(6, 6)), Some(&'C'));
    assert_eq!(grid, before);
}

#[test]
fn display_draws_rows_top_down() {
    let mut grid = Grid::new(3);
    grid.add(Position::new(0, 1), Entity::Destroyable);
    grid.add(Position::new(2, 2), Entity::Blocker);
    assert_eq!(grid.to_string(), "...\nD..\n..B\n");
}

#[test]
fn iteration_is_row_major() {
    let mut grid = Grid::new(7);
    grid.add(Position::new(5, 2), Entity::Blocker);
    grid.add(Position::new(1, 4), Entity::Collectable);
    grid.add(Position::new(0, 2), Entity::Destroyable);
    let order: Vec<Position> = grid.entities().keys().copied().collect();
    assert_eq!(
        order,
        vec![Position::new(0, 2), Position::new(5, 2), Position::new(1, 4)]
    );
}
