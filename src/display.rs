//! Rendering layer: all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game.  No game rules run here; this module only translates state into
//! terminal commands.

use std::io::Write;
use std::time::Duration;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use hacker::compute::Game;
use hacker::entities::{Entity, Outcome, Position};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_TITLE: Color = Color::Green;
const C_BORDER: Color = Color::DarkBlue;
const C_PLAYER_AREA: Color = Color::DarkGrey;
const C_PLAYER: Color = Color::Magenta;
const C_DESTROYABLE: Color = Color::Red;
const C_COLLECTABLE: Color = Color::Green;
const C_BLOCKER: Color = Color::Grey;
const C_BREACH: Color = Color::Red;
const C_SCORE: Color = Color::Yellow;
const C_STATUS: Color = Color::White;
const C_PAUSED: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

// ── Layout ────────────────────────────────────────────────────────────────────

/// Terminal columns per grid cell.
const CELL_W: u16 = 3;
/// Terminal row of the board's top border.
const BOARD_TOP: u16 = 2;
/// Terminal column of the board's left border.
const BOARD_LEFT: u16 = 1;

const CONTROLS: &str = "A/← D/→ : Rotate   F/SPACE : Destroy   C : Collect   P : Pause   N : New   Q : Quit";

/// Session facts the game itself does not track.
pub struct Status {
    pub elapsed: Duration,
    pub paused: bool,
}

fn board_width(game: &Game) -> u16 {
    game.grid().size() as u16 * CELL_W
}

/// Terminal cell of the left edge of a grid position.
fn screen_xy(pos: Position) -> (u16, u16) {
    (
        BOARD_LEFT + 1 + pos.x() as u16 * CELL_W,
        BOARD_TOP + 1 + pos.y() as u16,
    )
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, game: &Game, status: &Status) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_title(out, game)?;
    draw_border(out, game)?;
    draw_player_area(out, game)?;

    for (pos, entity) in game.grid().entities() {
        draw_entity(out, *pos, *entity)?;
    }
    for pos in game.breaches() {
        draw_breach(out, *pos)?;
    }

    draw_score_bar(out, game)?;
    draw_status_bar(out, game, status)?;
    draw_controls_hint(out, game)?;

    if game.outcome() != Outcome::InProgress {
        draw_game_over(out, game)?;
    }

    // Park cursor below everything and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, BOARD_TOP + game.grid().size() as u16 + 5))?;
    out.flush()?;
    Ok(())
}

// ── Title (row 0) ─────────────────────────────────────────────────────────────

fn draw_title<W: Write>(out: &mut W, game: &Game) -> std::io::Result<()> {
    let title = "H A C K E R";
    let centre = BOARD_LEFT + 1 + board_width(game) / 2;
    out.queue(cursor::MoveTo(
        centre.saturating_sub(title.chars().count() as u16 / 2),
        0,
    ))?;
    out.queue(style::SetForegroundColor(C_TITLE))?;
    out.queue(Print(title))?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, game: &Game) -> std::io::Result<()> {
    let w = board_width(game) as usize;
    let bottom = BOARD_TOP + game.grid().size() as u16 + 1;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(BOARD_LEFT, BOARD_TOP))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w))))?;

    out.queue(cursor::MoveTo(BOARD_LEFT, bottom))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w))))?;

    for row in BOARD_TOP + 1..bottom {
        out.queue(cursor::MoveTo(BOARD_LEFT, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(BOARD_LEFT + 1 + w as u16, row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── Board contents ────────────────────────────────────────────────────────────

/// Row 0 is shaded and holds the player sprite.
fn draw_player_area<W: Write>(out: &mut W, game: &Game) -> std::io::Result<()> {
    let (x, y) = screen_xy(Position::new(0, 0));
    out.queue(cursor::MoveTo(x, y))?;
    out.queue(style::SetForegroundColor(C_PLAYER_AREA))?;
    out.queue(Print("░".repeat(board_width(game) as usize)))?;

    let (px, py) = screen_xy(game.player_position());
    out.queue(cursor::MoveTo(px, py))?;
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    out.queue(Print(format!(" {} ", Entity::Player.symbol())))?;
    Ok(())
}

fn draw_entity<W: Write>(out: &mut W, pos: Position, entity: Entity) -> std::io::Result<()> {
    let color = match entity {
        Entity::Player => C_PLAYER,
        Entity::Destroyable => C_DESTROYABLE,
        Entity::Collectable => C_COLLECTABLE,
        Entity::Blocker => C_BLOCKER,
    };
    let (x, y) = screen_xy(pos);
    out.queue(cursor::MoveTo(x, y))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(format!("[{}]", entity.symbol())))?;
    Ok(())
}

/// A destroyable that got through to the player row.
fn draw_breach<W: Write>(out: &mut W, pos: Position) -> std::io::Result<()> {
    let (x, y) = screen_xy(pos);
    out.queue(cursor::MoveTo(x, y))?;
    out.queue(style::SetForegroundColor(C_BREACH))?;
    out.queue(Print("[✖]"))?;
    Ok(())
}

// ── Score bar (right of the board) ────────────────────────────────────────────

fn draw_score_bar<W: Write>(out: &mut W, game: &Game) -> std::io::Result<()> {
    let x = BOARD_LEFT + board_width(game) + 4;

    out.queue(cursor::MoveTo(x, BOARD_TOP + 1))?;
    out.queue(style::SetForegroundColor(C_SCORE))?;
    out.queue(Print("Score"))?;

    out.queue(cursor::MoveTo(x, BOARD_TOP + 3))?;
    out.queue(style::SetForegroundColor(C_COLLECTABLE))?;
    out.queue(Print(format!(
        "Collected: {:>3} / {}",
        game.num_collected(),
        game.collection_target()
    )))?;

    out.queue(cursor::MoveTo(x, BOARD_TOP + 4))?;
    out.queue(style::SetForegroundColor(C_DESTROYABLE))?;
    out.queue(Print(format!("Destroyed: {:>3}", game.num_destroyed())))?;
    Ok(())
}

// ── Status bar (below the board) ──────────────────────────────────────────────

fn draw_status_bar<W: Write>(out: &mut W, game: &Game, status: &Status) -> std::io::Result<()> {
    let row = BOARD_TOP + game.grid().size() as u16 + 2;
    let secs = status.elapsed.as_secs();

    out.queue(cursor::MoveTo(BOARD_LEFT, row))?;
    out.queue(style::SetForegroundColor(C_STATUS))?;
    out.queue(Print(format!(
        "Total Shots: {:<4}  Timer: {}m{}s",
        game.total_shots(),
        secs / 60,
        secs % 60
    )))?;

    if status.paused {
        out.queue(style::SetForegroundColor(C_PAUSED))?;
        out.queue(Print("  [ PAUSED ]"))?;
    }
    Ok(())
}

fn draw_controls_hint<W: Write>(out: &mut W, game: &Game) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(BOARD_LEFT, BOARD_TOP + game.grid().size() as u16 + 3))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(CONTROLS))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, game: &Game) -> std::io::Result<()> {
    let (banner, color) = match game.outcome() {
        Outcome::Won => ("║     YOU  WON!      ║", Color::Green),
        _ => ("║     YOU  LOST      ║", Color::Red),
    };
    let lines: [&str; 3] = [
        "╔════════════════════╗",
        banner,
        "╚════════════════════╝",
    ];
    let score_line = format!(
        "Collected {}  Destroyed {}",
        game.num_collected(),
        game.num_destroyed()
    );
    let hint = "N - New Game  Q - Quit";

    let cx = BOARD_LEFT + 1 + board_width(game) / 2;
    let start_row = (BOARD_TOP + 1 + game.grid().size() as u16 / 2).saturating_sub(2);

    for (i, msg) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(*msg))?;
    }

    let score_row = start_row + lines.len() as u16;
    let col = cx.saturating_sub(score_line.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, score_row))?;
    out.queue(style::SetForegroundColor(C_SCORE))?;
    out.queue(Print(&score_line))?;

    let col = cx.saturating_sub(hint.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, score_row + 1))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(hint))?;

    Ok(())
}
