//! GameView: maps a `WorldState` frame into a terminal framebuffer.
//!
//! The text frame from [`render_world`] is the source of truth; this view
//! only adds color and the cursor highlight, which the plain text frame
//! cannot show. This module is pure (no I/O). It can be unit-tested.

use crate::core::WorldState;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::frame::{render_world, MAP_LEFT, MAP_TOP};
use crate::types::{InteractionMode, Tile, UnitKind};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Colored terminal presentation of the game frame.
///
/// The frame is centered horizontally and pinned to the top row.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    /// Render the world into an existing framebuffer.
    ///
    /// The framebuffer is reset to the viewport size; anything that does not
    /// fit is clipped.
    pub fn render_into(&self, world: &WorldState, viewport: Viewport, fb: &mut FrameBuffer) {
        *fb = FrameBuffer::new(viewport.width, viewport.height);

        let frame = render_world(world);
        let frame_w = frame.lines().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;

        let map_rows = MAP_TOP..MAP_TOP + world.height();
        let map_cols = MAP_LEFT..MAP_LEFT + world.width();

        for (row, line) in frame.lines().enumerate() {
            let y = row as u16;
            if row == 1 {
                fb.put_str(start_x, y, line, CellStyle::default().bold());
                continue;
            }
            for (col, ch) in line.chars().enumerate() {
                let style = if map_rows.contains(&row) && map_cols.contains(&col) {
                    glyph_style(ch)
                } else {
                    CellStyle::default()
                };
                fb.put_char(start_x.saturating_add(col as u16), y, ch, style);
            }
        }

        let cursor = world.cursor();
        let cx = start_x.saturating_add((MAP_LEFT + cursor.x) as u16);
        let cy = (MAP_TOP + cursor.y) as u16;
        if let Some(cell) = fb.get(cx, cy) {
            let mut style = cell.style.reversed();
            if world.mode() == InteractionMode::Move {
                style.bg = Rgb::new(200, 160, 40);
            }
            fb.restyle(cx, cy, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, world: &WorldState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(world, viewport, &mut fb);
        fb
    }
}

/// Color for a glyph inside the map area.
fn glyph_style(ch: char) -> CellStyle {
    if let Some(tile) = Tile::from_glyph(ch) {
        return CellStyle::fg(tile_color(tile));
    }
    let unit = UnitKind::from_glyph(ch).or_else(|| UnitKind::from_glyph(ch.to_ascii_lowercase()));
    match unit {
        Some(UnitKind::Goblin) => CellStyle::fg(Rgb::new(120, 230, 80)).bold(),
        Some(UnitKind::Warrior) => CellStyle::fg(Rgb::new(230, 80, 80)).bold(),
        Some(UnitKind::Settler) | Some(UnitKind::Scout) => {
            CellStyle::fg(Rgb::new(240, 220, 120)).bold()
        }
        None => CellStyle::default(),
    }
}

fn tile_color(tile: Tile) -> Rgb {
    match tile {
        Tile::Empty => Rgb::new(0, 0, 0),
        Tile::Grass => Rgb::new(100, 180, 90),
        Tile::Forest => Rgb::new(40, 130, 60),
        Tile::Mountain => Rgb::new(170, 170, 170),
        Tile::Water => Rgb::new(80, 140, 230),
        Tile::Desert => Rgb::new(220, 200, 120),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Grid;

    #[test]
    fn units_get_bold_styles() {
        assert!(glyph_style('g').bold);
        assert!(glyph_style('G').bold);
        assert!(glyph_style('W').bold);
        assert!(!glyph_style('.').bold);
    }

    #[test]
    fn water_is_blue() {
        assert_eq!(glyph_style('~').fg, tile_color(Tile::Water));
    }

    #[test]
    fn cursor_cell_is_reversed() {
        let world = WorldState::from_grid(Grid::filled(4, 2, Tile::Grass).unwrap());
        let fb = GameView::default().render(&world, Viewport::new(80, 20));
        // Frame is 77 columns wide (controls line), so it starts at x = 1.
        let cursor = world.cursor();
        let cell = fb
            .get(1 + (MAP_LEFT + cursor.x) as u16, (MAP_TOP + cursor.y) as u16)
            .unwrap();
        assert_eq!(cell.ch, '.');
        assert!(cell.style.reverse);
    }
}
