//! Frame composition: world state to the fixed text frame.
//!
//! The layout is fixed, one item per line:
//!
//! ```text
//! ====================          '=' x (width + 2)
//!  GOBLIN - Procedural Strategy Game
//! ====================
//! |....TT~~..|                  one line per map row
//! ====================
//!
//! Terrain: ...                  legend
//! Units: ...
//!
//! Controls: ...
//!
//! Selected: GOBLIN at (3, 4)    only with a selection
//! ```
//!
//! Composition is pure: the same inputs always yield the same string.

use crate::core::{Entity, Grid, WorldState};

pub const TITLE_LINE: &str = " GOBLIN - Procedural Strategy Game";
pub const TERRAIN_LEGEND: &str = "Terrain: . grass | T forest | ^ mountain | ~ water | : desert";
pub const UNIT_LEGEND: &str = "Units: g goblin | W warrior | S settler | s scout";
pub const CONTROLS_LINE: &str =
    "Controls: arrow keys to move cursor | SPACE to select | m to move | q to quit";

/// Number of lines above the first map row (border, title, border)
pub const MAP_TOP: usize = 3;

/// Columns before the first map cell (the left `|`)
pub const MAP_LEFT: usize = 1;

/// Terrain glyphs with every in-bounds entity drawn on top.
///
/// Entities are drawn in iteration order, so a later entity on the same cell
/// hides an earlier one.
pub fn compose_cells(grid: &Grid, entities: &[Entity]) -> Vec<Vec<char>> {
    let mut buffer: Vec<Vec<char>> = grid
        .rows()
        .map(|row| row.iter().map(|tile| tile.glyph()).collect())
        .collect();

    for entity in entities {
        if let Some(cell) = buffer.get_mut(entity.y).and_then(|row| row.get_mut(entity.x)) {
            *cell = entity.glyph();
        }
    }
    buffer
}

/// Render the full text frame.
///
/// `selected` only drives the status line; the emphasized glyph comes from
/// each entity's own `selected` flag.
pub fn render_frame(grid: &Grid, entities: &[Entity], selected: Option<&Entity>) -> String {
    let border = "=".repeat(grid.width() + 2);
    let cells = compose_cells(grid, entities);

    let mut lines: Vec<String> = Vec::with_capacity(grid.height() + 12);
    lines.push(border.clone());
    lines.push(TITLE_LINE.to_string());
    lines.push(border.clone());
    for row in &cells {
        let mut line = String::with_capacity(row.len() + 2);
        line.push('|');
        line.extend(row.iter());
        line.push('|');
        lines.push(line);
    }
    lines.push(border);

    lines.push(String::new());
    lines.push(TERRAIN_LEGEND.to_string());
    lines.push(UNIT_LEGEND.to_string());
    lines.push(String::new());
    lines.push(CONTROLS_LINE.to_string());

    if let Some(entity) = selected {
        lines.push(String::new());
        lines.push(format!(
            "Selected: {} at ({}, {})",
            entity.kind.name(),
            entity.x,
            entity.y
        ));
    }

    lines.join("\n")
}

/// Render the frame of a world.
pub fn render_world(world: &WorldState) -> String {
    render_frame(world.grid(), world.entities(), world.selected_entity())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Tile, UnitKind};

    #[test]
    fn later_entity_hides_earlier_on_same_cell() {
        let grid = Grid::filled(2, 1, Tile::Grass).unwrap();
        let entities = vec![
            Entity::new(UnitKind::Goblin, 0, 0, 0),
            Entity::new(UnitKind::Scout, 0, 0, 0),
        ];
        let cells = compose_cells(&grid, &entities);
        assert_eq!(cells, vec![vec!['s', '.']]);
    }

    #[test]
    fn out_of_bounds_entity_is_skipped() {
        let grid = Grid::filled(2, 2, Tile::Desert).unwrap();
        let entities = vec![Entity::new(UnitKind::Warrior, 5, 0, 0)];
        let cells = compose_cells(&grid, &entities);
        assert_eq!(cells, vec![vec![':', ':'], vec![':', ':']]);
    }

    #[test]
    fn frame_line_count_without_selection() {
        let grid = Grid::filled(4, 3, Tile::Forest).unwrap();
        let frame = render_frame(&grid, &[], None);
        // 3 header + 3 rows + 1 border + blank + 2 legend + blank + controls
        assert_eq!(frame.lines().count(), 12);
        assert!(!frame.ends_with('\n'));
    }
}
