//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (map generation, world state, rendering, input mapping).
//!
//! # Map Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 50 | Map width in columns |
//! | `DEFAULT_HEIGHT` | 25 | Map height in rows |
//! | `MAX_RANDOM_SEED` | 1 000 000 | Upper bound of a generator-chosen seed |
//! | `MAX_MAP_CELLS` | 2^24 | Largest accepted `width * height` |
//!
//! # Terrain Generation
//!
//! Every cell is seeded from a weighted table, then smoothed by a
//! neighbor-majority cellular automaton:
//!
//! | Tile | Weight |
//! |------|--------|
//! | Grass | 40 |
//! | Forest | 20 |
//! | Mountain | 15 |
//! | Water | 15 |
//! | Desert | 10 |
//!
//! - `SMOOTHING_PASSES`: 3 full passes over the grid
//! - `SMOOTHING_KEEP_CHANCE`: 0.3 chance a cell keeps its value in a pass
//!
//! # Examples
//!
//! ```
//! use goblin_types::{GameAction, Tile, UnitKind, DEFAULT_HEIGHT, DEFAULT_WIDTH};
//!
//! assert_eq!(Tile::Water.glyph(), '~');
//! assert_eq!(UnitKind::Goblin.glyph(), 'g');
//! assert_eq!(UnitKind::Goblin.name(), "GOBLIN");
//!
//! assert_eq!(GameAction::CursorLeft.delta(), Some((-1, 0)));
//! assert_eq!(GameAction::ToggleMoveMode.delta(), None);
//!
//! assert_eq!(DEFAULT_WIDTH, 50);
//! assert_eq!(DEFAULT_HEIGHT, 25);
//! ```

/// Default map width in columns
pub const DEFAULT_WIDTH: i32 = 50;

/// Default map height in rows
pub const DEFAULT_HEIGHT: i32 = 25;

/// Generator-chosen seeds are drawn from `0..=MAX_RANDOM_SEED`
pub const MAX_RANDOM_SEED: u64 = 1_000_000;

/// Largest accepted map area in cells
pub const MAX_MAP_CELLS: usize = 1 << 24;

/// Number of cellular-automata smoothing passes
pub const SMOOTHING_PASSES: usize = 3;

/// Probability that a cell keeps its current tile during a smoothing pass
pub const SMOOTHING_KEEP_CHANCE: f64 = 0.3;

/// Relative seeding weights per tile kind.
///
/// Weights are relative and need not sum to 100. `Tile::Empty` is absent on
/// purpose: seeding never produces it.
pub const TILE_WEIGHTS: [(Tile, u32); 5] = [
    (Tile::Grass, 40),
    (Tile::Forest, 20),
    (Tile::Mountain, 15),
    (Tile::Water, 15),
    (Tile::Desert, 10),
];

/// Starting units and their offsets from the spawn location, in spawn order.
pub const STARTING_UNITS: [(UnitKind, i32, i32); 3] = [
    (UnitKind::Goblin, 0, 0),
    (UnitKind::Goblin, 1, 0),
    (UnitKind::Warrior, 0, 1),
];

/// The terrain kind of a single map cell
///
/// Ordinal order (declaration order) is significant: smoothing resolves
/// ties between equally frequent neighbors in favor of the lowest ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Tile {
    #[default]
    Empty,
    Grass,
    Forest,
    Mountain,
    Water,
    Desert,
}

impl Tile {
    /// Number of tile kinds
    pub const COUNT: usize = 6;

    /// All tile kinds in ordinal order
    pub const ALL: [Tile; Tile::COUNT] = [
        Tile::Empty,
        Tile::Grass,
        Tile::Forest,
        Tile::Mountain,
        Tile::Water,
        Tile::Desert,
    ];

    /// Display glyph
    ///
    /// # Examples
    ///
    /// ```
    /// use goblin_types::Tile;
    ///
    /// assert_eq!(Tile::Empty.glyph(), ' ');
    /// assert_eq!(Tile::Grass.glyph(), '.');
    /// assert_eq!(Tile::Mountain.glyph(), '^');
    /// ```
    pub const fn glyph(self) -> char {
        match self {
            Tile::Empty => ' ',
            Tile::Grass => '.',
            Tile::Forest => 'T',
            Tile::Mountain => '^',
            Tile::Water => '~',
            Tile::Desert => ':',
        }
    }

    /// Position in [`Tile::ALL`]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Inverse of [`Tile::glyph`]
    pub fn from_glyph(ch: char) -> Option<Self> {
        Tile::ALL.iter().copied().find(|tile| tile.glyph() == ch)
    }
}

/// The movable unit kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Goblin,
    Warrior,
    Settler,
    Scout,
}

impl UnitKind {
    pub const ALL: [UnitKind; 4] = [
        UnitKind::Goblin,
        UnitKind::Warrior,
        UnitKind::Settler,
        UnitKind::Scout,
    ];

    /// Base display glyph
    pub const fn glyph(self) -> char {
        match self {
            UnitKind::Goblin => 'g',
            UnitKind::Warrior => 'W',
            UnitKind::Settler => 'S',
            UnitKind::Scout => 's',
        }
    }

    /// Glyph used while the unit is selected (upper-cased base glyph)
    pub const fn selected_glyph(self) -> char {
        self.glyph().to_ascii_uppercase()
    }

    /// Upper-case display name, as shown in the status line
    pub fn name(&self) -> &'static str {
        match self {
            UnitKind::Goblin => "GOBLIN",
            UnitKind::Warrior => "WARRIOR",
            UnitKind::Settler => "SETTLER",
            UnitKind::Scout => "SCOUT",
        }
    }

    /// Inverse of [`UnitKind::glyph`]; selected glyphs are not accepted
    pub fn from_glyph(ch: char) -> Option<Self> {
        UnitKind::ALL.iter().copied().find(|kind| kind.glyph() == ch)
    }
}

/// A cell coordinate on the map: `x` is the column, `y` the row (0 = top)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Signed coordinates of `self + (dx, dy)`, possibly out of bounds
    pub fn offset(&self, dx: i32, dy: i32) -> (i64, i64) {
        (self.x as i64 + dx as i64, self.y as i64 + dy as i64)
    }
}

/// Interaction mode gating what directional input does
///
/// - **Normal**: arrows move the cursor
/// - **Move**: arrows move the selected unit (requires a selection)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    #[default]
    Normal,
    Move,
}

impl InteractionMode {
    pub fn toggled(self) -> Self {
        match self {
            InteractionMode::Normal => InteractionMode::Move,
            InteractionMode::Move => InteractionMode::Normal,
        }
    }
}

/// Abstract commands produced by input mapping and applied to the world
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the cursor (or the selected unit in move mode) one row up
    CursorUp,
    /// One row down
    CursorDown,
    /// One column left
    CursorLeft,
    /// One column right
    CursorRight,
    /// Select the unit under the cursor, or clear the selection
    Select,
    /// Flip between normal and move mode (requires a selection)
    ToggleMoveMode,
    /// Leave the game
    Quit,
}

impl GameAction {
    /// Direction of a directional action as `(dx, dy)`
    ///
    /// # Examples
    ///
    /// ```
    /// use goblin_types::GameAction;
    ///
    /// assert_eq!(GameAction::CursorUp.delta(), Some((0, -1)));
    /// assert_eq!(GameAction::CursorRight.delta(), Some((1, 0)));
    /// assert_eq!(GameAction::Select.delta(), None);
    /// ```
    pub fn delta(&self) -> Option<(i32, i32)> {
        match self {
            GameAction::CursorUp => Some((0, -1)),
            GameAction::CursorDown => Some((0, 1)),
            GameAction::CursorLeft => Some((-1, 0)),
            GameAction::CursorRight => Some((1, 0)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeding_never_produces_empty_tiles() {
        assert!(TILE_WEIGHTS.iter().all(|(tile, _)| *tile != Tile::Empty));
        assert_eq!(TILE_WEIGHTS.iter().map(|(_, w)| w).sum::<u32>(), 100);
    }

    #[test]
    fn tile_ordinals_follow_declaration_order() {
        for (i, tile) in Tile::ALL.iter().enumerate() {
            assert_eq!(tile.ordinal(), i);
        }
    }

    #[test]
    fn selected_glyphs_are_upper_case() {
        assert_eq!(UnitKind::Goblin.selected_glyph(), 'G');
        assert_eq!(UnitKind::Warrior.selected_glyph(), 'W');
        assert_eq!(UnitKind::Settler.selected_glyph(), 'S');
        assert_eq!(UnitKind::Scout.selected_glyph(), 'S');
    }

    #[test]
    fn position_offset_is_signed() {
        let pos = Position::new(0, 3);
        assert_eq!(pos.offset(-1, -1), (-1, 2));
        assert_eq!(pos.offset(2, 0), (2, 3));
    }
}
