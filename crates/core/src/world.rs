//! World state - terrain, units, cursor, selection and mode
//!
//! # Invariants
//!
//! - No two entities share a cell.
//! - At most one entity has `selected == true`, and it is the one referenced
//!   by [`WorldState::selected`].
//! - [`InteractionMode::Move`] only while a selection exists.
//! - The cursor always lies inside the grid.
//!
//! Every mutator keeps these. Rejected moves and selections on empty cells
//! are silent no-ops, not errors.

use crate::entity::{Entity, EntityId, Player, PlayerId};
use crate::grid::{Grid, MapError};
use crate::map_gen::MapGenerator;
use crate::types::{GameAction, InteractionMode, Position, Tile, UnitKind, STARTING_UNITS};

#[derive(Debug, Clone)]
pub struct WorldState {
    grid: Grid,
    seed: Option<u64>,
    entities: Vec<Entity>,
    players: Vec<Player>,
    cursor: Position,
    selected: Option<EntityId>,
    mode: InteractionMode,
}

impl WorldState {
    /// Generate a map and build an empty world on it.
    pub fn new(width: i64, height: i64, seed: Option<u64>) -> Result<Self, MapError> {
        let generator = MapGenerator::new(width, height, seed)?;
        let seed = generator.seed();
        let mut world = Self::from_grid(generator.generate());
        world.seed = Some(seed);
        Ok(world)
    }

    /// Build a world over an existing grid. The cursor starts at the center
    pub fn from_grid(grid: Grid) -> Self {
        let cursor = grid.center();
        Self {
            grid,
            seed: None,
            entities: Vec::new(),
            players: Vec::new(),
            cursor,
            selected: None,
            mode: InteractionMode::Normal,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Map seed, when the grid was generated by this world
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.index())
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn selected(&self) -> Option<EntityId> {
        self.selected
    }

    pub fn selected_entity(&self) -> Option<&Entity> {
        self.selected.and_then(|id| self.entity(id))
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Entity standing on `pos`, if any
    pub fn entity_at(&self, pos: Position) -> Option<EntityId> {
        self.entities
            .iter()
            .position(|e| e.is_at(pos))
            .map(EntityId)
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        self.entity_at(pos).is_some()
    }

    /// First grass cell in row-major order, or the grid center
    pub fn find_spawn_location(&self) -> Position {
        self.grid
            .cells()
            .find(|(_, tile)| *tile == Tile::Grass)
            .map(|(pos, _)| pos)
            .unwrap_or_else(|| self.grid.center())
    }

    /// Create the first player and its starting units.
    ///
    /// Units are placed at fixed offsets from [`find_spawn_location`]. An
    /// offset that leaves the grid is clamped back in; if that cell is taken
    /// the unit goes to the next free cell in row-major order.
    ///
    /// [`find_spawn_location`]: WorldState::find_spawn_location
    pub fn initialize(&mut self) -> PlayerId {
        let id = self.players.len() as PlayerId;
        let mut player = Player::new(id, format!("Player {}", id + 1), "blue");

        let spawn = self.find_spawn_location();
        for (kind, dx, dy) in STARTING_UNITS {
            let (x, y) = spawn.offset(dx, dy);
            if let Some(entity) = self.spawn_unit(kind, self.grid.clamp(x, y), id) {
                player.add_entity(entity);
            }
        }
        log::debug!(
            "spawned {} units for {} around ({}, {})",
            player.entities().len(),
            player.name,
            spawn.x,
            spawn.y
        );

        self.players.push(player);
        id
    }

    /// Place a unit on `pos` or the next free cell after it.
    ///
    /// Returns `None` when every cell is occupied.
    pub fn spawn_unit(
        &mut self,
        kind: UnitKind,
        pos: Position,
        player_id: PlayerId,
    ) -> Option<EntityId> {
        let Some(pos) = self.free_cell_from(pos) else {
            log::warn!("no free cell left to spawn {}", kind.name());
            return None;
        };
        let id = EntityId(self.entities.len());
        self.entities.push(Entity::new(kind, pos.x, pos.y, player_id));
        Some(id)
    }

    fn free_cell_from(&self, start: Position) -> Option<Position> {
        let (w, h) = (self.width(), self.height());
        let start = start.y * w + start.x;
        (0..w * h)
            .map(|i| (start + i) % (w * h))
            .map(|i| Position::new(i % w, i / w))
            .find(|pos| !self.is_occupied(*pos))
    }

    /// Move the cursor, saturating at the grid edges
    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        let (x, y) = self.cursor.offset(dx, dy);
        self.cursor = self.grid.clamp(x, y);
    }

    /// Select the unit under the cursor, or clear the selection.
    ///
    /// Clearing the selection also drops back to normal mode.
    pub fn select_at_cursor(&mut self) {
        match self.entity_at(self.cursor) {
            Some(id) => self.set_selection(Some(id)),
            None => {
                self.set_selection(None);
                self.mode = InteractionMode::Normal;
            }
        }
    }

    fn set_selection(&mut self, id: Option<EntityId>) {
        if let Some(prev) = self.selected.take() {
            self.entities[prev.index()].selected = false;
        }
        if let Some(id) = id {
            self.entities[id.index()].selected = true;
            self.selected = Some(id);
        }
    }

    /// Move the selected unit by `(dx, dy)`, clamped to the grid.
    ///
    /// Returns whether the unit moved. Moves onto another unit are rejected.
    pub fn move_selected(&mut self, dx: i32, dy: i32) -> bool {
        let Some(id) = self.selected else {
            return false;
        };
        let current = self.entities[id.index()].position();
        let (x, y) = current.offset(dx, dy);
        let target = self.grid.clamp(x, y);

        match self.entity_at(target) {
            Some(other) if other != id => {
                log::trace!("move to ({}, {}) blocked by {:?}", target.x, target.y, other);
                false
            }
            _ => {
                self.entities[id.index()].move_to(target);
                target != current
            }
        }
    }

    /// Flip between normal and move mode. No-op without a selection
    pub fn toggle_move_mode(&mut self) {
        if self.selected.is_some() {
            self.mode = self.mode.toggled();
        }
    }

    /// Apply one abstract command.
    ///
    /// Directional actions drive the selected unit in move mode and the
    /// cursor otherwise. Returns false for actions that had nothing to act
    /// on (including [`GameAction::Quit`], which the driver handles).
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if let Some((dx, dy)) = action.delta() {
            if self.mode == InteractionMode::Move && self.selected.is_some() {
                return self.move_selected(dx, dy);
            }
            let before = self.cursor;
            self.move_cursor(dx, dy);
            return self.cursor != before;
        }

        match action {
            GameAction::Select => {
                self.select_at_cursor();
                self.selected.is_some()
            }
            GameAction::ToggleMoveMode => {
                let applicable = self.selected.is_some();
                self.toggle_move_mode();
                applicable
            }
            _ => {
                log::trace!("ignoring {:?}", action);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grass_world(width: usize, height: usize) -> WorldState {
        WorldState::from_grid(Grid::filled(width, height, Tile::Grass).unwrap())
    }

    #[test]
    fn test_cursor_starts_at_center() {
        let world = grass_world(10, 7);
        assert_eq!(world.cursor(), Position::new(5, 3));
        assert_eq!(world.mode(), InteractionMode::Normal);
        assert!(world.entities().is_empty());
    }

    #[test]
    fn test_spawn_falls_back_to_center_without_grass() {
        let world = WorldState::from_grid(Grid::filled(6, 4, Tile::Water).unwrap());
        assert_eq!(world.find_spawn_location(), Position::new(3, 2));
    }

    #[test]
    fn test_spawn_offsets_clamped_at_edge() {
        // Only grass cell is the bottom-right corner.
        let grid = Grid::parse("~~~\n~~.").unwrap();
        let mut world = WorldState::from_grid(grid);
        world.initialize();

        let positions: Vec<_> = world.entities().iter().map(Entity::position).collect();
        assert_eq!(positions.len(), 3);
        assert_eq!(positions[0], Position::new(2, 1));
        for (i, a) in positions.iter().enumerate() {
            for b in &positions[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_spawn_skips_units_when_grid_full() {
        let mut world = grass_world(1, 1);
        world.initialize();
        assert_eq!(world.entities().len(), 1);
        assert_eq!(world.players()[0].entities().len(), 1);
    }

    #[test]
    fn test_reselect_moves_flag() {
        let mut world = grass_world(5, 5);
        world.initialize();

        world.move_cursor(-5, -5);
        world.select_at_cursor();
        assert_eq!(world.selected(), Some(EntityId(0)));

        world.move_cursor(1, 0);
        world.select_at_cursor();
        assert_eq!(world.selected(), Some(EntityId(1)));
        assert!(!world.entities()[0].selected);
        assert!(world.entities()[1].selected);
    }

    #[test]
    fn test_apply_action_routes_by_mode() {
        let mut world = grass_world(5, 5);
        world.initialize();
        world.move_cursor(-5, -5);

        assert!(world.apply_action(GameAction::Select));
        assert!(world.apply_action(GameAction::ToggleMoveMode));
        assert_eq!(world.mode(), InteractionMode::Move);

        // Right is blocked by the second goblin; down is blocked by the warrior.
        assert!(!world.apply_action(GameAction::CursorRight));
        assert!(!world.apply_action(GameAction::CursorDown));
        assert_eq!(world.entities()[0].position(), Position::new(0, 0));
        assert_eq!(world.cursor(), Position::new(0, 0));

        assert!(!world.apply_action(GameAction::Quit));
    }

    #[test]
    fn test_toggle_without_selection_is_noop() {
        let mut world = grass_world(3, 3);
        assert!(!world.apply_action(GameAction::ToggleMoveMode));
        assert_eq!(world.mode(), InteractionMode::Normal);
    }
}
