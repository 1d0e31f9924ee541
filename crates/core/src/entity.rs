//! Entities and players
//!
//! Entities are referenced by [`EntityId`], an index into the world's entity
//! list. Entities are never removed, so an id stays valid for the lifetime of
//! the world that issued it.

use crate::types::{Position, UnitKind};

/// Handle to an entity owned by a [`WorldState`](crate::WorldState)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub usize);

impl EntityId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Numeric player id
pub type PlayerId = u32;

/// A movable unit on the map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub kind: UnitKind,
    pub x: usize,
    pub y: usize,
    pub player_id: PlayerId,
    pub selected: bool,
}

impl Entity {
    pub fn new(kind: UnitKind, x: usize, y: usize, player_id: PlayerId) -> Self {
        Self {
            kind,
            x,
            y,
            player_id,
            selected: false,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn is_at(&self, pos: Position) -> bool {
        self.x == pos.x && self.y == pos.y
    }

    /// Move to absolute coordinates. Bounds are the caller's concern
    pub fn move_to(&mut self, pos: Position) {
        self.x = pos.x;
        self.y = pos.y;
    }

    /// Move by `(dx, dy)`.
    ///
    /// Returns false, leaving the entity in place, when either coordinate
    /// would go below zero. The upper bound is the caller's concern.
    pub fn move_by(&mut self, dx: i32, dy: i32) -> bool {
        let (Some(x), Some(y)) = (
            self.x.checked_add_signed(dx as isize),
            self.y.checked_add_signed(dy as isize),
        ) else {
            return false;
        };
        self.x = x;
        self.y = y;
        true
    }

    /// Glyph for rendering, upper-cased while selected
    pub fn glyph(&self) -> char {
        if self.selected {
            self.kind.selected_glyph()
        } else {
            self.kind.glyph()
        }
    }
}

/// A player and the units it controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub color: String,
    /// Owned units in spawn order
    entities: Vec<EntityId>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            entities: Vec::new(),
        }
    }

    pub fn add_entity(&mut self, id: EntityId) {
        self.entities.push(id);
    }

    /// Drop an entity from this player's control. Returns false if not owned
    pub fn remove_entity(&mut self, id: EntityId) -> bool {
        match self.entities.iter().position(|e| *e == id) {
            Some(idx) => {
                self.entities.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn entities(&self) -> &[EntityId] {
        &self.entities
    }

    pub fn owns(&self, id: EntityId) -> bool {
        self.entities.contains(&id)
    }
}
