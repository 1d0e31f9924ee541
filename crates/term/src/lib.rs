//! Terminal rendering module.
//!
//! Two layers:
//!
//! - [`frame`]: pure composition of a world into the fixed text frame
//!   (terrain, units, legend, status line)
//! - [`game_view`] and [`renderer`]: a colored framebuffer view of that frame
//!   with a cursor highlight, flushed to a real terminal via crossterm
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the text frame byte-for-byte stable so it can be asserted in tests
//! - Only rewrite terminal rows that changed between frames

pub mod fb;
pub mod frame;
pub mod game_view;
pub mod renderer;

pub use goblin_core as core;
pub use goblin_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use frame::{compose_cells, render_frame, render_world};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_changed_rows_into, encode_full_into, TerminalRenderer};
