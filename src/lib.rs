//! rev_snake - terminal snake with direction-reversing food
//!
//! This library provides:
//! - Core game logic (game module): board addressing, the body chain,
//!   food placement, and the tick transition including the reversal
//!   mechanic
//! - Keyboard translation (input module)
//! - TUI rendering (render module)
//! - Cross-run statistics (metrics module)
//! - The interactive event loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
