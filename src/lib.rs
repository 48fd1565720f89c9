//! Grid snake with timed food, power-ups, levels and a persisted high-score table.
//!
//! The simulation (`snake`, `session`, `spawner`, `screen`) is plain data driven by an
//! injected random source; `input` and `render` bind it to a macroquad window.

pub mod config;
pub mod entity;
pub mod grid;
pub mod highscore;
pub mod input;
pub mod render;
pub mod screen;
pub mod session;
pub mod snake;
pub mod spawner;
pub mod speed;
