#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod bitboard;
mod board;
mod common;
mod config;
mod game;
mod generator;
mod grid;
mod legality;
mod letters;
#[cfg(feature = "std")]
mod logging;
mod ownership;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
mod selector;
mod ui;
mod wordlist;

pub use bitboard::{CellMask, CellMaskError, Indices};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use generator::*;
pub use grid::*;
pub use legality::*;
pub use letters::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from};
pub use ownership::*;
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use selector::*;
pub use ui::*;
pub use wordlist::*;
