//! Conway's Game of Life on a bounded board, with a cursor editor
//!
//! The core ([`grid`], [`proc`], [`board`], [`session`], [`app`]) knows
//! nothing about terminals; [`draw`] drives it with crossterm.

pub mod app;
pub mod board;
pub mod config;
pub mod draw;
pub mod error;
pub mod grid;
pub mod input;
pub mod proc;
pub mod session;

pub use error::{Error, Result};
