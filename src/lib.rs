//! # Connect Four Engine
//!
//! The authoritative game engine behind a two-player Connect Four game:
//! gravity-drop board, win/draw detection, turn control, and computer move
//! selection at three difficulty levels. Transport and presentation are left
//! to the caller, which drives a [`game::GameSession`].
//!
//! ## Modules
//!
//! - [`game`] — Board, seats, rule engine, turn controller, session
//! - [`ai`] — Move selector trait, random and search-based selectors, heuristics
//! - [`arena`] — Computer-vs-computer matches and tallies
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
