//! Game state definitions that control the overall flow of the simulation.
//!
//! States determine which systems run at any given time. Enemy behavior and
//! combat only run in `InGame`.

use bevy::prelude::*;

/// Main game states.
///
/// - Start in `Loading` while enemy definitions are read
/// - Enter `InGame` once loading completes
/// - `GameOver` when the player's health reaches zero
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading data files
    #[default]
    Loading,
    /// Active gameplay
    InGame,
    /// Player has died
    GameOver,
}
