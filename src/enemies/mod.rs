//! Enemies module - enemy behavior, definitions, and spawning.

mod ai;
mod attack;
mod behavior;
mod components;
mod daze;
pub mod data;
mod error;
mod health;
mod movement;
mod navigation;
mod plugin;
mod spawning;
mod targeting;

pub use attack::{
    AttackController, AttackFired, AttackPhase, AttackStyle, COMBO_WINDOW_SECS, MAX_COMBO,
    STRIKE_DELAY_SECS,
};
pub use behavior::{BehaviorController, TickContext, TickReport};
pub use components::*;
pub use daze::Daze;
pub use data::{EnemyDefinition, EnemyRegistry};
pub use error::{ConfigError, DataLoadError};
pub use health::{DamageOutcome, Vitals};
pub use movement::{Facing, Locomotion, MovementKind, MovementStrategy, PatrolRoute};
pub use navigation::StraightLineNavPlugin;
pub use plugin::EnemyPlugin;
pub use spawning::{spawn_enemy, Spawner};
pub use targeting::{Aggro, AggroPolicy, DisengageResponse, TargetIntent};
