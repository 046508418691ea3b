//! Enemy data loading from RON files.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::attack::AttackStyle;
use super::error::{ConfigError, DataLoadError};
use super::movement::MovementKind;
use super::targeting::{AggroPolicy, DisengageResponse};
use crate::presentation::AnimRig;

/// Where enemy definitions live, relative to the working directory.
pub const ENEMY_DATA_DIR: &str = "assets/data/enemies";

/// Collider configuration for an enemy type.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ColliderConfig {
    pub half_height: f32,
    pub radius: f32,
}

impl Default for ColliderConfig {
    fn default() -> Self {
        Self {
            half_height: 0.5,
            radius: 0.3,
        }
    }
}

/// Enemy definition loaded from RON file.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct EnemyDefinition {
    pub name: String,
    pub max_health: u32,
    pub speed: f32,
    pub daze_duration: f32,
    pub aggro_range: f32,
    pub disengage_range: f32,
    pub attack_range: f32,
    pub attack_cooldown: f32,
    pub movement: MovementKind,
    #[serde(default)]
    pub attack_style: AttackStyle,
    #[serde(default)]
    pub aggro_policy: AggroPolicy,
    #[serde(default)]
    pub disengage_response: DisengageResponse,
    #[serde(default)]
    pub no_blood: bool,
    #[serde(default)]
    pub rig: AnimRig,
    #[serde(default)]
    pub collider: Option<ColliderConfig>,
}

impl EnemyDefinition {
    /// Ground chaser: interpolates straight at the player, three-hit combo.
    pub fn brute() -> Self {
        Self {
            name: "Brute".to_string(),
            max_health: 3,
            speed: 2.0,
            daze_duration: 0.6,
            aggro_range: 6.0,
            disengage_range: 50.0,
            attack_range: 1.0,
            attack_cooldown: 0.25,
            movement: MovementKind::DirectChase,
            attack_style: AttackStyle::Combo,
            aggro_policy: AggroPolicy::Banded,
            disengage_response: DisengageResponse::Idle,
            no_blood: false,
            rig: AnimRig::HeroKnight,
            collider: None,
        }
    }

    /// Path-planner chaser: movement delegated to the backend, dazed while
    /// holding.
    pub fn stalker() -> Self {
        Self {
            name: "Stalker".to_string(),
            attack_range: 1.5,
            movement: MovementKind::DelegatedChase,
            disengage_response: DisengageResponse::Dazed,
            ..Self::brute()
        }
    }

    /// Ranged striker with a patrol route. Pursues anywhere inside 50 units
    /// and strikes with delayed damage; beyond that it holds dazed in place,
    /// so the route is tracked but never walked. Use the `Idle` disengage
    /// response for a sentry that walks its waypoints.
    pub fn sentry() -> Self {
        Self {
            name: "Sentry".to_string(),
            max_health: 3,
            speed: 2.0,
            daze_duration: 1.5,
            aggro_range: 50.0,
            disengage_range: 50.0,
            attack_range: 1.8,
            attack_cooldown: 1.5,
            movement: MovementKind::WaypointPatrol,
            attack_style: AttackStyle::Deferred,
            aggro_policy: AggroPolicy::SingleThreshold,
            disengage_response: DisengageResponse::Dazed,
            no_blood: false,
            rig: AnimRig::TopDown,
            collider: None,
        }
    }

    /// Clamp invalid values to usable ones, reporting every correction.
    pub fn sanitized(mut self) -> (Self, Vec<ConfigError>) {
        let mut fixes = Vec::new();

        if self.max_health == 0 {
            self.max_health = 1;
            fixes.push(ConfigError::ZeroHealth);
        }

        if !(self.daze_duration > 0.0) {
            fixes.push(ConfigError::OutOfRange {
                field: "daze_duration",
                value: self.daze_duration,
                fallback: 0.6,
            });
            self.daze_duration = 0.6;
        }

        for (field, value) in [
            ("speed", &mut self.speed),
            ("aggro_range", &mut self.aggro_range),
            ("attack_range", &mut self.attack_range),
            ("attack_cooldown", &mut self.attack_cooldown),
        ] {
            if !(*value >= 0.0) {
                fixes.push(ConfigError::OutOfRange {
                    field,
                    value: *value,
                    fallback: 0.0,
                });
                *value = 0.0;
            }
        }

        if !(self.disengage_range >= self.aggro_range) {
            fixes.push(ConfigError::DisengageBelowAggro {
                aggro: self.aggro_range,
                disengage: self.disengage_range,
            });
            self.disengage_range = self.aggro_range;
        }

        (self, fixes)
    }
}

/// Resource holding all loaded enemy definitions.
#[derive(Resource, Default)]
pub struct EnemyRegistry {
    pub definitions: HashMap<String, EnemyDefinition>,
}

impl EnemyRegistry {
    /// Registry holding only the three built-in variants.
    pub fn with_builtin() -> Self {
        let mut registry = Self::default();
        registry.register_builtin();
        registry
    }

    /// Get an enemy definition by type name.
    pub fn get(&self, enemy_type: &str) -> Option<&EnemyDefinition> {
        self.definitions.get(enemy_type)
    }

    /// Validate and store a definition, logging every correction.
    pub fn insert(&mut self, enemy_type: impl Into<String>, definition: EnemyDefinition) {
        let enemy_type = enemy_type.into();
        let (definition, fixes) = definition.sanitized();
        for fix in &fixes {
            warn!("Enemy definition '{}': {}", enemy_type, fix);
        }
        self.definitions.insert(enemy_type, definition);
    }

    pub fn register_builtin(&mut self) {
        self.insert("brute", EnemyDefinition::brute());
        self.insert("stalker", EnemyDefinition::stalker());
        self.insert("sentry", EnemyDefinition::sentry());
    }
}

/// Parse a single definition file.
pub fn parse_definition(path: &Path) -> Result<EnemyDefinition, DataLoadError> {
    let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
        path: path.display().to_string(),
        details: e.to_string(),
    })?;

    ron::from_str::<EnemyDefinition>(&contents).map_err(|e| DataLoadError::ParseError {
        path: path.display().to_string(),
        details: e.to_string(),
    })
}

/// Load every `.ron` definition in `dir`, keyed by file stem.
///
/// Files that fail to parse are logged and skipped; only a missing or
/// unreadable directory is an error.
pub fn load_definitions_from(dir: &Path) -> Result<Vec<(String, EnemyDefinition)>, DataLoadError> {
    if !dir.exists() {
        return Err(DataLoadError::DirectoryNotFound(dir.display().to_string()));
    }

    let entries = fs::read_dir(dir).map_err(|e| DataLoadError::ReadError {
        path: dir.display().to_string(),
        details: e.to_string(),
    })?;

    let mut loaded = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.extension().is_some_and(|ext| ext == "ron") {
            continue;
        }

        let enemy_type = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown")
            .to_string();

        match parse_definition(&path) {
            Ok(definition) => {
                info!("Loaded enemy definition: {} ({})", definition.name, enemy_type);
                loaded.push((enemy_type, definition));
            }
            Err(e) => error!("{}", e),
        }
    }

    Ok(loaded)
}

/// Fill the registry: built-in variants first, then files on disk override.
pub fn load_enemy_definitions(mut registry: ResMut<EnemyRegistry>) {
    registry.register_builtin();

    match load_definitions_from(Path::new(ENEMY_DATA_DIR)) {
        Ok(definitions) => {
            for (enemy_type, definition) in definitions {
                registry.insert(enemy_type, definition);
            }
        }
        Err(e) => warn!("Using built-in enemy definitions only: {}", e),
    }

    info!("Loaded {} enemy definitions", registry.definitions.len());
}
