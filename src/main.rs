//! Skirmish AI - Demo Arena
//!
//! Spawns one spawner per enemy variant plus a waypoint patroller, and a
//! scripted player that circles the arena, swings periodically and raises a
//! block now and then. Colliders are drawn by the rapier debug renderer.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use skirmish_ai::core::{GameState, PlayerAttackEvent, TickSet};
use skirmish_ai::enemies::{
    AggroPolicy, DisengageResponse, EnemyDefinition, EnemyRegistry, Spawner,
};
use skirmish_ai::player::{spawn_player, Player, PlayerState};

/// Radius of the scripted player's circuit.
const CIRCUIT_RADIUS: f32 = 5.0;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Skirmish AI".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))

        // Physics
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        .add_plugins(RapierDebugRenderPlugin::default())

        // Our plugin
        .add_plugins(skirmish_ai::SkirmishPlugin)

        .init_resource::<DemoScript>()
        .add_systems(OnEnter(GameState::InGame), setup_arena)
        .add_systems(
            Update,
            drive_player
                .before(TickSet::Sense)
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(OnEnter(GameState::GameOver), announce_game_over)
        .run();
}

/// Timers for the scripted player.
#[derive(Resource)]
struct DemoScript {
    elapsed: f32,
    swing: Timer,
    block: Timer,
}

impl Default for DemoScript {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            swing: Timer::from_seconds(1.2, TimerMode::Repeating),
            block: Timer::from_seconds(3.0, TimerMode::Repeating),
        }
    }
}

fn setup_arena(mut commands: Commands, mut registry: ResMut<EnemyRegistry>) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 18.0, 14.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Floor top sits at the capsule bottoms so ground probes hit it
    commands.spawn((
        Name::new("Floor"),
        Collider::cuboid(30.0, 0.1, 30.0),
        RigidBody::Fixed,
        Transform::from_xyz(0.0, -0.9, 0.0),
    ));

    spawn_player(&mut commands, Vec3::new(CIRCUIT_RADIUS, 0.0, 0.0));

    commands.spawn((
        Name::new("Brute Spawner"),
        Spawner::new("brute", 6.0),
        Transform::from_xyz(-8.0, 0.0, -8.0),
    ));
    commands.spawn((
        Name::new("Stalker Spawner"),
        Spawner::new("stalker", 8.0),
        Transform::from_xyz(8.0, 0.0, -8.0),
    ));
    commands.spawn((
        Name::new("Sentry Spawner"),
        Spawner::new("sentry", 10.0),
        Transform::from_xyz(0.0, 0.0, 10.0),
    ));

    // A sentry that stays ready while holding, so it walks its route
    registry.insert(
        "patroller",
        EnemyDefinition {
            name: "Patroller".to_string(),
            aggro_range: 6.0,
            aggro_policy: AggroPolicy::Banded,
            disengage_response: DisengageResponse::Idle,
            ..EnemyDefinition::sentry()
        },
    );
    commands.spawn((
        Name::new("Patroller Spawner"),
        Spawner::new("patroller", 12.0).with_waypoints(vec![
            Vec2::new(0.0, -10.0),
            Vec2::new(-8.0, -10.0),
        ]),
        Transform::from_xyz(8.0, 0.0, -10.0),
    ));

    info!("Arena ready");
}

/// Walk the player around the circuit, swinging and blocking on a script.
fn drive_player(
    time: Res<Time>,
    mut script: ResMut<DemoScript>,
    mut player_state: ResMut<PlayerState>,
    mut player_query: Query<(Entity, &mut Transform), With<Player>>,
    mut attack_events: EventWriter<PlayerAttackEvent>,
) {
    let Ok((entity, mut transform)) = player_query.get_single_mut() else {
        return;
    };

    script.elapsed += time.delta_secs();
    let angle = script.elapsed * 0.4;
    transform.translation.x = angle.cos() * CIRCUIT_RADIUS;
    transform.translation.z = angle.sin() * CIRCUIT_RADIUS;

    script.block.tick(time.delta());
    if script.block.just_finished() {
        player_state.blocking = !player_state.blocking;
    }

    script.swing.tick(time.delta());
    if script.swing.just_finished() && !player_state.blocking {
        attack_events.send(PlayerAttackEvent {
            attacker: entity,
            origin: transform.translation,
        });
    }
}

fn announce_game_over(player: Res<PlayerState>) {
    info!(
        "Game over: player fell with {}/{} health",
        player.health(),
        player.max_health()
    );
}
