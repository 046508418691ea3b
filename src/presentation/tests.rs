use std::time::Duration;

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::components::*;
use super::profiles::command_for;
use super::systems::*;
use crate::core::{Cue, EnemyCue, HitEffectEvent, PlayerHitEvent};
use crate::enemies::Facing;
use crate::player::Player;

fn setup_presentation_test_app() -> App {
    let mut app = App::new();
    app.add_plugins(bevy::time::TimePlugin::default());
    app.add_event::<EnemyCue>();
    app.add_event::<PlayerHitEvent>();
    app.add_event::<HitEffectEvent>();
    app
}

#[test]
fn test_loop_states_differ_per_rig() {
    assert_eq!(
        command_for(AnimRig::HeroKnight, Cue::Run),
        AnimatorCommand::SetInt("AnimState", 1)
    );
    assert_eq!(
        command_for(AnimRig::HeroKnight, Cue::Idle),
        AnimatorCommand::SetInt("AnimState", 0)
    );
    assert_eq!(
        command_for(AnimRig::TopDown, Cue::Run),
        AnimatorCommand::SetInt("AnimState", 2)
    );
    assert_eq!(
        command_for(AnimRig::TopDown, Cue::Idle),
        AnimatorCommand::SetInt("AnimState", 1)
    );
}

#[test]
fn test_attack_trigger_names() {
    assert_eq!(
        command_for(AnimRig::HeroKnight, Cue::Attack(Some(2))),
        AnimatorCommand::Trigger("Attack2")
    );
    assert_eq!(
        command_for(AnimRig::TopDown, Cue::Attack(None)),
        AnimatorCommand::Trigger("Attack")
    );
    assert_eq!(
        command_for(AnimRig::HeroKnight, Cue::NoBlood(true)),
        AnimatorCommand::SetBool("noBlood", true)
    );
}

#[test]
fn test_topdown_rig_flips_the_other_way() {
    assert!(sprite_flip(AnimRig::HeroKnight, Facing::Left));
    assert!(!sprite_flip(AnimRig::HeroKnight, Facing::Right));
    assert!(!sprite_flip(AnimRig::TopDown, Facing::Left));
    assert!(sprite_flip(AnimRig::TopDown, Facing::Right));
}

#[test]
fn test_consume_keeps_last_trigger() {
    let mut animator = Animator::new(AnimRig::HeroKnight);
    animator.apply(AnimatorCommand::Trigger("Hurt"));
    animator.apply(AnimatorCommand::Trigger("Death"));

    assert_eq!(animator.pending_triggers(), &["Hurt", "Death"]);
    assert_eq!(animator.consume_triggers(), 2);
    assert_eq!(animator.last_trigger, Some("Death"));
    assert!(animator.pending_triggers().is_empty());
}

#[test]
fn test_enemy_cues_reach_animator() {
    let mut app = setup_presentation_test_app();
    let enemy = app.world_mut().spawn(Animator::new(AnimRig::TopDown)).id();

    app.world_mut().send_event(EnemyCue {
        entity: enemy,
        cue: Cue::Run,
    });
    app.world_mut().send_event(EnemyCue {
        entity: enemy,
        cue: Cue::Attack(None),
    });
    let _ = app.world_mut().run_system_once(apply_enemy_cues);

    let animator = app.world().get::<Animator>(enemy).unwrap();
    assert_eq!(animator.int("AnimState"), Some(2));
    assert_eq!(animator.pending_triggers(), &["Attack"]);
}

#[test]
fn test_fatal_player_hit_plays_death() {
    let mut app = setup_presentation_test_app();
    let player = app
        .world_mut()
        .spawn((Player, Animator::new(AnimRig::HeroKnight)))
        .id();

    app.world_mut().send_event(PlayerHitEvent { fatal: true });
    let _ = app.world_mut().run_system_once(play_player_hit);

    let animator = app.world().get::<Animator>(player).unwrap();
    assert_eq!(animator.pending_triggers(), &["Death"]);
}

#[test]
fn test_hit_marker_expires() {
    let mut app = setup_presentation_test_app();

    app.world_mut().send_event(HitEffectEvent {
        position: Vec3::new(1.0, 0.0, 2.0),
    });
    let _ = app.world_mut().run_system_once(spawn_hit_markers);

    let mut markers = app.world_mut().query::<&HitMarker>();
    assert_eq!(markers.iter(app.world()).count(), 1);

    {
        let mut time = app.world_mut().get_resource_mut::<Time>().unwrap();
        time.advance_by(Duration::from_secs_f32(HIT_MARKER_SECS + 0.1));
    }
    let _ = app.world_mut().run_system_once(expire_hit_markers);

    let mut markers = app.world_mut().query::<&HitMarker>();
    assert_eq!(markers.iter(app.world()).count(), 0);
}
