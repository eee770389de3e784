//! End-to-end tests driving a full [`Showroom`] through its public API,
//! frame by frame, the way a host render loop would.

use glam::Vec3;

use showroom::components::hover::HoverMotion;
use showroom::components::material::Material;
use showroom::components::particle::Particle;
use showroom::components::pointlight::{Headlight, PointLight};
use showroom::components::position::Position;
use showroom::components::ring::Ring;
use showroom::components::rotation::Rotation;
use showroom::components::texturescroll::{GridOverlay, TextureScroll};
use showroom::config::{CarDescriptor, ShowroomConfig};
use showroom::{EffectKind, Showroom};

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn descriptors() -> Vec<CarDescriptor> {
    vec![
        CarDescriptor {
            id: "car1".into(),
            label: "To-Do App".into(),
            base_color: "#FF6B6B".into(),
        },
        CarDescriptor {
            id: "car2".into(),
            label: "E-Commerce Platform".into(),
            base_color: "#4ECDC4".into(),
        },
        CarDescriptor {
            id: "car3".into(),
            label: "Weather Dashboard".into(),
            base_color: "#45B7D1".into(),
        },
    ]
}

/// Showroom with the frame clamp lifted to `max_delta` so tests can tick in
/// large, exact steps.
fn make_showroom(max_delta: f32, seed: u64) -> Showroom {
    let config = ShowroomConfig {
        max_delta,
        ..ShowroomConfig::default()
    };
    Showroom::new(config, &descriptors(), Some(seed)).unwrap()
}

#[test]
fn door_opens_within_fifty_ticks_and_snaps_exactly() {
    let mut showroom = make_showroom(0.1, 1);
    showroom.toggle_door();

    let mut prev = showroom.door_height();
    let mut converged_at = None;
    for tick in 1..=50 {
        showroom.tick(0.1);
        let h = showroom.door_height();
        assert!(h >= prev - EPSILON, "door must rise monotonically");
        assert!(h <= 6.5 + EPSILON, "door must not overshoot");
        prev = h;
        if (h - 6.5).abs() < 0.01 {
            converged_at = Some(tick);
            break;
        }
    }
    assert!(converged_at.is_some(), "door did not converge in 50 ticks");

    // Once within epsilon it holds the target exactly.
    showroom.tick(0.1);
    assert_eq!(showroom.door_height(), 6.5);
}

#[test]
fn door_closes_back_to_exact_zero() {
    let mut showroom = make_showroom(0.1, 1);
    showroom.set_door_open(true);
    for _ in 0..50 {
        showroom.tick(0.1);
    }
    assert_eq!(showroom.door_height(), 6.5);

    showroom.set_door_open(false);
    for _ in 0..50 {
        showroom.tick(0.1);
    }
    assert_eq!(showroom.door_height(), 0.0);
}

#[test]
fn door_panels_ride_the_root() {
    let mut showroom = make_showroom(0.1, 1);
    let panel = showroom.node("door/panel_0").unwrap();
    let rest_y = showroom.world().get::<Position>(panel).unwrap().pos.y;

    showroom.set_door_open(true);
    for _ in 0..50 {
        showroom.tick(0.1);
    }
    let open_y = showroom.world().get::<Position>(panel).unwrap().pos.y;
    assert!(approx_eq(open_y, rest_y + 6.5));
}

#[test]
fn clock_clamps_stalled_frames() {
    let mut showroom = make_showroom(1.0 / 15.0, 1);
    showroom.tick(10.0);
    assert!(approx_eq(showroom.elapsed(), 1.0 / 15.0));
    showroom.tick(-5.0);
    assert!(approx_eq(showroom.elapsed(), 1.0 / 15.0));
}

#[test]
fn enter_sets_hover_and_cursor() {
    let mut showroom = make_showroom(0.1, 1);
    assert!(!showroom.is_hovered("car1"));
    assert!(!showroom.cursor_is_pointer());

    assert!(showroom.pointer_enter("car1"));
    showroom.tick(0.016);
    assert!(showroom.is_hovered("car1"));
    assert!(showroom.cursor_is_pointer());

    assert!(showroom.pointer_exit("car1"));
    showroom.tick(0.016);
    assert!(!showroom.is_hovered("car1"));
    assert!(!showroom.cursor_is_pointer());
}

#[test]
fn enter_without_exit_moves_the_hover_flag() {
    // A missed Exit must not leave a stale flag behind.
    let mut showroom = make_showroom(0.1, 1);
    showroom.pointer_enter("car1");
    showroom.tick(0.016);
    assert!(showroom.is_hovered("car1"));

    showroom.pointer_enter("car2");
    showroom.tick(0.016);
    assert!(!showroom.is_hovered("car1"));
    assert!(showroom.is_hovered("car2"));
}

#[test]
fn surface_leave_clears_everything() {
    let mut showroom = make_showroom(0.1, 1);
    showroom.pointer_enter("car3");
    showroom.tick(0.016);
    assert!(showroom.is_hovered("car3"));

    showroom.pointer_lost();
    showroom.tick(0.016);
    assert!(!showroom.is_hovered("car1"));
    assert!(!showroom.is_hovered("car2"));
    assert!(!showroom.is_hovered("car3"));
    assert!(!showroom.cursor_is_pointer());
}

#[test]
fn click_selects_regardless_of_hover() {
    let mut showroom = make_showroom(0.1, 1);
    showroom.pointer_enter("car2");
    showroom.tick(0.016);

    // Click a different car than the hovered one.
    showroom.pointer_click("car1");
    showroom.tick(0.016);

    assert_eq!(showroom.take_selected(), vec!["car1".to_string()]);
    assert!(showroom.take_selected().is_empty(), "outbox drains once");
    assert!(showroom.is_hovered("car2"), "click must not disturb hover");
}

#[test]
fn unknown_id_is_rejected() {
    let mut showroom = make_showroom(0.1, 1);
    assert!(!showroom.pointer_enter("truck9"));
    assert!(!showroom.pointer_click("truck9"));
    showroom.tick(0.016);
    assert!(showroom.take_selected().is_empty());
}

#[test]
fn hovered_car_bounces_within_range_and_snaps_back() {
    let mut showroom = make_showroom(0.1, 1);
    let car = showroom.node("car1").unwrap();
    let motion = *showroom.world().get::<HoverMotion>(car).unwrap();

    showroom.pointer_enter("car1");
    for _ in 0..120 {
        showroom.tick(0.016);
        let pos = showroom.world().get::<Position>(car).unwrap();
        let offset = pos.pos.y - motion.rest_y;
        assert!(offset >= -EPSILON);
        assert!(offset <= 2.0 * motion.bounce_amp + EPSILON);
        let rot = showroom.world().get::<Rotation>(car).unwrap();
        assert!(rot.euler.y.abs() <= motion.wobble_amp + EPSILON);
    }

    showroom.pointer_exit("car1");
    showroom.tick(0.016);
    let pos = showroom.world().get::<Position>(car).unwrap();
    let rot = showroom.world().get::<Rotation>(car).unwrap();
    assert_eq!(pos.pos.y, motion.rest_y);
    assert_eq!(rot.euler.y, 0.0);
}

#[test]
fn headlights_follow_the_hover_flag() {
    let mut showroom = make_showroom(0.1, 1);
    let light = showroom.node("car1/headlight_left").unwrap();
    assert!(!showroom.world().get::<PointLight>(light).unwrap().enabled);

    showroom.pointer_enter("car1");
    showroom.tick(0.016);
    assert!(showroom.world().get::<PointLight>(light).unwrap().enabled);

    showroom.pointer_lost();
    showroom.tick(0.016);
    assert!(!showroom.world().get::<PointLight>(light).unwrap().enabled);
}

#[test]
fn wheels_ride_the_bounce() {
    let mut showroom = make_showroom(0.1, 1);
    let car = showroom.node("car1").unwrap();
    let wheel = showroom.node("car1/wheel_front_left").unwrap();
    let offset_y = {
        let car_y = showroom.world().get::<Position>(car).unwrap().pos.y;
        let wheel_y = showroom.world().get::<Position>(wheel).unwrap().pos.y;
        wheel_y - car_y
    };

    showroom.pointer_enter("car1");
    for _ in 0..30 {
        showroom.tick(0.016);
        let car_y = showroom.world().get::<Position>(car).unwrap().pos.y;
        let wheel_y = showroom.world().get::<Position>(wheel).unwrap().pos.y;
        assert!(approx_eq(wheel_y - car_y, offset_y));
    }
}

#[test]
fn particles_stay_below_the_ceiling() {
    let mut showroom = make_showroom(1.0, 42);
    let ceiling = ShowroomConfig::default().particles.ceiling;

    // 400 one-second ticks: even the slowest riser crosses the ceiling and
    // gets recycled at least once.
    for _ in 0..400 {
        showroom.tick(1.0);
        let world = showroom.world_mut();
        let mut query = world.query::<(&Particle, &Position)>();
        for (_, position) in query.iter(world) {
            assert!(position.pos.y <= ceiling + EPSILON);
            assert!(position.pos.y >= 0.0);
        }
    }

    let world = showroom.world_mut();
    let mut query = world.query::<&Particle>();
    for particle in query.iter(world) {
        assert!(particle.age < 400.0, "every particle recycled at least once");
    }
}

#[test]
fn hiding_particles_freezes_their_state() {
    let mut showroom = make_showroom(0.1, 7);
    showroom.tick(0.1);

    showroom.set_effect_visible(EffectKind::Particles, false);
    let before: Vec<Vec3> = {
        let world = showroom.world_mut();
        let mut query = world.query::<(&Particle, &Position)>();
        query.iter(world).map(|(_, p)| p.pos).collect()
    };

    for _ in 0..10 {
        showroom.tick(0.1);
    }
    let frozen: Vec<Vec3> = {
        let world = showroom.world_mut();
        let mut query = world.query::<(&Particle, &Position)>();
        query.iter(world).map(|(_, p)| p.pos).collect()
    };
    assert_eq!(before, frozen);

    showroom.set_effect_visible(EffectKind::Particles, true);
    showroom.tick(0.1);
    let resumed: Vec<Vec3> = {
        let world = showroom.world_mut();
        let mut query = world.query::<(&Particle, &Position)>();
        query.iter(world).map(|(_, p)| p.pos).collect()
    };
    assert_ne!(frozen, resumed, "particles resume from the preserved state");
}

#[test]
fn seeded_runs_produce_identical_particles() {
    let mut a = make_showroom(1.0, 99);
    let mut b = make_showroom(1.0, 99);
    for _ in 0..300 {
        a.tick(1.0);
        b.tick(1.0);
    }

    let collect = |s: &mut Showroom| -> Vec<(u32, u32, u32)> {
        let world = s.world_mut();
        let mut query = world.query::<(&Particle, &Position)>();
        query
            .iter(world)
            .map(|(_, p)| (p.pos.x.to_bits(), p.pos.y.to_bits(), p.pos.z.to_bits()))
            .collect()
    };
    assert_eq!(collect(&mut a), collect(&mut b));
}

#[test]
fn ring_intensity_stays_in_configured_bounds() {
    let mut showroom = make_showroom(0.1, 1);
    let max = ShowroomConfig::default().rings.intensity;
    for _ in 0..200 {
        showroom.tick(0.1);
        let world = showroom.world_mut();
        let mut query = world.query::<(&Ring, &Material)>();
        for (_, material) in query.iter(world) {
            assert!(material.emissive_intensity >= 0.0);
            assert!(material.emissive_intensity <= max + EPSILON);
        }
    }
}

#[test]
fn hidden_grid_keeps_its_scroll_phase() {
    let mut showroom = make_showroom(0.1, 1);
    for _ in 0..5 {
        showroom.tick(0.1);
    }
    let grid = showroom.node("grid").unwrap();
    let floor = showroom.node("floor").unwrap();
    let grid_phase = showroom.world().get::<TextureScroll>(grid).unwrap().offset;
    assert!(showroom.world().get::<GridOverlay>(grid).is_some());

    showroom.set_effect_visible(EffectKind::Grid, false);
    let floor_before = showroom.world().get::<TextureScroll>(floor).unwrap().offset;
    for _ in 0..5 {
        showroom.tick(0.1);
    }
    assert_eq!(
        showroom.world().get::<TextureScroll>(grid).unwrap().offset,
        grid_phase
    );
    // The floor is not gated by the grid toggle.
    assert_ne!(
        showroom.world().get::<TextureScroll>(floor).unwrap().offset,
        floor_before
    );
}

#[test]
fn scroll_offsets_stay_in_unit_range() {
    let mut showroom = make_showroom(0.1, 1);
    let floor = showroom.node("floor").unwrap();
    for _ in 0..500 {
        showroom.tick(0.1);
        let offset = showroom.world().get::<TextureScroll>(floor).unwrap().offset;
        assert!((0.0..1.0).contains(&offset.x));
        assert!((0.0..1.0).contains(&offset.y));
    }
}

#[test]
fn registry_names_every_scene_node() {
    let showroom = make_showroom(0.1, 1);
    for id in ["car1", "car2", "car3"] {
        assert!(showroom.node(id).is_some());
        for role in [
            "wheel_front_left",
            "wheel_front_right",
            "wheel_rear_left",
            "wheel_rear_right",
            "headlight_left",
            "headlight_right",
            "underlight",
        ] {
            assert!(
                showroom.node(&format!("{id}/{role}")).is_some(),
                "missing {id}/{role}"
            );
        }
    }
    assert!(showroom.node("door").is_some());
    assert!(showroom.node("floor").is_some());
    assert!(showroom.node("grid").is_some());
}

#[test]
fn headlight_query_shape_matches_spawn() {
    // Each car spawns exactly two headlights.
    let mut showroom = make_showroom(0.1, 1);
    let world = showroom.world_mut();
    let mut query = world.query::<(&Headlight, &PointLight)>();
    assert_eq!(query.iter(world).count(), 6);
}

#[test]
fn invalid_color_falls_back_instead_of_failing() {
    let mut list = descriptors();
    list[0].base_color = "not-a-color".into();
    let showroom = Showroom::new(ShowroomConfig::default(), &list, Some(1));
    assert!(showroom.is_ok());
}
