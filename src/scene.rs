//! Scene composition and the host-facing API.
//!
//! [`Showroom`] wires every animator into one per-frame update pass over a
//! bevy_ecs world. Construction validates the configuration, spawns the
//! scene (cars, door, particles, rings, floor, grid) from the descriptor
//! list, and registers the pointer router plus selection observer. The host
//! render loop calls [`Showroom::tick`] once per frame and forwards
//! hit-tested pointer events through the `pointer_*` entry points.
//!
//! Frame order: clock first; the pointer router runs before the car hover
//! animator so a hover flag written this frame is reacted to this frame; the
//! attach pass runs last so panels, wheels, and lights follow the transforms
//! written by the door and hover animators.

use bevy_ecs::message::Messages;
use bevy_ecs::prelude::*;
use glam::Vec3;
use log::{debug, warn};

use crate::components::attachedto::AttachedTo;
use crate::components::displayobject::DisplayObject;
use crate::components::door::Door;
use crate::components::hover::{HoverMotion, Hoverable};
use crate::components::material::Material;
use crate::components::particle::Particle;
use crate::components::pointlight::{Headlight, PointLight, Underlight};
use crate::components::position::Position;
use crate::components::ring::Ring;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::texturescroll::{GridOverlay, TextureScroll};
use crate::components::wheel::Wheel;
use crate::config::{CarDescriptor, ConfigError, ShowroomConfig};
use crate::events::pointer::PointerInput;
use crate::events::select::selection_outbox_observer;
use crate::resources::clock::SceneClock;
use crate::resources::cursor::PointerCursor;
use crate::resources::effects::{EffectKind, EffectToggles};
use crate::resources::registry::NodeRegistry;
use crate::resources::rng::SceneRng;
use crate::resources::selection::SelectionOutbox;
use crate::systems::attach::attach_system;
use crate::systems::carhover::{car_hover_system, car_light_system};
use crate::systems::door::door_system;
use crate::systems::hover::{pointer_router_system, pump_pointer_messages};
use crate::systems::particles::{particle_system, sample_velocity};
use crate::systems::rings::ring_system;
use crate::systems::texturescroll::texture_scroll_system;
use crate::systems::time::advance_clock;
use crate::systems::wheels::wheel_spin_system;

/// Body color used when a descriptor's `base_color` does not parse.
const FALLBACK_BODY_COLOR: Vec3 = Vec3::new(0.5, 0.5, 0.5);

/// Wheel roles on every car, in registry-role order.
const WHEEL_ROLES: [(&str, Vec3); 4] = [
    ("wheel_front_left", Vec3::new(-0.35, 0.08, 0.55)),
    ("wheel_front_right", Vec3::new(0.35, 0.08, 0.55)),
    ("wheel_rear_left", Vec3::new(-0.35, 0.08, -0.55)),
    ("wheel_rear_right", Vec3::new(0.35, 0.08, -0.55)),
];

/// Parse a `#RRGGBB` hex color into linear-ish RGB in `[0, 1]`.
pub fn parse_hex_color(text: &str) -> Option<Vec3> {
    let hex = text.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Vec3::new(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
    ))
}

/// The composed scene: ECS world, per-frame schedule, and the handles the
/// host entry points need.
pub struct Showroom {
    world: World,
    schedule: Schedule,
    door: Entity,
}

impl Showroom {
    /// Build the scene from a validated configuration and an ordered list of
    /// display-object descriptors.
    ///
    /// `seed` pins the particle RNG for reproducible runs; `None` seeds from
    /// entropy.
    pub fn new(
        config: ShowroomConfig,
        descriptors: &[CarDescriptor],
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        world.insert_resource(SceneClock::default().with_max_delta(config.max_delta));
        world.insert_resource(SceneRng::new(seed));
        world.insert_resource(EffectToggles::default());
        world.insert_resource(PointerCursor::default());
        world.insert_resource(SelectionOutbox::default());
        world.insert_resource(NodeRegistry::default());
        world.init_resource::<Messages<PointerInput>>();
        world.insert_resource(config);

        world.add_observer(selection_outbox_observer);
        world.flush();

        spawn_cars(&mut world, &config, descriptors);
        let door = spawn_door(&mut world, &config);
        spawn_particles(&mut world, &config);
        spawn_rings(&mut world, &config);
        spawn_surfaces(&mut world, &config);
        world.flush();

        let mut schedule = Schedule::default();
        schedule.add_systems((pointer_router_system, pump_pointer_messages).chain());
        schedule.add_systems(door_system);
        schedule.add_systems(particle_system);
        schedule.add_systems(ring_system);
        schedule.add_systems(texture_scroll_system);
        schedule.add_systems(wheel_spin_system);
        schedule.add_systems(car_hover_system.after(pointer_router_system));
        schedule.add_systems(car_light_system.after(pointer_router_system));
        // Attach last: children follow this frame's door/hover writes.
        schedule.add_systems(
            attach_system
                .after(door_system)
                .after(car_hover_system),
        );

        Ok(Self {
            world,
            schedule,
            door,
        })
    }

    /// Advance the scene by one frame. `dt` is the raw frame delta in
    /// seconds; the clock clamps it.
    pub fn tick(&mut self, dt: f32) {
        advance_clock(&mut self.world, dt);
        self.schedule.run(&mut self.world);
        self.world.clear_trackers();
    }

    /// Seconds of scene time accumulated so far.
    pub fn elapsed(&self) -> f32 {
        self.world.resource::<SceneClock>().elapsed
    }

    // ----- door commands -----

    pub fn toggle_door(&mut self) {
        if let Some(mut door) = self.world.get_mut::<Door>(self.door) {
            door.toggle();
            debug!("door toggled, open = {}", door.is_open);
        }
    }

    pub fn set_door_open(&mut self, open: bool) {
        if let Some(mut door) = self.world.get_mut::<Door>(self.door) {
            door.set_open(open);
        }
    }

    /// Present vertical offset of the door root.
    pub fn door_height(&self) -> f32 {
        self.world
            .get::<Door>(self.door)
            .map(|d| d.current_y)
            .unwrap_or(0.0)
    }

    // ----- effect toggles -----

    /// Show or hide an effect layer without resetting its internal state.
    pub fn set_effect_visible(&mut self, kind: EffectKind, visible: bool) {
        self.world
            .resource_mut::<EffectToggles>()
            .set(kind, visible);
    }

    pub fn effect_visible(&self, kind: EffectKind) -> bool {
        self.world.resource::<EffectToggles>().is_visible(kind)
    }

    // ----- pointer entry points -----

    /// Deliver a hit-tested pointer-enter for the object with this id.
    /// Returns false if the id names no display object.
    pub fn pointer_enter(&mut self, id: &str) -> bool {
        self.send_pointer(id, PointerInput::Enter)
    }

    pub fn pointer_exit(&mut self, id: &str) -> bool {
        self.send_pointer(id, PointerInput::Exit)
    }

    pub fn pointer_click(&mut self, id: &str) -> bool {
        self.send_pointer(id, PointerInput::Click)
    }

    /// The pointer left the rendering surface; all hover state resets on the
    /// next tick.
    pub fn pointer_lost(&mut self) {
        self.world
            .resource_mut::<Messages<PointerInput>>()
            .write(PointerInput::SurfaceLeft);
    }

    fn send_pointer(&mut self, id: &str, make: fn(Entity) -> PointerInput) -> bool {
        let Some(entity) = self.world.resource::<NodeRegistry>().get(id) else {
            warn!("pointer event for unknown display object '{id}'");
            return false;
        };
        self.world
            .resource_mut::<Messages<PointerInput>>()
            .write(make(entity));
        true
    }

    // ----- host queries -----

    /// Drain the ids selected since the last call, in click order.
    pub fn take_selected(&mut self) -> Vec<String> {
        self.world.resource_mut::<SelectionOutbox>().drain()
    }

    pub fn is_hovered(&self, id: &str) -> bool {
        self.world
            .resource::<NodeRegistry>()
            .get(id)
            .and_then(|entity| self.world.get::<Hoverable>(entity))
            .map(|h| h.hovered)
            .unwrap_or(false)
    }

    /// Whether the host shell should show a pointer-style cursor.
    pub fn cursor_is_pointer(&self) -> bool {
        self.world.resource::<PointerCursor>().pointer
    }

    /// Look up a named scene node by its registry role.
    pub fn node(&self, role: &str) -> Option<Entity> {
        self.world.resource::<NodeRegistry>().get(role)
    }

    /// Read access to the scene world, for observers and inspection.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

fn spawn_cars(world: &mut World, config: &ShowroomConfig, descriptors: &[CarDescriptor]) {
    let count = descriptors.len();
    for (i, descriptor) in descriptors.iter().enumerate() {
        let body_color = match parse_hex_color(&descriptor.base_color) {
            Some(color) => color,
            None => {
                // Non-fatal: degrade to the default body color.
                warn!(
                    "display object '{}' has invalid base color '{}', using fallback",
                    descriptor.id, descriptor.base_color
                );
                FALLBACK_BODY_COLOR
            }
        };

        // Cars sit on a line along x, centered on the origin.
        let x = (i as f32 - (count as f32 - 1.0) / 2.0) * config.car_spacing;

        let car = world
            .spawn((
                DisplayObject::new(&descriptor.id, &descriptor.label),
                Position::new(x, 0.0, 0.0),
                Rotation::default(),
                Scale::default(),
                Material::car_paint(body_color),
                Hoverable::default(),
                HoverMotion::new(&config.hover, 0.0),
            ))
            .id();
        world
            .resource_mut::<NodeRegistry>()
            .register(descriptor.id.clone(), car);

        for (role, offset) in WHEEL_ROLES {
            let wheel = world
                .spawn((
                    Wheel {
                        spin_rate: config.hover.wheel_spin_rate,
                    },
                    Position::new(x + offset.x, offset.y, offset.z),
                    Rotation::default(),
                    AttachedTo::new(car).with_offset(offset),
                ))
                .id();
            world
                .resource_mut::<NodeRegistry>()
                .register(format!("{}/{}", descriptor.id, role), wheel);
        }

        for (role, offset) in [
            ("headlight_left", Vec3::new(-0.3, 0.2, 0.5)),
            ("headlight_right", Vec3::new(0.3, 0.2, 0.5)),
        ] {
            let light = world
                .spawn((
                    Headlight,
                    PointLight::new(
                        Vec3::ONE,
                        config.hover.headlight_intensity,
                        config.hover.headlight_distance,
                        config.hover.headlight_decay,
                    )
                    .disabled(),
                    Position::new(x + offset.x, offset.y, offset.z),
                    AttachedTo::new(car).with_offset(offset),
                ))
                .id();
            world
                .resource_mut::<NodeRegistry>()
                .register(format!("{}/{}", descriptor.id, role), light);
        }

        let under_offset = Vec3::new(0.0, -0.1, 0.0);
        let underlight = world
            .spawn((
                Underlight {
                    idle_intensity: config.hover.underlight_idle,
                    active_intensity: config.hover.underlight_active,
                },
                PointLight::new(body_color, config.hover.underlight_idle, 6.0, 2.0),
                Position::new(x, under_offset.y, 0.0),
                AttachedTo::new(car).with_offset(under_offset),
            ))
            .id();
        world
            .resource_mut::<NodeRegistry>()
            .register(format!("{}/underlight", descriptor.id), underlight);
    }
}

fn spawn_door(world: &mut World, config: &ShowroomConfig) -> Entity {
    let root_z = -10.0;
    let door = world
        .spawn((
            Door::new(&config.door),
            Position::new(0.0, 0.0, root_z),
        ))
        .id();
    world.resource_mut::<NodeRegistry>().register("door", door);

    // Horizontal slats; they ride the root's vertical offset rigidly.
    for i in 0..4 {
        let offset = Vec3::new(0.0, 0.5 + i as f32 * 0.6, 0.0);
        let panel = world
            .spawn((
                Position::new(0.0, offset.y, root_z),
                AttachedTo::new(door).with_offset(offset),
            ))
            .id();
        world
            .resource_mut::<NodeRegistry>()
            .register(format!("door/panel_{i}"), panel);
    }
    door
}

/// Particle tints cycle white / gold / sky blue by index.
fn particle_color(index: usize) -> Vec3 {
    match index % 3 {
        0 => Vec3::new(1.0, 1.0, 1.0),
        1 => Vec3::new(1.0, 0.843, 0.0),
        _ => Vec3::new(0.529, 0.808, 0.922),
    }
}

fn spawn_particles(world: &mut World, config: &ShowroomConfig) {
    let pc = config.particles;
    for i in 0..pc.count {
        let (position, velocity, size) = {
            let mut rng = world.resource_mut::<SceneRng>();
            let half = pc.footprint * 0.5;
            let position = Vec3::new(
                rng.f32_range(-half, half),
                rng.f32_range(pc.spawn_y_min, pc.spawn_y_max),
                rng.f32_range(-half, half),
            );
            let velocity = sample_velocity(&mut rng, &pc);
            let size = rng.f32_range(pc.size_min, pc.size_max);
            (position, velocity, size)
        };
        world.spawn((
            Particle::new(velocity),
            Position { pos: position },
            Rotation::default(),
            Scale::uniform(size),
            Material::matte(particle_color(i)),
        ));
    }
}

fn spawn_rings(world: &mut World, config: &ShowroomConfig) {
    for index in 0..config.rings.count {
        world.spawn((
            Ring { index },
            Position::default(),
            Scale::uniform(config.rings.radius),
            Material::matte(Vec3::ZERO),
        ));
    }
}

fn spawn_surfaces(world: &mut World, config: &ShowroomConfig) {
    let floor = world
        .spawn((
            TextureScroll::new(config.scroll.floor_speed),
            Position::new(0.0, -0.01, 0.0),
        ))
        .id();
    world.resource_mut::<NodeRegistry>().register("floor", floor);

    let grid = world
        .spawn((
            TextureScroll::new(config.scroll.grid_speed),
            GridOverlay,
            Position::new(0.0, 0.5, 0.0),
        ))
        .id();
    world.resource_mut::<NodeRegistry>().register("grid", grid);
}
