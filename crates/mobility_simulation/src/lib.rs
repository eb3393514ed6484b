//! Mobility Simulation Core
//!
//! Per-tick логика одного персонажа на Bevy 0.16 ECS:
//! - movement профили (WheelChair / ProstheticLeg) → velocity/orientation
//! - stamina пул с асимметричными regen/drain
//! - dash (WheelChair) и sprint (ProstheticLeg), завязанные на stamina
//!
//! Физика, рендер, камера и опрос платформенного ввода — снаружи:
//! контроллер получает `InputSnapshot` и командует `PhysicsBody`.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod abilities;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod logger;
pub mod physics;

// Re-export базовых типов для удобства
pub use abilities::{DashAbility, DashPhase, DashTransition, ProfileAbility, SprintAbility};
pub use components::*;
pub use config::{CharacterConfig, CharacterTuning, MovementKind};
pub use controller::{
    CharacterController, CharacterControllerPlugin, CharacterTickSet, DashEnded, DashReady,
    DashStarted, SprintChanged, TickReport,
};
pub use error::ControllerError;
pub use logger::*;
pub use physics::{
    spawn_character, spawn_rapier_character, KinematicBody, KinematicBodyPlugin, PhysicsBody,
};

/// Частота simulation tick (Hz)
pub const TICK_RATE_HZ: f64 = 64.0;

/// Seed по умолчанию, если host не поставил свой DeterministicRng
pub const DEFAULT_SEED: u64 = 42;

/// Главный plugin симуляции (fixed timestep + контроллеры + headless физика)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Не перетираем seed, выставленный host'ом (create_headless_app)
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(DEFAULT_SEED));
        }

        app.insert_resource(Time::<Fixed>::from_hz(TICK_RATE_HZ))
            .add_plugins((CharacterControllerPlugin, KinematicBodyPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время продвигается вручную: один `app.update()` = ровно один FixedUpdate тик,
/// независимо от скорости машины.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(TICK_RATE_HZ))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / TICK_RATE_HZ,
        )))
        .add_plugins(SimulationPlugin);

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
