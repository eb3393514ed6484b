//! Headless симуляция
//!
//! Спавнит WheelChair и ProstheticLeg персонажей, гоняет их на синтетическом
//! вводе (seeded RNG) и печатает телеметрию stamina/dash/sprint.
//!
//! Опционально: путь к RON конфигу WheelChair персонажа первым аргументом.

use bevy::prelude::*;
use rand::Rng;
use mobility_simulation::*;

const TICKS: u32 = 640; // 10 sec при 64Hz

/// Система: синтетический ввод (вместо платформенного опроса)
///
/// Раз в ~секунду меняем направление, изредка жмём dash, спринт держим половину времени.
fn drive_synthetic_input(
    mut rng: ResMut<DeterministicRng>,
    mut query: Query<&mut CharacterInput>,
) {
    for mut input in query.iter_mut() {
        if rng.rng.gen_bool(1.0 / 64.0) {
            let forward = rng.rng.gen_range(-1.0..=1.0);
            let right = rng.rng.gen_range(-1.0..=1.0);
            input.set_axes(forward, right);
        }
        if rng.rng.gen_bool(1.0 / 96.0) {
            input.press_dash();
        }
        if rng.rng.gen_bool(1.0 / 128.0) {
            let held = !input.snapshot.sprint_held;
            input.set_sprint(held);
        }
    }
}

fn load_wheel_chair() -> CharacterController {
    let Some(path) = std::env::args().nth(1) else {
        return CharacterController::new(MovementKind::WheelChair, CharacterTuning::default());
    };

    match CharacterConfig::load(&path).and_then(|config| CharacterController::from_config(&config)) {
        Ok(controller) => {
            log_info(&format!("Loaded character config from {}", path));
            controller
        }
        Err(err) => {
            log_error(&format!("Failed to load {}: {}, using defaults", path, err));
            CharacterController::new(MovementKind::WheelChair, CharacterTuning::default())
        }
    }
}

fn main() {
    let seed = DEFAULT_SEED;
    let mut app = create_headless_app(seed);
    set_log_level(LogLevel::Info);
    log_info(&format!("Starting mobility headless simulation (seed: {})", seed));

    app.add_systems(FixedUpdate, drive_synthetic_input.before(CharacterTickSet));

    let wheel_chair = spawn_character(
        &mut app.world_mut().commands(),
        load_wheel_chair(),
        Vec3::ZERO,
    );
    let prosthetic_leg = spawn_character(
        &mut app.world_mut().commands(),
        CharacterController::new(MovementKind::ProstheticLeg, CharacterTuning::default()),
        Vec3::new(5.0, 0.0, 0.0),
    );
    app.world_mut().flush();

    for tick in 0..TICKS {
        app.update();

        if tick % 64 == 0 {
            let world = app.world();
            for (label, entity) in [("wheel_chair", wheel_chair), ("prosthetic_leg", prosthetic_leg)] {
                let (Some(controller), Some(transform)) =
                    (world.get::<CharacterController>(entity), world.get::<Transform>(entity))
                else {
                    continue;
                };

                log_info(&format!(
                    "Tick {}: {} pos={:.2?} stamina={:.1} dashing={} sprinting={}",
                    tick,
                    label,
                    transform.translation,
                    controller.stamina_value(),
                    controller.is_dashing(),
                    controller.is_sprinting(),
                ));
            }
        }
    }

    log_info("Simulation complete!");
}
