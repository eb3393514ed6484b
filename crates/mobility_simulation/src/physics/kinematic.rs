//! Headless kinematic тело
//!
//! Архитектура:
//! - Velocity пишет контроллер персонажа (через `PhysicsBody`)
//! - Gravity интегрируем сами, только когда `gravity_enabled` (dash её выключает)
//! - Плоский пол на `ground_height` вместо коллизий
//!
//! Используется headless runner'ом и интеграционными тестами, где rapier не подключен.

use bevy::prelude::*;

use super::PhysicsBody;
use crate::components::CharacterInput;
use crate::controller::{CharacterController, CharacterTickSet};

/// Kinematic тело персонажа
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct KinematicBody {
    pub velocity: Vec3,
    /// Ускорение свободного падения (m/s²)
    pub gravity: f32,
    pub gravity_enabled: bool,
    /// Высота плоского пола
    pub ground_height: f32,
}

impl Default for KinematicBody {
    fn default() -> Self {
        Self {
            velocity: Vec3::ZERO,
            gravity: -9.81, // Earth gravity
            gravity_enabled: true,
            ground_height: 0.0,
        }
    }
}

impl KinematicBody {
    pub fn is_grounded(&self, transform: &Transform) -> bool {
        transform.translation.y <= self.ground_height
    }
}

/// Mutable view (тело + transform) для одного тика контроллера
pub struct KinematicBodyMut<'a> {
    pub body: &'a mut KinematicBody,
    pub transform: &'a mut Transform,
}

impl PhysicsBody for KinematicBodyMut<'_> {
    fn linear_velocity(&self) -> Vec3 {
        self.body.velocity
    }

    fn set_linear_velocity(&mut self, velocity: Vec3) {
        self.body.velocity = velocity;
    }

    fn set_gravity_enabled(&mut self, enabled: bool) {
        self.body.gravity_enabled = enabled;
    }

    fn orientation(&self) -> Quat {
        self.transform.rotation
    }

    fn set_orientation(&mut self, orientation: Quat) {
        self.transform.rotation = orientation;
    }
}

/// Система: gravity + velocity → translation + контакт с полом
///
/// Работает в FixedUpdate после тика контроллеров.
pub fn integrate_kinematic_bodies(
    mut query: Query<(&mut KinematicBody, &mut Transform)>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (mut body, mut transform) in query.iter_mut() {
        if body.gravity_enabled && !body.is_grounded(&transform) {
            body.velocity.y += body.gravity * delta;
        }

        transform.translation += body.velocity * delta;

        // Пол: не проваливаемся, гасим только падение
        if transform.translation.y < body.ground_height {
            transform.translation.y = body.ground_height;
            body.velocity.y = body.velocity.y.max(0.0);
        }
    }
}

/// Plugin для headless тел
pub struct KinematicBodyPlugin;

impl Plugin for KinematicBodyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            integrate_kinematic_bodies.after(CharacterTickSet),
        );
    }
}

/// Spawn helper: headless персонаж
///
/// Создает entity с полным набором компонентов:
/// - Transform
/// - KinematicBody
/// - CharacterController + CharacterInput
pub fn spawn_character(
    commands: &mut Commands,
    controller: CharacterController,
    position: Vec3,
) -> Entity {
    commands
        .spawn((
            Transform::from_translation(position),
            KinematicBody::default(),
            controller,
            CharacterInput::default(),
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_forwards_commands() {
        let mut body = KinematicBody::default();
        let mut transform = Transform::default();

        {
            let mut view = KinematicBodyMut {
                body: &mut body,
                transform: &mut transform,
            };
            view.set_linear_velocity(Vec3::new(1.0, 2.0, 3.0));
            view.set_gravity_enabled(false);
            view.set_orientation(Quat::from_rotation_y(1.0));
        }

        assert_eq!(body.velocity, Vec3::new(1.0, 2.0, 3.0));
        assert!(!body.gravity_enabled);
        assert!((transform.rotation.angle_between(Quat::from_rotation_y(1.0))).abs() < 1e-5);
    }

    #[test]
    fn test_default_forward_is_neg_z() {
        let mut body = KinematicBody::default();
        let mut transform = Transform::default();
        let view = KinematicBodyMut {
            body: &mut body,
            transform: &mut transform,
        };

        assert!((view.forward_direction() - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn test_gravity_logic_respects_flag() {
        let delta = 1.0 / 64.0; // 1 FixedUpdate tick
        let transform = Transform::from_xyz(0.0, 5.0, 0.0);

        let mut falling = KinematicBody::default();
        if falling.gravity_enabled && !falling.is_grounded(&transform) {
            falling.velocity.y += falling.gravity * delta;
        }
        assert!(falling.velocity.y < -0.15 && falling.velocity.y > -0.16);

        let mut dashing = KinematicBody {
            gravity_enabled: false,
            ..default()
        };
        if dashing.gravity_enabled && !dashing.is_grounded(&transform) {
            dashing.velocity.y += dashing.gravity * delta;
        }
        assert_eq!(dashing.velocity.y, 0.0);
    }
}
