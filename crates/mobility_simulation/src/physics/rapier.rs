//! bevy_rapier3d адаптер
//!
//! Rapier интегрирует физику сам (RigidBody::Dynamic), контроллер лишь:
//! - пишет `Velocity::linvel`
//! - включает/выключает гравитацию через `GravityScale` (0.0 во время dash)
//! - поворачивает `Transform` (вращения тела залочены, rapier их не трогает)

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::PhysicsBody;
use crate::components::CharacterInput;
use crate::controller::CharacterController;

/// Штатный gravity scale тела (восстанавливается после dash)
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct BaseGravityScale(pub f32);

impl Default for BaseGravityScale {
    fn default() -> Self {
        Self(1.0)
    }
}

/// View над rapier компонентами одного персонажа
pub struct RapierBody<'a> {
    pub transform: &'a mut Transform,
    pub velocity: &'a mut Velocity,
    pub gravity_scale: &'a mut GravityScale,
    pub base_gravity_scale: f32,
}

impl PhysicsBody for RapierBody<'_> {
    fn linear_velocity(&self) -> Vec3 {
        self.velocity.linvel
    }

    fn set_linear_velocity(&mut self, velocity: Vec3) {
        self.velocity.linvel = velocity;
    }

    fn set_gravity_enabled(&mut self, enabled: bool) {
        self.gravity_scale.0 = if enabled { self.base_gravity_scale } else { 0.0 };
    }

    fn orientation(&self) -> Quat {
        self.transform.rotation
    }

    fn set_orientation(&mut self, orientation: Quat) {
        self.transform.rotation = orientation;
    }
}

/// Spawn helper: персонаж на rapier физике
///
/// - RigidBody::Dynamic + capsule (высота 1.0m + 2×0.4m радиус)
/// - LockedAxes::ROTATION_LOCKED: поворачивает только контроллер
pub fn spawn_rapier_character(
    commands: &mut Commands,
    controller: CharacterController,
    position: Vec3,
) -> Entity {
    commands
        .spawn((
            Transform::from_translation(position),
            controller,
            CharacterInput::default(),
            RigidBody::Dynamic,
            Collider::capsule_y(0.5, 0.4),
            LockedAxes::ROTATION_LOCKED,
            Velocity::default(),
            GravityScale(1.0),
            BaseGravityScale(1.0),
        ))
        .id()
}
