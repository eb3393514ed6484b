//! Physics seam
//!
//! Контроллер не интегрирует физику сам — он только отдаёт команды телу
//! (velocity, gravity on/off, orientation) через `PhysicsBody`.
//!
//! Реализации:
//! - `KinematicBodyMut` — headless тело (тесты, headless runner)
//! - `RapierBody` — поверх bevy_rapier3d компонентов

use bevy::prelude::*;

pub mod kinematic;
pub mod rapier;

pub use kinematic::{
    integrate_kinematic_bodies, spawn_character, KinematicBody, KinematicBodyMut,
    KinematicBodyPlugin,
};
pub use rapier::{spawn_rapier_character, BaseGravityScale, RapierBody};

/// Тело персонажа, одолженное контроллеру на один тик
///
/// Convention: Y-up, "вперёд" = -Z локального пространства (Bevy).
pub trait PhysicsBody {
    fn linear_velocity(&self) -> Vec3;

    fn set_linear_velocity(&mut self, velocity: Vec3);

    fn set_gravity_enabled(&mut self, enabled: bool);

    fn orientation(&self) -> Quat;

    fn set_orientation(&mut self, orientation: Quat);

    fn forward_direction(&self) -> Vec3 {
        self.orientation() * Vec3::NEG_Z
    }
}
