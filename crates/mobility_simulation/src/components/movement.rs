//! Movement профили: input snapshot → kinematic intent
//!
//! Два варианта, выбираются один раз при создании персонажа:
//! - WheelChair: танковое управление (вперёд/назад вдоль forward + yaw)
//! - ProstheticLeg: holonomic движение в плоскости земли, поворот slerp'ом к направлению движения

use bevy::prelude::*;

use crate::components::InputSnapshot;
use crate::config::{CharacterTuning, MovementKind};
use crate::physics::PhysicsBody;

/// Состояние тела, прочитанное в начале kinematics шага
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub linear_velocity: Vec3,
    pub orientation: Quat,
    pub forward: Vec3,
}

impl BodyState {
    pub fn read(body: &impl PhysicsBody) -> Self {
        Self {
            linear_velocity: body.linear_velocity(),
            orientation: body.orientation(),
            forward: body.forward_direction(),
        }
    }
}

/// Результат профиля за тик
///
/// `orientation == None` — ориентацию не трогаем (нет поворота / нулевой intent).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementIntent {
    pub linear_velocity: Vec3,
    pub orientation: Option<Quat>,
}

impl MovementIntent {
    pub fn apply(&self, body: &mut impl PhysicsBody) {
        body.set_linear_velocity(self.linear_velocity);
        if let Some(orientation) = self.orientation {
            body.set_orientation(orientation);
        }
    }
}

/// Movement профиль персонажа (immutable после создания)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MovementProfile {
    WheelChair {
        movement_speed: f32,
        /// Градусы/сек при полном отклонении оси
        rotate_speed: f32,
    },
    ProstheticLeg {
        movement_speed: f32,
        /// Slerp фактор за тик
        rotate_interpolation: f32,
        sprint_speed_multiplier: f32,
    },
}

impl MovementProfile {
    pub fn new(kind: MovementKind, tuning: &CharacterTuning) -> Self {
        match kind {
            MovementKind::WheelChair => Self::WheelChair {
                movement_speed: tuning.movement_speed,
                rotate_speed: tuning.rotate_speed,
            },
            MovementKind::ProstheticLeg => Self::ProstheticLeg {
                movement_speed: tuning.movement_speed,
                rotate_interpolation: tuning.rotate_interpolation,
                sprint_speed_multiplier: tuning.sprint_speed_multiplier,
            },
        }
    }

    pub fn kind(&self) -> MovementKind {
        match self {
            Self::WheelChair { .. } => MovementKind::WheelChair,
            Self::ProstheticLeg { .. } => MovementKind::ProstheticLeg,
        }
    }

    pub fn allows_dash(&self) -> bool {
        matches!(self, Self::WheelChair { .. })
    }

    pub fn allows_sprint(&self) -> bool {
        matches!(self, Self::ProstheticLeg { .. })
    }

    /// Посчитать velocity/orientation на тик
    ///
    /// `sprinting` учитывается только ProstheticLeg профилем.
    pub fn compute_intent(
        &self,
        input: &InputSnapshot,
        body: &BodyState,
        delta: f32,
        sprinting: bool,
    ) -> MovementIntent {
        match *self {
            Self::WheelChair {
                movement_speed,
                rotate_speed,
            } => {
                let linear_velocity = body.forward * (movement_speed * input.forward_axis);

                // Положительная ось = поворот вправо (по часовой, если смотреть сверху)
                let yaw_delta_degrees = input.right_axis * rotate_speed * delta;
                let orientation = (yaw_delta_degrees != 0.0).then(|| {
                    (Quat::from_rotation_y(-yaw_delta_degrees.to_radians()) * body.orientation)
                        .normalize()
                });

                MovementIntent {
                    linear_velocity,
                    orientation,
                }
            }
            Self::ProstheticLeg {
                movement_speed,
                rotate_interpolation,
                sprint_speed_multiplier,
            } => {
                let intent = Vec3::NEG_Z * input.forward_axis + Vec3::X * input.right_axis;

                let mut direction = intent.normalize_or_zero() * movement_speed;
                if sprinting {
                    direction *= sprint_speed_multiplier;
                }

                // Y velocity остается (gravity/jump)
                let linear_velocity =
                    Vec3::new(direction.x, body.linear_velocity.y, direction.z);

                let orientation = (direction != Vec3::ZERO).then(|| {
                    body.orientation
                        .slerp(facing_rotation(direction), rotate_interpolation)
                        .normalize()
                });

                MovementIntent {
                    linear_velocity,
                    orientation,
                }
            }
        }
    }
}

/// Yaw-поворот, при котором forward (-Z) смотрит вдоль горизонтальной проекции `direction`
pub fn facing_rotation(direction: Vec3) -> Quat {
    Quat::from_rotation_y(f32::atan2(-direction.x, -direction.z))
}
