//! Dash — короткий рывок без гравитации (только WheelChair)
//!
//! FSM на elapsed-счётчиках, продвигается раз в тик:
//! Ready → Dashing → CoolingDown → Ready
//!
//! Никаких корутин/таймеров host'а: пауза симуляции = elapsed стоит на месте.

use bevy::prelude::*;

use crate::components::Stamina;
use crate::config::CharacterTuning;
use crate::physics::PhysicsBody;

/// Фаза рывка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum DashPhase {
    #[default]
    Ready,
    /// Рывок в процессе: velocity принадлежит dash, гравитация выключена
    Dashing,
    CoolingDown,
}

/// Переход фазы за тик (для событий/логов)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashTransition {
    /// Ready → Dashing
    Started,
    /// Dashing → CoolingDown
    Ended,
    /// CoolingDown → Ready
    Recovered,
}

#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct DashAbility {
    phase: DashPhase,
    /// Секунды с начала текущей фазы (Dashing или CoolingDown)
    elapsed: f32,
    /// Горизонтальная скорость рывка (m/s)
    pub range: f32,
    pub duration: f32,
    pub cooldown: f32,
    pub stamina_cost: f32,
}

impl DashAbility {
    pub fn new(tuning: &CharacterTuning) -> Self {
        Self {
            phase: DashPhase::Ready,
            elapsed: 0.0,
            range: tuning.dash_range,
            duration: tuning.dash_duration,
            cooldown: tuning.dash_cooldown,
            stamina_cost: tuning.dash_stamina_cost,
        }
    }

    pub fn phase(&self) -> DashPhase {
        self.phase
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_dashing(&self) -> bool {
        self.phase == DashPhase::Dashing
    }

    /// Можно ли начать рывок прямо сейчас (без учёта нажатия)
    pub fn can_trigger(&self, stamina: &Stamina) -> bool {
        self.phase == DashPhase::Ready && stamina.can_afford(self.stamina_cost)
    }

    /// Продвинуть elapsed текущей фазы, максимум один переход за вызов
    ///
    /// Dashing → CoolingDown включает гравитацию обратно.
    pub fn advance(&mut self, delta: f32, body: &mut impl PhysicsBody) -> Option<DashTransition> {
        match self.phase {
            DashPhase::Ready => None,
            DashPhase::Dashing => {
                self.elapsed += delta;
                if self.elapsed >= self.duration {
                    self.phase = DashPhase::CoolingDown;
                    self.elapsed = 0.0;
                    body.set_gravity_enabled(true);
                    Some(DashTransition::Ended)
                } else {
                    None
                }
            }
            DashPhase::CoolingDown => {
                self.elapsed += delta;
                if self.elapsed >= self.cooldown {
                    self.phase = DashPhase::Ready;
                    self.elapsed = 0.0;
                    Some(DashTransition::Recovered)
                } else {
                    None
                }
            }
        }
    }

    /// Попытка начать рывок
    ///
    /// No-op (false) если нет нажатия, фаза не Ready или не хватает stamina.
    /// Стоимость списывается ровно один раз, атомарно.
    pub fn try_trigger(
        &mut self,
        pressed: bool,
        stamina: &mut Stamina,
        body: &mut impl PhysicsBody,
    ) -> bool {
        if !pressed || self.phase != DashPhase::Ready {
            return false;
        }

        if !stamina.try_consume(self.stamina_cost) {
            return false;
        }

        self.phase = DashPhase::Dashing;
        self.elapsed = 0.0;
        body.set_gravity_enabled(false);

        // Горизонталь = forward × range, вертикаль сохраняем
        let dash = body.forward_direction() * self.range;
        let current = body.linear_velocity();
        body.set_linear_velocity(Vec3::new(dash.x, current.y, dash.z));

        true
    }
}
