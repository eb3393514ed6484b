//! Sprint — непрерывное ускорение за stamina (только ProstheticLeg)
//!
//! Не multi-tick FSM: флаг пересчитывается каждый тик из stamina + input.
//! Гистерезис: начать можно только при stamina > start_threshold,
//! продолжать — пока stamina > 0. Без него спринт "мигал" бы возле порога.

use bevy::prelude::*;

use crate::components::Stamina;
use crate::config::CharacterTuning;

#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct SprintAbility {
    is_sprinting: bool,
    pub start_threshold: f32,
}

impl SprintAbility {
    pub fn new(tuning: &CharacterTuning) -> Self {
        Self {
            is_sprinting: false,
            start_threshold: tuning.sprint_start_threshold,
        }
    }

    pub fn is_sprinting(&self) -> bool {
        self.is_sprinting
    }

    /// Разрешён ли спринт при текущей stamina (без учёта кнопки)
    pub fn is_allowed(&self, stamina: &Stamina) -> bool {
        if self.is_sprinting {
            stamina.current > 0.0
        } else {
            stamina.current > self.start_threshold
        }
    }

    /// Пересчитать флаг на этот тик. Возвращает новое значение, если оно изменилось.
    pub fn evaluate(&mut self, sprint_held: bool, stamina: &Stamina) -> Option<bool> {
        let next = sprint_held && self.is_allowed(stamina);
        if next != self.is_sprinting {
            self.is_sprinting = next;
            Some(next)
        } else {
            None
        }
    }
}
