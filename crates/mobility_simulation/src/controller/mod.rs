//! CharacterController — оркестрация одного тика персонажа
//!
//! Порядок внутри тика фиксирован:
//! 1. Stamina regen/drain по sprint состоянию ПРЕДЫДУЩЕГО тика
//! 2. Dash: продвижение фазы, затем попытка триггера
//! 3. Sprint: пересчёт флага
//! 4. Kinematics профиля → тело (пропускается, если dash в Dashing)
//!
//! Контроллер одинаково работает как Bevy component (см. `systems`) и как обычная
//! структура с любым `PhysicsBody` (тесты, чужие движки).

use bevy::prelude::*;

pub mod events;
pub mod systems;


pub use events::{DashEnded, DashReady, DashStarted, SprintChanged};
pub use systems::{tick_kinematic_characters, tick_rapier_characters, CharacterControllerPlugin, CharacterTickSet};

use crate::abilities::{DashPhase, DashTransition, ProfileAbility};
use crate::components::{BodyState, InputSnapshot, MovementIntent, MovementProfile, Stamina};
use crate::config::{CharacterConfig, CharacterTuning, MovementKind};
use crate::error::ControllerError;
use crate::physics::PhysicsBody;

/// Что произошло за тик (для HUD/событий)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickReport {
    pub dash: Option<DashTransition>,
    /// Some(new) если флаг спринта изменился
    pub sprint_changed: Option<bool>,
    /// None когда kinematics подавлены рывком
    pub applied_intent: Option<MovementIntent>,
}

/// Контроллер персонажа (movement профиль + stamina + способность профиля)
#[derive(Component, Debug, Clone)]
pub struct CharacterController {
    profile: MovementProfile,
    stamina: Stamina,
    ability: ProfileAbility,
    tuning: CharacterTuning,
}

impl CharacterController {
    /// Единственный контракт конструирования: профиль + tuning
    pub fn new(kind: MovementKind, tuning: CharacterTuning) -> Self {
        let profile = MovementProfile::new(kind, &tuning);
        let ability = ProfileAbility::for_profile(&profile, &tuning);
        let stamina = Stamina::new(tuning.stamina_regen_per_tick, tuning.sprint_stamina_cost_per_tick);

        Self {
            profile,
            stamina,
            ability,
            tuning,
        }
    }

    /// Сборка из данных; неизвестный профиль → `InvalidProfileConfiguration`
    pub fn from_config(config: &CharacterConfig) -> Result<Self, ControllerError> {
        let kind = config.movement_kind().inspect_err(|err| {
            crate::log_error(&format!("CharacterController: {}", err));
        })?;
        Ok(Self::new(kind, config.tuning.clone()))
    }

    pub fn with_stamina(mut self, value: f32) -> Self {
        self.stamina = self.stamina.with_current(value);
        self
    }

    /// Один полный тик
    pub fn update(
        &mut self,
        delta: f32,
        input: &InputSnapshot,
        body: &mut impl PhysicsBody,
    ) -> TickReport {
        let input = input.sanitized();
        let mut report = TickReport::default();

        // 1. Stamina по sprint флагу прошлого тика
        let was_sprinting = self.is_sprinting();
        self.stamina.tick(delta, was_sprinting);

        // 2 + 3. Способность профиля (у WheelChair только dash, у ProstheticLeg только sprint)
        match &mut self.ability {
            ProfileAbility::Dash(dash) => {
                report.dash = dash.advance(delta, body);
                if dash.try_trigger(input.dash_pressed, &mut self.stamina, body) {
                    report.dash = Some(DashTransition::Started);
                }
            }
            ProfileAbility::Sprint(sprint) => {
                report.sprint_changed = sprint.evaluate(input.sprint_held, &self.stamina);
            }
        }

        // 4. Kinematics (dash владеет velocity пока Dashing)
        if !self.is_dashing() {
            let state = BodyState::read(&*body);
            let intent = self
                .profile
                .compute_intent(&input, &state, delta, self.is_sprinting());
            intent.apply(body);
            report.applied_intent = Some(intent);
        }

        report
    }

    pub fn stamina_value(&self) -> f32 {
        self.stamina.value()
    }

    pub fn stamina(&self) -> &Stamina {
        &self.stamina
    }

    pub fn is_dashing(&self) -> bool {
        self.ability.dash().is_some_and(|dash| dash.is_dashing())
    }

    pub fn is_sprinting(&self) -> bool {
        self.ability.sprint().is_some_and(|sprint| sprint.is_sprinting())
    }

    /// Готов ли dash (профиль, фаза Ready, хватает stamina); нажатие не учитывается
    pub fn can_trigger_dash(&self) -> bool {
        self.ability
            .dash()
            .is_some_and(|dash| dash.can_trigger(&self.stamina))
    }

    /// None для профилей без dash
    pub fn dash_phase(&self) -> Option<DashPhase> {
        self.ability.dash().map(|dash| dash.phase())
    }

    pub fn dash_elapsed(&self) -> Option<f32> {
        self.ability.dash().map(|dash| dash.elapsed())
    }

    pub fn profile(&self) -> &MovementProfile {
        &self.profile
    }

    pub fn movement_kind(&self) -> MovementKind {
        self.profile.kind()
    }

    pub fn tuning(&self) -> &CharacterTuning {
        &self.tuning
    }
}
