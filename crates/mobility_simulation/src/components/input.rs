//! Per-tick input snapshot
//!
//! Host (Godot/winit/тестовый скрипт) пишет `CharacterInput` перед FixedUpdate.
//! Симуляция никогда не опрашивает платформу сама.

use bevy::prelude::*;

/// Снимок ввода на один тик
///
/// - `forward_axis`: вперёд (+1) / назад (-1)
/// - `right_axis`: вправо (+1) / влево (-1)
/// - `sprint_held`: кнопка спринта зажата
/// - `dash_pressed`: edge-triggered, true ровно один тик на физическое нажатие
#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect)]
pub struct InputSnapshot {
    pub forward_axis: f32,
    pub right_axis: f32,
    pub sprint_held: bool,
    pub dash_pressed: bool,
}

impl InputSnapshot {
    pub fn new(forward_axis: f32, right_axis: f32) -> Self {
        Self {
            forward_axis: forward_axis.clamp(-1.0, 1.0),
            right_axis: right_axis.clamp(-1.0, 1.0),
            ..default()
        }
    }

    pub fn with_sprint(mut self, held: bool) -> Self {
        self.sprint_held = held;
        self
    }

    pub fn with_dash(mut self, pressed: bool) -> Self {
        self.dash_pressed = pressed;
        self
    }

    /// Оси вне [-1, 1] (кривой gamepad driver, NaN) не должны разгонять персонажа
    pub fn sanitized(self) -> Self {
        let axis = |value: f32| if value.is_finite() { value.clamp(-1.0, 1.0) } else { 0.0 };
        Self {
            forward_axis: axis(self.forward_axis),
            right_axis: axis(self.right_axis),
            ..self
        }
    }
}

/// Input component для ECS персонажа
///
/// Контроллерная система забирает `dash_pressed` после тика (consume), поэтому
/// нажатие срабатывает ровно один раз даже если FixedUpdate крутится несколько раз за кадр.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct CharacterInput {
    pub snapshot: InputSnapshot,
}

impl CharacterInput {
    pub fn set_axes(&mut self, forward_axis: f32, right_axis: f32) {
        self.snapshot.forward_axis = forward_axis;
        self.snapshot.right_axis = right_axis;
    }

    pub fn set_sprint(&mut self, held: bool) {
        self.snapshot.sprint_held = held;
    }

    /// Зарегистрировать нажатие dash (держится до следующего тика симуляции)
    pub fn press_dash(&mut self) {
        self.snapshot.dash_pressed = true;
    }

    /// Отдать snapshot текущего тика и сбросить edge-triggered флаги
    pub fn take_tick_snapshot(&mut self) -> InputSnapshot {
        let snapshot = self.snapshot.sanitized();
        self.snapshot.dash_pressed = false;
        snapshot
    }
}
