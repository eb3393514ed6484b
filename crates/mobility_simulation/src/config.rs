//! Tuning конфиг персонажа
//!
//! Все константы движения/способностей настраиваются per-character без изменения кода.
//! Формат файла: RON, например:
//!
//! ```ron
//! (
//!     movement: "WheelChair",
//!     tuning: (
//!         dash_range: 30.0,
//!         dash_cooldown: 0.75,
//!     ),
//! )
//! ```
//!
//! Не указанные поля tuning берутся из `CharacterTuning::default()`.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ControllerError;

/// Параметры движения и способностей одного персонажа
///
/// `*_per_tick` ставки масштабируются на delta тика, т.е. фактически это units/sec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterTuning {
    /// Линейная скорость (m/s)
    pub movement_speed: f32,
    /// Скорость поворота WheelChair (градусы/сек при полном отклонении оси)
    pub rotate_speed: f32,
    /// Slerp фактор поворота ProstheticLeg за тик (0..1)
    pub rotate_interpolation: f32,
    /// Регенерация stamina (units/sec)
    pub stamina_regen_per_tick: f32,
    /// Горизонтальная скорость рывка (m/s)
    pub dash_range: f32,
    /// Cooldown после рывка (секунды)
    pub dash_cooldown: f32,
    /// Длительность рывка (секунды)
    pub dash_duration: f32,
    pub dash_stamina_cost: f32,
    /// Множитель скорости во время спринта
    pub sprint_speed_multiplier: f32,
    /// Расход stamina во время спринта (units/sec)
    pub sprint_stamina_cost_per_tick: f32,
    /// Спринт может НАЧАТЬСЯ только при stamina строго выше порога
    pub sprint_start_threshold: f32,
}

impl Default for CharacterTuning {
    fn default() -> Self {
        Self {
            movement_speed: 5.0,
            rotate_speed: 60.0,
            rotate_interpolation: 0.1,
            stamina_regen_per_tick: 10.0,
            dash_range: 24.0,
            dash_cooldown: 1.0,
            dash_duration: 0.2,
            dash_stamina_cost: 50.0,
            sprint_speed_multiplier: 2.5,
            sprint_stamina_cost_per_tick: 25.0,
            sprint_start_threshold: 35.0,
        }
    }
}

/// Вариант movement профиля (выбирается один раз при создании персонажа)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementKind {
    /// Танковое управление: вперёд/назад + yaw, доступен dash
    WheelChair,
    /// Holonomic движение в плоскости земли, доступен sprint
    ProstheticLeg,
}

impl MovementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementKind::WheelChair => "WheelChair",
            MovementKind::ProstheticLeg => "ProstheticLeg",
        }
    }
}

impl FromStr for MovementKind {
    type Err = ControllerError;

    /// Принимает `WheelChair` / `wheel_chair` / `WHEEL_CHAIR` (и так же для ProstheticLeg).
    /// Всё остальное — `InvalidProfileConfiguration`, без тихого fallback.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized: String = raw
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "wheelchair" => Ok(MovementKind::WheelChair),
            "prostheticleg" => Ok(MovementKind::ProstheticLeg),
            _ => Err(ControllerError::InvalidProfileConfiguration(raw.to_string())),
        }
    }
}

/// Полное описание персонажа для загрузки из данных
///
/// `movement` хранится строкой: валидация варианта — задача конструктора контроллера,
/// чтобы неизвестный профиль давал `InvalidProfileConfiguration`, а не parse error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterConfig {
    pub movement: String,
    #[serde(default)]
    pub tuning: CharacterTuning,
}

impl CharacterConfig {
    pub fn new(kind: MovementKind, tuning: CharacterTuning) -> Self {
        Self {
            movement: kind.as_str().to_string(),
            tuning,
        }
    }

    pub fn from_ron_str(text: &str) -> Result<Self, ControllerError> {
        Ok(ron::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ControllerError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }

    pub fn movement_kind(&self) -> Result<MovementKind, ControllerError> {
        self.movement.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuning_defaults_match_game_values() {
        let tuning = CharacterTuning::default();
        assert_eq!(tuning.movement_speed, 5.0);
        assert_eq!(tuning.rotate_speed, 60.0);
        assert_eq!(tuning.dash_range, 24.0);
        assert_eq!(tuning.dash_stamina_cost, 50.0);
        assert_eq!(tuning.sprint_start_threshold, 35.0);
    }

    #[test]
    fn test_movement_kind_parsing() {
        assert_eq!("WheelChair".parse::<MovementKind>().unwrap(), MovementKind::WheelChair);
        assert_eq!("WHEEL_CHAIR".parse::<MovementKind>().unwrap(), MovementKind::WheelChair);
        assert_eq!("prosthetic_leg".parse::<MovementKind>().unwrap(), MovementKind::ProstheticLeg);

        let err = "Hoverboard".parse::<MovementKind>().unwrap_err();
        assert!(matches!(err, ControllerError::InvalidProfileConfiguration(ref v) if v == "Hoverboard"));
    }

    #[test]
    fn test_partial_ron_config_keeps_defaults() {
        let config = CharacterConfig::from_ron_str(
            r#"(movement: "WheelChair", tuning: (dash_range: 30.0))"#,
        )
        .unwrap();

        assert_eq!(config.movement_kind().unwrap(), MovementKind::WheelChair);
        assert_eq!(config.tuning.dash_range, 30.0);
        assert_eq!(config.tuning.dash_cooldown, 1.0);
    }

    #[test]
    fn test_ron_config_without_tuning() {
        let config = CharacterConfig::from_ron_str(r#"(movement: "ProstheticLeg")"#).unwrap();
        assert_eq!(config.tuning, CharacterTuning::default());
    }

    #[test]
    fn test_malformed_ron_is_parse_error() {
        let err = CharacterConfig::from_ron_str("(movement: ").unwrap_err();
        assert!(matches!(err, ControllerError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = CharacterConfig::load("/definitely/not/here.ron").unwrap_err();
        assert!(matches!(err, ControllerError::Io(_)));
    }
}
