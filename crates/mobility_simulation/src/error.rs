//! Ошибки конструирования персонажа.
//!
//! Тик контроллера ошибок не возвращает: нехватка stamina, cooldown, чужой профиль
//! — это no-op. Ошибки бывают только при сборке персонажа из конфига.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ControllerError {
    /// Неизвестный вариант movement профиля (ошибка данных upstream, не дефолтим)
    #[error("invalid movement profile configuration: {0:?}")]
    InvalidProfileConfiguration(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
}
