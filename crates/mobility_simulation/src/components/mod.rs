//! Компоненты персонажа
//!
//! Организация:
//! - stamina: общий ресурс способностей (Stamina)
//! - movement: movement профили и kinematic intent (MovementProfile, MovementIntent)
//! - input: per-tick снимок ввода (InputSnapshot, CharacterInput)

pub mod input;
pub mod movement;
pub mod stamina;

// Re-exports для удобного импорта
pub use input::*;
pub use movement::*;
pub use stamina::*;
