//! Stamina — общий ресурс для dash и sprint

use bevy::prelude::*;

/// Верхняя граница stamina пула
pub const MAX_STAMINA: f32 = 100.0;

/// Выносливость персонажа
///
/// Инвариант: 0.0 ≤ current ≤ max после каждой мутации.
/// За тик либо drain, либо regen (никогда оба).
/// Dash списывает стоимость атомарно через `try_consume`, sprint тратит непрерывно через `tick`.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct Stamina {
    pub current: f32,
    pub max: f32,
    /// units per second
    pub regen_rate: f32,
    /// units per second
    pub drain_rate: f32,
}

impl Default for Stamina {
    fn default() -> Self {
        Self::new(10.0, 25.0)
    }
}

impl Stamina {
    /// Полный пул (MAX_STAMINA)
    pub fn new(regen_rate: f32, drain_rate: f32) -> Self {
        Self {
            current: MAX_STAMINA,
            max: MAX_STAMINA,
            regen_rate,
            drain_rate,
        }
    }

    pub fn with_current(mut self, current: f32) -> Self {
        self.current = current.clamp(0.0, self.max);
        self
    }

    pub fn value(&self) -> f32 {
        self.current
    }

    pub fn can_afford(&self, cost: f32) -> bool {
        self.current >= cost
    }

    /// Списать `cost` целиком или ничего
    pub fn try_consume(&mut self, cost: f32) -> bool {
        if self.can_afford(cost) {
            self.current = (self.current - cost).clamp(0.0, self.max);
            true
        } else {
            false
        }
    }

    pub fn tick(&mut self, delta_time: f32, is_draining: bool) {
        if is_draining {
            self.current -= self.drain_rate * delta_time;
        } else {
            self.current += self.regen_rate * delta_time;
        }
        self.current = self.current.clamp(0.0, self.max);
    }

    pub fn is_empty(&self) -> bool {
        self.current <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamina_consume() {
        let mut stamina = Stamina::default();

        assert!(stamina.try_consume(50.0));
        assert_eq!(stamina.current, 50.0);

        assert!(!stamina.try_consume(80.0)); // Недостаточно
        assert_eq!(stamina.current, 50.0); // Не изменилась

        assert!(stamina.try_consume(50.0)); // Ровно хватает
        assert_eq!(stamina.current, 0.0);
    }

    #[test]
    fn test_stamina_regenerate() {
        let mut stamina = Stamina::default().with_current(50.0);

        stamina.tick(2.0, false); // 2 sec × 10 units/sec = +20
        assert_eq!(stamina.current, 70.0);

        stamina.tick(10.0, false); // Clamp to max
        assert_eq!(stamina.current, 100.0);
    }

    #[test]
    fn test_stamina_drain_clamps_at_zero() {
        let mut stamina = Stamina::default().with_current(10.0);

        stamina.tick(0.2, true); // 0.2 sec × 25 units/sec = -5
        assert_eq!(stamina.current, 5.0);

        stamina.tick(1.0, true);
        assert_eq!(stamina.current, 0.0);
        assert!(stamina.is_empty());
    }

    #[test]
    fn test_zero_delta_is_noop() {
        let mut stamina = Stamina::default().with_current(42.0);
        stamina.tick(0.0, true);
        stamina.tick(0.0, false);
        assert_eq!(stamina.current, 42.0);
    }

    #[test]
    fn test_with_current_clamps() {
        assert_eq!(Stamina::default().with_current(150.0).current, 100.0);
        assert_eq!(Stamina::default().with_current(-3.0).current, 0.0);
    }
}
