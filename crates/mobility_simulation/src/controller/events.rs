//! Controller events
//!
//! Генерируются тиковыми системами из `TickReport`.
//! Потребители: HUD (stamina/cooldown индикаторы), VFX/звук рывка, аналитика.

use bevy::prelude::*;

/// Event: рывок начался (Ready → Dashing), stamina уже списана
#[derive(Event, Debug, Clone)]
pub struct DashStarted {
    pub entity: Entity,
}

/// Event: рывок закончился (Dashing → CoolingDown), гравитация снова включена
#[derive(Event, Debug, Clone)]
pub struct DashEnded {
    pub entity: Entity,
}

/// Event: cooldown прошёл (CoolingDown → Ready)
#[derive(Event, Debug, Clone)]
pub struct DashReady {
    pub entity: Entity,
}

/// Event: флаг спринта изменился
#[derive(Event, Debug, Clone)]
pub struct SprintChanged {
    pub entity: Entity,
    pub sprinting: bool,
}
