//! Способности персонажа, привязанные к movement профилю
//!
//! - dash: WheelChair
//! - sprint: ProstheticLeg
//!
//! Обе конкурируют за один Stamina пул (dash — атомарное списание, sprint — непрерывный drain).

pub mod dash;
pub mod sprint;


pub use dash::{DashAbility, DashPhase, DashTransition};
pub use sprint::SprintAbility;

use crate::components::MovementProfile;
use crate::config::CharacterTuning;

/// Способность, доступная профилю (ровно одна на персонажа)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProfileAbility {
    Dash(DashAbility),
    Sprint(SprintAbility),
}

impl ProfileAbility {
    pub fn for_profile(profile: &MovementProfile, tuning: &CharacterTuning) -> Self {
        match profile {
            MovementProfile::WheelChair { .. } => Self::Dash(DashAbility::new(tuning)),
            MovementProfile::ProstheticLeg { .. } => Self::Sprint(SprintAbility::new(tuning)),
        }
    }

    pub fn dash(&self) -> Option<&DashAbility> {
        match self {
            Self::Dash(dash) => Some(dash),
            Self::Sprint(_) => None,
        }
    }

    pub fn sprint(&self) -> Option<&SprintAbility> {
        match self {
            Self::Sprint(sprint) => Some(sprint),
            Self::Dash(_) => None,
        }
    }
}
