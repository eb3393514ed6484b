//! ECS системы контроллера
//!
//! Работают в FixedUpdate (детерминизм): delta берётся из `Time<Fixed>`.
//! Две системы на два вида тел — headless `KinematicBody` и rapier `Velocity`/`GravityScale`.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_rapier3d::prelude::{GravityScale, Velocity};

use super::events::{DashEnded, DashReady, DashStarted, SprintChanged};
use super::{CharacterController, TickReport};
use crate::abilities::DashTransition;
use crate::components::CharacterInput;
use crate::physics::{BaseGravityScale, KinematicBody, KinematicBodyMut, RapierBody};

/// Set тика контроллеров (физика интегрирует ПОСЛЕ него)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CharacterTickSet;

/// Все writers контроллерных событий одним параметром
#[derive(SystemParam)]
pub struct ControllerEvents<'w> {
    dash_started: EventWriter<'w, DashStarted>,
    dash_ended: EventWriter<'w, DashEnded>,
    dash_ready: EventWriter<'w, DashReady>,
    sprint_changed: EventWriter<'w, SprintChanged>,
}

impl ControllerEvents<'_> {
    fn emit(&mut self, entity: Entity, controller: &CharacterController, report: &TickReport) {
        match report.dash {
            Some(DashTransition::Started) => {
                crate::log(&format!(
                    "💨 Dash started: {:?} (stamina left: {:.1})",
                    entity,
                    controller.stamina_value()
                ));
                self.dash_started.write(DashStarted { entity });
            }
            Some(DashTransition::Ended) => {
                crate::log(&format!("Dash ended: {:?} → cooldown", entity));
                self.dash_ended.write(DashEnded { entity });
            }
            Some(DashTransition::Recovered) => {
                crate::log(&format!("Dash ready: {:?}", entity));
                self.dash_ready.write(DashReady { entity });
            }
            None => {}
        }

        if let Some(sprinting) = report.sprint_changed {
            crate::log(&format!(
                "🏃 Sprint {}: {:?} (stamina: {:.1})",
                if sprinting { "on" } else { "off" },
                entity,
                controller.stamina_value()
            ));
            self.sprint_changed.write(SprintChanged { entity, sprinting });
        }
    }
}

/// Система: тик персонажей на headless теле
pub fn tick_kinematic_characters(
    mut query: Query<(
        Entity,
        &mut CharacterController,
        &mut CharacterInput,
        &mut KinematicBody,
        &mut Transform,
    )>,
    mut events: ControllerEvents,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (entity, mut controller, mut input, mut body, mut transform) in query.iter_mut() {
        let snapshot = input.take_tick_snapshot();
        let mut view = KinematicBodyMut {
            body: &mut *body,
            transform: &mut *transform,
        };

        let report = controller.update(delta, &snapshot, &mut view);
        events.emit(entity, &controller, &report);
    }
}

/// Система: тик персонажей на rapier теле
pub fn tick_rapier_characters(
    mut query: Query<
        (
            Entity,
            &mut CharacterController,
            &mut CharacterInput,
            &mut Transform,
            &mut Velocity,
            &mut GravityScale,
            Option<&BaseGravityScale>,
        ),
        Without<KinematicBody>,
    >,
    mut events: ControllerEvents,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (entity, mut controller, mut input, mut transform, mut velocity, mut gravity_scale, base) in
        query.iter_mut()
    {
        let snapshot = input.take_tick_snapshot();
        let mut view = RapierBody {
            transform: &mut *transform,
            velocity: &mut *velocity,
            gravity_scale: &mut *gravity_scale,
            base_gravity_scale: base.copied().unwrap_or_default().0,
        };

        let report = controller.update(delta, &snapshot, &mut view);
        events.emit(entity, &controller, &report);
    }
}

/// Controller Plugin
///
/// Регистрирует события и тиковые системы в FixedUpdate.
/// Физика (headless integrator / rapier) должна идти после `CharacterTickSet`.
pub struct CharacterControllerPlugin;

impl Plugin for CharacterControllerPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<DashStarted>()
            .add_event::<DashEnded>()
            .add_event::<DashReady>()
            .add_event::<SprintChanged>();

        app.add_systems(
            FixedUpdate,
            (tick_kinematic_characters, tick_rapier_characters)
                .chain()
                .in_set(CharacterTickSet),
        );
    }
}
