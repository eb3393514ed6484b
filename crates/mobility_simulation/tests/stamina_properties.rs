//! Property-based тесты stamina инварианта
//!
//! Для любых последовательностей тиков/ввода stamina остаётся в [0, 100],
//! а dash списывает стоимость ровно один раз на успешный триггер.

use bevy::prelude::*;
use mobility_simulation::physics::KinematicBodyMut;
use mobility_simulation::*;
use proptest::prelude::*;

fn arb_input() -> impl Strategy<Value = InputSnapshot> {
    (-1.5f32..1.5, -1.5f32..1.5, any::<bool>(), any::<bool>()).prop_map(
        |(forward, right, sprint, dash)| InputSnapshot {
            forward_axis: forward,
            right_axis: right,
            sprint_held: sprint,
            dash_pressed: dash,
        },
    )
}

proptest! {
    #[test]
    fn stamina_stays_bounded_under_raw_ticks(
        start in 0.0f32..=100.0,
        steps in prop::collection::vec((0.0f32..2.0, any::<bool>()), 0..200),
    ) {
        let mut stamina = Stamina::default().with_current(start);
        for (delta, draining) in steps {
            stamina.tick(delta, draining);
            prop_assert!((0.0..=100.0).contains(&stamina.current), "stamina = {}", stamina.current);
        }
    }

    #[test]
    fn controller_stamina_bounded(
        wheel_chair in any::<bool>(),
        start in 0.0f32..=100.0,
        ticks in prop::collection::vec((0.0f32..0.1, arb_input()), 1..300),
    ) {
        let kind = if wheel_chair { MovementKind::WheelChair } else { MovementKind::ProstheticLeg };
        let mut controller = CharacterController::new(kind, CharacterTuning::default()).with_stamina(start);
        let mut body = KinematicBody::default();
        let mut transform = Transform::default();

        for (delta, input) in ticks {
            let mut view = KinematicBodyMut { body: &mut body, transform: &mut transform };
            controller.update(delta, &input, &mut view);

            prop_assert!((0.0..=100.0).contains(&controller.stamina_value()));
            // Эксклюзивность способностей по профилю
            if wheel_chair {
                prop_assert!(!controller.is_sprinting());
            } else {
                prop_assert!(!controller.can_trigger_dash());
                prop_assert!(!controller.is_dashing());
            }
        }
    }

    #[test]
    fn dash_cost_deducted_once_per_trigger(
        start in 0.0f32..=100.0,
        presses in prop::collection::vec(any::<bool>(), 1..200),
    ) {
        // Без регена: вся разница stamina = сумма стоимостей рывков
        let tuning = CharacterTuning { stamina_regen_per_tick: 0.0, ..default() };
        let cost = tuning.dash_stamina_cost;
        let mut controller = CharacterController::new(MovementKind::WheelChair, tuning).with_stamina(start);
        let mut body = KinematicBody::default();
        let mut transform = Transform::default();

        let mut triggers = 0u32;
        for pressed in presses {
            let before = controller.stamina_value();
            let mut view = KinematicBodyMut { body: &mut body, transform: &mut transform };
            let report = controller.update(1.0 / 64.0, &InputSnapshot::default().with_dash(pressed), &mut view);

            if report.dash == Some(DashTransition::Started) {
                triggers += 1;
                prop_assert!((before - controller.stamina_value() - cost).abs() < 1e-4);
            } else {
                prop_assert_eq!(before, controller.stamina_value());
            }
        }

        prop_assert!(triggers <= 2); // 100 stamina / 50 за рывок
        prop_assert!((start - controller.stamina_value() - cost * triggers as f32).abs() < 1e-3);
    }
}
