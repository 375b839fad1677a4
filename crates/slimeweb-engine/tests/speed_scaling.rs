//! Speed selection: derived constants, particle rescaling and frame pacing.

use slimeweb_core::{FieldKind, SpeciesKind, SpeciesTable, SpeedSelector, SpeedTable};
use slimeweb_engine::{ClockParams, SimulationClock};
use slimeweb_test_utils::{flat_grid, TestWorldBuilder};

#[test]
fn one_frame_of_decay_is_the_same_at_every_speed() {
    let table = SpeedTable::default();
    for (selector, setting) in table.iter() {
        let params = ClockParams::from_multiplier(setting.multiplier);
        let mut grid = flat_grid(4, 4);
        grid.deposit(1.0, 1.0, 1.0);
        for _ in 0..params.sub_steps {
            grid.tick(0.0, &params.rates);
        }
        let left = grid.sample(FieldKind::Pheromone, 1.0, 1.0);
        assert!((left - 0.99).abs() < 1e-12, "{selector}: {left}");
    }
}

#[test]
fn cycling_visits_table_order_and_wraps() {
    let mut world = TestWorldBuilder::new().build();
    assert_eq!(world.current_speed().0, SpeedSelector::Normal);
    assert_eq!(world.cycle_speed(), SpeedSelector::Fast);
    assert_eq!(world.cycle_speed(), SpeedSelector::Supaslime);
    assert_eq!(world.current_speed().1.label, "Supaslime!");
    assert_eq!(world.cycle_speed(), SpeedSelector::Normal);
}

#[test]
fn selector_change_rescales_speed_and_reach() {
    let table = SpeciesTable::default();
    let mut world = TestWorldBuilder::new().build();
    world.set_speed_selector(SpeedSelector::Fast);
    for p in world.particles() {
        let base = table.get(p.species).unwrap();
        assert!((p.cruise_speed - base.speed * 3.0).abs() < 1e-12);
        assert!((p.geometry.distance - base.sensor_distance * 2.0).abs() < 1e-12);
        assert_eq!(p.geometry.angle, base.sensor_angle);
    }
    world.set_speed_selector(SpeedSelector::Normal);
    for p in world.particles() {
        let base = table.get(p.species).unwrap();
        assert_eq!(p.cruise_speed, base.speed);
        assert_eq!(p.geometry.distance, base.sensor_distance);
    }
}

#[test]
fn spawns_after_speed_change_use_active_multiplier() {
    let mut world = TestWorldBuilder::new().species(&[]).build();
    world.set_speed_selector(SpeedSelector::Supaslime);
    world.set_species_active(SpeciesKind::Physarum, true);
    assert!(world.particles().iter().all(|p| p.cruise_speed == 6.0));
}

#[test]
fn each_frame_advances_one_frame_of_simulated_time() {
    let mut world = TestWorldBuilder::new().species(&[]).build();
    let frame = 1.0 / 60.0;
    let mut expected_steps = 0;
    for selector in SpeedSelector::ALL {
        world.set_speed_selector(selector);
        let before = world.elapsed_seconds();
        let result = world.step_frame();
        expected_steps += result.sub_steps as u64;
        assert!((world.elapsed_seconds() - before - frame).abs() < 1e-12);
    }
    assert_eq!(expected_steps, 1 + 3 + 6);
    assert_eq!(world.sub_step_count(), 10);
}

#[test]
fn clock_starts_on_configured_selector() {
    let world = TestWorldBuilder::new().speed(SpeedSelector::Fast).build();
    assert_eq!(world.clock().params().sub_steps, 3);
    assert!(world.particles().iter().any(|p| p.cruise_speed == 4.5));

    let clock = SimulationClock::new(SpeedTable::default(), SpeedSelector::Supaslime).unwrap();
    assert_eq!(clock.params().sub_steps, 6);
}
