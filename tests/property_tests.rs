//! Property-based tests for the tick-driven machine.
//!
//! These tests use proptest to verify the lifecycle laws hold across
//! many randomly generated durations and tick sizes.

use proptest::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tickstate::builder::StateMachineBuilder;
use tickstate::core::{DeltaTime, State, StateArena, StateTimer, TimedState};
use tickstate::machine::{MachineStatus, StateMachine, TickOutcome};

#[derive(Default)]
struct Counters {
    begins: AtomicUsize,
    ticks: AtomicUsize,
    ends: AtomicUsize,
}

struct Counted {
    timer: StateTimer,
    counters: Arc<Counters>,
}

impl State for Counted {
    fn name(&self) -> &str {
        "Counted"
    }

    fn timer(&self) -> &StateTimer {
        &self.timer
    }

    fn timer_mut(&mut self) -> &mut StateTimer {
        &mut self.timer
    }

    fn on_begin(&mut self) {
        self.counters.begins.fetch_add(1, Ordering::SeqCst);
    }

    fn on_tick(&mut self, dt: DeltaTime) {
        self.counters.ticks.fetch_add(1, Ordering::SeqCst);
        self.timer.advance(dt);
    }

    fn on_end(&mut self) {
        self.counters.ends.fetch_add(1, Ordering::SeqCst);
        self.timer.reset();
    }
}

prop_compose! {
    // Steps exactly representable in binary so accumulation stays exact.
    fn arbitrary_step()(exp in 0..4u32) -> f32 {
        0.25 * 2f32.powi(exp as i32)
    }
}

prop_compose! {
    fn arbitrary_duration()(quarters in 1..80u32) -> f32 {
        quarters as f32 * 0.25
    }
}

fn ticks_to_finish(duration: f32, step: f32) -> usize {
    (duration / step).ceil() as usize
}

proptest! {
    #[test]
    fn duration_law(duration in arbitrary_duration(), step in arbitrary_step()) {
        let mut arena = StateArena::new();
        let a = arena.insert(TimedState::new("A", duration));
        let b = arena.insert(TimedState::unbounded("B"));

        let mut machine = StateMachine::new();
        machine.create_transition(a, b);

        let expected = ticks_to_finish(duration, step);
        for _ in 1..expected {
            let outcome = machine.tick(&mut arena, DeltaTime::from_secs(step)).unwrap();
            prop_assert_eq!(outcome, TickOutcome::Ticked { state: a });
        }
        let outcome = machine.tick(&mut arena, DeltaTime::from_secs(step)).unwrap();
        prop_assert_eq!(outcome, TickOutcome::Transitioned { from: a, to: b });
    }

    #[test]
    fn begin_fires_once_per_activation(duration in arbitrary_duration(), step in arbitrary_step()) {
        let counters = Arc::new(Counters::default());
        let mut arena = StateArena::new();
        let a = arena.insert(Counted {
            timer: StateTimer::new(duration),
            counters: Arc::clone(&counters),
        });
        let b = arena.insert(TimedState::unbounded("B"));

        let mut machine = StateMachine::new();
        machine.create_transition(a, b);

        let expected = ticks_to_finish(duration, step);
        for _ in 0..expected {
            machine.tick(&mut arena, DeltaTime::from_secs(step)).unwrap();
        }

        prop_assert_eq!(counters.begins.load(Ordering::SeqCst), 1);
        prop_assert_eq!(counters.ticks.load(Ordering::SeqCst), expected);
        prop_assert_eq!(counters.ends.load(Ordering::SeqCst), 1);
        prop_assert_eq!(machine.current(), Some(b));
    }

    #[test]
    fn elapsed_resets_on_exit(duration in arbitrary_duration(), step in arbitrary_step()) {
        let mut arena = StateArena::new();
        let a = arena.insert(TimedState::new("A", duration));
        let b = arena.insert(TimedState::unbounded("B"));

        let mut machine = StateMachine::new();
        machine.create_transition(a, b);

        loop {
            let outcome = machine.tick(&mut arena, DeltaTime::from_secs(step)).unwrap();
            if outcome.finished() {
                break;
            }
            prop_assert!(arena.get(a).unwrap().timer().elapsed() > 0.0);
        }
        prop_assert_eq!(arena.get(a).unwrap().timer().elapsed(), 0.0);
    }

    #[test]
    fn two_cycle_alternates(
        da in arbitrary_duration(),
        db in arbitrary_duration(),
        step in arbitrary_step(),
        laps in 1..6usize,
    ) {
        let mut arena = StateArena::new();
        let a = arena.insert(TimedState::new("A", da));
        let b = arena.insert(TimedState::new("B", db));

        let mut machine = StateMachineBuilder::new()
            .transition(a, b)
            .transition(b, a)
            .record_history(true)
            .build(&arena)
            .unwrap();

        let per_lap = ticks_to_finish(da, step) + ticks_to_finish(db, step);
        for _ in 0..per_lap * laps {
            machine.tick(&mut arena, DeltaTime::from_secs(step)).unwrap();
        }

        prop_assert_eq!(machine.current(), Some(a));
        prop_assert!(!machine.is_entered());

        let path = machine.history().unwrap().path();
        prop_assert_eq!(path.len(), laps * 2 + 1);
        for (i, id) in path.iter().enumerate() {
            let expected = if i % 2 == 0 { a } else { b };
            prop_assert_eq!(*id, expected);
        }
    }

    #[test]
    fn dead_end_halts_for_good(
        duration in arbitrary_duration(),
        step in arbitrary_step(),
        extra in 1..20usize,
    ) {
        let mut arena = StateArena::new();
        let a = arena.insert(TimedState::new("A", 0.25));
        let b = arena.insert(TimedState::new("B", duration));

        let mut machine = StateMachine::new();
        machine.create_transition(a, b);

        let needed = ticks_to_finish(0.25, step) + ticks_to_finish(duration, step);
        for _ in 0..needed {
            machine.tick(&mut arena, DeltaTime::from_secs(step)).unwrap();
        }
        prop_assert_eq!(machine.status(), MachineStatus::Halted);

        let clock = machine.clock();
        for _ in 0..extra {
            let outcome = machine.tick(&mut arena, DeltaTime::from_secs(step)).unwrap();
            prop_assert_eq!(outcome, TickOutcome::Idle);
        }
        prop_assert!(machine.is_halted());
        prop_assert_eq!(machine.clock(), clock);
    }

    #[test]
    fn first_transition_is_unentered(count in 1..8usize) {
        let mut arena = StateArena::new();
        let ids: Vec<_> = (0..count + 1)
            .map(|i| arena.insert(TimedState::new(format!("S{i}"), 1.0)))
            .collect();

        let mut machine = StateMachine::new();
        for pair in ids.windows(2) {
            machine.create_transition(pair[0], pair[1]);
        }

        prop_assert_eq!(machine.current(), Some(ids[0]));
        prop_assert!(!machine.is_entered());
    }
}
