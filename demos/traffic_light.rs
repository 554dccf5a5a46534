//! Traffic Light State Machine
//!
//! This example drives a cyclic machine from a fixed-step update loop.
//!
//! Key concepts:
//! - Timed states with custom lifecycle hooks
//! - Cyclic transitions built with `cycle`
//! - Deferred `on_begin`: a successor starts on the tick after its
//!   predecessor ends
//!
//! Run with: cargo run --example traffic_light

use tickstate::builder::StateMachineBuilder;
use tickstate::core::{DeltaTime, State, StateArena, StateTimer};
use tickstate::machine::TickOutcome;

struct Light {
    color: &'static str,
    timer: StateTimer,
}

impl Light {
    fn new(color: &'static str, seconds: f32) -> Self {
        Self {
            color,
            timer: StateTimer::new(seconds),
        }
    }
}

impl State for Light {
    fn name(&self) -> &str {
        self.color
    }

    fn timer(&self) -> &StateTimer {
        &self.timer
    }

    fn timer_mut(&mut self) -> &mut StateTimer {
        &mut self.timer
    }

    fn on_begin(&mut self) {
        println!("  {} on for {}s", self.color, self.timer.duration());
    }

    fn on_end(&mut self) {
        println!("  {} off after {}s", self.color, self.timer.elapsed());
        self.timer.reset();
    }
}

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    let mut arena = StateArena::new();
    let red = arena.insert(Light::new("Red", 3.0));
    let green = arena.insert(Light::new("Green", 2.5));
    let yellow = arena.insert(Light::new("Yellow", 1.0));

    let mut machine = StateMachineBuilder::new()
        .cycle([red, green, yellow])
        .record_history(true)
        .build(&arena)
        .expect("all lights are in the arena");

    let step = DeltaTime::from_secs(0.5);
    for frame in 0..30 {
        match machine.tick(&mut arena, step) {
            Ok(TickOutcome::Transitioned { from, to }) => {
                let from = arena.get(from).map_or("?", |s| s.name());
                let to = arena.get(to).map_or("?", |s| s.name());
                println!("frame {frame:>2}: {from} -> {to}");
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("tick failed: {e}");
                return;
            }
        }
    }

    if let Some(history) = machine.history() {
        println!("\n{} transitions in {}s of simulated time", history.len(), machine.clock());
    }

    println!("\n=== Example Complete ===");
}
