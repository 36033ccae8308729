//! A sleepy cat with a hook on every step of waking up.
//!
//! Key concepts:
//! - Construction from a one-shot configuration value
//! - Firing the initial state's on-enter hook at build time
//! - The fixed on-exit -> on-transition -> on-enter dispatch order
//!
//! Run with: cargo run --example cat

use machina::{MachineConfig, State, Transition};

fn main() {
    let mut cat = MachineConfig {
        states: vec![
            State::new("sleepy")
                .on_enter(|_| println!("The cat fell asleep"))
                .on_exit(|_| println!("The cat was no longer asleep!")),
            State::new("awake").on_enter(|_| println!("The cat woke up!")),
        ],
        transitions: vec![Transition::new("sleepy", "awake")
            .on_transition(|_, _| println!("The cat transitioned from asleep to awake"))],
        initial_state: Some("sleepy".to_string()),
        initial_on_enter: true,
    }
    .build()
    .unwrap();

    cat.goto("awake");

    println!("current state: {:?}", cat.current_state_name());
}
