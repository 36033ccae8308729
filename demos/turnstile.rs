//! A coin-operated turnstile driven through accepted and rejected gotos.
//!
//! Key concepts:
//! - Fluent builder construction
//! - Attaching hooks to already-registered states
//! - Rejected gotos return false instead of raising
//!
//! Run with: cargo run --example turnstile

use machina::{StateMachineBuilder, Transition};

fn main() {
    let mut turnstile = StateMachineBuilder::new()
        .states(["locked", "unlocked"])
        .transition(
            Transition::new("locked", "unlocked").on_transition(|_, _| println!("coin accepted")),
        )
        .transition(
            Transition::new("unlocked", "locked")
                .on_transition(|_, _| println!("visitor passed through")),
        )
        .initial("locked")
        .build()
        .unwrap();

    turnstile
        .set_on_enter("locked", |_| println!("turnstile locked"))
        .unwrap();
    turnstile
        .set_on_exit("unlocked", |next| println!("leaving unlocked for {next}"))
        .unwrap();

    turnstile.goto("unlocked");
    turnstile.goto("locked");

    // Unregistered targets are rejected, not raised.
    let accepted = turnstile.goto("jammed");
    println!("goto(\"jammed\") accepted: {accepted}");
    println!("still in: {:?}", turnstile.current_state_name());
}
