// src/robots/mod.rs
// =============================================================================
// The robots.txt gate, consulted once per target before any link work.
// =============================================================================

mod gate;

pub use gate::RobotsGate;
