//! Identity Resolver Integration Tests
//!
//! Dual-key registry behavior through the public API: dense allocation,
//! permanent binding, conflict rejection, and persistence of registrations
//! across failed compilations.

#[path = "../common/mod.rs"]
mod common;
