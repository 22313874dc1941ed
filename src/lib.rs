//! Plenary - Time-boxed voting sessions over assembly agendas.
//!
//! Each session runs a yes/no vote on a single agenda, admits at most one
//! vote per voter, closes automatically when its deadline elapses, and
//! produces a deterministic tally.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
