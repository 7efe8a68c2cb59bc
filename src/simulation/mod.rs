//! Automated matches between move policies.
//!
//! Used to check the AI tiers against each other over many games, e.g. that
//! the hard tier never loses.

mod runner;

pub use runner::{MatchConfig, MatchRecord, MatchRunner, MatchSummary};
