//! Podium - Speaker Screening and Registration
//!
//! This crate implements eligibility screening, session approval, and fee
//! assessment for conference speaker registration. A candidate's profile and
//! proposed sessions run through an ordered screening workflow; candidates
//! that pass are handed to a pluggable speaker store.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
