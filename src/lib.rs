//! Rate Resolution Engine.
//!
//! This crate stores a wholesale-replaceable set of pricing rates keyed by
//! day-of-week and time-of-day, and answers the question "what is the
//! applicable price for a given time interval?" over a small HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod error;
pub mod models;
pub mod resolution;
pub mod seed;
pub mod store;
