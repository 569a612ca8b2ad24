//! Station proximity alert server.
//!
//! Tracks a live position against a fixed set of transit stations and
//! raises a one-shot alert when the user enters the proximity zone
//! around the nearest one.

pub mod catalog;
pub mod domain;
pub mod geo;
pub mod proximity;
pub mod source;
pub mod web;
