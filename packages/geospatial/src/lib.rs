#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Region geometry derivation for the Ghana facility map.
//!
//! Turns per-region aggregate statistics and facility positions into
//! renderable overlays: desert-zone circles centered on region centroids
//! and rectangular region polygons sized from facility bounding boxes.
//! Both derivations are pure functions of their inputs; malformed or
//! incomplete records degrade silently instead of failing.

pub mod overlays;
pub mod regions;
