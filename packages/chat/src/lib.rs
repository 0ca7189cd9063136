#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Assistant reply text processing.
//!
//! Chat replies arrive as freeform text using a small markdown subset
//! (headings, lists, `**bold**`). This crate tokenizes that text into
//! renderable blocks, resolves inline emphasis for display, and reduces
//! the same text into a short speakable form for audio playback. All of
//! it is pure and synchronous; any string is accepted and nothing here
//! can fail.

pub mod inline;
pub mod markdown;
pub mod speech;
pub mod text;
