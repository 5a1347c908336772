//! Portal Integration - read-only adapter over the university REST API
//!
//! This crate is the only place campusbot talks to the network. It fetches
//! externally-owned resources (events, polls, profile, ideas, achievements)
//! fresh on every call and renders them into the plain-text blocks the chat
//! surface emits. Nothing is cached and nothing is written back.
//!
//! # Result model
//!
//! A fetch lands in one of four places:
//!
//! - `Ok(FetchOutcome::Found(..))` - 200 with data
//! - `Ok(FetchOutcome::Empty)` - 200 with an empty collection (authoritative)
//! - `Ok(FetchOutcome::Rejected(status))` - non-success status (auth failure,
//!   server error); the rendering layer folds this into the resource's empty
//!   text as the compatibility default, but callers can tell the difference
//! - `Err(PortalError)` - transport failure or malformed body
//!
//! # Key Types
//!
//! - `PortalClient` - reqwest wrapper built from [`campusbot_core::PortalConfig`]
//! - `FetchOutcome` - the tri-state result above
//! - `format` - per-resource text renderers and canned empty/unavailable texts

pub mod client;
pub mod format;
pub mod resources;

pub use client::{FetchOutcome, PortalClient, PortalError};
pub use resources::{Achievement, Event, Idea, Poll, PollOption, Profile};
