//! Leadrouter - lead routing core for an insurance-agent platform
//!
//! This library provides the assignment logic that connects an inbound
//! insurance lead to a state-licensed agent: eligibility filtering, a
//! pluggable routing strategy engine, an immutable audit record of each
//! decision, and the landing-page URL resolver used for the post-assignment
//! redirect.
//!
//! Storage, HTTP transport, and notification delivery live outside this
//! crate. Callers fetch the agent snapshot, hand it to
//! [`pipeline::LeadRouter`] (or to the lower-level functions in [`routing`]),
//! and persist the returned [`routing::RoutingDecision`] themselves.

pub mod agent;
pub mod config;
pub mod logging;
pub mod notify;
pub mod pipeline;
pub mod routing;
