//! Routing decision audit records
//!
//! One [`RoutingDecision`] is produced per submission, capturing the inputs,
//! method, and outcome of the routing call. The record is immutable once
//! built and is handed verbatim to the caller's audit-log writer; the core
//! never persists it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::agent::{EligibleAgent, StateCode};
use crate::routing::strategies::{RoutingConfig, RoutingMethod};

/// Immutable audit record of one routing invocation.
///
/// Invariant: `selected_agent_id`, when present, is an element of
/// `eligible_agent_ids`; when no agent was selected both are empty together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingDecision {
    /// Unique record identifier
    pub decision_id: Uuid,
    /// Agent the lead was assigned to, if any
    pub selected_agent_id: Option<String>,
    /// Method in effect for this call
    pub method: RoutingMethod,
    /// Jurisdiction the lead was routed within
    pub jurisdiction: StateCode,
    /// Ids of all agents that passed the eligibility filter, in pool order
    pub eligible_agent_ids: Vec<String>,
    /// Wall-clock time spent handling the submission
    pub processing_time_ms: u64,
    /// Human-readable selection criteria for the method used
    pub criteria: String,
    /// Size of the eligible pool
    pub eligible_count: usize,
    /// Selected agent's backlog at decision time, 0 when unassigned
    pub selected_agent_pending_leads: u32,
    pub created_at: DateTime<Utc>,
}

impl RoutingDecision {
    /// Build the audit record for one routing call. Pure construction, no I/O.
    pub fn build(
        jurisdiction: StateCode,
        eligible: &[EligibleAgent],
        selected: Option<&EligibleAgent>,
        config: &RoutingConfig,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            decision_id: Uuid::new_v4(),
            selected_agent_id: selected.map(|agent| agent.agent_id.clone()),
            method: config.method,
            jurisdiction,
            eligible_agent_ids: eligible.iter().map(|a| a.agent_id.clone()).collect(),
            processing_time_ms,
            criteria: criteria_for(config.method).to_string(),
            eligible_count: eligible.len(),
            selected_agent_pending_leads: selected.map(|a| a.pending_leads).unwrap_or(0),
            created_at: Utc::now(),
        }
    }
}

/// Selection criteria label recorded with each decision.
fn criteria_for(method: RoutingMethod) -> &'static str {
    match method {
        RoutingMethod::RoundRobin => "least_pending_leads",
        RoutingMethod::Weighted => "weighted_distribution",
        RoutingMethod::Priority | RoutingMethod::Manual => "priority_based",
    }
}
