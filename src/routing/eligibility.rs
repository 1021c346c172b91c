//! Agent eligibility filter
//!
//! Narrows a candidate pool to the agents currently authorized to serve a
//! jurisdiction, annotated with their in-flight backlog. An empty result is a
//! normal outcome (the lead stays unassigned), not an error.

use crate::agent::{Agent, AgentStatus, EligibleAgent, StateCode};

/// Filter a candidate pool down to agents eligible for the jurisdiction.
///
/// An agent qualifies when its status is `Active` and it holds a verified
/// license whose state matches the jurisdiction. License expiration is not
/// checked here. Output order is not significant; the strategy engine
/// re-sorts as needed.
pub fn filter_eligible(candidates: &[Agent], jurisdiction: &StateCode) -> Vec<EligibleAgent> {
    candidates
        .iter()
        .filter(|agent| agent.status == AgentStatus::Active && agent.licensed_in(jurisdiction))
        .map(EligibleAgent::from_agent)
        .collect()
}
