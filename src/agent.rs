//! Agent domain types.
//!
//! Agents, licenses, and lead assignments are owned by the persistence layer
//! and consumed here read-only. The routing core receives a fully materialized
//! snapshot per call and never queries storage itself. [`EligibleAgent`] is
//! the one derived type this crate owns: a per-call view of an agent that
//! survived the eligibility filter, annotated with its current backlog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Agent account status.
///
/// Only `Active` agents are considered for routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgentStatus {
    /// Agent is active and may receive leads
    Active,
    /// Agent account is disabled
    Inactive,
    /// Agent is suspended pending review
    Suspended,
}

/// Lifecycle status of a lead assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeadStatus {
    /// Submitted but not yet assigned to an agent
    Pending,
    /// Assigned to an agent, not yet worked
    Assigned,
    /// Agent has made contact
    Contacted,
    /// Lead resulted in a sale
    Converted,
    /// Lead was closed without a sale
    Closed,
}

impl LeadStatus {
    /// Whether this lead still counts toward an agent's backlog.
    pub fn is_in_flight(self) -> bool {
        matches!(self, LeadStatus::Pending | LeadStatus::Assigned)
    }
}

/// Two-letter US state code identifying a licensing jurisdiction.
///
/// Stored uppercase. Jurisdiction validity (is this a real state?) is a
/// caller-side concern; this type only enforces the shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateCode(String);

impl StateCode {
    /// Build a state code, uppercasing the input.
    pub fn new(code: &str) -> Self {
        Self(code.to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for StateCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == 2 && s.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(StateCode::new(s))
        } else {
            Err(format!("Invalid state code: {}", s))
        }
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A state insurance license held by an agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    /// Jurisdiction the license covers
    pub state: StateCode,
    /// Whether the license has been verified by an administrator
    pub verified: bool,
    /// License expiration, if recorded.
    /// Expiration is not part of the routing eligibility filter.
    pub expiration_date: Option<DateTime<Utc>>,
}

/// A reference to one of an agent's lead assignments.
///
/// Only the status matters to routing; it feeds the backlog count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRef {
    pub id: String,
    pub status: LeadStatus,
}

/// An insurance agent as supplied by the external repository.
///
/// The snapshot includes the agent's licenses and current lead assignments so
/// that eligibility and backlog can be computed without further queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    /// Unique identifier
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Contact phone, if on file
    pub phone: Option<String>,
    /// Account status
    pub status: AgentStatus,
    /// State licenses held
    pub licenses: Vec<License>,
    /// Current lead assignments
    pub leads: Vec<LeadRef>,
}

impl Agent {
    /// Whether this agent holds a verified license for the given jurisdiction.
    pub fn licensed_in(&self, jurisdiction: &StateCode) -> bool {
        self.licenses
            .iter()
            .any(|license| license.verified && license.state == *jurisdiction)
    }

    /// Number of this agent's leads that are still unresolved.
    pub fn pending_leads_count(&self) -> u32 {
        self.leads
            .iter()
            .filter(|lead| lead.status.is_in_flight())
            .count() as u32
    }
}

/// An agent that passed the eligibility filter for one routing call.
///
/// Built fresh per call and never persisted. `pending_leads` is a snapshot of
/// the agent's in-flight backlog at filter time; two concurrent submissions
/// can observe the same count and both pick the same agent. That race is
/// accepted: routing is best-effort load balancing, not capacity enforcement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibleAgent {
    pub agent_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Count of this agent's leads with status PENDING or ASSIGNED
    pub pending_leads: u32,
}

impl EligibleAgent {
    /// Derive the eligible view of an agent with its current backlog.
    pub fn from_agent(agent: &Agent) -> Self {
        Self {
            agent_id: agent.id.clone(),
            first_name: agent.first_name.clone(),
            last_name: agent.last_name.clone(),
            email: agent.email.clone(),
            phone: agent.phone.clone(),
            pending_leads: agent.pending_leads_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent_with_leads(statuses: &[LeadStatus]) -> Agent {
        Agent {
            id: "agent-1".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: None,
            status: AgentStatus::Active,
            licenses: vec![],
            leads: statuses
                .iter()
                .enumerate()
                .map(|(i, s)| LeadRef {
                    id: format!("lead-{}", i),
                    status: *s,
                })
                .collect(),
        }
    }

    #[test]
    fn state_code_uppercases() {
        assert_eq!(StateCode::new("tx").as_str(), "TX");
    }

    #[test]
    fn state_code_from_str_rejects_bad_shapes() {
        assert!("TX".parse::<StateCode>().is_ok());
        assert!("tx".parse::<StateCode>().is_ok());
        assert!("TEX".parse::<StateCode>().is_err());
        assert!("T1".parse::<StateCode>().is_err());
        assert!("".parse::<StateCode>().is_err());
    }

    #[test]
    fn agent_status_serde_matches_storage_values() {
        assert_eq!(
            serde_json::to_string(&AgentStatus::Active).unwrap(),
            "\"ACTIVE\""
        );
        assert_eq!(
            serde_json::to_string(&LeadStatus::Assigned).unwrap(),
            "\"ASSIGNED\""
        );
    }

    #[test]
    fn pending_count_includes_only_in_flight_leads() {
        let agent = agent_with_leads(&[
            LeadStatus::Pending,
            LeadStatus::Assigned,
            LeadStatus::Contacted,
            LeadStatus::Converted,
            LeadStatus::Closed,
        ]);
        assert_eq!(agent.pending_leads_count(), 2);
    }

    #[test]
    fn licensed_in_requires_verified_license() {
        let mut agent = agent_with_leads(&[]);
        agent.licenses = vec![
            License {
                state: StateCode::new("TX"),
                verified: false,
                expiration_date: None,
            },
            License {
                state: StateCode::new("FL"),
                verified: true,
                expiration_date: None,
            },
        ];

        assert!(!agent.licensed_in(&StateCode::new("TX")));
        assert!(agent.licensed_in(&StateCode::new("FL")));
        assert!(!agent.licensed_in(&StateCode::new("CA")));
    }

    #[test]
    fn eligible_agent_snapshot_carries_backlog() {
        let agent = agent_with_leads(&[LeadStatus::Pending, LeadStatus::Pending]);
        let eligible = EligibleAgent::from_agent(&agent);
        assert_eq!(eligible.agent_id, "agent-1");
        assert_eq!(eligible.pending_leads, 2);
    }
}
