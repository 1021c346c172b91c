//! Routing methods and per-call routing configuration

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Routing method determines how one agent is selected from the eligible pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoutingMethod {
    /// Select the agent with the fewest pending leads, ties broken by last name
    #[default]
    RoundRobin,

    /// Probabilistic selection proportional to configured agent weights
    Weighted,

    /// Select the agent with the fewest pending leads, ties unspecified
    Priority,

    /// Manual assignment. No manual path exists yet; falls back to round-robin
    Manual,
}

impl FromStr for RoutingMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "round_robin" => Ok(RoutingMethod::RoundRobin),
            "weighted" => Ok(RoutingMethod::Weighted),
            "priority" => Ok(RoutingMethod::Priority),
            "manual" => Ok(RoutingMethod::Manual),
            _ => Err(format!("Unknown routing method: {}", s)),
        }
    }
}

impl std::fmt::Display for RoutingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoutingMethod::RoundRobin => write!(f, "round_robin"),
            RoutingMethod::Weighted => write!(f, "weighted"),
            RoutingMethod::Priority => write!(f, "priority"),
            RoutingMethod::Manual => write!(f, "manual"),
        }
    }
}

/// Selection weight for one agent under the weighted method.
///
/// Agents absent from the table get a default weight of 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentWeight {
    pub agent_id: String,
    pub weight: f64,
}

/// Configuration for one routing call.
///
/// Immutable per call. How it is sourced (environment default, database row,
/// request override) is entirely the caller's concern; the engine only reads
/// it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RoutingConfig {
    pub method: RoutingMethod,
    /// Weight table for the weighted method; ignored by other methods
    pub weighted_agents: Vec<AgentWeight>,
}

impl RoutingConfig {
    /// Config using the given method with no weight table.
    pub fn with_method(method: RoutingMethod) -> Self {
        Self {
            method,
            weighted_agents: Vec::new(),
        }
    }

    /// Weight for an agent, defaulting to 1 when not in the table.
    pub fn weight_for(&self, agent_id: &str) -> f64 {
        self.weighted_agents
            .iter()
            .find(|w| w.agent_id == agent_id)
            .map(|w| w.weight)
            .unwrap_or(1.0)
    }
}
