//! Lead routing engine
//!
//! This module implements the decision procedure that assigns an inbound lead
//! to one of several eligible agents. Selection is a pure function of the
//! eligible pool and the [`RoutingConfig`]: no shared state survives between
//! calls, and "no eligible agent" is an explicit `None`, never an error.
//!
//! The weighted method is the only non-deterministic path. Callers that need
//! reproducible outcomes (tests) inject a seeded generator through
//! [`route_lead_with_rng`].

use rand::Rng;
use tracing::{debug, warn};

pub mod decision;
pub mod eligibility;
pub mod slug;
pub mod strategies;

pub use decision::RoutingDecision;
pub use eligibility::filter_eligible;
pub use slug::{landing_page_url, slug_matches_agent};
pub use strategies::{AgentWeight, RoutingConfig, RoutingMethod};

use crate::agent::EligibleAgent;

/// Select one agent from the eligible pool, or `None` when the pool is empty.
///
/// Uses the process-level random generator for the weighted method. All other
/// methods are deterministic for identical input.
pub fn route_lead(eligible: &[EligibleAgent], config: &RoutingConfig) -> Option<EligibleAgent> {
    route_lead_with_rng(eligible, config, &mut rand::thread_rng())
}

/// [`route_lead`] with an injected random source.
///
/// A pool of exactly one agent short-circuits past the method dispatch: with
/// no choice to make, every method would return the same agent anyway.
pub fn route_lead_with_rng<R: Rng>(
    eligible: &[EligibleAgent],
    config: &RoutingConfig,
    rng: &mut R,
) -> Option<EligibleAgent> {
    if eligible.is_empty() {
        return None;
    }

    if eligible.len() == 1 {
        return Some(eligible[0].clone());
    }

    let selected = match config.method {
        RoutingMethod::RoundRobin => route_round_robin(eligible),
        RoutingMethod::Weighted => route_weighted(eligible, config, rng),
        RoutingMethod::Priority => route_priority(eligible),
        RoutingMethod::Manual => {
            // No manual-assignment path exists yet. Flag the request rather
            // than silently degrading.
            warn!(
                method = %config.method,
                "manual routing requested but not implemented, falling back to round_robin"
            );
            route_round_robin(eligible)
        }
    };

    selected.cloned()
}

/// Round-robin by backlog: the agent with the fewest pending leads is due for
/// the next one. Ties broken by lexicographically smallest last name so the
/// result is reproducible.
fn route_round_robin(eligible: &[EligibleAgent]) -> Option<&EligibleAgent> {
    eligible.iter().min_by(|a, b| {
        a.pending_leads
            .cmp(&b.pending_leads)
            .then_with(|| a.last_name.cmp(&b.last_name))
    })
}

/// Weighted selection: draw a uniform value in `[0, total_weight)` and walk
/// the cumulative sums until one covers the draw.
///
/// A zero or negative total weight (misconfigured table) falls back to a
/// uniform draw instead of dividing by zero.
fn route_weighted<'a, R: Rng>(
    eligible: &'a [EligibleAgent],
    config: &RoutingConfig,
    rng: &mut R,
) -> Option<&'a EligibleAgent> {
    if eligible.is_empty() {
        return None;
    }

    let total_weight: f64 = eligible
        .iter()
        .map(|agent| config.weight_for(&agent.agent_id))
        .sum();

    if !total_weight.is_finite() || total_weight <= 0.0 {
        debug!(
            total_weight,
            "weighted config has non-positive total weight, treating all agents as equal"
        );
        return eligible.get(rng.gen_range(0..eligible.len()));
    }

    let draw = rng.gen_range(0.0..total_weight);
    let mut cumulative = 0.0;
    for agent in eligible {
        cumulative += config.weight_for(&agent.agent_id);
        if cumulative >= draw {
            return Some(agent);
        }
    }

    // Floating-point guard: cumulative sums should always cover the draw
    eligible.first()
}

/// Priority selection: minimum backlog, ties resolved by input order.
///
/// Deliberately cruder than round-robin; this is the seam where a richer
/// priority score (performance rating) would slot in.
fn route_priority(eligible: &[EligibleAgent]) -> Option<&EligibleAgent> {
    eligible.iter().min_by_key(|agent| agent.pending_leads)
}
