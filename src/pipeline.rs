//! Lead submission pipeline
//!
//! Ties the routing components together for one inbound submission: filter
//! the agent snapshot, pick an agent, build the audit record, resolve the
//! redirect, and fire best-effort notifications. The caller persists the
//! lead and the decision record and transmits the response; nothing here
//! touches storage.

use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use crate::agent::{Agent, EligibleAgent, LeadStatus};
use crate::notify::{AgentContact, LeadSummary, LogOnlySink, NotificationOutcome, NotificationSink};
use crate::routing::{self, RoutingConfig, RoutingDecision};

/// Result of processing one lead submission.
///
/// Everything the caller needs to persist the lead, write the audit log, and
/// build the response. When no agent was eligible the lead stays `Pending`
/// and the submission is still accepted; the caller surfaces a generic
/// "we will reach out" message rather than a failure.
#[derive(Debug, Clone)]
pub struct RoutingOutcome {
    /// Agent the lead was assigned to, if any
    pub selected: Option<EligibleAgent>,
    /// Status the lead record should be persisted with
    pub lead_status: LeadStatus,
    /// Audit record for the caller's routing log
    pub decision: RoutingDecision,
    /// Landing-page redirect for the submitter, present only when assigned
    pub redirect_url: Option<String>,
    /// Which notification channels reached the agent
    pub notifications: NotificationOutcome,
}

/// Routes inbound leads against a fixed configuration.
pub struct LeadRouter {
    config: RoutingConfig,
    base_url: String,
    notifier: Arc<dyn NotificationSink>,
}

impl LeadRouter {
    /// Create a router that logs notifications instead of delivering them.
    pub fn new(config: RoutingConfig, base_url: String) -> Self {
        Self::with_notifier(config, base_url, Arc::new(LogOnlySink::default()))
    }

    /// Create a router from loaded service configuration.
    pub fn from_config(config: &crate::config::LeadRouterConfig) -> Self {
        Self::with_notifier(
            config.routing.clone(),
            config.app.base_url.clone(),
            Arc::new(LogOnlySink::new(config.logging.log_lead_contact)),
        )
    }

    /// Create a router with a custom notification sink.
    pub fn with_notifier(
        config: RoutingConfig,
        base_url: String,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            config,
            base_url,
            notifier,
        }
    }

    /// Process one lead submission against a pre-fetched agent snapshot.
    ///
    /// The jurisdiction is taken from the lead itself and is assumed to be
    /// pre-validated by the caller. Two concurrent submissions can observe
    /// the same backlog snapshot and route to the same agent; that race is
    /// accepted (best-effort load balancing, not capacity enforcement).
    pub async fn process(&self, candidates: &[Agent], lead: &LeadSummary) -> RoutingOutcome {
        let start = Instant::now();
        let jurisdiction = lead.state.clone();

        let eligible = routing::filter_eligible(candidates, &jurisdiction);
        let selected = routing::route_lead(&eligible, &self.config);

        let processing_time_ms = start.elapsed().as_millis() as u64;
        let decision = RoutingDecision::build(
            jurisdiction,
            &eligible,
            selected.as_ref(),
            &self.config,
            processing_time_ms,
        );

        info!(
            decision_id = %decision.decision_id,
            lead_id = %lead.lead_id,
            method = %decision.method,
            state = %decision.jurisdiction,
            eligible_count = decision.eligible_count,
            selected_agent_id = decision.selected_agent_id.as_deref().unwrap_or("none"),
            processing_time_ms,
            "lead routed"
        );

        let (lead_status, redirect_url, notifications) = match &selected {
            Some(agent) => {
                let redirect = routing::landing_page_url(
                    &agent.agent_id,
                    &agent.first_name,
                    &agent.last_name,
                    &self.base_url,
                );
                let contact = AgentContact {
                    email: agent.email.clone(),
                    phone: agent.phone.clone(),
                };
                // Fire-and-forget: the outcome is reported, never an error,
                // and it cannot roll back the assignment.
                let notifications = self.notifier.notify_assignment(&contact, lead).await;
                (LeadStatus::Assigned, Some(redirect), notifications)
            }
            None => (LeadStatus::Pending, None, NotificationOutcome::default()),
        };

        RoutingOutcome {
            selected,
            lead_status,
            decision,
            redirect_url,
            notifications,
        }
    }

    /// Route a lead already reduced to its eligible pool.
    ///
    /// Convenience for callers that run the eligibility filter themselves.
    pub fn route(&self, eligible: &[EligibleAgent]) -> Option<EligibleAgent> {
        routing::route_lead(eligible, &self.config)
    }
}
