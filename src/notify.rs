//! Agent notification dispatch
//!
//! Notifications are fire-and-forget: a failed or skipped notification never
//! rolls back the routing decision or the lead record. Real email/SMS
//! delivery lives behind [`NotificationSink`]; this crate ships only
//! [`LogOnlySink`], which records the attempt through tracing.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::agent::StateCode;

/// Contact details for the agent being notified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentContact {
    pub email: String,
    pub phone: Option<String>,
}

/// The lead details included in an assignment notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSummary {
    pub lead_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub state: StateCode,
}

/// Which channels were actually delivered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NotificationOutcome {
    pub email_sent: bool,
    pub sms_sent: bool,
}

/// Delivery channel for lead-assignment notifications.
///
/// Implementations must not panic; delivery failure is reported through the
/// outcome, not an error.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Notify an agent that a lead was assigned to them.
    ///
    /// SMS is only attempted when the agent has a phone number on file.
    async fn notify_assignment(
        &self,
        contact: &AgentContact,
        lead: &LeadSummary,
    ) -> NotificationOutcome;
}

/// Placeholder sink that logs notifications instead of delivering them.
///
/// Stands in until a real email/SMS provider is wired up. Lead contact
/// details are left out of the log line unless `log_lead_contact` is set
/// (leads are PII).
#[derive(Debug, Default, Clone, Copy)]
pub struct LogOnlySink {
    log_lead_contact: bool,
}

impl LogOnlySink {
    pub fn new(log_lead_contact: bool) -> Self {
        Self { log_lead_contact }
    }
}

#[async_trait]
impl NotificationSink for LogOnlySink {
    async fn notify_assignment(
        &self,
        contact: &AgentContact,
        lead: &LeadSummary,
    ) -> NotificationOutcome {
        if self.log_lead_contact {
            info!(
                agent_email = %contact.email,
                lead_id = %lead.lead_id,
                state = %lead.state,
                lead_name = %format!("{} {}", lead.first_name, lead.last_name),
                lead_phone = %lead.phone,
                "email notification (log only)"
            );
        } else {
            info!(
                agent_email = %contact.email,
                lead_id = %lead.lead_id,
                state = %lead.state,
                "email notification (log only)"
            );
        }

        let sms_sent = if let Some(phone) = &contact.phone {
            info!(
                agent_phone = %phone,
                lead_id = %lead.lead_id,
                "sms notification (log only)"
            );
            true
        } else {
            false
        };

        NotificationOutcome {
            email_sent: true,
            sms_sent,
        }
    }
}
