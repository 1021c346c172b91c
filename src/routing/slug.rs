//! Agent landing-page slugs
//!
//! Two routines share the slug concept without sharing a codec: the resolver
//! builds `firstname-lastname` for the post-assignment redirect, while the
//! lookup matcher splits an incoming slug on its first hyphen and compares
//! case-insensitively, with an agent-id fallback on both sides. For agents
//! with hyphenated or multi-part surnames the two are not guaranteed to
//! invert each other; that gap is inherited behavior, kept until the pair is
//! merged into one canonical codec.

use crate::agent::{Agent, AgentStatus};

/// Resolve the landing-page URL an assigned lead is redirected to.
///
/// Slug is `lowercase(first)-lowercase(last)`; when either name part is
/// empty the raw agent id is used instead. No whitespace or punctuation
/// normalization is applied: the slug is a vanity redirect, not an identity.
pub fn landing_page_url(agent_id: &str, first_name: &str, last_name: &str, base_url: &str) -> String {
    let slug = if !first_name.is_empty() && !last_name.is_empty() {
        format!(
            "{}-{}",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        )
    } else {
        agent_id.to_string()
    };
    format!("{}/agent/{}", base_url.trim_end_matches('/'), slug)
}

/// Lookup-side matcher: does this slug refer to this agent?
///
/// Matches `first-last` case-insensitively, treating everything after the
/// first hyphen as the last name, or matches the raw agent id. Only active
/// agents resolve.
pub fn slug_matches_agent(slug: &str, agent: &Agent) -> bool {
    if agent.status != AgentStatus::Active {
        return false;
    }

    if slug == agent.id {
        return true;
    }

    match slug.split_once('-') {
        Some((first, last)) => {
            first.eq_ignore_ascii_case(&agent.first_name)
                && last.eq_ignore_ascii_case(&agent.last_name)
        }
        None => false,
    }
}
