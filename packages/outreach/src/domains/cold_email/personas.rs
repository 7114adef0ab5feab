//! Sales personas for ComplAI, an AI-driven SOC 2 compliance platform.

use crate::domains::agents::AgentSpec;

pub const DEFAULT_PROMPT: &str = "Write a cold email for sales";
pub const DEFAULT_SUBJECT: &str = "Best cold email";

const MANAGER_NAME: &str = "Sales Manager";

const PROFESSIONAL: &str = "You are a professional sales representative at ComplAI, an AI-powered \
SaaS platform designed to streamline SOC 2 compliance and audit readiness. \
Your focus is on writing serious, polished cold emails tailored for a corporate audience.";

const WITTY: &str = "You are a witty and charismatic sales agent at ComplAI, an AI-driven \
SaaS solution for SOC 2 compliance and audit prep. Your job is to craft cold emails \
that are clever, humorous, and attention-grabbing, the kind people actually want to read and reply to.";

const CONCISE: &str = "You are a time-conscious sales rep at ComplAI, a company offering an AI-based \
SaaS tool for SOC 2 compliance and audit preparation. Your cold emails are short, sharp, \
and straight to the point. No fluff, just value.";

/// The three writers, named `Agent1`..`Agent3` in this order.
pub fn sales_agents(model: &str) -> Vec<AgentSpec> {
    [PROFESSIONAL, WITTY, CONCISE]
        .into_iter()
        .enumerate()
        .map(|(i, instructions)| AgentSpec::new(format!("Agent{}", i + 1), instructions, model))
        .collect()
}

/// The manager that picks one of `candidate_count` drafts.
pub fn sales_manager(model: &str, candidate_count: usize) -> AgentSpec {
    let instructions = format!(
        "You are a sales force manager. You will be provided with {n} emails written by {n} agents. \
         You need to choose the best email.",
        n = candidate_count
    );
    AgentSpec::new(MANAGER_NAME, instructions, model)
}
