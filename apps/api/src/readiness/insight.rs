//! Insight text — templated advice from the role and its weak areas. No LLM involved.

use crate::readiness::taxonomy::{Category, Role};

const ALIGNED_MESSAGE: &str = "Your profile aligns well with common expectations for this role. \
    Focus on the areas above to stay sharp.";

/// Base tip per role.
pub fn role_tip(role: Role) -> &'static str {
    match role {
        Role::Backend => {
            "Most candidates fail Backend interviews due to weak DSA and System Design, \
             not resume formatting."
        }
        Role::FullStack => {
            "Full Stack roles often screen for both problem-solving and hands-on project depth \
             — gaps in either can hold you back."
        }
        Role::DataEngineer => {
            "Data Engineering interviews focus on data modeling, pipelines, and SQL; \
             missing fundamentals here is a common gap."
        }
    }
}

/// Builds the insight string. `role` is the caller's label; unknown labels use the Backend tip.
pub fn generate_insight(role: &str, weak_areas: &[Category]) -> String {
    let tip = role_tip(Role::resolve(role));
    let labels: Vec<&str> = weak_areas.iter().map(|c| c.label()).collect();

    match labels.len() {
        0 => ALIGNED_MESSAGE.to_string(),
        1 | 2 => format!(
            "Focus on {} to improve your readiness for {role} roles. {tip}",
            labels.join(" and ")
        ),
        _ => format!(
            "{tip} In your case, the main gaps are: {}.",
            labels[..3].join(", ")
        ),
    }
}
