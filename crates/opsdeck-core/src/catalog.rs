//! Pure list operations shared by the catalog-style pages: filtering,
//! counting, and the handful of in-memory mutations the UI performs.

use crate::types::{Credential, Integration, Notification, Template};

/// Pseudo-category matching every entry.
pub const ALL_CATEGORY: &str = "All";

// ---------------------------------------------------------------------------
// Integrations
// ---------------------------------------------------------------------------

/// Case-insensitive substring match on name or description, combined with an
/// exact category match. `All` (or empty) passes every category.
pub fn filter_integrations<'a>(
    tools: &'a [Integration],
    query: &str,
    category: &str,
) -> Vec<&'a Integration> {
    let query = query.to_lowercase();
    tools
        .iter()
        .filter(|t| {
            let matches_search = query.is_empty()
                || t.name.to_lowercase().contains(&query)
                || t.description.to_lowercase().contains(&query);
            let matches_category =
                category.is_empty() || category == ALL_CATEGORY || t.category == category;
            matches_search && matches_category
        })
        .collect()
}

/// Distinct categories in catalog order, prefixed with [`ALL_CATEGORY`].
pub fn integration_categories(tools: &[Integration]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORY.to_string()];
    for t in tools {
        if !out.iter().any(|c| c == &t.category) {
            out.push(t.category.clone());
        }
    }
    out
}

pub fn connected_count(tools: &[Integration]) -> usize {
    tools.iter().filter(|t| t.connected).count()
}

/// `(connected, total)` for one category.
pub fn category_counts(tools: &[Integration], category: &str) -> (usize, usize) {
    let in_category: Vec<_> = tools.iter().filter(|t| t.category == category).collect();
    let connected = in_category.iter().filter(|t| t.connected).count();
    (connected, in_category.len())
}

/// Flip the `connected` flag of one tool. Returns the new state, or `None`
/// when the id is unknown.
pub fn toggle_connection(tools: &mut [Integration], id: &str) -> Option<bool> {
    let tool = tools.iter_mut().find(|t| t.id == id)?;
    tool.connected = !tool.connected;
    Some(tool.connected)
}

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

/// Template search also looks inside the tool list, matching the web UI.
pub fn filter_templates<'a>(
    templates: &'a [Template],
    query: &str,
    category: &str,
) -> Vec<&'a Template> {
    let query = query.to_lowercase();
    templates
        .iter()
        .filter(|t| {
            let matches_category =
                category.is_empty() || category == "all" || t.category == category;
            let matches_search = query.is_empty()
                || t.title.to_lowercase().contains(&query)
                || t.description.to_lowercase().contains(&query)
                || t.tools.iter().any(|tool| tool.to_lowercase().contains(&query));
            matches_category && matches_search
        })
        .collect()
}

/// Distinct template categories in fixture order, prefixed with "all".
pub fn template_categories(templates: &[Template]) -> Vec<String> {
    let mut out = vec!["all".to_string()];
    for t in templates {
        if !out.iter().any(|c| c == &t.category) {
            out.push(t.category.clone());
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Credentials
// ---------------------------------------------------------------------------

/// Remove one credential by id. Returns whether anything was removed.
pub fn delete_credential(credentials: &mut Vec<Credential>, id: &str) -> bool {
    let before = credentials.len();
    credentials.retain(|c| c.id != id);
    credentials.len() != before
}

pub fn distinct_services(credentials: &[Credential]) -> usize {
    let services: std::collections::BTreeSet<_> =
        credentials.iter().map(|c| c.service.as_str()).collect();
    services.len()
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

/// Mark one notification read. Returns whether the flag actually flipped.
pub fn mark_notification_read(notifications: &mut [Notification], id: &str) -> bool {
    match notifications.iter_mut().find(|n| n.id == id) {
        Some(n) if !n.read => {
            n.read = true;
            true
        }
        _ => false,
    }
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
