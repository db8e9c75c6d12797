//! Factory functions for generating team registry models.
//!
//! These are in-memory model instances that don't require database interaction.

use chrono::Utc;

/// Create a team registry model with standard test values.
///
/// # Arguments
/// - `team_id` - Stable team identifier
/// - `alias` - Display name
///
/// # Returns
/// - `entity::team::Model` - A team with email `{team_id}@example.com` and no score yet
pub fn team(team_id: &str, alias: &str) -> entity::team::Model {
    entity::team::Model {
        team_id: team_id.to_string(),
        alias: alias.to_string(),
        email: format!("{}@example.com", team_id),
        score: 0,
        image_count: 0,
        updated_at: Some(Utc::now().naive_utc()),
    }
}
