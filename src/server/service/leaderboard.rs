use std::{borrow::Cow, fmt::Write};

use crate::server::{
    data::{scoreboard::ScoreboardRepository, session::StoreSession},
    error::{store::StoreError, Error},
    model::{
        image::ScoredImage,
        score::{LeaderboardEntry, ScoreKey},
    },
    service::resolve_team,
};

/// Header row of the CSV export
pub const CSV_HEADER: &str = "Email,Alias,Team Id,Image,Score,Play Time,Elapsed Time";

/// Read and export operations over the materialized scoreboard.
pub struct LeaderboardService<'a> {
    session: &'a StoreSession,
    images: &'a [ScoredImage],
}

impl<'a> LeaderboardService<'a> {
    /// Creates a new instance of [`LeaderboardService`]
    ///
    /// # Arguments
    /// - `session` - Shared store session
    /// - `images` - Configured scored images, in the order per-team listings are returned in
    pub fn new(session: &'a StoreSession, images: &'a [ScoredImage]) -> Self {
        Self { session, images }
    }

    /// Gets every scoreboard entry in store scan order
    pub async fn list_all(&self) -> Result<Vec<LeaderboardEntry>, StoreError> {
        let db = self.session.ensure_connection().await?;

        ScoreboardRepository::new(&db).get_all().await
    }

    /// Gets a team's scoreboard entries
    ///
    /// With `image_name` the result is the single entry for that slot, or empty. Without it the
    /// result holds one entry per configured image the team has a score for, in configured
    /// image order. Entries for images that are no longer configured are left out.
    ///
    /// # Returns
    /// - `Ok(Vec<LeaderboardEntry>)` - The team's entries, possibly empty
    /// - `Err(Error::TeamNotFound)` - The team name is not registered
    /// - `Err(Error::StoreError)` - The store could not be reached or queried
    pub async fn list_for_team(
        &self,
        team_name: &str,
        image_name: Option<&str>,
    ) -> Result<Vec<LeaderboardEntry>, Error> {
        let db = self.session.ensure_connection().await?;
        let team = resolve_team(&db, team_name).await?;
        let repo = ScoreboardRepository::new(&db);

        if let Some(image_name) = image_name {
            let entry = repo.get_by_key(&ScoreKey::new(team.id, image_name)).await?;

            return Ok(entry.into_iter().collect());
        }

        let mut entries = repo.get_by_team(&team.id).await?;
        let mut ordered = Vec::with_capacity(entries.len());

        for image in self.images {
            if let Some(position) = entries.iter().position(|e| e.image.name == image.name) {
                ordered.push(entries.swap_remove(position));
            }
        }

        Ok(ordered)
    }

    /// Renders the whole scoreboard as CSV, see [`render_csv`]
    pub async fn export_csv(&self) -> Result<String, StoreError> {
        let entries = self.list_all().await?;

        Ok(render_csv(&entries))
    }
}

/// Renders entries as CSV with a [`CSV_HEADER`] row, one row per entry in the given order.
///
/// Durations use the string forms precomputed when the event was recorded. Fields holding a
/// comma, quote or line break are quoted with inner quotes doubled, so every row keeps seven
/// columns. Every line, including the last, ends with a newline.
pub fn render_csv(entries: &[LeaderboardEntry]) -> String {
    let mut csv = String::with_capacity((entries.len() + 1) * 64);
    csv.push_str(CSV_HEADER);
    csv.push('\n');

    for entry in entries {
        // Writing to a String cannot fail
        let _ = writeln!(
            csv,
            "{},{},{},{},{},{},{}",
            csv_field(&entry.team.email),
            csv_field(&entry.team.alias),
            csv_field(&entry.team.id),
            csv_field(&entry.image.name),
            entry.points,
            csv_field(&entry.playtime_str),
            csv_field(&entry.elapsed_time_str)
        );
    }

    csv
}

fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains(&[',', '"', '\r', '\n'][..]) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}
