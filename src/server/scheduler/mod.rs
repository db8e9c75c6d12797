//! Scheduler for periodic scoreboard rebuilds.
//!
//! Point upserts keep the scoreboard current between rebuilds; the scheduled full rebuild
//! repairs any slot a failed or interrupted upsert left behind, since the ledger always holds
//! every event.

use std::sync::Arc;

use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::{store::StoreError, Error},
    model::app::AppState,
    service::materializer::LeaderboardMaterializer,
};

/// Job scheduler running the periodic scoreboard jobs.
pub struct Scheduler {
    state: AppState,
    sched: JobScheduler,
}

impl Scheduler {
    /// Creates a new instance of [`Scheduler`].
    ///
    /// # Returns
    /// - `Ok(Scheduler)` - Successfully created scheduler instance
    /// - `Err(Error)` - Failed to initialize the underlying job scheduler
    pub async fn new(state: AppState) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;
        Ok(Self { state, sched })
    }

    /// Registers the rebuild job and starts the scheduler.
    ///
    /// # Arguments
    /// - `rebuild_cron` - Cron expression for the full rebuild (e.g. `"0 */5 * * * *"`)
    ///
    /// # Returns
    /// - `Ok(JobScheduler)` - The running scheduler, shut it down to stop the jobs
    /// - `Err(Error)` - Invalid cron expression or the scheduler failed to start
    pub async fn start(mut self, rebuild_cron: &str) -> Result<JobScheduler, Error> {
        self.schedule_job(rebuild_cron, "scoreboard rebuild", rebuild_scoreboard)
            .await?;

        self.sched.start().await?;

        Ok(self.sched)
    }

    /// Schedules a recurring job with the specified cron expression.
    ///
    /// The job receives a clone of the application state and logs the count it returns, or the
    /// error it fails with.
    pub async fn schedule_job<F, Fut>(
        &mut self,
        cron: &str,
        name: &str,
        function: F,
    ) -> Result<(), Error>
    where
        F: Fn(AppState) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<usize, StoreError>> + Send + 'static,
    {
        let state = self.state.clone();
        let name = name.to_string();
        let function = Arc::new(function);

        self.sched
            .add(Job::new_async(cron, move |_, _| {
                let state = state.clone();
                let name = name.clone();
                let function = Arc::clone(&function);

                Box::pin(async move {
                    match function(state).await {
                        Ok(count) => tracing::info!("Finished {} with {} entries", name, count),
                        Err(e) if e.is_connection() => tracing::warn!(
                            "Score store unreachable for {}, retrying next run: {}",
                            name,
                            e
                        ),
                        Err(e) => tracing::error!("Error running {}: {:?}", name, e),
                    }
                })
            })?)
            .await?;

        Ok(())
    }
}

async fn rebuild_scoreboard(state: AppState) -> Result<usize, StoreError> {
    LeaderboardMaterializer::new(&state.session)
        .rebuild_all()
        .await
}
