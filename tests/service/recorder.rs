use sarpedon::server::{
    model::score::{LeaderboardEntry, ScoreKey},
    service::{
        leaderboard::LeaderboardService,
        materializer::LeaderboardMaterializer,
        recorder::{RecordOutcome, ScoreRecorder},
    },
};
use sarpedon_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::util::{score_event, session_for};

/// Expect the first result for a slot to be promoted onto an empty slot
#[tokio::test]
async fn first_result_is_promoted() -> Result<(), TestError> {
    let test = TestBuilder::new().with_score_tables().build().await?;
    let session = session_for(&test.db);
    let event = score_event("t1", "web", 10, 5);

    let outcome = ScoreRecorder::new(&session).record(event.clone()).await;

    assert_eq!(outcome.unwrap(), RecordOutcome::Promoted { previous: None });
    let entry = LeaderboardMaterializer::new(&session)
        .current_latest(&event.key())
        .await
        .unwrap();
    assert_eq!(entry, Some(LeaderboardEntry::from(event)));

    Ok(())
}

/// Expect a newer result to replace the slot and report the previous points
#[tokio::test]
async fn newer_result_replaces_slot() -> Result<(), TestError> {
    let test = TestBuilder::new().with_score_tables().build().await?;
    let session = session_for(&test.db);
    let recorder = ScoreRecorder::new(&session);

    recorder.record(score_event("t1", "web", 10, 5)).await.unwrap();
    let outcome = recorder.record(score_event("t1", "web", 20, 8)).await;

    assert_eq!(
        outcome.unwrap(),
        RecordOutcome::Promoted { previous: Some(5) }
    );
    let entry = LeaderboardMaterializer::new(&session)
        .current_latest(&ScoreKey::new("t1", "web"))
        .await
        .unwrap();
    assert_eq!(entry.map(|e| e.points), Some(8));

    Ok(())
}

/// Expect an older result to be kept in the ledger but not reach the scoreboard
#[tokio::test]
async fn older_result_is_stale() -> Result<(), TestError> {
    let test = TestBuilder::new().with_score_tables().build().await?;
    let session = session_for(&test.db);
    let recorder = ScoreRecorder::new(&session);

    recorder.record(score_event("t1", "web", 20, 8)).await.unwrap();
    let outcome = recorder.record(score_event("t1", "web", 10, 5)).await;

    assert_eq!(outcome.unwrap(), RecordOutcome::Stale);
    let results = entity::prelude::Results::find().count(&test.db).await?;
    assert_eq!(results, 2);
    let entry = LeaderboardMaterializer::new(&session)
        .current_latest(&ScoreKey::new("t1", "web"))
        .await
        .unwrap();
    assert_eq!(entry.map(|e| e.points), Some(8));

    Ok(())
}

/// Expect incremental recording and a full rebuild to agree, ties included
#[tokio::test]
async fn recording_matches_full_rebuild() -> Result<(), TestError> {
    let test = TestBuilder::new().with_score_tables().build().await?;
    let session = session_for(&test.db);
    let recorder = ScoreRecorder::new(&session);
    for (team, image, time, points) in [
        ("t1", "web", 10, 1),
        ("t1", "web", 30, 2),
        ("t1", "web", 20, 3),
        ("t1", "web", 30, 4),
        ("t2", "db", 5, 5),
    ] {
        recorder
            .record(score_event(team, image, time, points))
            .await
            .unwrap();
    }
    let service = LeaderboardService::new(&session, &[]);
    let mut incremental = service.list_all().await.unwrap();
    incremental.sort_by_key(|entry| entry.key());

    LeaderboardMaterializer::new(&session)
        .rebuild_all()
        .await
        .unwrap();
    let mut rebuilt = service.list_all().await.unwrap();
    rebuilt.sort_by_key(|entry| entry.key());

    assert_eq!(incremental, rebuilt);
    let web = incremental.iter().find(|entry| entry.image.name == "web");
    assert_eq!(web.map(|entry| entry.points), Some(4));

    Ok(())
}
