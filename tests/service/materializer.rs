use chrono::DateTime;
use sarpedon::server::{
    model::score::{LeaderboardEntry, ScoreKey},
    service::{
        leaderboard::LeaderboardService, ledger::ScoreLedger,
        materializer::LeaderboardMaterializer,
    },
};
use sarpedon_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::util::{score_event, session_for};

fn sorted(mut entries: Vec<LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    entries.sort_by_key(|entry| entry.key());
    entries
}

/// Expect the latest of three out-of-order events to hold the slot after a rebuild
#[tokio::test]
async fn rebuild_keeps_latest_event() -> Result<(), TestError> {
    let test = TestBuilder::new().with_score_tables().build().await?;
    let session = session_for(&test.db);
    let ledger = ScoreLedger::new(&session);
    for (time, points) in [(10, 5), (30, 9), (20, 7)] {
        ledger
            .append(&score_event("t1", "imgX", time, points))
            .await
            .unwrap();
    }

    let materializer = LeaderboardMaterializer::new(&session);
    let count = materializer.rebuild_all().await.unwrap();
    let entry = materializer
        .current_latest(&ScoreKey::new("t1", "imgX"))
        .await
        .unwrap();

    assert_eq!(count, 1);
    let entry = entry.unwrap();
    assert_eq!(entry.points, 9);
    assert_eq!(entry.time.timestamp(), 30);

    Ok(())
}

/// Expect exactly one entry per slot, each the maximal-time event of its slot
#[tokio::test]
async fn rebuild_yields_one_entry_per_slot() -> Result<(), TestError> {
    let test = TestBuilder::new().with_score_tables().build().await?;
    let session = session_for(&test.db);
    let ledger = ScoreLedger::new(&session);
    let events = [
        score_event("t1", "web", 10, 1),
        score_event("t1", "web", 40, 2),
        score_event("t1", "db", 20, 3),
        score_event("t2", "web", 50, 4),
        score_event("t2", "web", 30, 5),
        score_event("t1", "db", 5, 6),
    ];
    for event in &events {
        ledger.append(event).await.unwrap();
    }

    LeaderboardMaterializer::new(&session)
        .rebuild_all()
        .await
        .unwrap();
    let entries = sorted(
        LeaderboardService::new(&session, &[])
            .list_all()
            .await
            .unwrap(),
    );

    let expected = sorted(vec![
        LeaderboardEntry::from(events[1].clone()),
        LeaderboardEntry::from(events[2].clone()),
        LeaderboardEntry::from(events[3].clone()),
    ]);
    assert_eq!(entries, expected);

    Ok(())
}

/// Expect two rebuilds without new results in between to produce the same scoreboard
#[tokio::test]
async fn rebuild_is_idempotent() -> Result<(), TestError> {
    let test = TestBuilder::new().with_score_tables().build().await?;
    let session = session_for(&test.db);
    let ledger = ScoreLedger::new(&session);
    for (team, image, time, points) in [
        ("t1", "web", 10, 1),
        ("t1", "web", 10, 2),
        ("t2", "web", 20, 3),
        ("t2", "db", 30, 4),
    ] {
        ledger
            .append(&score_event(team, image, time, points))
            .await
            .unwrap();
    }
    let materializer = LeaderboardMaterializer::new(&session);
    let service = LeaderboardService::new(&session, &[]);

    materializer.rebuild_all().await.unwrap();
    let first = sorted(service.list_all().await.unwrap());
    materializer.rebuild_all().await.unwrap();
    let second = sorted(service.list_all().await.unwrap());

    assert_eq!(first.len(), 3);
    assert_eq!(first, second);

    Ok(())
}

/// Expect an empty ledger to rebuild into an empty scoreboard without error
#[tokio::test]
async fn rebuild_of_empty_ledger_is_empty() -> Result<(), TestError> {
    let test = TestBuilder::new().with_score_tables().build().await?;
    let session = session_for(&test.db);

    let count = LeaderboardMaterializer::new(&session).rebuild_all().await;
    let entries = LeaderboardService::new(&session, &[]).list_all().await;

    assert!(matches!(count, Ok(0)));
    assert!(matches!(entries, Ok(ref entries) if entries.is_empty()));

    Ok(())
}

/// Expect a rebuild to drop slots the ledger no longer supports
#[tokio::test]
async fn rebuild_discards_entries_not_in_ledger() -> Result<(), TestError> {
    let test = TestBuilder::new().with_score_tables().build().await?;
    let session = session_for(&test.db);
    let materializer = LeaderboardMaterializer::new(&session);
    materializer
        .upsert_one(&LeaderboardEntry::from(score_event("ghost", "web", 10, 5)))
        .await
        .unwrap();
    ScoreLedger::new(&session)
        .append(&score_event("t1", "web", 10, 5))
        .await
        .unwrap();

    materializer.rebuild_all().await.unwrap();

    let ghost = materializer
        .current_latest(&ScoreKey::new("ghost", "web"))
        .await
        .unwrap();
    assert!(ghost.is_none());

    Ok(())
}

/// Expect a failed rebuild to leave the previous scoreboard untouched
#[tokio::test]
async fn failed_rebuild_keeps_previous_scoreboard() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_score_tables().build().await?;
    let session = session_for(&test.db);
    let materializer = LeaderboardMaterializer::new(&session);
    let previous = LeaderboardEntry::from(score_event("t1", "web", 10, 5));
    materializer.upsert_one(&previous).await.unwrap();
    let time = DateTime::from_timestamp(20, 0).unwrap().naive_utc();
    test.results()
        .insert_raw("t1", "web", time, serde_json::json!({ "garbage": true }))
        .await?;

    let result = materializer.rebuild_all().await;

    assert!(result.is_err());
    let entries = LeaderboardService::new(&session, &[])
        .list_all()
        .await
        .unwrap();
    assert_eq!(entries, vec![previous]);

    Ok(())
}

/// Expect concurrent upserts for one slot to leave exactly one entry behind
#[tokio::test]
async fn concurrent_upserts_leave_one_entry() -> Result<(), TestError> {
    let test = TestBuilder::new().with_score_tables().build().await?;
    let session = session_for(&test.db);
    let first_session = session.clone();
    let second_session = session.clone();
    let first = LeaderboardEntry::from(score_event("t1", "web", 10, 5));
    let second = LeaderboardEntry::from(score_event("t1", "web", 20, 9));

    let (a, b) = tokio::join!(
        async {
            LeaderboardMaterializer::new(&first_session)
                .upsert_one(&first)
                .await
        },
        async {
            LeaderboardMaterializer::new(&second_session)
                .upsert_one(&second)
                .await
        },
    );

    assert!(a.is_ok());
    assert!(b.is_ok());
    let rows = entity::prelude::Scoreboard::find().count(&test.db).await?;
    assert_eq!(rows, 1);
    let entry = LeaderboardMaterializer::new(&session)
        .current_latest(&ScoreKey::new("t1", "web"))
        .await
        .unwrap()
        .unwrap();
    assert!(entry == first || entry == second);

    Ok(())
}

/// Expect many concurrent upserts across few slots to keep one entry per slot
#[tokio::test]
async fn concurrent_upserts_across_slots() -> Result<(), TestError> {
    let test = TestBuilder::new().with_score_tables().build().await?;
    let session = session_for(&test.db);

    let mut handles = Vec::new();
    for i in 0..20 {
        let session = session.clone();
        let image = if i % 2 == 0 { "web" } else { "db" };
        let entry = LeaderboardEntry::from(score_event("t1", image, i, i as i32));
        handles.push(tokio::spawn(async move {
            LeaderboardMaterializer::new(&session)
                .upsert_one(&entry)
                .await
        }));
    }
    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }

    let rows = entity::prelude::Scoreboard::find().count(&test.db).await?;
    assert_eq!(rows, 2);

    Ok(())
}

/// Expect Ok(None) for a slot nothing has been materialized for
#[tokio::test]
async fn current_latest_of_empty_slot_is_none() -> Result<(), TestError> {
    let test = TestBuilder::new().with_score_tables().build().await?;
    let session = session_for(&test.db);

    let result = LeaderboardMaterializer::new(&session)
        .current_latest(&ScoreKey::new("t1", "web"))
        .await;

    assert!(matches!(result, Ok(None)));

    Ok(())
}

/// Expect a store error, not Ok(None), when the scoreboard can't be read
#[tokio::test]
async fn current_latest_surfaces_store_errors() -> Result<(), TestError> {
    let test = TestBuilder::new().with_table(entity::prelude::Results).build().await?;
    let session = session_for(&test.db);

    let result = LeaderboardMaterializer::new(&session)
        .current_latest(&ScoreKey::new("t1", "web"))
        .await;

    assert!(result.is_err());

    Ok(())
}
