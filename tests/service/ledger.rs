use sarpedon::server::{error::Error, service::ledger::ScoreLedger};
use sarpedon_test_utils::prelude::*;

use crate::util::{score_event, session_for};

/// Expect an appended event to show up in the team's history next to the earlier ones
#[tokio::test]
async fn appended_event_appears_in_history() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_score_tables()
        .with_team("t1", "Alpha")
        .build()
        .await?;
    let session = session_for(&test.db);
    let ledger = ScoreLedger::new(&session);
    let first = score_event("t1", "web", 10, 5);
    let second = score_event("t1", "web", 20, 7);

    ledger.append(&first).await.unwrap();
    let before = ledger.query_history("Alpha", Some("web")).await.unwrap();
    ledger.append(&second).await.unwrap();
    let after = ledger.query_history("Alpha", Some("web")).await.unwrap();

    assert_eq!(before, vec![first.clone()]);
    assert_eq!(after, vec![first, second]);

    Ok(())
}

/// Expect the history sorted by time even when events were appended out of order
#[tokio::test]
async fn history_is_sorted_by_time() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_score_tables()
        .with_team("t1", "Alpha")
        .build()
        .await?;
    let session = session_for(&test.db);
    let ledger = ScoreLedger::new(&session);

    for (time, points) in [(30, 9), (10, 5), (20, 7)] {
        ledger
            .append(&score_event("t1", "web", time, points))
            .await
            .unwrap();
    }
    ledger.append(&score_event("t1", "db", 15, 1)).await.unwrap();

    let web = ledger.query_history("Alpha", Some("web")).await.unwrap();
    let all = ledger.query_history("t1", None).await.unwrap();

    let points: Vec<i32> = web.iter().map(|e| e.points).collect();
    assert_eq!(points, vec![5, 7, 9]);
    let times: Vec<i64> = all.iter().map(|e| e.time.timestamp()).collect();
    assert_eq!(times, vec![10, 15, 20, 30]);

    Ok(())
}

/// Expect TeamNotFound rather than an empty history for an unregistered team
#[tokio::test]
async fn unknown_team_is_an_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_score_tables()
        .with_team("t1", "Alpha")
        .build()
        .await?;
    let session = session_for(&test.db);

    let result = ScoreLedger::new(&session).query_history("Zulu", None).await;

    assert!(matches!(result, Err(Error::TeamNotFound(ref name)) if name == "Zulu"));

    Ok(())
}

/// Expect a store failure to surface instead of being swallowed
#[tokio::test]
async fn append_fails_without_ledger_table() -> Result<(), TestError> {
    let test = TestBuilder::new().with_table(entity::prelude::Team).build().await?;
    let session = session_for(&test.db);

    let result = ScoreLedger::new(&session)
        .append(&score_event("t1", "web", 10, 5))
        .await;

    assert!(result.is_err());

    Ok(())
}
