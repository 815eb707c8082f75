//! End-to-end countdown tests: controller, persisted record and ticker.
//!
//! Ticker tests run on paused tokio time so each second is virtual.

use std::{fs, sync::Arc, time::Duration};

use countdown_timer::{
    console::countdown_notice_task,
    state::{
        CountdownController, CountdownDuration, CountdownEvent, RunState, StartOutcome, StopOutcome,
        Unit,
    },
    storage::RecordStore,
    tasks::countdown_ticker_task,
};
use tempfile::TempDir;
use tokio::io::{AsyncBufReadExt, BufReader};

fn setup(saved: Option<&str>) -> (TempDir, Arc<CountdownController>) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("countdown.txt");
    if let Some(saved) = saved {
        fs::write(&path, saved).unwrap();
    }
    let controller = Arc::new(CountdownController::new(RecordStore::new(path)));
    (dir, controller)
}

fn secs(seconds: u64) -> CountdownDuration {
    CountdownDuration::from_seconds(seconds)
}

fn saved(dir: &TempDir) -> String {
    fs::read_to_string(dir.path().join("countdown.txt")).unwrap()
}

#[test]
fn remaining_time_survives_restart() {
    let (dir, controller) = setup(None);
    controller.select_unit(Unit::Hours).unwrap();
    controller.adjust(2).unwrap();
    controller.select_unit(Unit::Seconds).unwrap();
    controller.adjust(30).unwrap();
    drop(controller);

    let reopened = CountdownController::new(RecordStore::new(dir.path().join("countdown.txt")));
    assert_eq!(reopened.render().unwrap(), "02:00:30");
    assert_eq!(reopened.run_state().unwrap(), RunState::Idle);
}

#[test]
fn adjustments_commute_on_total_seconds() {
    let (_dir, first) = setup(Some("00:20:00"));
    first.select_unit(Unit::Hours).unwrap();
    first.adjust(1).unwrap();
    first.select_unit(Unit::Minutes).unwrap();
    first.adjust(-15).unwrap();

    let (_dir2, second) = setup(Some("00:20:00"));
    second.select_unit(Unit::Minutes).unwrap();
    second.adjust(-15).unwrap();
    second.select_unit(Unit::Hours).unwrap();
    second.adjust(1).unwrap();

    assert_eq!(first.remaining().unwrap(), second.remaining().unwrap());
    assert_eq!(first.render().unwrap(), "01:05:00");
}

#[tokio::test(start_paused = true)]
async fn ticker_counts_down_to_completion() {
    let (dir, controller) = setup(Some("00:00:02"));
    let mut events = controller.subscribe();
    tokio::spawn(countdown_ticker_task(Arc::clone(&controller)));

    let started_at = tokio::time::Instant::now();
    assert_eq!(controller.start().unwrap(), StartOutcome::Started);

    let mut seen = Vec::new();
    tokio::time::timeout(Duration::from_secs(10), async {
        loop {
            let event = events.recv().await.unwrap();
            seen.push(event.clone());
            if event == CountdownEvent::Completed {
                break;
            }
        }
    })
    .await
    .expect("countdown never completed");

    let elapsed = started_at.elapsed();
    assert!(elapsed >= Duration::from_secs(2) && elapsed < Duration::from_secs(3));
    assert_eq!(
        seen,
        vec![
            CountdownEvent::Started(secs(2)),
            CountdownEvent::Ticked(secs(1)),
            CountdownEvent::Completed,
        ]
    );
    assert_eq!(controller.run_state().unwrap(), RunState::Idle);
    assert_eq!(saved(&dir), "00:00:00");

    // No further ticks once idle
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(events.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn stop_halts_ticking_and_restart_resumes() {
    let (dir, controller) = setup(Some("00:00:10"));
    tokio::spawn(countdown_ticker_task(Arc::clone(&controller)));

    controller.start().unwrap();
    tokio::time::sleep(Duration::from_millis(2500)).await;
    assert_eq!(controller.remaining().unwrap().as_seconds(), 8);

    assert_eq!(controller.stop().unwrap(), StopOutcome::Stopped(secs(8)));
    assert_eq!(saved(&dir), "00:00:08");

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(controller.remaining().unwrap().as_seconds(), 8);

    controller.start().unwrap();
    tokio::time::sleep(Duration::from_millis(3500)).await;
    assert_eq!(controller.remaining().unwrap().as_seconds(), 5);
    assert_eq!(saved(&dir), "00:00:05");
}

#[tokio::test(start_paused = true)]
async fn adjust_while_running_is_counted_down() {
    let (_dir, controller) = setup(Some("00:00:03"));
    tokio::spawn(countdown_ticker_task(Arc::clone(&controller)));

    controller.start().unwrap();
    tokio::time::sleep(Duration::from_millis(1500)).await;
    controller.select_unit(Unit::Minutes).unwrap();
    controller.adjust(1).unwrap();
    assert_eq!(controller.remaining().unwrap().as_seconds(), 62);

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert_eq!(controller.remaining().unwrap().as_seconds(), 60);
    assert_eq!(controller.run_state().unwrap(), RunState::Running);
}

#[tokio::test]
async fn notice_task_reports_completion() {
    let (_dir, controller) = setup(Some("00:00:01"));
    let (writer, reader) = tokio::io::duplex(1024);
    tokio::spawn(countdown_notice_task(Arc::clone(&controller), writer));
    // Let the notice task subscribe before the countdown changes
    tokio::task::yield_now().await;
    tokio::time::sleep(Duration::from_millis(10)).await;

    controller.start().unwrap();
    controller.tick().unwrap();

    let mut lines = BufReader::new(reader).lines();
    let line = tokio::time::timeout(Duration::from_secs(5), lines.next_line())
        .await
        .expect("no notice printed")
        .unwrap();
    assert_eq!(line.as_deref(), Some("Countdown Complete"));
}

#[tokio::test(start_paused = true)]
async fn console_shows_remaining_time_on_each_tick() {
    let (_dir, controller) = setup(Some("00:00:05"));
    let (writer, reader) = tokio::io::duplex(1024);
    tokio::spawn(countdown_notice_task(Arc::clone(&controller), writer));
    tokio::spawn(countdown_ticker_task(Arc::clone(&controller)));
    tokio::task::yield_now().await;

    controller.start().unwrap();
    tokio::time::sleep(Duration::from_millis(3500)).await;

    let mut lines = BufReader::new(reader).lines();
    let mut printed = Vec::new();
    for _ in 0..3 {
        let line = tokio::time::timeout(Duration::from_secs(1), lines.next_line())
            .await
            .expect("tick not printed")
            .unwrap();
        printed.push(line.unwrap());
    }
    assert_eq!(
        printed,
        vec![
            "Remaining Time: 00:00:04",
            "Remaining Time: 00:00:03",
            "Remaining Time: 00:00:02",
        ]
    );
    assert_eq!(controller.render().unwrap(), "00:00:02");
}
