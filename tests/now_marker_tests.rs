use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use rtripplanner::core::calculator::timeline::now_marker_percent;
use rtripplanner::core::now_marker::{Clock, NowMarkerTask};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Wall clock driven by tokio's (paused) timer.
struct TestClock {
    base: NaiveDateTime,
    started: Instant,
}

impl TestClock {
    fn at(date: NaiveDate, h: u32, m: u32, s: u32) -> Arc<Self> {
        Arc::new(Self {
            base: date.and_time(NaiveTime::from_hms_opt(h, m, s).unwrap()),
            started: Instant::now(),
        })
    }
}

impl Clock for TestClock {
    fn now(&self) -> NaiveDateTime {
        let elapsed = TimeDelta::from_std(self.started.elapsed()).unwrap();
        self.base + elapsed
    }
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
}

fn percent(h: u32, m: u32) -> Option<f64> {
    Some(now_marker_percent(NaiveTime::from_hms_opt(h, m, 0).unwrap()))
}

#[tokio::test(start_paused = true)]
async fn test_initial_marker_is_immediate() {
    let task = NowMarkerTask::spawn(day(1), TestClock::at(day(1), 10, 0, 0), Duration::from_secs(5));
    assert_eq!(task.current(), percent(10, 0));
    task.stop().await;
}

#[tokio::test(start_paused = true)]
async fn test_marker_moves_with_the_clock() {
    let task = NowMarkerTask::spawn(day(1), TestClock::at(day(1), 10, 0, 0), Duration::from_secs(5));
    let mut rx = task.subscribe();

    rx.changed().await.unwrap();
    assert_eq!(*rx.borrow_and_update(), percent(10, 1));

    rx.changed().await.unwrap();
    assert_eq!(*rx.borrow_and_update(), percent(10, 2));
    assert_eq!(task.current(), percent(10, 2));

    task.stop().await;
}

#[tokio::test(start_paused = true)]
async fn test_no_marker_on_past_logs() {
    let task = NowMarkerTask::spawn(day(1), TestClock::at(day(2), 10, 0, 0), Duration::from_secs(1));
    let mut rx = task.subscribe();
    assert_eq!(task.current(), None);

    let waited = tokio::time::timeout(Duration::from_secs(120), rx.changed()).await;
    assert!(waited.is_err(), "marker must not appear on a past log");
    task.stop().await;
}

#[tokio::test(start_paused = true)]
async fn test_marker_disappears_at_midnight() {
    let task = NowMarkerTask::spawn(day(1), TestClock::at(day(1), 23, 59, 30), Duration::from_secs(10));
    let mut rx = task.subscribe();
    assert_eq!(task.current(), percent(23, 59));

    rx.changed().await.unwrap();
    assert_eq!(*rx.borrow_and_update(), None);
    task.stop().await;
}

#[tokio::test(start_paused = true)]
async fn test_stop_closes_the_channel() {
    let task = NowMarkerTask::spawn(day(1), TestClock::at(day(1), 8, 0, 0), Duration::from_secs(1));
    let mut rx = task.subscribe();

    task.cancel();
    assert!(task.is_cancelled());
    task.stop().await;

    assert!(rx.changed().await.is_err());
}

#[tokio::test(start_paused = true)]
async fn test_drop_stops_the_task() {
    let task = NowMarkerTask::spawn(day(1), TestClock::at(day(1), 8, 0, 0), Duration::from_secs(1));
    let mut rx = task.subscribe();
    drop(task);

    let closed = tokio::time::timeout(Duration::from_secs(5), rx.changed()).await;
    assert!(matches!(closed, Ok(Err(_))));
}
