use actix_web::rt::task::JoinHandle;
use chrono::{DateTime, Utc};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;
use tracing::{debug, info};

use crate::dashboard::alerts::{Alert, Priority, classify};
use crate::model::driving_licence::DrivingLicence;
use crate::model::leave_request::LeaveRequest;
use crate::model::visa::Visa;
use crate::source::{RecordSource, fetch_or_empty};

/// The alert list from the latest completed cycle.
#[derive(Debug, Clone, Default)]
pub struct AlertSnapshot {
    pub alerts: Vec<Alert>,
    /// `None` until the first cycle completes.
    pub refreshed_at: Option<DateTime<Utc>>,
}

/// Latest alert snapshot, shared between the poller and request handlers.
/// Each cycle replaces the snapshot wholesale.
#[derive(Debug, Default)]
pub struct AlertFeed {
    snapshot: RwLock<Arc<AlertSnapshot>>,
}

impl AlertFeed {
    pub fn snapshot(&self) -> Arc<AlertSnapshot> {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn publish(&self, alerts: Vec<Alert>, refreshed_at: DateTime<Utc>) {
        let next = Arc::new(AlertSnapshot {
            alerts,
            refreshed_at: Some(refreshed_at),
        });
        *self.snapshot.write().unwrap_or_else(PoisonError::into_inner) = next;
    }
}

/// One fetch cycle: read the three collections concurrently, classify,
/// publish. Returns the number of alerts published.
pub async fn refresh<S: RecordSource>(source: &S, feed: &AlertFeed, now: DateTime<Utc>) -> usize {
    let (leaves, visas, licences) = futures::join!(
        fetch_or_empty::<LeaveRequest, S>(source),
        fetch_or_empty::<Visa, S>(source),
        fetch_or_empty::<DrivingLicence, S>(source),
    );

    let alerts = classify(now, &leaves, &visas, &licences);
    let total = alerts.len();
    let high = alerts
        .iter()
        .filter(|a| a.priority == Priority::High)
        .count();

    info!(total, high, "Notification feed refreshed");
    feed.publish(alerts, now);
    total
}

/// Owns the polling task. Dropping or cancelling the handle stops it.
#[derive(Debug)]
pub struct PollerHandle {
    task: JoinHandle<()>,
}

impl PollerHandle {
    pub fn cancel(self) {
        // Drop aborts the task.
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        debug!("Stopping notification poller");
        self.task.abort();
    }
}

/// Refreshes `feed` now and then once per `every` on the current actix
/// runtime.
pub fn spawn_poller<S: RecordSource>(
    source: Arc<S>,
    feed: Arc<AlertFeed>,
    every: Duration,
) -> PollerHandle {
    info!(interval_secs = every.as_secs(), "Starting notification poller");

    let task = actix_web::rt::spawn(async move {
        let mut ticker = actix_web::rt::time::interval(every);
        loop {
            ticker.tick().await;
            refresh(source.as_ref(), &feed, Utc::now()).await;
        }
    });

    PollerHandle { task }
}
