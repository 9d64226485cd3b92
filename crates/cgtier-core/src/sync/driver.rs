use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::playlist::PlaylistChunk;
use crate::sync::{
    FixedDelay, LogSink, PlaylistAction, PlaylistForm, PlaylistHost, RequestThrottle,
};
use crate::tierlist::PlayStyle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    Success,
    Failed(String),
}

/// Result of one request in a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemReport {
    pub slot: usize,
    pub action: PlaylistAction,
    pub outcome: ItemOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// One entry per request, in the order they were sent
    pub items: Vec<ItemReport>,
    /// Whether the page was reloaded after the run
    pub reloaded: bool,
}

impl SyncReport {
    pub fn is_success(&self) -> bool {
        self.items
            .iter()
            .all(|item| item.outcome == ItemOutcome::Success)
    }

    pub fn failed_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.outcome != ItemOutcome::Success)
            .count()
    }
}

/// Runs save/delete batches one request at a time.
///
/// A failed request is recorded and the batch continues. Only one run may be
/// active per driver; starting another while one is in flight is rejected.
pub struct SyncDriver<T: RequestThrottle = FixedDelay> {
    throttle: T,
    running: AtomicBool,
}

struct RunGuard<'a> {
    running: &'a AtomicBool,
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Release);
    }
}

struct PendingRequest {
    form: PlaylistForm,
    announce: String,
}

impl Default for SyncDriver<FixedDelay> {
    fn default() -> Self {
        Self::new(FixedDelay::default())
    }
}

impl<T: RequestThrottle> SyncDriver<T> {
    pub fn new(throttle: T) -> Self {
        Self {
            throttle,
            running: AtomicBool::new(false),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    fn begin(&self) -> Result<RunGuard<'_>> {
        self.running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| Error::RunInProgress)?;
        Ok(RunGuard {
            running: &self.running,
        })
    }

    /// Save every chunk to its slot
    pub fn overwrite<H, L>(
        &self,
        host: &mut H,
        log: &mut L,
        play_style: PlayStyle,
        chunks: &[PlaylistChunk],
    ) -> Result<SyncReport>
    where
        H: PlaylistHost + ?Sized,
        L: LogSink + ?Sized,
    {
        let requests = chunks
            .iter()
            .map(|chunk| PendingRequest {
                form: PlaylistForm::save(play_style, chunk),
                announce: format!("Saving playlist {}...", chunk.name),
            })
            .collect();
        self.run(host, log, requests)
    }

    /// Clear slots `0..playlist_count`
    pub fn delete_all<H, L>(
        &self,
        host: &mut H,
        log: &mut L,
        play_style: PlayStyle,
        playlist_count: usize,
    ) -> Result<SyncReport>
    where
        H: PlaylistHost + ?Sized,
        L: LogSink + ?Sized,
    {
        let requests = (0..playlist_count)
            .map(|index| PendingRequest {
                form: PlaylistForm::delete(play_style, index),
                announce: format!("Deleting playlist {}...", index + 1),
            })
            .collect();
        self.run(host, log, requests)
    }

    fn run<H, L>(
        &self,
        host: &mut H,
        log: &mut L,
        requests: Vec<PendingRequest>,
    ) -> Result<SyncReport>
    where
        H: PlaylistHost + ?Sized,
        L: LogSink + ?Sized,
    {
        let _guard = self.begin()?;
        let mut report = SyncReport::default();

        for request in requests {
            log.append(&request.announce);
            let outcome = match host.send(&request.form) {
                Ok(()) => {
                    log.append(match request.form.action {
                        PlaylistAction::Save => "Save successful",
                        PlaylistAction::Delete => "Delete successful",
                    });
                    ItemOutcome::Success
                }
                Err(e) => {
                    warn!(
                        "{} of playlist {} failed: {}",
                        request.form.action.as_str(),
                        request.form.index,
                        e
                    );
                    log.append(&format!("Error: {}", e));
                    ItemOutcome::Failed(e.to_string())
                }
            };
            report.items.push(ItemReport {
                slot: request.form.index,
                action: request.form.action,
                outcome,
            });
            self.throttle.wait();
        }

        if report.is_success() {
            match host.reload() {
                Ok(()) => report.reloaded = true,
                Err(e) => {
                    warn!("Page reload failed: {}", e);
                    log.append(&format!("Error: {}", e));
                }
            }
        }

        info!(
            "Run finished: {} requests, {} failed",
            report.items.len(),
            report.failed_count()
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::time::Duration;

    use crate::sync::NoDelay;

    #[derive(Default)]
    struct CountingThrottle {
        waits: Cell<usize>,
    }

    impl RequestThrottle for CountingThrottle {
        fn delay(&self) -> Option<Duration> {
            Some(Duration::from_millis(250))
        }

        fn wait(&self) {
            self.waits.set(self.waits.get() + 1);
        }
    }

    #[derive(Default)]
    struct MockHost {
        sent: Vec<PlaylistForm>,
        fail_on: Vec<usize>,
        reloads: usize,
    }

    impl PlaylistHost for MockHost {
        fn send(&mut self, form: &PlaylistForm) -> Result<()> {
            self.sent.push(form.clone());
            if self.fail_on.contains(&self.sent.len()) {
                return Err(Error::Http("HTTP 500 error".to_string()));
            }
            Ok(())
        }

        fn reload(&mut self) -> Result<()> {
            self.reloads += 1;
            Ok(())
        }
    }

    fn chunks(count: usize) -> Vec<PlaylistChunk> {
        (0..count)
            .map(|i| PlaylistChunk {
                slot: i,
                name: format!("Hard A {}", i + 1),
                song_ids: vec![i as u32 + 100],
            })
            .collect()
    }

    #[test]
    fn test_overwrite_success_reloads() {
        let driver = SyncDriver::new(NoDelay);
        let mut host = MockHost::default();
        let mut log: Vec<String> = Vec::new();

        let report = driver
            .overwrite(&mut host, &mut log, PlayStyle::Sp, &chunks(2))
            .unwrap();

        assert!(report.is_success());
        assert!(report.reloaded);
        assert_eq!(host.reloads, 1);
        assert_eq!(host.sent.len(), 2);
        assert_eq!(host.sent[1].action, PlaylistAction::Save);
        assert_eq!(
            log,
            vec![
                "Saving playlist Hard A 1...",
                "Save successful",
                "Saving playlist Hard A 2...",
                "Save successful",
            ]
        );
        assert!(!driver.is_running());
    }

    #[test]
    fn test_failure_continues_without_reload() {
        let driver = SyncDriver::new(NoDelay);
        let mut host = MockHost {
            fail_on: vec![2],
            ..Default::default()
        };
        let mut log: Vec<String> = Vec::new();

        let report = driver
            .overwrite(&mut host, &mut log, PlayStyle::Sp, &chunks(4))
            .unwrap();

        assert_eq!(host.sent.len(), 4);
        assert_eq!(host.reloads, 0);
        assert!(!report.reloaded);
        assert!(!report.is_success());
        assert_eq!(report.failed_count(), 1);
        assert_eq!(
            report.items[1].outcome,
            ItemOutcome::Failed("HTTP 500 error".to_string())
        );
        assert_eq!(log[3], "Error: HTTP 500 error");
        assert_eq!(log[4], "Saving playlist Hard A 3...");
    }

    #[test]
    fn test_waits_after_every_request() {
        let driver = SyncDriver::new(CountingThrottle::default());
        let mut host = MockHost {
            fail_on: vec![2],
            ..Default::default()
        };
        let mut log: Vec<String> = Vec::new();

        let report = driver
            .overwrite(&mut host, &mut log, PlayStyle::Sp, &chunks(4))
            .unwrap();
        assert_eq!(report.failed_count(), 1);
        assert_eq!(driver.throttle.waits.get(), 4);

        let mut host = MockHost {
            fail_on: vec![1, 3],
            ..Default::default()
        };
        driver
            .delete_all(&mut host, &mut log, PlayStyle::Sp, 3)
            .unwrap();
        assert_eq!(driver.throttle.waits.get(), 7);
    }

    #[test]
    fn test_delete_all_covers_every_slot() {
        let driver = SyncDriver::new(NoDelay);
        let mut host = MockHost::default();
        let mut log: Vec<String> = Vec::new();

        let report = driver
            .delete_all(&mut host, &mut log, PlayStyle::Dp, 3)
            .unwrap();

        let indices: Vec<usize> = host.sent.iter().map(|f| f.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert!(host.sent.iter().all(|f| f.action == PlaylistAction::Delete));
        assert!(host.sent.iter().all(|f| f.play_style == PlayStyle::Dp));
        assert!(report.reloaded);
        assert_eq!(log[0], "Deleting playlist 1...");
        assert_eq!(log[1], "Delete successful");
    }

    struct ReentrantHost<'a> {
        driver: &'a SyncDriver<NoDelay>,
        nested: Option<Result<SyncReport>>,
    }

    impl PlaylistHost for ReentrantHost<'_> {
        fn send(&mut self, _form: &PlaylistForm) -> Result<()> {
            let mut inner = MockHost::default();
            let mut log: Vec<String> = Vec::new();
            let driver = self.driver;
            self.nested = Some(driver.delete_all(&mut inner, &mut log, PlayStyle::Sp, 1));
            Ok(())
        }

        fn reload(&mut self) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_second_run_rejected_while_in_flight() {
        let driver = SyncDriver::new(NoDelay);
        let mut host = ReentrantHost {
            driver: &driver,
            nested: None,
        };
        let mut log: Vec<String> = Vec::new();

        let report = driver
            .overwrite(&mut host, &mut log, PlayStyle::Sp, &chunks(1))
            .unwrap();

        assert!(report.is_success());
        assert!(matches!(host.nested, Some(Err(Error::RunInProgress))));
        assert!(!driver.is_running());
    }
}
