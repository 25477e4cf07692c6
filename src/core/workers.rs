use crate::config::toml_config::{MAX_WORKER_COUNT, WorkersConfig};
use crate::domain::model::WorkerReport;
use crate::domain::ports::Task;
use crate::utils::error::{DrillError, Result};
use crate::utils::validation::validate_range;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Prints a start line, sleeps, prints a finish line.
#[derive(Debug, Clone)]
pub struct SleepTask {
    duration: Duration,
}

impl SleepTask {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }
}

#[async_trait]
impl Task for SleepTask {
    async fn run(&self, id: usize) -> Result<()> {
        println!("Worker {} working...", id);
        tracing::debug!(worker = id, duration = ?self.duration, "Worker started");
        tokio::time::sleep(self.duration).await;
        println!("Worker {} finished!", id);
        Ok(())
    }
}

#[derive(Debug)]
pub struct WorkerPool {
    count: usize,
}

impl WorkerPool {
    pub fn new(count: usize) -> Result<Self> {
        validate_range("workers.count", count, 1, MAX_WORKER_COUNT)?;
        Ok(Self { count })
    }

    pub fn from_config(config: &WorkersConfig) -> Result<Self> {
        Self::new(config.count)
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Spawn one task per worker id (`1..=count`) and wait for every one of
    /// them. Reports come back in id order. If any worker fails or panics,
    /// the first failure by id is returned once all workers are done.
    pub async fn run<T: Task + 'static>(&self, task: Arc<T>) -> Result<Vec<WorkerReport>> {
        let handles: Vec<(usize, JoinHandle<Result<WorkerReport>>)> = (1..=self.count)
            .map(|id| {
                let task = Arc::clone(&task);
                let handle = tokio::spawn(async move {
                    let started_at = Utc::now();
                    task.run(id).await?;
                    Ok(WorkerReport {
                        id,
                        started_at,
                        finished_at: Utc::now(),
                    })
                });
                (id, handle)
            })
            .collect();

        println!("Waiting for all workers...");
        tracing::info!("Spawned {} workers", self.count);

        let mut reports = Vec::with_capacity(self.count);
        let mut first_error = None;

        for (id, handle) in handles {
            let outcome = match handle.await {
                Ok(Ok(report)) => Ok(report),
                Ok(Err(e)) => Err(DrillError::WorkerError {
                    id,
                    message: e.to_string(),
                }),
                Err(join_error) if join_error.is_panic() => Err(DrillError::WorkerError {
                    id,
                    message: "panicked".to_string(),
                }),
                Err(join_error) => Err(DrillError::WorkerError {
                    id,
                    message: join_error.to_string(),
                }),
            };

            match outcome {
                Ok(report) => {
                    tracing::debug!(worker = id, elapsed_ms = report.elapsed_ms(), "Worker done");
                    reports.push(report);
                }
                Err(e) => {
                    tracing::error!("{}", e);
                    first_error.get_or_insert(e);
                }
            }
        }

        if let Some(e) = first_error {
            return Err(e);
        }

        println!("All workers finished!");
        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::Instant;

    struct CountingTask {
        runs: AtomicUsize,
    }

    #[async_trait]
    impl Task for CountingTask {
        async fn run(&self, _id: usize) -> Result<()> {
            self.runs.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FailingTask {
        fail_id: usize,
        completed: AtomicUsize,
    }

    #[async_trait]
    impl Task for FailingTask {
        async fn run(&self, id: usize) -> Result<()> {
            if id == self.fail_id {
                return Err(DrillError::processing("boom"));
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
            self.completed.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct PanickingTask;

    #[async_trait]
    impl Task for PanickingTask {
        async fn run(&self, id: usize) -> Result<()> {
            if id == 2 {
                panic!("worker 2 exploded");
            }
            Ok(())
        }
    }

    #[test]
    fn test_zero_workers_rejected() {
        assert!(WorkerPool::new(0).is_err());
        assert_eq!(WorkerPool::new(4).unwrap().count(), 4);
    }

    #[test]
    fn test_worker_count_upper_bound() {
        assert!(WorkerPool::new(MAX_WORKER_COUNT).is_ok());
        let err = WorkerPool::new(MAX_WORKER_COUNT + 1).unwrap_err();
        assert!(matches!(err, DrillError::InvalidConfigValueError { .. }));
    }

    #[tokio::test]
    async fn test_every_worker_runs_once_and_reports_in_order() {
        let task = Arc::new(CountingTask {
            runs: AtomicUsize::new(0),
        });
        let pool = WorkerPool::new(6).unwrap();

        let reports = pool.run(Arc::clone(&task)).await.unwrap();

        assert_eq!(task.runs.load(Ordering::SeqCst), 6);
        let ids: Vec<usize> = reports.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert!(reports.iter().all(|r| r.finished_at >= r.started_at));
    }

    #[tokio::test(start_paused = true)]
    async fn test_sleep_workers_run_concurrently() {
        let pool = WorkerPool::new(4).unwrap();
        let start = Instant::now();

        let reports = pool
            .run(Arc::new(SleepTask::new(Duration::from_secs(2))))
            .await
            .unwrap();

        assert_eq!(reports.len(), 4);
        // 四個 worker 同時睡眠，總時間約等於一次睡眠
        assert!(start.elapsed() < Duration::from_secs(3));
    }

    #[tokio::test]
    async fn test_failure_waits_for_the_rest() {
        let task = Arc::new(FailingTask {
            fail_id: 1,
            completed: AtomicUsize::new(0),
        });
        let pool = WorkerPool::new(3).unwrap();

        let err = pool.run(Arc::clone(&task)).await.unwrap_err();

        assert!(matches!(err, DrillError::WorkerError { id: 1, .. }));
        assert_eq!(task.completed.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_panic_is_reported_as_worker_error() {
        let pool = WorkerPool::new(3).unwrap();
        let err = pool.run(Arc::new(PanickingTask)).await.unwrap_err();
        match err {
            DrillError::WorkerError { id, message } => {
                assert_eq!(id, 2);
                assert_eq!(message, "panicked");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_from_config() {
        let config = WorkersConfig {
            count: 2,
            duration_ms: 1,
        };
        let pool = WorkerPool::from_config(&config).unwrap();
        let reports = tokio_test::assert_ok!(
            pool.run(Arc::new(SleepTask::new(config.duration()))).await
        );
        assert_eq!(reports.len(), 2);
    }
}
