use super::*;
use crate::Generation;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Walks a [`Schedule`] against the wall clock, delivering each step to the
/// room when it falls due.
///
/// Cancelling (or dropping) the timer aborts its task: no step is sent after
/// that. Steps already queued in the room carry the old generation and are
/// discarded there.
#[derive(Debug)]
pub struct Timer {
    generation: Generation,
    task: JoinHandle<()>,
}

impl Timer {
    pub fn spawn(schedule: Schedule, sink: UnboundedSender<Step>) -> Self {
        let generation = schedule.generation();
        let task = tokio::spawn(async move {
            let start = Instant::now();
            for step in schedule {
                let Some(due) = start.checked_add(step.at()) else {
                    log::warn!("[timer #{}] {} out of range", step.generation(), step.signal());
                    break;
                };
                tokio::time::sleep_until(due).await;
                log::trace!("[timer #{}] {}", step.generation(), step.signal());
                if sink.send(step).is_err() {
                    log::debug!("[timer #{}] room gone", step.generation());
                    break;
                }
            }
        });
        Self { generation, task }
    }
    pub fn cancel(&self) {
        log::debug!("[timer #{}] cancelled", self.generation);
        self.task.abort();
    }
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    #[tokio::test(start_paused = true)]
    async fn delivers_steps_on_time() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let start = Instant::now();
        let _timer = Timer::spawn(Schedule::new(4, 3, Timing::default()), tx);
        let mut seen = Vec::new();
        for _ in 0..6 {
            let step = rx.recv().await.unwrap();
            assert_eq!(step.generation(), 4);
            assert!(start.elapsed() >= step.at());
            seen.push(step.signal());
        }
        assert_eq!(
            seen,
            vec![
                Signal::Tick(2),
                Signal::Tick(1),
                Signal::Tick(0),
                Signal::Expire,
                Signal::Resolve,
                Signal::Next,
            ]
        );
        assert!(start.elapsed() >= Duration::from_millis(6500));
        assert!(start.elapsed() < Duration::from_millis(7000));
    }
    #[tokio::test(start_paused = true)]
    async fn cancel_stops_delivery() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let timer = Timer::spawn(Schedule::new(1, 3, Timing::default()), tx);
        assert_eq!(rx.recv().await.unwrap().signal(), Signal::Tick(2));
        timer.cancel();
        tokio::time::sleep(Duration::from_secs(30)).await;
        assert!(rx.try_recv().is_err());
        assert!(timer.is_finished());
    }
    #[tokio::test(start_paused = true)]
    async fn drop_stops_delivery() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        drop(Timer::spawn(Schedule::new(1, 3, Timing::default()), tx));
        tokio::time::sleep(Duration::from_secs(30)).await;
        assert!(rx.try_recv().is_err());
    }
}
