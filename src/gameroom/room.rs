use super::*;
use crate::Generation;
use crate::config::Config;
use crate::perception::Classifier;
use crate::perception::GestureError;
use crate::players::Opponent;
use std::ops::ControlFlow;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use tokio::sync::mpsc::Receiver;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;

/// Single point of serialization for one match.
///
/// Imperative shell around [`Machine`]: it owns the inbox that handles
/// write into, the timer walking the current round's schedule, and the list
/// of presentation subscribers. Events are applied strictly one at a time.
///
/// When both an inbox message and a timer step are ready, the inbox goes
/// first, so frames that arrived before a resolve signal still count.
///
/// The room stops on [`Inbound::Shutdown`] or when every [`Handle`] is gone.
/// On the way out it cancels the timer and drops all subscribers, so nothing
/// is emitted after teardown.
pub struct Room {
    machine: Machine,
    timing: Timing,
    inbox: Receiver<Inbound>,
    steps: UnboundedReceiver<Step>,
    sink: UnboundedSender<Step>,
    timer: Option<Timer>,
    subscribers: Vec<UnboundedSender<Update>>,
    generation: Arc<AtomicU64>,
}

impl Room {
    /// Builds an idle room and the first handle to it. Nothing runs until
    /// [`Room::run`] is polled.
    pub fn new(
        config: &Config,
        opponent: Box<dyn Opponent>,
    ) -> Result<(Self, Handle), GestureError> {
        let classifier = Classifier::try_from(&config.gestures)?;
        let (tx, rx) = tokio::sync::mpsc::channel(config.inbox.max(1));
        let (sink, steps) = tokio::sync::mpsc::unbounded_channel();
        let generation = Arc::new(AtomicU64::new(0));
        let room = Self {
            machine: Machine::new(config.rules, opponent),
            timing: config.timing,
            inbox: rx,
            steps,
            sink,
            timer: None,
            subscribers: Vec::new(),
            generation: generation.clone(),
        };
        let handle = Handle::new(tx, generation, Arc::new(classifier));
        Ok((room, handle))
    }
    /// Builds a room and runs it on the current tokio runtime.
    pub fn spawn(config: &Config, opponent: Box<dyn Opponent>) -> Result<Handle, GestureError> {
        let (room, handle) = Self::new(config, opponent)?;
        tokio::spawn(room.run());
        Ok(handle)
    }
    pub async fn run(mut self) {
        log::debug!("[room] open");
        loop {
            tokio::select! {
                biased;
                msg = self.inbox.recv() => match msg.map(|msg| self.receive(msg)) {
                    Some(ControlFlow::Continue(())) => {}
                    Some(ControlFlow::Break(())) | None => break,
                },
                Some(step) = self.steps.recv() => self.cue(step),
            }
        }
        self.close();
        log::debug!("[room] closed");
    }
}

impl Room {
    fn receive(&mut self, msg: Inbound) -> ControlFlow<()> {
        log::trace!("[room] {}", msg);
        let transition = match msg {
            Inbound::Gesture {
                generation,
                gesture,
            } => self.machine.gesture(generation, gesture),
            Inbound::Reset => self.machine.reset(),
            Inbound::Quit => self.machine.quit(),
            Inbound::Fault(message) => {
                log::warn!("[room] perception fault: {}", message);
                self.publish(Update::notice(message));
                return ControlFlow::Continue(());
            }
            Inbound::Subscribe(tx) => {
                if tx.send(Update::Snapshot(self.machine.snapshot())).is_ok() {
                    self.subscribers.push(tx);
                }
                return ControlFlow::Continue(());
            }
            Inbound::Shutdown => return ControlFlow::Break(()),
        };
        if transition == Transition::Stale {
            log::debug!(
                "[room] dropped stale input (current #{})",
                self.machine.generation()
            );
        }
        self.apply(transition);
        ControlFlow::Continue(())
    }
    fn cue(&mut self, step: Step) {
        let transition = self.machine.signal(step.generation(), step.signal());
        if transition == Transition::Stale {
            log::debug!(
                "[room] dropped stale {} from #{} (current #{})",
                step.signal(),
                step.generation(),
                self.machine.generation()
            );
        }
        self.apply(transition);
    }
    fn apply(&mut self, transition: Transition) {
        if !transition.is_change() {
            return;
        }
        match transition {
            Transition::Started(generation) => self.schedule(generation),
            Transition::Finished(_) | Transition::Stopped => self.cancel(),
            _ => {}
        }
        self.generation.store(self.machine.generation(), Ordering::Release);
        self.publish(Update::Snapshot(self.machine.snapshot()));
    }
    fn schedule(&mut self, generation: Generation) {
        let schedule = Schedule::new(generation, self.machine.rules().countdown, self.timing);
        self.timer = Some(Timer::spawn(schedule, self.sink.clone()));
    }
    fn cancel(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }
    fn publish(&mut self, update: Update) {
        log::trace!("[room] publish to {} subscribers", self.subscribers.len());
        self.subscribers.retain(|tx| tx.send(update.clone()).is_ok());
    }
    fn close(&mut self) {
        self.cancel();
        self.subscribers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::*;
    use crate::players::Scripted;
    use std::time::Duration;
    use tokio::sync::mpsc::UnboundedReceiver;

    fn room(bot: Move) -> Handle {
        Room::spawn(&Config::default(), Box::new(Scripted::new([bot]))).unwrap()
    }
    async fn next(rx: &mut UnboundedReceiver<Update>) -> Snapshot {
        loop {
            match rx.recv().await.expect("room open") {
                Update::Snapshot(s) => return s,
                Update::Notice { .. } => continue,
            }
        }
    }
    async fn until<F>(rx: &mut UnboundedReceiver<Update>, f: F) -> Snapshot
    where
        F: Fn(&Snapshot) -> bool,
    {
        loop {
            let s = next(rx).await;
            if f(&s) {
                return s;
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn subscribe_gets_current_snapshot() {
        let handle = room(Move::Rock);
        let mut rx = handle.subscribe().await.unwrap();
        let first = next(&mut rx).await;
        assert_eq!(first.phase(), Phase::Idle);
        assert_eq!(first.message(), "Press play to start");
    }
    #[tokio::test(start_paused = true)]
    async fn forfeit_round_then_next() {
        let handle = room(Move::Scissors);
        let mut rx = handle.subscribe().await.unwrap();
        next(&mut rx).await;
        handle.reset().await.unwrap();
        let mut phases = Vec::new();
        loop {
            let s = next(&mut rx).await;
            phases.push(s.phase());
            if s.phase() == Phase::Resolved {
                assert_eq!(s.score().bot(), 1);
                assert_eq!(s.score().player(), 0);
                assert_eq!(s.player(), Move::None);
                assert_eq!(s.bot(), Move::Scissors);
                break;
            }
        }
        assert_eq!(
            phases,
            vec![
                Phase::Countdown(3),
                Phase::Countdown(2),
                Phase::Countdown(1),
                Phase::Countdown(0),
                Phase::Resolving,
                Phase::Resolved,
            ]
        );
        let resolved_at = tokio::time::Instant::now();
        let s = next(&mut rx).await;
        assert_eq!(s.phase(), Phase::Countdown(3));
        assert_eq!(s.generation(), 2);
        assert_eq!(s.score().bot(), 1);
        assert!(resolved_at.elapsed() >= Duration::from_millis(2000));
    }
    #[tokio::test(start_paused = true)]
    async fn gesture_during_countdown_wins() {
        let handle = room(Move::Paper);
        let mut rx = handle.subscribe().await.unwrap();
        handle.reset().await.unwrap();
        until(&mut rx, |s| s.phase() == Phase::Countdown(2)).await;
        handle.observe(Some("Victory")).unwrap();
        let committed = next(&mut rx).await;
        assert_eq!(committed.player(), Move::Scissors);
        assert_eq!(committed.phase(), Phase::Countdown(2));
        let s = until(&mut rx, |s| s.phase() == Phase::Resolved).await;
        assert_eq!(s.player(), Move::Scissors);
        assert_eq!(s.bot(), Move::Paper);
        assert_eq!(s.score().player(), 1);
        assert_eq!(s.message(), "You won the round!");
    }
    #[tokio::test(start_paused = true)]
    async fn unrecognized_frames_change_nothing() {
        let handle = room(Move::Rock);
        let mut rx = handle.subscribe().await.unwrap();
        handle.reset().await.unwrap();
        until(&mut rx, |s| s.phase() == Phase::Countdown(3)).await;
        handle.observe(Some("Open_Palm")).unwrap();
        assert_eq!(next(&mut rx).await.player(), Move::Paper);
        handle.observe(None).unwrap();
        handle.observe(Some("Thumb_Up")).unwrap();
        let s = next(&mut rx).await;
        assert_eq!(s.phase(), Phase::Countdown(2));
        assert_eq!(s.player(), Move::Paper);
    }
    #[tokio::test(start_paused = true)]
    async fn match_over_stops_rounds() {
        let handle = room(Move::Rock);
        let mut rx = handle.subscribe().await.unwrap();
        handle.reset().await.unwrap();
        let s = loop {
            let s = next(&mut rx).await;
            match s.phase() {
                Phase::Countdown(3) => handle.observe(Some("Open_Palm")).unwrap(),
                Phase::MatchOver => break s,
                _ => {}
            }
        };
        assert_eq!(s.message(), "VICTORY!");
        assert_eq!(s.score().player(), 3);
        let quiet = tokio::time::timeout(Duration::from_secs(30), rx.recv()).await;
        assert!(quiet.is_err(), "no rounds after match over");
        handle.reset().await.unwrap();
        let s = next(&mut rx).await;
        assert_eq!(s.phase(), Phase::Countdown(3));
        assert_eq!(s.score(), Score::new(3));
    }
    #[tokio::test(start_paused = true)]
    async fn stale_frames_dropped() {
        let handle = room(Move::Rock);
        let mut rx = handle.subscribe().await.unwrap();
        next(&mut rx).await;
        handle.reset().await.unwrap();
        let first = next(&mut rx).await;
        let stale = first.generation();
        let second = until(&mut rx, |s| s.generation() > stale).await;
        assert_eq!(second.phase(), Phase::Countdown(3));
        handle.classified(stale, Some("Open_Palm")).unwrap();
        let s = next(&mut rx).await;
        assert_eq!(s.phase(), Phase::Countdown(2));
        assert_eq!(s.player(), Move::None);
    }
    #[tokio::test(start_paused = true)]
    async fn reset_mid_round_restarts_cleanly() {
        let handle = room(Move::Rock);
        let mut rx = handle.subscribe().await.unwrap();
        handle.reset().await.unwrap();
        until(&mut rx, |s| s.phase() == Phase::Resolving).await;
        handle.reset().await.unwrap();
        let s = until(&mut rx, |s| s.generation() == 2).await;
        assert_eq!(s.phase(), Phase::Countdown(3));
        let s = next(&mut rx).await;
        assert_eq!(s.generation(), 2);
        assert_eq!(s.phase(), Phase::Countdown(2));
    }
    #[tokio::test(start_paused = true)]
    async fn quit_goes_idle_and_silent() {
        let handle = room(Move::Rock);
        let mut rx = handle.subscribe().await.unwrap();
        handle.reset().await.unwrap();
        until(&mut rx, |s| s.phase() == Phase::Countdown(1)).await;
        handle.quit().await.unwrap();
        let s = next(&mut rx).await;
        assert_eq!(s.phase(), Phase::Idle);
        let quiet = tokio::time::timeout(Duration::from_secs(30), rx.recv()).await;
        assert!(quiet.is_err());
    }
    #[tokio::test(start_paused = true)]
    async fn fault_is_a_notice() {
        let handle = room(Move::Rock);
        let mut rx = handle.subscribe().await.unwrap();
        next(&mut rx).await;
        handle.fault("camera unplugged").await.unwrap();
        assert_eq!(
            rx.recv().await.unwrap(),
            Update::notice("camera unplugged")
        );
    }
    #[tokio::test(start_paused = true)]
    async fn shutdown_is_final() {
        let handle = room(Move::Rock);
        let mut rx = handle.subscribe().await.unwrap();
        handle.reset().await.unwrap();
        handle.shutdown().await.unwrap();
        while rx.recv().await.is_some() {}
        assert_eq!(handle.reset().await, Err(RoomError::Closed));
        assert_eq!(handle.observe(Some("Victory")), Err(RoomError::Closed));
        assert!(handle.is_closed());
    }
    #[tokio::test(start_paused = true)]
    async fn room_stops_when_handles_drop() {
        let handle = room(Move::Rock);
        let mut rx = handle.subscribe().await.unwrap();
        handle.reset().await.unwrap();
        drop(handle);
        let drained = tokio::time::timeout(Duration::from_secs(1), async {
            while rx.recv().await.is_some() {}
        })
        .await;
        assert!(drained.is_ok());
    }
}
