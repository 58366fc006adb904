//! Tokio driver: one task owns a [`Carousel`] and serializes every input.
//!
//! Commands arrive over an unbounded channel, the autoplay deadline is a
//! `sleep_until`, and both are multiplexed by a single `select!`, so a drag
//! release can never interleave with an autoplay tick. Every handled event
//! publishes a fresh [`CarouselSnapshot`] on a watch channel.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::carousel::{Carousel, CarouselSnapshot};
use crate::config::CarouselConfig;
use crate::error::Result;
use crate::repository::ItemRepository;
use crate::state::Update;

/// Input accepted by the driver task.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Pause,
    Resume,
    DragStart,
    DragMove(f64),
    DragEnd(f64),
    GoToSlide(usize),
    NavigateLeft,
    NavigateRight,
    Settle,
}

/// Cloneable handle to a running driver.
///
/// Sends are fire-and-forget; once the driver has stopped they are dropped.
#[derive(Clone, Debug)]
pub struct CarouselHandle {
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<CarouselSnapshot>,
    shutdown: CancellationToken,
}

impl CarouselHandle {
    fn send(&self, command: Command) {
        if self.commands.send(command).is_err() {
            debug!(?command, "carousel driver gone; command dropped");
        }
    }

    pub fn pause(&self) {
        self.send(Command::Pause);
    }

    pub fn resume(&self) {
        self.send(Command::Resume);
    }

    pub fn drag_start(&self) {
        self.send(Command::DragStart);
    }

    pub fn drag_move(&self, dx: f64) {
        self.send(Command::DragMove(dx));
    }

    pub fn drag_end(&self, dx: f64) {
        self.send(Command::DragEnd(dx));
    }

    pub fn go_to_slide(&self, dot: usize) {
        self.send(Command::GoToSlide(dot));
    }

    pub fn navigate_left(&self) {
        self.send(Command::NavigateLeft);
    }

    pub fn navigate_right(&self) {
        self.send(Command::NavigateRight);
    }

    pub fn settle(&self) {
        self.send(Command::Settle);
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> CarouselSnapshot {
        self.snapshots.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<CarouselSnapshot> {
        self.snapshots.clone()
    }

    /// Stop the driver. The join handle then yields the torn-down carousel.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }
}

/// Build a carousel and spawn its driver on the current tokio runtime.
///
/// The carousel clock starts at zero when this is called, so the first
/// autoplay tick fires one interval later.
pub fn spawn(
    repository: ItemRepository,
    config: &CarouselConfig,
    shutdown: CancellationToken,
) -> Result<(CarouselHandle, JoinHandle<Carousel>)> {
    let origin = Instant::now();
    let carousel = Carousel::new(repository, config, 0)?;
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (snapshot_tx, snapshot_rx) = watch::channel(carousel.snapshot());

    let task = tokio::spawn(drive(
        carousel,
        origin,
        command_rx,
        snapshot_tx,
        shutdown.clone(),
    ));
    let handle = CarouselHandle {
        commands: command_tx,
        snapshots: snapshot_rx,
        shutdown,
    };
    Ok((handle, task))
}

async fn drive(
    mut carousel: Carousel,
    origin: Instant,
    mut commands: mpsc::UnboundedReceiver<Command>,
    snapshots: watch::Sender<CarouselSnapshot>,
    shutdown: CancellationToken,
) -> Carousel {
    let now_ms = || origin.elapsed().as_millis() as u64;
    info!(
        records = carousel.repository().len(),
        "carousel driver started"
    );

    loop {
        let deadline = carousel
            .next_deadline()
            .map(|ms| origin + Duration::from_millis(ms));

        let update = tokio::select! {
            biased;
            _ = shutdown.cancelled() => break,
            command = commands.recv() => {
                let Some(command) = command else { break; };
                apply(&mut carousel, command, now_ms())
            }
            _ = sleep_until(deadline) => carousel.tick(now_ms()),
        };

        if !update.is_noop() {
            debug!(?update, index = carousel.current_index(), "carousel update");
        }
        snapshots.send_replace(carousel.snapshot());
    }

    carousel.teardown();
    snapshots.send_replace(carousel.snapshot());
    info!(index = carousel.current_index(), "carousel driver stopped");
    carousel
}

fn apply(carousel: &mut Carousel, command: Command, now: u64) -> Update {
    match command {
        Command::Pause => {
            carousel.pause();
            Update::default()
        }
        Command::Resume => {
            carousel.resume(now);
            Update::default()
        }
        Command::DragStart => {
            carousel.on_drag_start();
            Update::default()
        }
        Command::DragMove(dx) => {
            carousel.on_drag_move(dx);
            Update::default()
        }
        Command::DragEnd(dx) => carousel.on_drag_end(dx),
        Command::GoToSlide(dot) => carousel.go_to_slide(dot),
        Command::NavigateLeft => carousel.navigate_left(),
        Command::NavigateRight => carousel.navigate_right(),
        Command::Settle => carousel.settle(),
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::sample_records;
    use crate::scheduler::AutoplayState;

    fn start(n: u32) -> (CarouselHandle, JoinHandle<Carousel>) {
        let repo = ItemRepository::new(sample_records(n)).expect("repo");
        spawn(repo, &CarouselConfig::default(), CancellationToken::new()).expect("spawn")
    }

    #[tokio::test(start_paused = true)]
    async fn autoplay_advances_every_interval() {
        let (handle, _task) = start(5);
        let mut rx = handle.subscribe();

        let started = Instant::now();
        rx.wait_for(|s| s.current_index == 1).await.expect("tick 1");
        assert!(started.elapsed() >= Duration::from_millis(4000));

        rx.wait_for(|s| s.current_index == 2).await.expect("tick 2");
        assert!(started.elapsed() >= Duration::from_millis(8000));
        handle.shutdown();
    }

    #[tokio::test(start_paused = true)]
    async fn paused_driver_holds_still() {
        let (handle, _task) = start(5);
        handle.pause();
        tokio::time::sleep(Duration::from_secs(20)).await;

        let snapshot = handle.snapshot();
        assert_eq!(snapshot.current_index, 0);
        assert!(snapshot.is_paused);
        assert_eq!(snapshot.autoplay, AutoplayState::Paused);

        handle.resume();
        let mut rx = handle.subscribe();
        let resumed = Instant::now();
        rx.wait_for(|s| s.current_index == 1).await.expect("tick");
        assert!(resumed.elapsed() >= Duration::from_millis(4000));
        handle.shutdown();
    }

    #[tokio::test(start_paused = true)]
    async fn drag_release_steps_the_index() {
        let (handle, _task) = start(5);
        let mut rx = handle.subscribe();
        handle.go_to_slide(0);
        rx.wait_for(|s| s.current_index == 5).await.expect("slide");

        handle.drag_start();
        handle.drag_move(-200.0);
        rx.wait_for(|s| s.is_dragging).await.expect("dragging");
        handle.drag_end(-200.0);
        rx.wait_for(|s| !s.is_dragging).await.expect("released");
        assert_eq!(handle.snapshot().current_index, 6);
        handle.shutdown();
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_returns_torn_down_carousel() {
        let (handle, task) = start(5);
        let mut rx = handle.subscribe();
        handle.go_to_slide(2);
        rx.wait_for(|s| s.current_index == 7).await.expect("slide");

        handle.shutdown();
        let carousel = task.await.expect("join");
        assert_eq!(carousel.current_index(), 7);
        assert_eq!(carousel.autoplay_state(), AutoplayState::Stopped);
        assert_eq!(handle.snapshot().autoplay, AutoplayState::Stopped);

        // commands after shutdown are dropped quietly
        handle.navigate_right();
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_every_handle_stops_the_driver() {
        let (handle, task) = start(3);
        drop(handle);
        let carousel = task.await.expect("join");
        assert_eq!(carousel.autoplay_state(), AutoplayState::Stopped);
    }
}
