//! Tokio driver for the carousel.
//!
//! One task owns the [`Carousel`] and exactly one auto-advance deadline.
//! Manual commands move the deadline forward by a full interval, so the
//! timer never fires right after a user action. The loop ends on
//! [`Command::Shutdown`], on cancellation, or when every handle is dropped.

use std::pin::Pin;
use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, Sleep};
use tokio_util::sync::CancellationToken;

use crate::config::CarouselConfig;
use crate::source::FeaturedSource;
use crate::state::{Carousel, CarouselView, Transition};

/// Pending commands a widget will buffer before `send` waits.
const COMMAND_BUFFER: usize = 16;

/// Instructions accepted by a running widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    GoTo(usize),
    /// Fetch the featured list again (e.g. after an admin edit).
    Reload,
    Shutdown,
}

/// The widget task is no longer running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("carousel widget is no longer running")]
pub struct WidgetClosed;

/// Handle to a running carousel task.
///
/// Dropping the handle cancels the task. Use [`CarouselWidget::shutdown`]
/// to also wait for it to finish.
pub struct CarouselWidget {
    commands: mpsc::Sender<Command>,
    view: watch::Receiver<CarouselView>,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl CarouselWidget {
    /// Start the widget: fetch once, then rotate on `config.interval`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(source: Arc<dyn FeaturedSource>, config: CarouselConfig) -> Self {
        let carousel = Carousel::new();
        let (view_tx, view_rx) = watch::channel(carousel.view());
        let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
        let cancel = CancellationToken::new();

        let driver = Driver {
            carousel,
            source,
            config,
            view: view_tx,
            cancel: cancel.clone(),
        };
        let task = tokio::spawn(driver.run(command_rx));

        Self {
            commands: command_tx,
            view: view_rx,
            cancel,
            task: Some(task),
        }
    }

    pub async fn send(&self, command: Command) -> Result<(), WidgetClosed> {
        self.commands.send(command).await.map_err(|_| WidgetClosed)
    }

    pub async fn next(&self) -> Result<(), WidgetClosed> {
        self.send(Command::Next).await
    }

    pub async fn prev(&self) -> Result<(), WidgetClosed> {
        self.send(Command::Prev).await
    }

    pub async fn go_to(&self, index: usize) -> Result<(), WidgetClosed> {
        self.send(Command::GoTo(index)).await
    }

    pub async fn reload(&self) -> Result<(), WidgetClosed> {
        self.send(Command::Reload).await
    }

    /// Latest published snapshot.
    pub fn view(&self) -> CarouselView {
        self.view.borrow().clone()
    }

    /// A receiver that is notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<CarouselView> {
        self.view.clone()
    }

    /// Cancel the task and wait for it to exit.
    pub async fn shutdown(mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::error!(error = %e, "Carousel widget task failed");
            }
        }
    }
}

impl Drop for CarouselWidget {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

struct Driver {
    carousel: Carousel,
    source: Arc<dyn FeaturedSource>,
    config: CarouselConfig,
    view: watch::Sender<CarouselView>,
    cancel: CancellationToken,
}

impl Driver {
    async fn run(mut self, mut commands: mpsc::Receiver<Command>) {
        tracing::info!(
            limit = self.config.limit,
            interval_ms = self.config.interval.as_millis() as u64,
            "Carousel widget started"
        );

        let timer = tokio::time::sleep(self.config.interval);
        tokio::pin!(timer);

        if !self.fetch().await {
            tracing::info!("Carousel widget stopping");
            return;
        }
        let mut armed = self.rearm(timer.as_mut());

        loop {
            tokio::select! {
                _ = self.cancel.cancelled() => break,
                command = commands.recv() => {
                    let Some(command) = command else { break };
                    match command {
                        Command::Shutdown => break,
                        Command::Next => {
                            if self.carousel.next(Transition::Manual) {
                                self.publish();
                                armed = self.rearm(timer.as_mut());
                            }
                        }
                        Command::Prev => {
                            if self.carousel.prev(Transition::Manual) {
                                self.publish();
                                armed = self.rearm(timer.as_mut());
                            }
                        }
                        Command::GoTo(index) => {
                            if self.carousel.go_to(index) {
                                self.publish();
                                armed = self.rearm(timer.as_mut());
                            } else {
                                tracing::debug!(index, "Ignoring carousel jump");
                            }
                        }
                        Command::Reload => {
                            self.carousel.reload();
                            self.publish();
                            if !self.fetch().await {
                                break;
                            }
                            armed = self.rearm(timer.as_mut());
                        }
                    }
                }
                () = &mut timer, if armed => {
                    self.carousel.next(Transition::Auto);
                    self.publish();
                    armed = self.rearm(timer.as_mut());
                }
            }
        }

        tracing::info!("Carousel widget stopping");
    }

    /// Fetch and load the featured list. Returns `false` if cancelled.
    async fn fetch(&mut self) -> bool {
        let result = tokio::select! {
            _ = self.cancel.cancelled() => return false,
            result = self.source.fetch_featured(self.config.limit) => result,
        };

        match &result {
            Ok(slides) => tracing::debug!(count = slides.len(), "Carousel slides loaded"),
            Err(e) => tracing::warn!(error = %e, "Carousel fetch failed"),
        }
        self.carousel.load(result);
        self.publish();
        true
    }

    /// Push the deadline one interval out. Returns whether the timer should
    /// be polled at all (only when there is more than one slide to rotate).
    fn rearm(&self, timer: Pin<&mut Sleep>) -> bool {
        timer.reset(Instant::now() + self.config.interval);
        self.carousel.is_displaying() && self.carousel.slides().len() > 1
    }

    fn publish(&self) {
        self.view.send_replace(self.carousel.view());
    }
}
