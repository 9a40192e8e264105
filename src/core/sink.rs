//! Shared sink: the serialized output stream behind every logger handle
//!
//! Records arrive as fully rendered byte chunks, so the only shared mutable
//! resource is the stream itself. Two write disciplines:
//! - direct: a mutex around the writer, one locked `write_all` per record
//! - queued: a single writer thread fed over a channel; `flush` is a
//!   rendezvous control message

use super::config::{FatalHook, SinkSettings};
use super::error::{LoggerError, Result};
use super::metrics::SinkMetrics;
use crossbeam_channel::{unbounded, Sender};
use parking_lot::{Mutex, RwLock};
use std::io::Write;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Bounded wait for the writer thread to drain when the sink is dropped
/// without an explicit flush.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

enum Command {
    Write(Vec<u8>),
    Flush(Sender<()>),
}

enum Mode {
    Direct(Mutex<Box<dyn Write + Send>>),
    Queued {
        sender: Mutex<Option<Sender<Command>>>,
        worker: Mutex<Option<thread::JoinHandle<()>>>,
    },
}

pub(crate) struct Sink {
    settings: RwLock<SinkSettings>,
    mode: Mode,
    metrics: Arc<SinkMetrics>,
    fatal_hook: FatalHook,
}

impl Sink {
    pub(crate) fn direct(
        writer: Box<dyn Write + Send>,
        settings: SinkSettings,
        fatal_hook: FatalHook,
    ) -> Self {
        Self {
            settings: RwLock::new(settings),
            mode: Mode::Direct(Mutex::new(writer)),
            metrics: Arc::new(SinkMetrics::new()),
            fatal_hook,
        }
    }

    pub(crate) fn queued(
        writer: Box<dyn Write + Send>,
        settings: SinkSettings,
        fatal_hook: FatalHook,
    ) -> Self {
        let (sender, receiver) = unbounded();
        let metrics = Arc::new(SinkMetrics::new());
        let metrics_clone = Arc::clone(&metrics);

        let worker = thread::spawn(move || {
            let mut writer = writer;
            for command in receiver {
                match command {
                    Command::Write(bytes) => {
                        if writer.write_all(&bytes).is_err() {
                            metrics_clone.record_write_failure();
                        } else {
                            metrics_clone.record_written();
                        }
                    }
                    Command::Flush(ack) => {
                        if writer.flush().is_err() {
                            metrics_clone.record_write_failure();
                        }
                        let _ = ack.send(());
                    }
                }
            }
            // Channel closed: everything accepted has been written, flush
            // whatever the stream still buffers.
            let _ = writer.flush();
        });

        Self {
            settings: RwLock::new(settings),
            mode: Mode::Queued {
                sender: Mutex::new(Some(sender)),
                worker: Mutex::new(Some(worker)),
            },
            metrics,
            fatal_hook,
        }
    }

    pub(crate) fn settings_snapshot(&self) -> SinkSettings {
        self.settings.read().clone()
    }

    pub(crate) fn update_settings(&self, update: impl FnOnce(&mut SinkSettings)) {
        update(&mut self.settings.write());
    }

    /// Hand one rendered record to the stream. Failures are swallowed and
    /// counted; logging must never disrupt the caller's control flow.
    pub(crate) fn submit(&self, bytes: Vec<u8>) {
        match &self.mode {
            Mode::Direct(writer) => {
                let mut writer = writer.lock();
                if writer.write_all(&bytes).is_err() {
                    self.metrics.record_write_failure();
                } else {
                    self.metrics.record_written();
                }
            }
            Mode::Queued { sender, .. } => {
                let sender = sender.lock();
                match sender.as_ref() {
                    Some(tx) => {
                        if tx.send(Command::Write(bytes)).is_err() {
                            self.metrics.record_write_failure();
                        }
                    }
                    None => self.metrics.record_write_failure(),
                }
            }
        }
    }

    /// Block until all previously accepted records reach the underlying
    /// stream. Other threads keep enqueueing in the meantime.
    pub(crate) fn flush(&self) -> Result<()> {
        match &self.mode {
            Mode::Direct(writer) => {
                writer.lock().flush()?;
                Ok(())
            }
            Mode::Queued { sender, .. } => {
                let sender = sender.lock().clone().ok_or(LoggerError::SinkClosed)?;
                let (ack_tx, ack_rx) = crossbeam_channel::bounded(1);
                sender
                    .send(Command::Flush(ack_tx))
                    .map_err(|_| LoggerError::SinkClosed)?;
                ack_rx.recv().map_err(|_| LoggerError::SinkClosed)?;
                Ok(())
            }
        }
    }

    pub(crate) fn metrics(&self) -> &SinkMetrics {
        &self.metrics
    }

    pub(crate) fn fatal_hook(&self) -> &FatalHook {
        &self.fatal_hook
    }
}

impl Drop for Sink {
    fn drop(&mut self) {
        match &self.mode {
            Mode::Direct(writer) => {
                let _ = writer.lock().flush();
            }
            Mode::Queued { sender, worker } => {
                // Close the channel first so the worker drains all pending
                // records before exiting.
                drop(sender.lock().take());

                if let Some(handle) = worker.lock().take() {
                    let start = std::time::Instant::now();
                    loop {
                        if handle.is_finished() {
                            let _ = handle.join();
                            break;
                        }
                        if start.elapsed() >= DEFAULT_SHUTDOWN_TIMEOUT {
                            eprintln!(
                                "[LOGGER WARNING] writer thread did not drain within {:?}. \
                                 Some records may be lost.",
                                DEFAULT_SHUTDOWN_TIMEOUT
                            );
                            break;
                        }
                        thread::sleep(Duration::from_millis(10));
                    }
                }
            }
        }
    }
}
