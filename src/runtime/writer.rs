use std::sync::{Arc, Mutex as StdMutex};

use hashbrown::HashMap;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use tokio::{
    sync::{Mutex, Notify, mpsc, oneshot},
    time::{Duration, Instant},
};

use crate::persist::{KvSink, PersistError, PersistResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    pub batch_max_latency_ms: u64,
    /// Bound on queued flush/shutdown requests. Saves are never queued.
    pub queue_bound: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            batch_max_latency_ms: 75,
            queue_bound: 64,
        }
    }
}

enum WriteMsg {
    Flush {
        resp: oneshot::Sender<PersistResult<usize>>,
    },
    Shutdown {
        resp: oneshot::Sender<PersistResult<usize>>,
    },
}

#[derive(Default)]
struct Pending {
    records: StdMutex<HashMap<String, Vec<u8>>>,
    notify: Notify,
}

impl Pending {
    fn take(&self) -> PersistResult<HashMap<String, Vec<u8>>> {
        let mut records = self.records.lock().map_err(|_| poisoned())?;
        Ok(std::mem::take(&mut *records))
    }
}

/// Fire-and-forget [`KvSink`] that hands saves to a background task.
///
/// Saves land in a per-key map shared with the task, so a burst of saves
/// to the same key keeps only the latest payload and never fails on
/// capacity.
#[derive(Clone)]
pub struct WriterHandle {
    pending: Arc<Pending>,
    tx: mpsc::Sender<WriteMsg>,
}

/// Spawns the writer task on the current tokio runtime.
pub fn spawn_writer(sink: Box<dyn KvSink>, config: WriterConfig) -> WriterHandle {
    let (tx, mut rx) = mpsc::channel::<WriteMsg>(config.queue_bound.max(1));
    let pending = Arc::new(Pending::default());
    let sink = Arc::new(Mutex::new(sink));
    let latency = Duration::from_millis(config.batch_max_latency_ms);

    let task_pending = Arc::clone(&pending);
    tokio::spawn(async move {
        let pending = task_pending;
        let mut deadline: Option<Instant> = None;

        loop {
            tokio::select! {
                msg = rx.recv() => {
                    let Some(msg) = msg else {
                        log_failure(write_pending(&sink, &pending).await);
                        break;
                    };

                    match msg {
                        WriteMsg::Flush { resp } => {
                            deadline = None;
                            let _ = resp.send(write_pending(&sink, &pending).await);
                        }
                        WriteMsg::Shutdown { resp } => {
                            let _ = resp.send(write_pending(&sink, &pending).await);
                            break;
                        }
                    }
                }
                _ = pending.notify.notified() => {
                    if deadline.is_none() {
                        deadline = Some(Instant::now() + latency);
                    }
                }
                _ = tokio::time::sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    deadline = None;
                    log_failure(write_pending(&sink, &pending).await);
                }
            }
        }
        debug!("writer task stopped");
    });

    WriterHandle { pending, tx }
}

impl WriterHandle {
    /// Writes everything saved so far; returns how many keys were written.
    pub async fn flush_pending(&self) -> PersistResult<usize> {
        let (tx, rx) = oneshot::channel();
        self.tx
            .send(WriteMsg::Flush { resp: tx })
            .await
            .map_err(|_| closed())?;
        rx.await.map_err(|_| closed())?
    }

    /// Drains and stops the task.
    pub async fn shutdown(&self) -> PersistResult<usize> {
        let (tx, rx) = oneshot::channel();
        self.tx
            .send(WriteMsg::Shutdown { resp: tx })
            .await
            .map_err(|_| closed())?;
        rx.await.map_err(|_| closed())?
    }
}

impl KvSink for WriterHandle {
    fn save(&mut self, key: &str, payload: &[u8]) -> PersistResult<()> {
        if self.tx.is_closed() {
            return Err(closed());
        }
        self.pending
            .records
            .lock()
            .map_err(|_| poisoned())?
            .insert(key.to_string(), payload.to_vec());
        self.pending.notify.notify_one();
        Ok(())
    }
}

async fn write_pending(sink: &Arc<Mutex<Box<dyn KvSink>>>, pending: &Pending) -> PersistResult<usize> {
    let taken = pending.take()?;
    if taken.is_empty() {
        return Ok(0);
    }

    let mut batch: Vec<(String, Vec<u8>)> = taken.into_iter().collect();
    batch.sort_by(|a, b| a.0.cmp(&b.0));
    let sink_ref = Arc::clone(sink);

    tokio::task::spawn_blocking(move || {
        let mut sink = sink_ref.blocking_lock();
        for (key, payload) in &batch {
            sink.save(key, payload)?;
        }
        sink.flush()?;
        Result::<usize, PersistError>::Ok(batch.len())
    })
    .await
    .map_err(|e| PersistError::Message(format!("join error: {e}")))?
}

fn log_failure(result: PersistResult<usize>) {
    match result {
        Ok(n) if n > 0 => debug!("wrote {n} records"),
        Ok(_) => {}
        Err(err) => warn!("background write failed: {err}"),
    }
}

fn closed() -> PersistError {
    PersistError::Message("writer channel closed".to_string())
}

fn poisoned() -> PersistError {
    PersistError::Message("writer pending map poisoned".to_string())
}
