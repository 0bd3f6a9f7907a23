//! Drives the fetch and decode of every clip in a batch, and reports the batch once.
//!
//! Loading is split into steps that happen elsewhere: bytes are fetched by the mounted
//! fetchers, and decoded by a `Decode` implementation. Their results are collected by
//! `AssetLoader::advance`, which runs on the control flow of the owner. That's where decoded
//! clips get registered and where batch callbacks are fired, so the completion of a batch
//! never depends on the order in which its clips finish.

use std::fmt;
use std::sync::Arc;

use cadence::res::prelude::{Request, ResourceSystem, Response};

use crate::assets::prelude::{Decode, Decoded};
use crate::clip::Clip;
use crate::config::{BatchConfig, ClipDescriptor};
use crate::errors::{Error, LoadFailure, Result};
use crate::registry::ClipRegistry;

pub type BatchId = u32;

/// The outcome of a batch. Clips that failed to load are listed along with the cause.
pub struct BatchReport {
    pub id: BatchId,
    pub loaded: Vec<String>,
    pub failures: Vec<LoadFailure>,
}

impl BatchReport {
    /// Number of clips requested in this batch.
    #[inline]
    pub fn len(&self) -> usize {
        self.loaded.len() + self.failures.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if every clip has been loaded.
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failed(&self) -> impl Iterator<Item = &str> {
        self.failures.iter().map(|v| v.name.as_str())
    }
}

impl fmt::Debug for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("BatchReport")
            .field("id", &self.id)
            .field("loaded", &self.loaded)
            .field("failed", &self.failed().collect::<Vec<_>>())
            .finish()
    }
}

type ReadyCallback = Box<dyn FnOnce(BatchReport)>;

enum Stage {
    Fetching(Request<Response>),
    Decoding(Request<Decoded>),
    Finished,
}

struct Pending {
    descriptor: ClipDescriptor,
    stage: Stage,
}

impl Pending {
    /// Moves this clip forward as far as its requests allow. Returns the decoded buffer (or the
    /// failure) once both steps completed.
    fn poll(&mut self, decoder: &dyn Decode) -> Option<Decoded> {
        loop {
            let ready = match self.stage {
                Stage::Fetching(ref mut req) => req.poll(),
                Stage::Decoding(ref mut req) => req.poll(),
                Stage::Finished => return None,
            };

            if !ready {
                return None;
            }

            match std::mem::replace(&mut self.stage, Stage::Finished) {
                Stage::Fetching(req) => match req.take() {
                    Some(Ok(bytes)) => {
                        let state = Request::latch();
                        decoder.decode(bytes, state.clone());
                        self.stage = Stage::Decoding(Request::new(state));
                    }
                    Some(Err(err)) => return Some(Err(err)),
                    None => {
                        return Some(Err(format_err!("Fetch worker terminated without a result.")));
                    }
                },
                Stage::Decoding(req) => match req.take() {
                    Some(decoded) => return Some(decoded),
                    None => {
                        return Some(Err(format_err!("Decode worker terminated without a result.")));
                    }
                },
                Stage::Finished => return None,
            }
        }
    }
}

struct Batch {
    id: BatchId,
    pending: Vec<Pending>,
    loaded: Vec<String>,
    failures: Vec<LoadFailure>,
    on_ready: Option<ReadyCallback>,
}

impl Batch {
    fn advance(&mut self, registry: &mut ClipRegistry, decoder: &dyn Decode) {
        let mut i = 0;
        while i < self.pending.len() {
            match self.pending[i].poll(decoder) {
                Some(decoded) => {
                    let pending = self.pending.remove(i);
                    self.settle(registry, pending.descriptor, decoded);
                }
                None => i += 1,
            }
        }
    }

    fn settle(&mut self, registry: &mut ClipRegistry, descriptor: ClipDescriptor, decoded: Decoded) {
        let result = decoded.and_then(|buffer| {
            info!(
                "[AssetLoader] loads clip {} (channels {:?} sample_rate {:?} pcm: {:?}).",
                descriptor.name,
                buffer.channels,
                buffer.sample_rate,
                buffer.pcm.len()
            );

            let clip = Clip::new(buffer, descriptor.loops, descriptor.interrupt);
            registry
                .insert(descriptor.name.clone(), clip)
                .map_err(failure::Error::from)
        });

        match result {
            Ok(_) => self.loaded.push(descriptor.name),
            Err(err) => {
                warn!("[AssetLoader] failed to load clip {}: {}", descriptor.name, err);
                self.failures.push(LoadFailure::new(descriptor.name, err));
            }
        }
    }

    #[inline]
    fn is_finished(&self) -> bool {
        self.pending.is_empty()
    }

    #[inline]
    fn contains(&self, name: &str) -> bool {
        self.pending.iter().any(|v| v.descriptor.name == name)
    }
}

/// Loads batches of clips into a `ClipRegistry`.
pub struct AssetLoader {
    resources: ResourceSystem,
    decoder: Arc<dyn Decode>,
    batches: Vec<Batch>,
    ids: BatchId,
}

impl AssetLoader {
    pub fn new<D: Decode>(resources: ResourceSystem, decoder: D) -> Self {
        AssetLoader {
            resources,
            decoder: Arc::new(decoder),
            batches: Vec::new(),
            ids: 0,
        }
    }

    #[inline]
    pub fn resources(&self) -> &ResourceSystem {
        &self.resources
    }

    #[inline]
    pub fn resources_mut(&mut self) -> &mut ResourceSystem {
        &mut self.resources
    }

    /// Starts loading every clip in `config`. Failures of single clips are logged and
    /// collected; they don't stop the batch.
    #[inline]
    pub fn load(&mut self, registry: &ClipRegistry, config: &BatchConfig) -> Result<BatchId> {
        self.dispatch(registry, config, None)
    }

    /// Starts loading every clip in `config`. `func` is called exactly once, after every clip
    /// in the batch has either been registered or failed.
    #[inline]
    pub fn load_with_callback<F>(
        &mut self,
        registry: &ClipRegistry,
        config: &BatchConfig,
        func: F,
    ) -> Result<BatchId>
    where
        F: FnOnce(BatchReport) + 'static,
    {
        self.dispatch(registry, config, Some(Box::new(func)))
    }

    fn dispatch(
        &mut self,
        registry: &ClipRegistry,
        config: &BatchConfig,
        on_ready: Option<ReadyCallback>,
    ) -> Result<BatchId> {
        let descriptors = config.descriptors()?;

        for descriptor in &descriptors {
            if registry.contains(&descriptor.name) {
                return Err(Error::InvalidConfig(format!(
                    "clip {} has been loaded already",
                    descriptor.name
                )));
            }

            if self.is_loading(&descriptor.name) {
                return Err(Error::InvalidConfig(format!(
                    "clip {} is loading already",
                    descriptor.name
                )));
            }
        }

        self.ids += 1;
        let mut batch = Batch {
            id: self.ids,
            pending: Vec::with_capacity(descriptors.len()),
            loaded: Vec::new(),
            failures: Vec::new(),
            on_ready,
        };

        for descriptor in descriptors {
            match self.resources.fetch(&descriptor.source) {
                Ok(req) => batch.pending.push(Pending {
                    descriptor,
                    stage: Stage::Fetching(req),
                }),
                Err(err) => {
                    warn!("[AssetLoader] failed to load clip {}: {}", descriptor.name, err);
                    batch.failures.push(LoadFailure::new(descriptor.name, err));
                }
            }
        }

        self.batches.push(batch);
        Ok(self.ids)
    }

    /// Returns true if the clip `name` is being fetched or decoded.
    pub fn is_loading<T: AsRef<str>>(&self, name: T) -> bool {
        let name = name.as_ref();
        self.batches.iter().any(|v| v.contains(name))
    }

    /// Returns true if the batch `id` has not been reported yet.
    pub fn is_pending(&self, id: BatchId) -> bool {
        self.batches.iter().any(|v| v.id == id)
    }

    /// Number of clips being fetched or decoded.
    pub fn pending(&self) -> usize {
        self.batches.iter().map(|v| v.pending.len()).sum()
    }

    /// Collects finished requests, registers the decoded clips and reports every batch that
    /// finished. Returns the reports of batches without a callback.
    pub fn advance(&mut self, registry: &mut ClipRegistry) -> Vec<BatchReport> {
        for batch in &mut self.batches {
            batch.advance(registry, self.decoder.as_ref());
        }

        let mut finished = Vec::new();
        let mut i = 0;
        while i < self.batches.len() {
            if self.batches[i].is_finished() {
                finished.push(self.batches.remove(i));
            } else {
                i += 1;
            }
        }

        let mut reports = Vec::new();
        for batch in finished {
            let report = BatchReport {
                id: batch.id,
                loaded: batch.loaded,
                failures: batch.failures,
            };

            info!(
                "[AssetLoader] batch {} is ready ({} loaded, {} failed).",
                report.id,
                report.loaded.len(),
                report.failures.len()
            );

            match batch.on_ready {
                Some(func) => func(report),
                None => reports.push(report),
            }
        }

        reports
    }
}
