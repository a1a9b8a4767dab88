//! Artifact resolution and the per-coordinate resolution cache.

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use rustc_hash::FxHashMap;
use tracing::debug;

use super::coordinate::Coordinate;
use crate::error::Result;

/// Turns a coordinate into a local file.
///
/// `Ok(None)` means the artifact does not exist; errors are reserved for
/// resolution failures.
pub trait ArtifactResolver: Send + Sync {
    fn resolve(&self, coordinate: &Coordinate) -> Result<Option<PathBuf>>;
}

/// Resolves artifacts from a local repository directory laid out as
/// `group/as/dirs/artifact/version/artifact-version[-classifier].ext`.
#[derive(Clone, Debug)]
pub struct LocalRepository {
    root: PathBuf,
}

impl LocalRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ArtifactResolver for LocalRepository {
    fn resolve(&self, coordinate: &Coordinate) -> Result<Option<PathBuf>> {
        let path = self.root.join(coordinate.repository_path());
        Ok(path.is_file().then_some(path))
    }
}

/// Memoizes successful resolutions.
///
/// Concurrent requests for the same coordinate are serialized so at most one
/// resolution per coordinate is in flight; different coordinates resolve in
/// parallel. Misses and failures are not cached.
pub struct DependencyCache<R> {
    resolver: R,
    resolved: RwLock<FxHashMap<Coordinate, PathBuf>>,
    in_flight: Mutex<FxHashMap<Coordinate, InFlight>>,
}

/// Per-coordinate lock plus the number of callers holding or awaiting it.
#[derive(Default)]
struct InFlight {
    lock: Arc<Mutex<()>>,
    users: usize,
}

impl<R: ArtifactResolver> DependencyCache<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            resolved: RwLock::new(FxHashMap::default()),
            in_flight: Mutex::new(FxHashMap::default()),
        }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn get(&self, coordinate: &Coordinate) -> Result<Option<PathBuf>> {
        if let Some(path) = self.resolved.read().get(coordinate) {
            return Ok(Some(path.clone()));
        }

        let lock = {
            let mut in_flight = self.in_flight.lock();
            let entry = in_flight.entry(coordinate.clone()).or_default();
            entry.users += 1;
            Arc::clone(&entry.lock)
        };
        let _guard = lock.lock();
        let resolved = self.resolve_locked(coordinate);
        self.release(coordinate);
        resolved
    }

    fn resolve_locked(&self, coordinate: &Coordinate) -> Result<Option<PathBuf>> {
        // Another caller may have finished while we waited.
        if let Some(path) = self.resolved.read().get(coordinate) {
            return Ok(Some(path.clone()));
        }

        let resolved = self.resolver.resolve(coordinate)?;
        match &resolved {
            Some(path) => {
                debug!(%coordinate, path = %path.display(), "resolved artifact");
                self.resolved.write().insert(coordinate.clone(), path.clone());
            }
            None => debug!(%coordinate, "artifact not found"),
        }
        Ok(resolved)
    }

    /// Drop the coordinate's lock once no other caller holds or awaits it.
    fn release(&self, coordinate: &Coordinate) {
        let mut in_flight = self.in_flight.lock();
        if let Some(entry) = in_flight.get_mut(coordinate) {
            entry.users -= 1;
            if entry.users == 0 {
                in_flight.remove(coordinate);
            }
        }
    }

    /// First candidate that resolves, in order.
    pub fn first_of(&self, candidates: &[Coordinate]) -> Result<Option<(Coordinate, PathBuf)>> {
        for coordinate in candidates {
            if let Some(path) = self.get(coordinate)? {
                return Ok(Some((coordinate.clone(), path)));
            }
        }
        Ok(None)
    }

    pub fn cached_len(&self) -> usize {
        self.resolved.read().len()
    }
}
