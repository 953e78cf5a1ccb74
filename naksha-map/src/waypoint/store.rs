//! Ordered waypoint collection with id-uniqueness enforcement.

use crate::error::{Error, Result};
use crate::waypoint::Waypoint;
use std::collections::HashSet;

/// Ordered sequence of waypoints; insertion order is display and export
/// order. Every mutation leaves the collection either fully updated or
/// fully unchanged.
#[derive(Clone, Debug, Default)]
pub struct WaypointStore {
    waypoints: Vec<Waypoint>,
}

impl WaypointStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live waypoints
    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Whether the store is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Waypoints in insertion order
    #[inline]
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Iterate waypoints in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Waypoint> {
        self.waypoints.iter()
    }

    /// Look up a waypoint by id
    pub fn get(&self, id: u64) -> Option<&Waypoint> {
        self.waypoints.iter().find(|wp| wp.id == id)
    }

    /// Largest live id, if any
    pub fn max_id(&self) -> Option<u64> {
        self.waypoints.iter().map(|wp| wp.id).max()
    }

    /// Append a waypoint. Fails with [`Error::DuplicateId`] if the id is
    /// already live; the collection is unchanged on failure.
    pub fn add(&mut self, waypoint: Waypoint) -> Result<()> {
        if self.get(waypoint.id).is_some() {
            return Err(Error::DuplicateId(waypoint.id));
        }
        log::debug!("add waypoint {} ({:?})", waypoint.id, waypoint.name);
        self.waypoints.push(waypoint);
        Ok(())
    }

    /// Remove a waypoint by id. Removing an unknown id is a no-op, not an
    /// error. Returns whether a waypoint was removed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.waypoints.len();
        self.waypoints.retain(|wp| wp.id != id);
        let removed = self.waypoints.len() != before;
        if removed {
            log::debug!("removed waypoint {id}");
        }
        removed
    }

    /// Replace the waypoint with the matching id entirely. Fails with
    /// [`Error::NotFound`] if the id is not live.
    pub fn update(&mut self, waypoint: Waypoint) -> Result<()> {
        match self.waypoints.iter_mut().find(|wp| wp.id == waypoint.id) {
            Some(slot) => {
                *slot = waypoint;
                Ok(())
            }
            None => Err(Error::NotFound(waypoint.id)),
        }
    }

    /// Atomically replace the whole collection. Validates id uniqueness
    /// first and fails with [`Error::DuplicateId`] without touching the
    /// current collection.
    pub fn replace_all(&mut self, waypoints: Vec<Waypoint>) -> Result<()> {
        let mut seen = HashSet::with_capacity(waypoints.len());
        for wp in &waypoints {
            if !seen.insert(wp.id) {
                return Err(Error::DuplicateId(wp.id));
            }
        }
        log::debug!("replacing collection: {} waypoints", waypoints.len());
        self.waypoints = waypoints;
        Ok(())
    }

    /// Remove all waypoints
    pub fn clear(&mut self) {
        self.waypoints.clear();
    }
}
