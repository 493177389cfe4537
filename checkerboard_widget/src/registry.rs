// Copyright 2025 the Checkerboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named mount targets for hosts that manage several boards.

use std::collections::BTreeMap;

use crate::board::Board;
use crate::config::BoardConfig;
use crate::coordinator::report;
use crate::error::BoardError;
use crate::host::BoardHost;

/// Mount targets by name, each holding at most one board.
///
/// Targets must be declared before a board can be mounted on them; this is
/// where an embedding toolkit registers its placeholder elements.
///
/// ```
/// use checkerboard_widget::{BoardConfig, BoardError, BoardRegistry, NoHost};
///
/// let mut boards = BoardRegistry::<NoHost>::new();
/// boards.declare_mount("main");
/// assert!(boards.mount("main", BoardConfig::default(), NoHost).is_ok());
/// assert!(matches!(
///     boards.mount("sidebar", BoardConfig::default(), NoHost),
///     Err(BoardError::MountNotFound(_))
/// ));
/// ```
pub struct BoardRegistry<H: BoardHost = Box<dyn BoardHost>> {
    mounts: BTreeMap<String, Option<Board<H>>>,
}

impl<H: BoardHost> Default for BoardRegistry<H> {
    fn default() -> Self {
        Self {
            mounts: BTreeMap::new(),
        }
    }
}

impl<H: BoardHost> std::fmt::Debug for BoardRegistry<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.mounts.iter().map(|(name, board)| (name, board.is_some())))
            .finish()
    }
}

impl<H: BoardHost> BoardRegistry<H> {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a mount target. Declaring an existing target again has no effect.
    pub fn declare_mount(&mut self, name: impl Into<String>) {
        self.mounts.entry(name.into()).or_default();
    }

    /// Whether `name` has been declared.
    pub fn has_mount(&self, name: &str) -> bool {
        self.mounts.contains_key(name)
    }

    /// Build a board on the mount target `name`.
    ///
    /// On failure the error is logged and passed to the host's error channel
    /// before being returned; the host is dropped.
    pub fn mount(
        &mut self,
        name: &str,
        config: BoardConfig,
        mut host: H,
    ) -> Result<&mut Board<H>, BoardError> {
        let slot = match self.mounts.get_mut(name) {
            None => Err(BoardError::MountNotFound(name.to_owned())),
            Some(Some(_)) => Err(BoardError::MountOccupied(name.to_owned())),
            Some(slot) => Ok(slot),
        };
        let slot = match slot {
            Ok(slot) => slot,
            Err(error) => {
                report(&mut host, &error);
                return Err(error);
            }
        };
        tracing::debug!(mount = name, size = config.size, "mounting board");
        Ok(slot.insert(Board::new(config, host)))
    }

    /// The board on `name`, if mounted.
    pub fn get(&self, name: &str) -> Option<&Board<H>> {
        self.mounts.get(name)?.as_ref()
    }

    /// The board on `name`, mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Board<H>> {
        self.mounts.get_mut(name)?.as_mut()
    }

    /// Take the board off `name`, leaving the target declared and empty.
    pub fn unmount(&mut self, name: &str) -> Option<Board<H>> {
        self.mounts.get_mut(name)?.take()
    }

    /// Declared target names, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.mounts.keys().map(String::as_str)
    }

    /// Mounted boards with their target names.
    pub fn boards(&self) -> impl Iterator<Item = (&str, &Board<H>)> + '_ {
        self.mounts
            .iter()
            .filter_map(|(name, board)| Some((name.as_str(), board.as_ref()?)))
    }
}
