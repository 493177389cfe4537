// Copyright 2025 the Checkerboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Move coordinator: resolves a [`MoveAttempt`] through the host.
//!
//! The coordinator is the only code besides `set_position` that writes the
//! [`PositionStore`]. On an accepted move it adopts the host's position when
//! the host supplies one; otherwise the store is left as it was and the host
//! is expected to call `set_position` itself.

use crate::error::{BoardError, HookKind};
use crate::host::{BoardHost, MoveVerdict};
use crate::interaction::MoveAttempt;
use crate::position::PositionStore;

/// How a move attempt was resolved.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct MoveOutcome {
    /// The attempted move.
    pub attempt: MoveAttempt,
    /// The effective verdict. Hook failures count as [`MoveVerdict::Reject`].
    pub verdict: MoveVerdict,
    /// Whether the store was replaced with a position pulled from the host.
    pub position_pulled: bool,
}

/// Borrowed view of a board's host and store for the duration of one attempt.
pub(crate) struct MoveCoordinator<'a, H: BoardHost + ?Sized> {
    host: &'a mut H,
    store: &'a mut PositionStore,
}

impl<'a, H: BoardHost + ?Sized> MoveCoordinator<'a, H> {
    pub(crate) fn new(host: &'a mut H, store: &'a mut PositionStore) -> Self {
        Self { host, store }
    }

    /// Ask the host for a verdict on `attempt` and apply it.
    pub(crate) fn attempt(self, attempt: MoveAttempt) -> MoveOutcome {
        let MoveAttempt { from, to } = attempt;
        let verdict = match self.host.on_drop(from, to) {
            Ok(verdict) => verdict,
            Err(source) => {
                report(&mut *self.host, &BoardError::hook(HookKind::Drop, source));
                MoveVerdict::Reject
            }
        };
        tracing::debug!(%from, %to, ?verdict, "move verdict");

        if !verdict.is_accept() {
            return MoveOutcome {
                attempt,
                verdict,
                position_pulled: false,
            };
        }

        match self.host.pull_position() {
            Ok(Some(position)) => {
                tracing::debug!(pieces = position.len(), "adopting host position");
                self.store.set(position);
                MoveOutcome {
                    attempt,
                    verdict,
                    position_pulled: true,
                }
            }
            Ok(None) => MoveOutcome {
                attempt,
                verdict,
                position_pulled: false,
            },
            Err(source) => {
                report(
                    &mut *self.host,
                    &BoardError::hook(HookKind::PullPosition, source),
                );
                MoveOutcome {
                    attempt,
                    verdict: MoveVerdict::Reject,
                    position_pulled: false,
                }
            }
        }
    }
}

/// Log a hook failure and forward it to the host's error channel.
pub(crate) fn report<H: BoardHost + ?Sized>(host: &mut H, error: &BoardError) {
    tracing::error!(hook = ?error.hook_kind(), error = %error, "board error");
    host.report_error(error);
}
