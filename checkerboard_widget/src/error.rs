// Copyright 2025 the Checkerboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for the board and its host hooks.

use std::fmt;

/// Error type host hooks return. Any error the host can box is accepted.
pub type HookError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Which host hook failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum HookKind {
    /// [`BoardHost::show_moves`](crate::BoardHost::show_moves).
    ShowMoves,
    /// [`BoardHost::on_drop`](crate::BoardHost::on_drop).
    Drop,
    /// [`BoardHost::pull_position`](crate::BoardHost::pull_position).
    PullPosition,
    /// A [`PieceTheme::Resolver`](crate::PieceTheme::Resolver) function.
    PieceTheme,
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ShowMoves => "show_moves",
            Self::Drop => "on_drop",
            Self::PullPosition => "pull_position",
            Self::PieceTheme => "piece_theme",
        })
    }
}

/// Errors surfaced on the host's error channel.
///
/// None of these are fatal: the board stays usable and consistent after each.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// No mount target with this name was declared.
    #[error("mount target {0:?} not found")]
    MountNotFound(String),
    /// The mount target already holds a board.
    #[error("mount target {0:?} already holds a board")]
    MountOccupied(String),
    /// A host hook returned an error; the triggering interaction was rejected.
    #[error("{hook} hook failed: {source}")]
    Hook {
        /// The hook that failed.
        hook: HookKind,
        /// The host's error.
        source: HookError,
    },
}

impl BoardError {
    pub(crate) fn hook(hook: HookKind, source: HookError) -> Self {
        Self::Hook { hook, source }
    }

    /// The failing hook, for [`BoardError::Hook`].
    pub fn hook_kind(&self) -> Option<HookKind> {
        match self {
            Self::Hook { hook, .. } => Some(*hook),
            _ => None,
        }
    }
}
