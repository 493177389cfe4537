// Copyright 2025 the Checkerboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Piece theme: how a [`PieceId`] becomes an image reference.

use std::fmt;

use crate::error::{BoardError, HookError, HookKind};
use crate::position::PieceId;

/// Signature of a theme resolver function.
pub type ResolverFn = dyn Fn(&PieceId) -> Result<String, HookError>;

/// Resolves pieces to image references. Chosen once, at configuration time.
pub enum PieceTheme {
    /// A template where `{piece}` (or its URL-encoded form `%7Bpiece%7D`) is
    /// replaced with the piece token.
    Template(String),
    /// A host function. Failures yield an empty reference.
    Resolver(Box<ResolverFn>),
}

impl PieceTheme {
    /// Template used when none is configured.
    pub const DEFAULT_TEMPLATE: &'static str = "chess_pieces/{piece}.png";

    /// A template theme.
    pub fn template(template: impl Into<String>) -> Self {
        Self::Template(template.into())
    }

    /// A resolver theme.
    pub fn resolver<F>(resolve: F) -> Self
    where
        F: Fn(&PieceId) -> Result<String, HookError> + 'static,
    {
        Self::Resolver(Box::new(resolve))
    }

    /// Resolve the image reference for `piece`.
    pub fn resolve(&self, piece: &PieceId) -> Result<String, BoardError> {
        match self {
            Self::Template(template) => Ok(template
                .replacen("%7Bpiece%7D", piece.as_str(), 1)
                .replacen("{piece}", piece.as_str(), 1)),
            Self::Resolver(resolve) => {
                resolve(piece).map_err(|e| BoardError::hook(HookKind::PieceTheme, e))
            }
        }
    }

    /// Resolve the image reference for `piece`, logging failures and falling back to `""`.
    pub fn image_for(&self, piece: &PieceId) -> String {
        self.resolve(piece).unwrap_or_else(|err| {
            tracing::warn!(piece = %piece, error = %err, "piece theme failed; drawing no image");
            String::new()
        })
    }
}

impl Default for PieceTheme {
    fn default() -> Self {
        Self::template(Self::DEFAULT_TEMPLATE)
    }
}

impl fmt::Debug for PieceTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template(template) => f.debug_tuple("Template").field(template).finish(),
            Self::Resolver(_) => f.debug_tuple("Resolver").finish_non_exhaustive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template() {
        let theme = PieceTheme::default();
        assert_eq!(theme.image_for(&"wK".into()), "chess_pieces/wK.png");
    }

    #[test]
    fn template_accepts_url_encoded_placeholder() {
        let theme = PieceTheme::template("https://cdn.example/%7Bpiece%7D.svg");
        assert_eq!(theme.image_for(&"bQ".into()), "https://cdn.example/bQ.svg");
    }

    #[test]
    fn template_without_placeholder_is_constant() {
        let theme = PieceTheme::template("sprite.png");
        assert_eq!(theme.image_for(&"bQ".into()), "sprite.png");
    }

    #[test]
    fn resolver_is_called_with_the_piece() {
        let theme = PieceTheme::resolver(|piece| {
            Ok(format!("/img/{}-v2.png", piece.as_str().to_lowercase()))
        });
        assert_eq!(theme.image_for(&"wN".into()), "/img/wn-v2.png");
    }

    #[test]
    fn failing_resolver_yields_empty_reference() {
        let theme = PieceTheme::resolver(|piece| Err(format!("no art for {piece}").into()));
        let err = theme.resolve(&"xX".into()).unwrap_err();
        assert_eq!(err.hook_kind(), Some(HookKind::PieceTheme));
        assert_eq!(theme.image_for(&"xX".into()), "");
    }
}
