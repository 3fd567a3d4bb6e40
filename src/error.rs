// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Errors for conversion operations.

use std::fmt;

/// Errors surfaced at the conversion boundary.
#[derive(Debug)]
pub enum ConvertError {
    /// The value could not be coerced into the target type, or no
    /// conversion strategy exists for it. Carries the target type name and
    /// the underlying cause.
    Conversion { target: String, detail: String },
    /// Map conversion source is neither a map nor a struct. Kept distinct
    /// from [`ConvertError::Conversion`]: it reflects the input's shape,
    /// not the target's type.
    UnsupportedSource { found: String },
    /// Enum lookup failed: no variant with the given name or value. This is
    /// the lookup's own failure and is not folded into
    /// [`ConvertError::Conversion`].
    UnknownVariant { enum_name: String, variant: String },
}

impl ConvertError {
    /// Build a [`ConvertError::Conversion`] for the given target and cause.
    pub fn conversion(target: impl fmt::Display, detail: impl fmt::Display) -> Self {
        Self::Conversion {
            target: target.to_string(),
            detail: detail.to_string(),
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conversion { target, detail } => {
                write!(f, "cannot convert to {}: {}", target, detail)
            }
            Self::UnsupportedSource { found } => {
                write!(f, "unsupported map conversion source: {}", found)
            }
            Self::UnknownVariant { enum_name, variant } => {
                write!(f, "no variant {} in enum {}", variant, enum_name)
            }
        }
    }
}

impl std::error::Error for ConvertError {}
