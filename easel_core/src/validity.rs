// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The derived validity flag.

use crate::surface::InputControl;

/// Whether an input control's current value is acceptable.
///
/// Never stored: recomputed from the control's value on every change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Validity {
    /// Non-empty value.
    Valid,
    /// Empty value.
    Invalid,
}

impl Validity {
    /// Validity of `value`. Only the empty string is invalid.
    #[must_use]
    pub fn of(value: &str) -> Self {
        if value.is_empty() {
            Self::Invalid
        } else {
            Self::Valid
        }
    }

    /// Recomputes the flag from `input`'s current value and surfaces it.
    pub fn refresh(input: &impl InputControl) -> Self {
        let validity = Self::of(&input.value());
        input.set_invalid(validity == Self::Invalid);
        validity
    }
}
