// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Rule tables for model validation
//!
//! Each model declares an ordered list of rules. The validator walks the
//! list and reports the first rule whose predicate rejects the input.

use crate::error::{ValidationError, ViolationKind};

/// One field constraint
pub(crate) struct Rule<T> {
    pub field: &'static str,
    pub kind: ViolationKind,
    pub message: &'static str,
    pub check: fn(&T) -> bool,
}

impl<T> Rule<T> {
    fn violation(&self) -> ValidationError {
        ValidationError::new(self.field, self.kind, self.message)
    }
}

/// Run `rules` in order against `input`, stopping at the first failure
pub(crate) fn validate<T>(input: &T, rules: &[Rule<T>]) -> Result<(), ValidationError> {
    match rules.iter().find(|rule| !(rule.check)(input)) {
        Some(rule) => Err(rule.violation()),
        None => Ok(()),
    }
}
