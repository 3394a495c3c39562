// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Invalid-argument conditions reported by the rollover engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RolloverError {
    #[error("horizon must cover at least one week, got {0}")]
    InvalidHorizon(u32),
    #[error("base daily allowance must not be negative, got {0}")]
    NegativeAllowance(Decimal),
    #[error("week starting {0} runs past the supported calendar range")]
    DateOutOfRange(NaiveDate),
}

pub type RolloverResult<T> = std::result::Result<T, RolloverError>;
