// Copyright 2015 The Ramp Developers
//
//    Licensed under the Apache License, Version 2.0 (the "License");
//    you may not use this file except in compliance with the License.
//    You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
//    Unless required by applicable law or agreed to in writing, software
//    distributed under the License is distributed on an "AS IS" BASIS,
//    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//    See the License for the specific language governing permissions and
//    limitations under the License.

//! The requested digit count and its parsing.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, warn};

/// Digits produced when no usable count is given.
pub const DEFAULT_DIGITS: u64 = 10;

/**
 * A number of digits to generate. Always at least one.
 *
 * `DigitCount` implements `FromStr` for strict parsing, and `from_arg` for
 * the permissive handling of a command-line argument:
 *
 * ```
 * # use pidigits::DigitCount;
 * let n: DigitCount = "27".parse().unwrap();
 * assert_eq!(27, n.get());
 * assert!("0".parse::<DigitCount>().is_err());
 * assert_eq!(DigitCount::default(), DigitCount::from_arg(Some("0")));
 * ```
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DigitCount(u64);

impl DigitCount {
    pub const DEFAULT: DigitCount = DigitCount(DEFAULT_DIGITS);

    /// Returns `None` for zero.
    pub fn new(n: u64) -> Option<DigitCount> {
        if n == 0 {
            None
        } else {
            Some(DigitCount(n))
        }
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /**
     * Interprets an optional command-line argument.
     *
     * A missing argument gives the default. So does anything that doesn't
     * parse as a positive count, after logging why it was rejected.
     */
    pub fn from_arg(arg: Option<&str>) -> DigitCount {
        let arg = match arg {
            Some(arg) => arg,
            None => {
                debug!(default = DEFAULT_DIGITS, "no digit count given");
                return DigitCount::DEFAULT;
            }
        };

        match arg.parse() {
            Ok(count) => count,
            Err(e) => {
                warn!(arg, error = %e, default = DEFAULT_DIGITS, "ignoring digit count");
                DigitCount::DEFAULT
            }
        }
    }
}

impl Default for DigitCount {
    fn default() -> DigitCount {
        DigitCount::DEFAULT
    }
}

impl fmt::Display for DigitCount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<DigitCount> for u64 {
    fn from(count: DigitCount) -> u64 {
        count.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCountError {
    #[error("cannot parse digit count from empty string")]
    Empty,
    #[error("invalid digit count: {0}")]
    InvalidDigit(#[from] ParseIntError),
    #[error("digit count must be positive, got {0}")]
    NotPositive(i128),
    #[error("digit count {0} is too large")]
    TooLarge(i128),
}

impl FromStr for DigitCount {
    type Err = ParseCountError;

    fn from_str(src: &str) -> Result<DigitCount, ParseCountError> {
        let src = src.trim();
        if src.is_empty() {
            return Err(ParseCountError::Empty);
        }

        let n: i128 = src.parse()?;
        if n < 1 {
            return Err(ParseCountError::NotPositive(n));
        }
        match u64::try_from(n) {
            Ok(n) => Ok(DigitCount(n)),
            Err(_) => Err(ParseCountError::TooLarge(n)),
        }
    }
}
