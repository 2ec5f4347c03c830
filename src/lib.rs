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

/*!
 * Decimal digits of pi from an unbounded-precision digit spigot.
 *
 * The digits are produced one at a time by `Spigot`, grouped ten to a line
 * by `Grouper`, and written out with a running count:
 *
 * ```text
 * 3141592653	:10
 * 5897932384	:20
 * 6264338327	:30
 * 95028     	:35
 * ```
 *
 * `generate` writes to standard output, `write_digits` to any `io::Write`,
 * and `digit_lines` hands back the lines themselves.
 */

use std::io::{self, BufWriter, Write};

use tracing::{debug, trace};

pub mod count;
pub mod group;
pub mod spigot;

// Re-exports

pub use count::{DigitCount, ParseCountError, DEFAULT_DIGITS};
pub use group::{DigitGroup, Grouper, GROUP_SIZE};
pub use spigot::Spigot;

/**
 * Iterator over the output lines for a fixed number of digits.
 *
 * Created by `digit_lines`. Ends right after the group holding the final
 * digit; the spigot is not stepped past it.
 */
#[derive(Clone, Debug)]
pub struct DigitLines {
    spigot: Spigot,
    grouper: Grouper,
}

impl DigitLines {
    /// Series terms the spigot has consumed so far.
    pub fn terms(&self) -> u64 {
        self.spigot.terms()
    }

    /// Digits produced so far.
    pub fn emitted(&self) -> u64 {
        self.grouper.emitted()
    }
}

impl Iterator for DigitLines {
    type Item = DigitGroup;

    fn next(&mut self) -> Option<DigitGroup> {
        while !self.grouper.is_done() {
            let digit = self.spigot.next()?;
            if let Some(group) = self.grouper.push(digit) {
                trace!(total = group.total(), terms = self.spigot.terms(), "digit group ready");
                return Some(group);
            }
        }
        None
    }
}

/// The lines for the first `count` digits of pi.
pub fn digit_lines(count: DigitCount) -> DigitLines {
    DigitLines {
        spigot: Spigot::new(),
        grouper: Grouper::new(count),
    }
}

/// Writes the first `count` digits of pi to `out`, one group per line.
pub fn write_digits<W: Write>(count: DigitCount, out: &mut W) -> io::Result<()> {
    debug!(digits = count.get(), "generating digits of pi");

    let mut lines = digit_lines(count);
    for group in &mut lines {
        writeln!(out, "{}", group)?;
    }

    debug!(digits = lines.emitted(), terms = lines.terms(), "generation finished");
    Ok(())
}

/// Writes the first `count` digits of pi to standard output.
pub fn generate(count: DigitCount) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_digits(count, &mut out)?;
    out.flush()
}
