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

//! Grouping of digits into output lines.

use std::fmt;

use crate::count::DigitCount;

/// Number of digits on a full output line.
pub const GROUP_SIZE: usize = 10;

/**
 * One output line: a run of up to `GROUP_SIZE` digits and the running total.
 *
 * Displays as `<digits>\t:<total>`. A group that is not the last one is
 * zero-padded on the left to `GROUP_SIZE` characters. The last group is
 * written at its own length and padded on the right with spaces, so the tab
 * stays in the same column:
 *
 * ```
 * # use pidigits::{digit_lines, DigitCount};
 * let lines: Vec<String> = digit_lines(DigitCount::new(13).unwrap())
 *     .map(|g| g.to_string())
 *     .collect();
 * assert_eq!(lines, ["3141592653\t:10", "589       \t:13"]);
 * ```
 */
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DigitGroup {
    value: u64,
    len: usize,
    total: u64,
    last: bool,
}

impl DigitGroup {
    /// The digits of this group as a number.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// How many digits the group holds, counting leading zeros.
    pub fn num_digits(&self) -> usize {
        self.len
    }

    /// Digits emitted up to and including this group.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_last(&self) -> bool {
        self.last
    }

    /// The digit column of the line, padded out to `GROUP_SIZE` characters.
    pub fn pad(&self) -> String {
        // Chosen by position, not by length: only the last group is ever
        // space-padded.
        if self.last {
            let digits = format!("{:0len$}", self.value, len = self.len);
            format!("{:<width$}", digits, width = GROUP_SIZE)
        } else {
            format!("{:0width$}", self.value, width = GROUP_SIZE)
        }
    }
}

impl fmt::Display for DigitGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\t:{}", self.pad(), self.total)
    }
}

/**
 * Collects digits into `DigitGroup`s until a target count is reached.
 *
 * A group is flushed every `GROUP_SIZE` digits and once more for the final
 * digit, whatever its position.
 */
#[derive(Clone, Debug)]
pub struct Grouper {
    target: u64,
    emitted: u64,
    pending: u64,
    pending_len: usize,
}

impl Grouper {
    pub fn new(count: DigitCount) -> Grouper {
        Grouper {
            target: count.get(),
            emitted: 0,
            pending: 0,
            pending_len: 0,
        }
    }

    /// Digits pushed so far.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    /// True once the target count has been pushed.
    pub fn is_done(&self) -> bool {
        self.emitted >= self.target
    }

    /**
     * Adds a digit, returning the group it completes, if any.
     *
     * Must not be called once `is_done` returns true.
     */
    pub fn push(&mut self, digit: u8) -> Option<DigitGroup> {
        debug_assert!(digit < 10);
        debug_assert!(!self.is_done());

        self.pending = self.pending * 10 + u64::from(digit);
        self.pending_len += 1;
        self.emitted += 1;

        let last = self.emitted >= self.target;
        if self.emitted % GROUP_SIZE as u64 != 0 && !last {
            return None;
        }

        let group = DigitGroup {
            value: self.pending,
            len: self.pending_len,
            total: self.emitted,
            last,
        };
        self.pending = 0;
        self.pending_len = 0;
        Some(group)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn group(value: u64, len: usize, total: u64, last: bool) -> DigitGroup {
        DigitGroup { value, len, total, last }
    }

    #[test]
    fn pad() {
        let cases = [
            (group(3141592653, 10, 10, false), "3141592653"),
            (group(582097494, 10, 60, false), "0582097494"),
            (group(3141592653, 10, 10, true), "3141592653"),
            (group(3, 1, 1, true), "3         "),
            (group(95028, 5, 35, true), "95028     "),
            (group(5, 2, 52, true), "05        "),
            (group(0, 1, 51, true), "0         "),
            // Not produced by `Grouper`, but still left-padded since it isn't last.
            (group(42, 2, 2, false), "0000000042"),
        ];

        for &(ref g, s) in cases.iter() {
            assert_eq!(s, g.pad());
            assert_eq!(GROUP_SIZE, g.pad().len());
        }
    }

    #[test]
    fn display() {
        assert_eq!("3141592653\t:10", group(3141592653, 10, 10, true).to_string());
        assert_eq!("3         \t:1", group(3, 1, 1, true).to_string());
        assert_eq!("0582097494\t:60", group(582097494, 10, 60, false).to_string());
    }

    #[test]
    fn flushes_every_ten() {
        let mut g = Grouper::new(DigitCount::new(25).unwrap());
        let mut flushed = Vec::new();
        for i in 0..25 {
            if let Some(group) = g.push((i % 10) as u8) {
                flushed.push(group);
            }
        }

        assert!(g.is_done());
        assert_eq!(25, g.emitted());
        assert_eq!(flushed, [
            group(123456789, 10, 10, false),
            group(123456789, 10, 20, false),
            group(1234, 5, 25, true),
        ]);
        assert_eq!("01234     \t:25", flushed[2].to_string());
    }

    #[test]
    fn single_digit_target() {
        let mut g = Grouper::new(DigitCount::new(1).unwrap());
        assert!(!g.is_done());
        assert_eq!(Some(group(3, 1, 1, true)), g.push(3));
        assert!(g.is_done());
    }

    #[test]
    fn exact_multiple_ends_on_full_group() {
        let mut g = Grouper::new(DigitCount::new(20).unwrap());
        let groups: Vec<DigitGroup> = (0..20).filter_map(|_| g.push(7)).collect();
        assert_eq!(2, groups.len());
        assert!(!groups[0].is_last());
        assert!(groups[1].is_last());
        assert_eq!("7777777777\t:20", groups[1].to_string());
    }
}
