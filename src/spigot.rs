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
 * The digit spigot itself.
 *
 * `Spigot` folds one term of the series for pi into a big-integer fraction
 * on every step, and releases a decimal digit once the next term can no
 * longer change it. Digits come out one at a time, most significant first,
 * without any lookahead beyond the current state:
 *
 * ```
 * # use pidigits::Spigot;
 * let digits: Vec<u8> = Spigot::new().take(5).collect();
 * assert_eq!(digits, [3, 1, 4, 1, 5]);
 * ```
 */

use std::mem;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};

/**
 * The state of the pi spigot.
 *
 * The fraction is held as three big integers: an accumulator `acc`, a
 * denominator `den` and a numerator term `num`. `acc` is signed; removing an
 * emitted digit can take it below zero, and the next terms bring it back.
 *
 * A `Spigot` is an unbounded iterator. Stop it with `take` or similar.
 */
#[derive(Clone, Debug)]
pub struct Spigot {
    k: u64,
    k1: u64,
    acc: BigInt,
    den: BigInt,
    num: BigInt,
    // Digit handed out but not yet removed from the state.
    pending: Option<u8>,
}

impl Spigot {
    pub fn new() -> Spigot {
        Spigot {
            k: 0,
            k1: 1,
            acc: BigInt::zero(),
            den: BigInt::one(),
            num: BigInt::one(),
            pending: None,
        }
    }

    /// Number of series terms folded into the state so far.
    pub fn terms(&self) -> u64 {
        self.k
    }

    fn next_term(&mut self) {
        self.k += 1;
        self.k1 += 2;

        let t = &self.num << 1u32;
        self.num *= self.k;
        self.acc = (mem::take(&mut self.acc) + t) * self.k1;
        self.den *= self.k1;
    }

    /**
     * Returns the next digit if the current state pins it down.
     *
     * The candidate `(3*num + acc) / den` is only accepted when adding one
     * more `num` to the remainder stays below `den`, i.e. when the quotient
     * for `4*num + acc` would be the same digit.
     */
    fn extract_digit(&self) -> Option<u8> {
        if self.acc < self.num {
            return None;
        }

        let m = &self.num * 3u32 + &self.acc;
        let (q, r) = m.div_mod_floor(&self.den);
        if self.den <= r + &self.num {
            return None;
        }

        match q.to_u8() {
            Some(d) if d < 10 => Some(d),
            _ => unreachable!("verified spigot quotient {} is not a decimal digit", q),
        }
    }

    fn eliminate_digit(&mut self, d: u8) {
        self.acc -= &self.den * u32::from(d);
        self.acc *= 10u32;
        self.num *= 10u32;
    }
}

impl Default for Spigot {
    fn default() -> Spigot {
        Spigot::new()
    }
}

impl Iterator for Spigot {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        // Removing a digit is deferred until the following one is asked for,
        // so stopping after the last wanted digit costs nothing extra.
        if let Some(d) = self.pending.take() {
            self.eliminate_digit(d);
        }

        loop {
            self.next_term();
            if let Some(d) = self.extract_digit() {
                self.pending = Some(d);
                return Some(d);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::max_value(), None)
    }
}
