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

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pidigits::DigitCount;

/// Print the decimal digits of pi, ten to a line, with a running count.
#[derive(Debug, Parser)]
#[command(name = "pidigits", version, about)]
struct Cli {
    /// Number of digits to print. Anything that isn't a positive integer
    /// falls back to 10.
    #[arg(value_name = "N", allow_hyphen_values = true)]
    digits: Option<String>,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("off"));

    // Stdout carries the digits; diagnostics go to stderr.
    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let count = DigitCount::from_arg(cli.digits.as_deref());
    pidigits::generate(count).context("failed to write digits to stdout")
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(args: &[&str]) -> DigitCount {
        let cli = Cli::try_parse_from(args).unwrap();
        DigitCount::from_arg(cli.digits.as_deref())
    }

    #[test]
    fn positional_count() {
        assert_eq!(10, parse(&["pidigits"]).get());
        assert_eq!(27, parse(&["pidigits", "27"]).get());
        assert_eq!(10, parse(&["pidigits", "0"]).get());
        assert_eq!(10, parse(&["pidigits", "-4"]).get());
        assert_eq!(10, parse(&["pidigits", "lots"]).get());
    }

    #[test]
    fn extra_arguments_rejected() {
        assert!(Cli::try_parse_from(&["pidigits", "1", "2"]).is_err());
    }
}
