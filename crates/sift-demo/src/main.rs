//! sift-demo - filter a product catalog with composable predicates.
//!
//! ```text
//! sift-demo                                   # green / large / green and large
//! sift-demo filter --color green --size large
//! sift-demo filter --size large --naive       # same result, the hard-coded way
//! sift-demo --catalog products.json --format json filter --color red
//! ```

mod cli;
mod commands;
mod criteria;
mod diag;
mod naive;
mod output;
mod product;

use std::io;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;
use crate::diag::Diagnostics;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut diag = Diagnostics::stderr(cli.verbose);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::run(cli, &mut out, &mut diag)
}
