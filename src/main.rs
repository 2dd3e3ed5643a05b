// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod cli;
mod config;
mod convert;
mod extract;
mod reader;
mod template;
mod types;
mod ui;

#[cfg(test)]
mod test_fixtures;

use std::io::Write;

fn main() {
    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    init_logging(args.verbose);

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    let options = config::build_convert_options(&args);

    match convert::convert_report_to_markdown(&options) {
        Ok(path) => ui::status(&format!("Markdown report saved to: {}", path.display())),
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

/// Set up `timestamp | LEVEL | message` logging on stderr
///
/// `--verbose` lowers the default level to debug; RUST_LOG still wins when set.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} | {} | {}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();
}
