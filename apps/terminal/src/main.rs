//! `rail` binary: interactive Railway Reservation menu.

use std::process::ExitCode;

fn main() -> ExitCode {
    rail_terminal::run()
}
