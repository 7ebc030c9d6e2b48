// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Command-line front end: date → Julian Date → GST/LST.
//!
//! Prints one line per pipeline stage so every intermediate value can be
//! inspected: the echoed input date, the day-count formula's terms and
//! result, the Gregorian-formula Julian Date, then `t`/GST and the final
//! reduced-GST/clock-minutes/LST triple.

use clap::Parser;
use lstclock::{Date, SiderealReport, OBSERVATION_TIME};

#[derive(Parser)]
#[command(name = "lstclock", version, about = "Julian Date and sidereal time for a calendar date")]
struct Cli {
    /// Calendar year
    #[arg(allow_negative_numbers = true)]
    year: i32,

    /// Month number (not range-checked)
    #[arg(allow_negative_numbers = true)]
    month: i32,

    /// Day of month (not range-checked)
    #[arg(allow_negative_numbers = true)]
    day: i32,
}

fn main() {
    let cli = Cli::parse();
    let date = Date::new(cli.year, cli.month, cli.day);

    println!("{} {} {}", date.year, date.month, date.day);

    let quick = date.quick_julian_date();
    println!(
        "{} {} {} {}",
        quick.year_days, quick.month_rollover, quick.leap_adjustment, quick.month_days
    );
    println!("{}", quick.jd.value());

    let jd = date.julian_date();
    println!("{}", jd.value());

    let report = SiderealReport::at(jd, OBSERVATION_TIME);
    println!("{} {}", report.centuries, report.gst_unreduced);
    println!("{} {} {}", report.gst, report.clock_minutes, report.lst);
}
