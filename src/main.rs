//! Date picker CLI application.
//!
//! # Usage
//! ```ignore
//! datepick                     // Current month
//! datepick 2 2026              // February 2026
//! datepick -2                  // Two months side by side
//! datepick --shortcuts         // Shortcut ranges
//! datepick -r last_30_days     // One shortcut range
//! ```

use datepick::args::{Args, get_display_month, parse_value};
use datepick::clock::{Clock, clock_from_env};
use datepick::formatter::{
    RenderContext, display_range_endpoints, display_range_kind_label, display_value, format_grid,
    format_months_side_by_side,
};
use datepick::range::{matching_range_kind, resolve_range};
use datepick::types::{Config, DateRange, DateValue, RangeKind};

const LOG_ENV_VAR: &str = "DATEPICK_LOG";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

fn main() {
    init_tracing();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("datepick: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let env_filter = std::env::var(LOG_ENV_VAR).unwrap_or_else(|_| "warn".to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(args: &Args) -> datepick::Result<()> {
    let config = Config::from_args(args)?;
    let clock = clock_from_env();

    let value = args
        .value
        .as_deref()
        .map(|raw| parse_value(raw, config.picker_type))
        .transpose()?;

    // Display mode priority: value label > range > shortcuts > calendar
    if let Some(value) = value.as_ref().filter(|_| !args.calendar) {
        print_value(value, &config, &clock);
    } else if let Some(kind) = args.range {
        print_range(kind, &config, &clock);
    } else if args.shortcuts {
        print_shortcuts(&config, &clock);
    } else {
        let ctx = RenderContext::new(args, &clock);
        let month = get_display_month(args, &clock)?;
        let months = if args.two_months {
            vec![month, month.next()]
        } else {
            vec![month]
        };
        let grids = months
            .into_iter()
            .map(|m| format_grid(m, &config, value.as_ref(), &ctx))
            .collect::<datepick::Result<Vec<_>>>()?;
        for line in format_months_side_by_side(&grids) {
            println!("{}", line);
        }
    }

    Ok(())
}

fn print_value(value: &DateValue, config: &Config, clock: &impl Clock) {
    let display = display_value(Some(value), config);
    println!("{}", display.label);

    let endpoints = display_range_endpoints(Some(value), config);
    if let Some(start) = endpoints.start {
        println!("start: {}", start);
    }
    if let Some(end) = endpoints.end {
        println!("end: {}", end);
    }
    if let Some(kind) = matching_range_kind(Some(value), clock) {
        println!("shortcut: {}", display_range_kind_label(kind, config));
    }
}

fn format_range(range: Option<DateRange>) -> String {
    match range {
        Some(DateRange {
            start_date: Some(start),
            end_date: Some(end),
        }) => format!(
            "{} .. {}",
            start.format(TIMESTAMP_FORMAT),
            end.format(TIMESTAMP_FORMAT)
        ),
        _ => "unbounded".to_string(),
    }
}

fn print_range(kind: RangeKind, config: &Config, clock: &impl Clock) {
    let label = display_range_kind_label(kind, config);
    println!("{}: {}", label, format_range(resolve_range(kind, clock)));
}

fn print_shortcuts(config: &Config, clock: &impl Clock) {
    for kind in RangeKind::ALL {
        let label = display_range_kind_label(kind, config);
        println!(
            "{:<14} {:<14} {}",
            kind,
            label,
            format_range(resolve_range(kind, clock))
        );
    }
}
