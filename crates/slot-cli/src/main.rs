//! `slots` CLI -- inspect the booking engine from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Bookable starts for a morning, as seen from a fixed clock
//! slots list --period MORNING --day 2026-08-10 --now 2026-08-09T18:00:00
//!
//! # Starts blocked by existing bookings against a haircut request
//! slots blocked --service HAIRCUT --booked 10:00,11:30
//!
//! # Can a 60-minute haircut still start at 09:45?
//! slots check --slot 09:45 --service HAIRCUT --booked 10:00
//!
//! # Is the day completely booked out for even a 30-minute trim?
//! slots full --booked 09:00,09:30,10:00
//! ```

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use slot_engine::{
    blocked_slots, check_slot, generate_slots, is_day_full, parse_day, FixedClock, Period,
    ServiceKind, SystemClock, TimeSlot,
};

#[derive(Parser)]
#[command(name = "slots", version, about = "Single-chair booking slot engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List bookable start times for a day and period
    List {
        /// Half-day window: MORNING or AFTERNOON
        #[arg(long)]
        period: Option<String>,
        /// Calendar day (YYYY-MM-DD)
        #[arg(long)]
        day: Option<String>,
        /// Fix the clock (YYYY-MM-DDTHH:MM:SS) instead of reading system time
        #[arg(long)]
        now: Option<String>,
    },
    /// Expand booked starts into the blocked set for a service
    Blocked {
        /// Service being requested: HAIRCUT, BEARD, or HAIRCUT_AND_BEARD
        #[arg(long)]
        service: String,
        /// Comma-separated booked start times (HH:MM)
        #[arg(long, default_value = "")]
        booked: String,
    },
    /// Check whether one start can host a service
    Check {
        /// Candidate start time (HH:MM)
        #[arg(long)]
        slot: String,
        /// Service being requested: HAIRCUT, BEARD, or HAIRCUT_AND_BEARD
        #[arg(long)]
        service: String,
        /// Comma-separated booked start times (HH:MM)
        #[arg(long, default_value = "")]
        booked: String,
    },
    /// Report whether a day has zero remaining capacity
    Full {
        /// Comma-separated booked start times (HH:MM)
        #[arg(long, default_value = "")]
        booked: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List { period, day, now } => {
            let period = period
                .as_deref()
                .map(|raw| raw.parse::<Period>())
                .transpose()
                .context("Failed to parse --period")?;
            let day = day
                .as_deref()
                .map(parse_day)
                .transpose()
                .context("Failed to parse --day")?;

            let slots = match now {
                Some(raw) => {
                    let instant = NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S")
                        .with_context(|| format!("Invalid --now instant: {}", raw))?;
                    generate_slots(period, day, &FixedClock::new(instant))
                }
                None => generate_slots(period, day, &SystemClock),
            };

            println!("{}", serde_json::to_string_pretty(&slots)?);
        }
        Commands::Blocked { service, booked } => {
            let service: ServiceKind = service.parse().context("Failed to parse --service")?;
            let booked = parse_booked(&booked)?;

            let blocked: Vec<TimeSlot> = blocked_slots(&booked, service).into_iter().collect();
            println!("{}", serde_json::to_string_pretty(&blocked)?);
        }
        Commands::Check {
            slot,
            service,
            booked,
        } => {
            let candidate: TimeSlot = slot.parse().context("Failed to parse --slot")?;
            let service: ServiceKind = service.parse().context("Failed to parse --service")?;
            let booked = parse_booked(&booked)?;

            let verdict = check_slot(candidate, service, &booked);
            println!("{}", serde_json::to_string_pretty(&verdict)?);
        }
        Commands::Full { booked } => {
            let booked = parse_booked(&booked)?;
            println!("{}", is_day_full(&booked));
        }
    }

    Ok(())
}

/// Parse a comma-separated `--booked` list into start times.
///
/// An empty value means no bookings; blank segments are skipped so trailing
/// commas are harmless.
fn parse_booked(raw: &str) -> Result<Vec<TimeSlot>> {
    let mut starts = Vec::new();
    for part in raw.split(',') {
        let trimmed = part.trim();
        if trimmed.is_empty() {
            continue;
        }
        let slot: TimeSlot = trimmed
            .parse()
            .with_context(|| format!("Invalid booked start: {}", trimmed))?;
        starts.push(slot);
    }
    Ok(starts)
}
