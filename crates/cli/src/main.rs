// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod host;

use crate::error::CliError;
use crate::host::ScheduleHost;
use chrono_tz::Tz;
use clap::{Args as ClapArgs, Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use std::sync::Arc;
use table_booking::{BookingForm, FormEvent, SubmitOutcome};
use table_booking_domain::{
    Clock, OccasionOptions, OccasionValue, Reservation, ReservationDraft, ServiceSchedule,
    SystemClock, TimeSlot, parse_date,
};
use time::Date;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info, warn};
use tracing_log::AsTrace;

/// Table Booking - reserve a table from the command line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// IANA time zone of the restaurant. Decides which day is "today".
    #[arg(long, global = true, default_value = "UTC")]
    timezone: String,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    fn clock(&self) -> Result<SystemClock, CliError> {
        let tz: Tz = self
            .timezone
            .parse()
            .map_err(|_| CliError::InvalidTimezone(self.timezone.clone()))?;
        Ok(SystemClock::new(tz))
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fill in the booking form and submit it
    Book(BookArgs),
    /// List the seating times offered on a date
    Times {
        /// Date to look up (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// List the occasions that can be selected
    Occasions,
}

/// Form input. Omitted fields are left untouched.
#[derive(ClapArgs, Debug, Clone, Default)]
struct BookArgs {
    /// Reservation date (YYYY-MM-DD)
    #[arg(long)]
    date: Option<String>,

    /// Seating time, e.g. 18:00
    #[arg(long)]
    time: Option<String>,

    /// Number of guests
    #[arg(long)]
    guests: Option<String>,

    /// Occasion value, e.g. birthday
    #[arg(long)]
    occasion: Option<String>,
}

impl BookArgs {
    /// Turns the supplied flags into form events, date first so the time
    /// list is refreshed before a time is picked.
    fn into_events(self) -> Result<Vec<FormEvent>, CliError> {
        let mut events: Vec<FormEvent> = Vec::new();

        if let Some(raw) = self.date {
            let date: Date = parse_date(&raw)?;
            events.push(FormEvent::DateChanged(Some(date)));
        }
        if let Some(time) = self.time {
            events.push(FormEvent::TimeChanged(Some(TimeSlot::new(time))));
        }
        if let Some(guests) = self.guests {
            events.push(FormEvent::GuestsChanged(Some(guests)));
        }
        if let Some(occasion) = self.occasion {
            events.push(FormEvent::OccasionChanged(Some(OccasionValue::new(occasion))));
        }

        events.push(FormEvent::Submit);
        Ok(events)
    }
}

/// Drives a booking form through `args` and submits it.
///
/// Returns the reservations the host received.
fn book(args: BookArgs, clock: Arc<dyn Clock>) -> Result<Vec<Reservation>, CliError> {
    let host: ScheduleHost = ScheduleHost::new(ServiceSchedule::default(), clock.today());
    let mut form: BookingForm<ScheduleHost> = BookingForm::new(host, clock);

    for event in args.into_events()? {
        let Some(outcome) = form.handle(event) else {
            continue;
        };

        match outcome {
            SubmitOutcome::Submitted => {}
            SubmitOutcome::Rejected(rejection) => {
                for shown in form.visible_errors() {
                    eprintln!("{shown}");
                }
                return Err(CliError::Rejected(rejection));
            }
        }
    }

    warn_unlisted_choices(&form);
    Ok(form.into_host().into_submitted())
}

/// Warns about submitted values the pickers would not have offered.
fn warn_unlisted_choices(form: &BookingForm<ScheduleHost>) {
    let draft: ReservationDraft = form.draft();

    if let Some(time) = draft
        .time
        .filter(|time: &TimeSlot| !form.available_times().contains(time))
    {
        warn!(time = %time, "Time is not one of the offered seatings");
    }
    if let Some(occasion) = draft
        .occasion
        .filter(|occasion: &OccasionValue| !form.occasion_options().contains(occasion))
    {
        warn!(occasion = %occasion, "Occasion is not one of the configured options");
    }
}

fn print_times(date: &str, schedule: &ServiceSchedule) -> Result<(), CliError> {
    let date: Date = parse_date(date)?;
    let slots: Vec<TimeSlot> = schedule.slots_for(date);

    if slots.is_empty() {
        info!(%date, "No seatings offered");
    }
    for slot in slots {
        println!("{slot}");
    }
    Ok(())
}

fn print_occasions(options: &OccasionOptions) {
    for option in options.as_slice() {
        println!("{}\t{}", option.value, option.label);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let clock: SystemClock = args.clock()?;
    debug!(timezone = %clock.timezone(), "Using restaurant clock");

    match args.command {
        Command::Book(book_args) => {
            for reservation in book(book_args, Arc::new(clock))? {
                println!("{}", serde_json::to_string_pretty(&reservation)?);
            }
            Ok(())
        }
        Command::Times { date } => print_times(&date, &ServiceSchedule::default()),
        Command::Occasions => {
            print_occasions(&OccasionOptions::default());
            Ok(())
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    // Logs go to stderr; stdout carries only results.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(args.log_level().to_string())
                }),
        )
        .init();

    match run(args) {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}
