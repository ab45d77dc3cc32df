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

mod render;

use clap::{Parser, Subcommand};
use holidaze_api::{
    AuthenticatedUser, BookingDecision, BookingSession, EligibilityContext, Role,
    SessionSnapshot, SingleVenueResponse,
};
use holidaze_domain::{
    CalendarDay, DayAvailability, DayRange, ExistingBooking, VenueCatalog, VenueFilter, VenuePage,
    Venue, availability_calendar,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Holidaze - inspect venue availability and booking eligibility from
/// exported API responses
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Day to treat as today (YYYY-MM-DD). Defaults to the current UTC date.
    #[arg(long, global = true)]
    today: Option<CalendarDay>,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Show which days each picker offers
    Calendar {
        /// Venue JSON, bare or wrapped in `{"data": ...}`
        #[arg(long)]
        venue: PathBuf,
        /// First day to show. Defaults to today.
        #[arg(long)]
        from: Option<CalendarDay>,
        /// Number of days to show
        #[arg(long, default_value_t = 30)]
        days: u16,
        /// Current check-in, for check-out selectability
        #[arg(long)]
        check_in: Option<CalendarDay>,
        /// Current check-out, for check-in selectability
        #[arg(long)]
        check_out: Option<CalendarDay>,
    },
    /// Price a stay and evaluate the booking gate
    Quote {
        /// Venue JSON, bare or wrapped in `{"data": ...}`
        #[arg(long)]
        venue: PathBuf,
        /// Arrival day
        #[arg(long)]
        check_in: CalendarDay,
        /// Departure day
        #[arg(long)]
        check_out: CalendarDay,
        /// Number of guests
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        guests: i64,
        #[command(flatten)]
        identity: Identity,
    },
    /// Merge venue list pages, filter them, and list them newest first
    Venues {
        /// Venue list page JSON; repeat for each page in order
        #[arg(long = "page", required = true)]
        pages: Vec<PathBuf>,
        /// Free-text filter on name, description, city and country
        #[arg(long, default_value = "")]
        query: String,
        /// Only venues free from this day
        #[arg(long, requires = "to")]
        from: Option<CalendarDay>,
        /// Only venues free until this day
        #[arg(long, requires = "from")]
        to: Option<CalendarDay>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Who is asking. Without `--user` the visitor is not logged in.
#[derive(clap::Args, Debug, Clone, Default)]
struct Identity {
    /// Log in as this profile name
    #[arg(long)]
    user: Option<String>,
    /// Email of the logged-in profile
    #[arg(long, requires = "user")]
    email: Option<String>,
    /// The logged-in profile is a venue manager
    #[arg(long, requires = "user")]
    manager: bool,
}

impl Identity {
    fn session(&self) -> SessionSnapshot {
        self.user.as_ref().map_or_else(SessionSnapshot::anonymous, |name| {
            SessionSnapshot::signed_in(AuthenticatedUser::new(
                name.clone(),
                self.email.clone().unwrap_or_default(),
                Role::from_venue_manager(self.manager),
            ))
        })
    }
}

fn load_venue(path: &Path) -> Result<Venue, Box<dyn std::error::Error>> {
    let raw: String = std::fs::read_to_string(path)?;
    let venue: Venue = match serde_json::from_str::<SingleVenueResponse>(&raw) {
        Ok(envelope) => envelope.data,
        Err(_) => serde_json::from_str::<Venue>(&raw)?,
    };
    info!(venue = %venue.id, bookings = venue.booking_records().len(), "Loaded venue");
    Ok(venue)
}

fn run_calendar(
    today: CalendarDay,
    venue: &Path,
    from: Option<CalendarDay>,
    days: u16,
    check_in: Option<CalendarDay>,
    check_out: Option<CalendarDay>,
) -> Result<String, Box<dyn std::error::Error>> {
    let venue: Venue = load_venue(venue)?;
    let bookings: Vec<ExistingBooking> = venue.existing_bookings()?;
    let start: CalendarDay = from.unwrap_or(today);
    let window: DayRange = DayRange::new(start, start.add_days(i64::from(days)));
    let calendar: Vec<DayAvailability> =
        availability_calendar(window, today, check_in, check_out, &bookings);
    Ok(render::render_calendar(&calendar))
}

fn run_quote(
    venue: &Path,
    check_in: CalendarDay,
    check_out: CalendarDay,
    guests: i64,
    identity: &Identity,
) -> Result<String, Box<dyn std::error::Error>> {
    let venue: Venue = load_venue(venue)?;
    let mut session: BookingSession = BookingSession::new(&venue)?;

    session.set_check_in(check_in)?;
    if let Err(e) = session.set_check_out(check_out) {
        warn!("Check-out not accepted: {e}");
    }
    let applied: u32 = session.set_guests(guests);
    if i64::from(applied) != guests {
        warn!(requested = guests, applied, "Guest count clamped to venue limits");
    }

    let context: EligibilityContext = EligibilityContext::for_venue(&identity.session(), &venue);
    let decision: BookingDecision = session.decide(&context);
    Ok(render::render_decision(&venue, applied, &decision))
}

fn run_venues(
    pages: &[PathBuf],
    query: &str,
    from: Option<CalendarDay>,
    to: Option<CalendarDay>,
    json: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    let mut catalog: VenueCatalog = VenueCatalog::new();
    for path in pages {
        if catalog.is_complete() {
            warn!(page = %path.display(), "Ignoring page after the last page");
            continue;
        }
        let raw: String = std::fs::read_to_string(path)?;
        let page: VenuePage = serde_json::from_str(&raw)?;
        catalog.ingest_page(page);
    }
    if let Some(next) = catalog.next_page() {
        warn!(next, "Venue list is incomplete; later pages were not supplied");
    }

    let filter: VenueFilter = VenueFilter::new(query, from, to);
    let venues: Vec<&Venue> = catalog.search(&filter);
    if json {
        return Ok(serde_json::to_string_pretty(&venues)?);
    }
    Ok(render::render_venues(&venues))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let today: CalendarDay = args.today.unwrap_or_else(CalendarDay::today_utc);

    let output: String = match args.command {
        CliCommand::Calendar {
            venue,
            from,
            days,
            check_in,
            check_out,
        } => run_calendar(today, &venue, from, days, check_in, check_out)?,
        CliCommand::Quote {
            venue,
            check_in,
            check_out,
            guests,
            identity,
        } => run_quote(&venue, check_in, check_out, guests, &identity)?,
        CliCommand::Venues {
            pages,
            query,
            from,
            to,
            json,
        } => run_venues(&pages, &query, from, to, json)?,
    };

    print!("{output}");
    Ok(())
}
