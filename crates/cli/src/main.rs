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

use clap::{Parser, Subcommand, ValueEnum};
use padel_book_api::{AppState, ClientConfig, CrudService, HttpBackend};
use padel_book_domain::{AdminProfile, AvailabilityBundle, BlockSpan, Resource, parse_date};
use padel_book_persistence::SessionStorage;
use std::path::PathBuf;
use std::time::Duration;
use time::Date;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info};

/// Padel Book Admin - command-line client for club administrators
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the booking API, e.g. `https://club.example/api`
    #[arg(long, env = "PADEL_API_URL")]
    api_url: String,

    /// File holding the session between runs. Defaults to the user's data
    /// directory.
    #[arg(long, env = "PADEL_STATE_FILE")]
    state_file: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Command {
    /// Log in with a one-time code sent by email
    Login {
        /// Admin email address
        #[arg(long)]
        email: String,
    },
    /// Log out and forget the stored session
    Logout,
    /// Show the logged-in admin
    Whoami,
    /// Show courts, bookings and blocks for a date window
    Availability {
        /// Club id
        #[arg(long)]
        club: i64,
        /// First date, `YYYY-MM-DD`
        #[arg(long, value_parser = parse_date_arg)]
        start: Date,
        /// Last date, `YYYY-MM-DD`
        #[arg(long, value_parser = parse_date_arg)]
        end: Date,
        /// Restrict to one court
        #[arg(long)]
        court: Option<i64>,
    },
    /// List the records of a collection
    List {
        /// Collection to list
        resource: ResourceKind,
        /// Also fetch available-slot counts (instructors only)
        #[arg(long)]
        counts: bool,
    },
    /// Delete one record
    Delete {
        /// Collection holding the record
        resource: ResourceKind,
        /// Record id
        id: i64,
    },
}

/// The admin-managed collections.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum ResourceKind {
    Instructors,
    Courts,
    Events,
    BlockedSlots,
    Admins,
    Policies,
    Players,
}

fn parse_date_arg(input: &str) -> Result<Date, String> {
    parse_date(input).map_err(|e| e.to_string())
}

fn resolve_state_file(explicit: Option<PathBuf>) -> Result<PathBuf, String> {
    explicit
        .or_else(|| dirs::data_dir().map(|dir| dir.join("padel-book").join("state.json")))
        .ok_or_else(|| String::from("No data directory found; pass --state-file"))
}

async fn prompt(label: &str) -> Result<String, std::io::Error> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(label.as_bytes()).await?;
    stdout.flush().await?;
    let mut line: String = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await?;
    Ok(line.trim().to_string())
}

async fn print_records<R: Resource>(
    service: &CrudService<R, HttpBackend>,
) -> Result<(), Box<dyn std::error::Error>> {
    let records: Vec<R> = service.list().await?;
    for record in &records {
        println!("{}", serde_json::to_string(record)?);
    }
    info!(resource = R::NAME, count = records.len(), "Listed records");
    Ok(())
}

async fn delete_record<R: Resource>(
    service: &CrudService<R, HttpBackend>,
    id: i64,
) -> Result<(), Box<dyn std::error::Error>> {
    service.delete(id).await?;
    println!("Deleted {} {id}", R::NAME);
    Ok(())
}

fn print_bundle(bundle: &AvailabilityBundle) {
    for view in bundle.court_views() {
        println!("{} (#{})", view.court.name, view.court.id);
        for booking in &view.bookings {
            println!(
                "  booked   {} {}-{}",
                booking.date, booking.start_time, booking.end_time
            );
        }
        for block in &view.blocks {
            let span: String = match block.span() {
                BlockSpan::WholeDay => String::from("all day"),
                BlockSpan::Partial { start, end } => format!("{start}-{end}"),
            };
            println!("  blocked  {} {span}", block.date);
        }
        for (event, schedule) in &view.events {
            println!(
                "  event    {} {}-{} {}",
                event.date, schedule.start_time, schedule.end_time, event.name
            );
        }
        for class in &view.classes {
            println!(
                "  class    {} {}-{}",
                class.date, class.start_time, class.end_time
            );
        }
    }
}

async fn run(args: Args, state: AppState<HttpBackend>) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        Command::Login { email } => {
            state.admin_session.send_code(&email).await?;
            let code: String = prompt("Code sent. Enter the 6-digit code: ").await?;
            let profile: AdminProfile = state.admin_session.verify_code(&code).await?;
            println!("Logged in as {} ({})", profile.email, profile.role);
        }
        Command::Logout => {
            state.admin_session.logout().await?;
            println!("Logged out");
        }
        Command::Whoami => {
            if state.admin_session.validate_session().await? {
                if let Some(profile) = state.admin_session.profile().await {
                    println!("{} ({})", profile.email, profile.role);
                }
            } else {
                println!("Not logged in");
            }
        }
        Command::Availability {
            club,
            start,
            end,
            court,
        } => {
            let bundle: AvailabilityBundle = state
                .availability
                .fetch_range(club, start, end, court)
                .await?;
            print_bundle(&bundle);
        }
        Command::List { resource, counts } => match resource {
            ResourceKind::Instructors => {
                print_records(&state.instructors).await?;
                if counts {
                    for (id, count) in state.instructors.availability_counts().await.iter() {
                        println!("instructor {id}: {count} available slots");
                    }
                }
            }
            ResourceKind::Courts => print_records(&state.courts).await?,
            ResourceKind::Events => print_records(&state.events).await?,
            ResourceKind::BlockedSlots => print_records(&state.blocked_slots).await?,
            ResourceKind::Admins => print_records(&state.admins).await?,
            ResourceKind::Policies => print_records(&state.policies).await?,
            ResourceKind::Players => print_records(&state.players).await?,
        },
        Command::Delete { resource, id } => match resource {
            ResourceKind::Instructors => delete_record(&state.instructors, id).await?,
            ResourceKind::Courts => delete_record(&state.courts, id).await?,
            ResourceKind::Events => delete_record(&state.events, id).await?,
            ResourceKind::BlockedSlots => delete_record(&state.blocked_slots, id).await?,
            ResourceKind::Admins => delete_record(&state.admins, id).await?,
            ResourceKind::Policies => delete_record(&state.policies, id).await?,
            ResourceKind::Players => delete_record(&state.players, id).await?,
        },
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let state_file: PathBuf = resolve_state_file(args.state_file.clone())?;
    debug!(path = %state_file.display(), "Using state file");
    let storage: SessionStorage = SessionStorage::new_with_file(&state_file)?;

    let config: ClientConfig =
        ClientConfig::new(&args.api_url).with_timeout(Duration::from_secs(args.timeout_secs));
    info!(api_url = %config.base_url, "Connecting to Padel Book API");
    let state: AppState<HttpBackend> = AppState::connect(config, storage)?;

    run(args, state).await
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use time::macros::date;

    #[test]
    fn test_parses_availability_command() {
        let args: Args = Args::try_parse_from([
            "padel-book-admin",
            "--api-url",
            "http://localhost:8080",
            "availability",
            "--club",
            "3",
            "--start",
            "2026-11-02",
            "--end",
            "2026-11-08",
        ])
        .unwrap();

        assert_eq!(
            args.command,
            Command::Availability {
                club: 3,
                start: date!(2026 - 11 - 02),
                end: date!(2026 - 11 - 08),
                court: None,
            }
        );
        assert_eq!(args.timeout_secs, 30);
    }

    #[test]
    fn test_rejects_malformed_date() {
        let result = Args::try_parse_from([
            "padel-book-admin",
            "--api-url",
            "http://localhost:8080",
            "availability",
            "--club",
            "3",
            "--start",
            "02/11/2026",
            "--end",
            "2026-11-08",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn test_parses_kebab_case_resource() {
        let args: Args = Args::try_parse_from([
            "padel-book-admin",
            "--api-url",
            "http://localhost:8080",
            "delete",
            "blocked-slots",
            "7",
        ])
        .unwrap();

        assert_eq!(
            args.command,
            Command::Delete {
                resource: ResourceKind::BlockedSlots,
                id: 7,
            }
        );
    }

    #[test]
    fn test_explicit_state_file_wins() {
        let path: PathBuf = resolve_state_file(Some(PathBuf::from("/tmp/padel.json"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/padel.json"));
    }
}
