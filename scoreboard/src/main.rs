use std::path::PathBuf;

use anyhow::{Context, anyhow, bail};
use chrono::{Local, NaiveDateTime};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scoring::models::{Division, EventPart};
use scoring::snapshot::{Snapshot, SnapshotDocument, SnapshotValidator};
use scoring::{
    athlete_day, event_schedule, fixtures, overall_standings, rank_part, schedule_board,
};

#[derive(Parser)]
#[command(name = "scoreboard")]
#[command(about = "Competition scoring engine and venue boards", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Snapshot JSON the commands read (and `seed` writes)
    #[arg(long, env = "SCOREBOARD_SNAPSHOT", default_value = "./snapshot.json")]
    snapshot: PathBuf,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a snapshot file and report problems
    Validate,
    /// Rank one part for a division
    Leaderboard {
        #[arg(long)]
        sex: String,

        #[arg(long)]
        category: String,

        #[arg(long)]
        event: i16,

        /// Part slug such as "A"; the event's first part when omitted
        #[arg(long, default_value = "")]
        part: String,

        /// Emit rows as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Overall standings of a division
    Standings {
        #[arg(long)]
        sex: String,

        #[arg(long)]
        category: String,

        #[arg(long)]
        json: bool,
    },
    /// Live and upcoming heats, or one event's full running order
    Schedule {
        #[arg(long)]
        event: Option<i16>,

        /// Board time as YYYY-MM-DDTHH:MM:SS; the local clock when omitted
        #[arg(long)]
        at: Option<String>,

        #[arg(long)]
        json: bool,
    },
    /// Day sheet for one athlete
    Day {
        #[arg(long)]
        bib: String,

        #[arg(long)]
        at: Option<String>,

        #[arg(long)]
        json: bool,
    },
    /// Write the demo snapshot
    Seed {
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("scoreboard={},scoring={}", log_level, log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Validate => validate(&cli.snapshot).await,
        Commands::Leaderboard {
            sex,
            category,
            event,
            part,
            json,
        } => leaderboard(&cli.snapshot, &sex, &category, event, &part, json).await,
        Commands::Standings {
            sex,
            category,
            json,
        } => standings(&cli.snapshot, &sex, &category, json).await,
        Commands::Schedule { event, at, json } => {
            schedule(&cli.snapshot, event, at.as_deref(), json).await
        }
        Commands::Day { bib, at, json } => day(&cli.snapshot, &bib, at.as_deref(), json).await,
        Commands::Seed { force } => seed(&cli.snapshot, force).await,
    }
}

async fn read_document(path: &PathBuf) -> anyhow::Result<SnapshotDocument> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    Ok(SnapshotDocument::from_json(&raw)?)
}

async fn load_snapshot(path: &PathBuf) -> anyhow::Result<Snapshot> {
    Ok(read_document(path).await?.into_snapshot()?)
}

fn find_division<'a>(
    snapshot: &'a Snapshot,
    sex: &str,
    category: &str,
) -> anyhow::Result<&'a Division> {
    snapshot
        .division_by(sex, category)
        .ok_or_else(|| anyhow!("No division for sex '{}' and category '{}'", sex, category))
}

fn find_part<'a>(
    snapshot: &'a Snapshot,
    event_number: i16,
    slug: &str,
) -> anyhow::Result<&'a EventPart> {
    let event = snapshot
        .event_by_number(event_number)
        .ok_or_else(|| anyhow!("No event with number {}", event_number))?;
    let parts = snapshot.parts_for_event(event.event_id);
    parts
        .iter()
        .find(|p| p.slug == slug)
        .or_else(|| parts.first())
        .copied()
        .ok_or_else(|| anyhow!("Event {} has no parts", event_number))
}

fn parse_at(at: Option<&str>) -> anyhow::Result<NaiveDateTime> {
    match at {
        Some(raw) => NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
            .with_context(|| format!("Invalid time '{}', expected YYYY-MM-DDTHH:MM:SS", raw)),
        None => Ok(Local::now().naive_local()),
    }
}

async fn validate(path: &PathBuf) -> anyhow::Result<()> {
    let document = read_document(path).await?;
    tracing::info!(
        "Loaded {} (v{})",
        document.competition.name,
        document.format_version
    );

    let report = SnapshotValidator::validate(&document)?;
    report.log_warnings();
    tracing::info!("✓ Snapshot is valid ({} warnings)", report.warnings.len());

    Ok(())
}

async fn leaderboard(
    path: &PathBuf,
    sex: &str,
    category: &str,
    event_number: i16,
    part_slug: &str,
    json: bool,
) -> anyhow::Result<()> {
    let snapshot = load_snapshot(path).await?;
    let division = find_division(&snapshot, sex, category)?;
    let part = find_part(&snapshot, event_number, part_slug)?;

    let rows = rank_part(&snapshot, part, division);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "{} {} - {}",
        snapshot.part_label(part),
        part.name,
        division.display_name
    );
    if rows.is_empty() {
        println!("No results yet.");
        return Ok(());
    }

    println!(
        "{:>5}  {:<6} {:<24} {:>6}  {}",
        "Place", "Bib", "Athlete", "Points", "Score"
    );
    for row in rows {
        println!(
            "{:>5}  {:<6} {:<24} {:>6}  {}",
            row.place, row.athlete.bib, row.athlete.name, row.points, row.display_value
        );
    }

    Ok(())
}

async fn standings(path: &PathBuf, sex: &str, category: &str, json: bool) -> anyhow::Result<()> {
    let snapshot = load_snapshot(path).await?;
    let division = find_division(&snapshot, sex, category)?;

    let rows = overall_standings(&snapshot, division);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("Overall - {}", division.display_name);
    if rows.is_empty() {
        println!("No results yet.");
        return Ok(());
    }

    let counting = snapshot.counting_parts();
    println!(
        "{:>4}  {:<6} {:<24} {:>6}  {}",
        "Pos", "Bib", "Athlete", "Total", "Breakdown"
    );
    for (idx, row) in rows.iter().enumerate() {
        let breakdown: Vec<String> = counting
            .iter()
            .filter_map(|part| {
                row.per_part
                    .get(&part.part_id)
                    .map(|standing| format!("{}:{}", snapshot.part_label(part), standing.points))
            })
            .collect();
        println!(
            "{:>4}  {:<6} {:<24} {:>6}  {}",
            idx + 1,
            row.athlete.bib,
            row.athlete.name,
            row.total_points,
            breakdown.join(" ")
        );
    }

    Ok(())
}

async fn schedule(
    path: &PathBuf,
    event_number: Option<i16>,
    at: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let snapshot = load_snapshot(path).await?;

    if let Some(number) = event_number {
        let event = snapshot
            .event_by_number(number)
            .ok_or_else(|| anyhow!("No event with number {}", number))?;
        let heats = event_schedule(&snapshot, event.event_id);

        if json {
            println!("{}", serde_json::to_string_pretty(&heats)?);
            return Ok(());
        }

        println!("E{} {}", event.number, event.name);
        for heat in heats {
            println!(
                "  H{} {:<20} {}-{}  ({} lanes)",
                heat.number,
                heat.division_name,
                heat.start_time.format("%H:%M"),
                heat.end_time.format("%H:%M"),
                heat.lane_count
            );
        }
        return Ok(());
    }

    let now = parse_at(at)?;
    let board = schedule_board(&snapshot, now);

    if json {
        println!("{}", serde_json::to_string_pretty(&board)?);
        return Ok(());
    }

    println!("Board at {}", now.format("%Y-%m-%d %H:%M"));
    println!("Live:");
    if board.live.is_empty() {
        println!("  (none)");
    }
    for heat in &board.live {
        println!(
            "  E{} H{} {:<20} {} until {}",
            heat.event_number,
            heat.number,
            heat.division_name,
            heat.event_name,
            heat.end_time.format("%H:%M")
        );
    }
    println!("Upcoming:");
    if board.upcoming.is_empty() {
        println!("  (none)");
    }
    for heat in &board.upcoming {
        println!(
            "  E{} H{} {:<20} {} at {}",
            heat.event_number,
            heat.number,
            heat.division_name,
            heat.event_name,
            heat.start_time.format("%H:%M")
        );
    }

    Ok(())
}

async fn day(path: &PathBuf, bib: &str, at: Option<&str>, json: bool) -> anyhow::Result<()> {
    let snapshot = load_snapshot(path).await?;
    let athlete = snapshot
        .athlete_by_bib(bib)
        .ok_or_else(|| anyhow!("No athlete with bib '{}'", bib))?;
    let now = parse_at(at)?;

    let sheet = athlete_day(&snapshot, athlete.athlete_id, now)
        .ok_or_else(|| anyhow!("Athlete '{}' is not active", bib))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&sheet)?);
        return Ok(());
    }

    println!(
        "{} {} ({})",
        sheet.athlete.bib, sheet.athlete.name, sheet.division_name
    );

    match &sheet.next_up {
        Some(slot) => println!(
            "Next up: E{} H{} lane {} at {}",
            slot.heat.event_number,
            slot.heat.number,
            slot.lane,
            slot.heat.start_time.format("%H:%M")
        ),
        None => println!("Next up: nothing left today"),
    }

    println!("Lanes:");
    for slot in &sheet.lanes {
        println!(
            "  E{} H{} lane {} at {}",
            slot.heat.event_number,
            slot.heat.number,
            slot.lane,
            slot.heat.start_time.format("%H:%M")
        );
    }

    println!("Scores:");
    if sheet.scores.is_empty() {
        println!("  (none yet)");
    }
    for slip in &sheet.scores {
        println!(
            "  {:<4} {:<12} [{}]",
            slip.label, slip.display_value, slip.status
        );
    }

    Ok(())
}

async fn seed(path: &PathBuf, force: bool) -> anyhow::Result<()> {
    if !force
        && tokio::fs::try_exists(path)
            .await
            .with_context(|| format!("Failed to check {}", path.display()))?
    {
        bail!(
            "{} already exists; pass --force to overwrite",
            path.display()
        );
    }

    let document = fixtures::demo_document();
    let json = document.to_json_pretty()?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!("✓ Wrote demo snapshot to {}", path.display());
    tracing::info!("Try: scoreboard leaderboard --sex M --category rx --event 1");

    Ok(())
}
