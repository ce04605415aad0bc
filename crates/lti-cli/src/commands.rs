//! Report commands.
//!
//! Each command builds a serializable report from a [`Context`]; [`run`]
//! prints it. Keeping the two apart lets tests inspect reports directly.

use chrono::{DateTime, Utc};
use lti_core::age::parse_date;
use lti_core::review::{find_in_store, is_meaningful};
use lti_core::{
    Agenda, DashboardStats, MeetingSource, MeetingSummary, NormalizeDiagnostics, PrefixClassifier,
    PreviousReview, RelatedWarning, RemovalReport, StoreSnapshot, aggregate,
    grouped_related_warnings, normalize_all, normalize_with_diagnostics, related_warnings,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::cli::{Cli, Command};
use crate::config::LtiConfig;
use crate::config_handlers::handle_config_command;
use crate::{Error, Result};

/// Everything a report needs.
#[derive(Debug, Clone)]
pub struct Context {
    /// Store contents.
    pub snapshot: StoreSnapshot,
    /// Id classifier built from `ids.prefix`.
    pub classifier: PrefixClassifier,
    /// System code to display name.
    pub system_names: BTreeMap<String, String>,
    /// Reference time for ages.
    pub now: DateTime<Utc>,
}

impl Context {
    /// Builds a context around an in-memory snapshot.
    pub fn new(snapshot: StoreSnapshot, config: &LtiConfig, now: DateTime<Utc>) -> Result<Self> {
        Ok(Self {
            snapshot,
            classifier: config.classifier()?,
            system_names: config.systems.clone(),
            now,
        })
    }

    /// Builds a context from the command line and configuration.
    ///
    /// `--store` overrides `store.path`; one of them must be set.
    pub fn from_args(config: &LtiConfig, store: Option<&str>, now: Option<&str>) -> Result<Self> {
        let path = store
            .map(Path::new)
            .or(config.store.path.as_deref())
            .ok_or_else(|| {
                Error::config("No store snapshot given; pass --store or set store.path")
            })?;
        let snapshot = load_snapshot(path)?;
        Self::new(snapshot, config, resolve_now(now)?)
    }
}

/// Reads a store snapshot from a JSON file.
pub fn load_snapshot(path: &Path) -> Result<StoreSnapshot> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
    let snapshot = StoreSnapshot::from_json(&content)?;
    tracing::debug!(path = %path.display(), keys = snapshot.keys().count(), "loaded store snapshot");
    Ok(snapshot)
}

/// Parses `--now`, defaulting to the current time.
pub fn resolve_now(value: Option<&str>) -> Result<DateTime<Utc>> {
    match value {
        None => Ok(Utc::now()),
        Some(raw) => parse_date(raw)
            .ok_or_else(|| Error::invalid_argument(format!("Cannot read --now value '{raw}'"))),
    }
}

// ============================================================================
// Reports
// ============================================================================

/// Dashboard statistics with optional data-quality counters.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    /// The statistics.
    #[serde(flatten)]
    pub stats: DashboardStats,
    /// Counters, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<NormalizeDiagnostics>,
}

/// Result of a previous-review lookup.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewReport {
    /// Isolation looked up.
    pub isolation_id: String,
    /// Whether it should be shown to the reviewer.
    pub show: bool,
    /// The review found, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<PreviousReview>,
}

/// Builds the dashboard from every meeting in the store.
pub fn dashboard(ctx: &Context, diagnostics: bool) -> Result<DashboardReport> {
    let meetings = ctx.snapshot.meetings()?;
    let normalized = normalize_with_diagnostics(&meetings, ctx.now);
    if normalized.diagnostics.dangling_responses > 0 {
        tracing::warn!(
            dangling = normalized.diagnostics.dangling_responses,
            "store holds responses for isolations no meeting lists"
        );
    }
    Ok(DashboardReport {
        stats: aggregate(&normalized.records),
        diagnostics: diagnostics.then_some(normalized.diagnostics),
    })
}

/// Related-isolation warnings over the dashboard records.
pub fn related(ctx: &Context, all: bool) -> Result<Vec<RelatedWarning>> {
    let meetings = ctx.snapshot.meetings()?;
    let records = normalize_all(&meetings, ctx.now);
    Ok(if all {
        related_warnings(&ctx.classifier, &records)
    } else {
        grouped_related_warnings(&ctx.classifier, &records)
    })
}

/// Removed-isolation history.
pub fn history(ctx: &Context) -> Result<RemovalReport> {
    let meetings = ctx.snapshot.meetings()?;
    Ok(RemovalReport::from_meetings(
        &meetings,
        &ctx.classifier,
        &ctx.system_names,
    ))
}

/// One summary per meeting, in store order.
pub fn summary(ctx: &Context) -> Result<Vec<MeetingSummary>> {
    Ok(ctx
        .snapshot
        .meetings()?
        .iter()
        .map(|meeting| MeetingSummary::from_meeting(meeting, &ctx.classifier))
        .collect())
}

/// Looks up the previous review of one isolation.
pub fn review(ctx: &Context, isolation_id: &str) -> Result<ReviewReport> {
    let review = find_in_store(&ctx.snapshot, isolation_id)?;
    let show = review.as_ref().is_some_and(|r| is_meaningful(&r.response));
    Ok(ReviewReport {
        isolation_id: isolation_id.to_string(),
        show,
        review,
    })
}

/// The Asset Manager agenda dated at the reference time.
pub fn agenda(ctx: &Context) -> Result<Agenda> {
    let report = dashboard(ctx, false)?;
    Ok(Agenda::from_stats(
        &report.stats,
        ctx.now.format("%Y-%m-%d").to_string(),
    ))
}

// ============================================================================
// Dispatch
// ============================================================================

/// Runs the parsed command, printing its report to stdout.
pub fn run(cli: &Cli, config: &LtiConfig) -> Result<()> {
    if let Command::Config { action } = &cli.command {
        return handle_config_command(cli.config.as_deref(), action);
    }

    let ctx = Context::from_args(config, cli.store.as_deref(), cli.now.as_deref())?;
    match &cli.command {
        Command::Dashboard { diagnostics } => print_json(&dashboard(&ctx, *diagnostics)?),
        Command::Related { all } => print_json(&related(&ctx, *all)?),
        Command::History => print_json(&history(&ctx)?),
        Command::Summary => print_json(&summary(&ctx)?),
        Command::Review { id } => print_json(&review(&ctx, id)?),
        Command::Agenda { json } => {
            let agenda = agenda(&ctx)?;
            if *json {
                print_json(&agenda)
            } else {
                print!("{agenda}");
                Ok(())
            }
        }
        Command::Config { .. } => Ok(()),
    }
}

fn print_json<T: Serialize>(report: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
