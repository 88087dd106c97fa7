//! Command-line front end: reads a roster snapshot and a project's required
//! skills from JSON, ranks the workers and prints the result.

use std::fmt::Write as _;
use std::path::PathBuf;

use chrono::Utc;
use clap::{Parser, ValueEnum};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};
use thiserror::Error;
use tracing::info;
use wm_common::MatchError;
use wm_common::api::{MatchRequest, MatchResponse};
use wm_common::matching::{EmptyRequirementsPolicy, MatchTier, MatchingConfig, MatchingEngine, TieBreaker};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum TieBreakArg {
    InputOrder,
    WorkerId,
}

impl From<TieBreakArg> for TieBreaker {
    fn from(value: TieBreakArg) -> Self {
        match value {
            TieBreakArg::InputOrder => TieBreaker::InputOrder,
            TieBreakArg::WorkerId => TieBreaker::WorkerId,
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "wm-cli", about = "Rank workers against a project's required skills")]
pub struct Cli {
    /// JSON file holding `required_skills` and `workers`
    #[arg(long, short, env = "WM_INPUT")]
    pub input: PathBuf,

    /// Output format
    #[arg(long, env = "WM_OUTPUT_FORMAT", default_value = "table", value_enum)]
    pub format: OutputFormat,

    /// Ordering among equal scores (defaults to WM_TIE_BREAK, then input order)
    #[arg(long, value_enum)]
    pub tie_break: Option<TieBreakArg>,

    /// Score on availability and workload alone when no skills are required
    #[arg(long)]
    pub allow_empty_requirements: bool,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid match request: {0}")]
    Match(#[from] MatchError),
}

impl Cli {
    /// Flags override the `WM_*` environment settings.
    pub fn matching_config(&self) -> MatchingConfig {
        let mut config = MatchingConfig::from_env();
        if let Some(tie_break) = self.tie_break {
            config.tie_breaker = tie_break.into();
        }
        if self.allow_empty_requirements {
            config.empty_requirements = EmptyRequirementsPolicy::AvailabilityOnly;
        }
        config
    }
}

/// Parses, validates and ranks a request, all or nothing.
pub fn rank_request(json: &str, config: MatchingConfig) -> Result<MatchResponse, CliError> {
    let request: MatchRequest = serde_json::from_str(json)?;
    let validated = request.into_validated()?;

    let engine = MatchingEngine::new(config);
    let ranking = engine.rank_scored(&validated.requirements, &validated.workers)?;

    Ok(MatchResponse::from_ranking(&ranking, Utc::now()))
}

pub fn run(cli: &Cli) -> Result<String, CliError> {
    let json = std::fs::read_to_string(&cli.input).map_err(|source| CliError::Read {
        path: cli.input.clone(),
        source,
    })?;

    let response = rank_request(&json, cli.matching_config())?;
    info!(
        input = %cli.input.display(),
        candidates = response.candidate_count,
        match_run_id = %response.match_run_id,
        "ranked roster"
    );

    match cli.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&response)?),
        OutputFormat::Table => Ok(render_table(&response)),
    }
}

fn tier_color(tier: MatchTier) -> Color {
    match tier {
        MatchTier::Strong => Color::Green,
        MatchTier::Moderate => Color::Yellow,
        MatchTier::Weak => Color::Red,
    }
}

pub fn render_table(response: &MatchResponse) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Rank",
            "Worker",
            "Match",
            "Skill %",
            "Availability",
            "Workload",
            "Utilization",
        ]);

    for candidate in &response.candidates {
        let result = &candidate.result;
        let workload = Cell::new(format!("{}%", result.workload_percent))
            .set_alignment(CellAlignment::Right);
        let workload = if candidate.overloaded {
            workload.fg(Color::Red)
        } else {
            workload
        };

        table.add_row(vec![
            Cell::new(candidate.rank).set_alignment(CellAlignment::Right),
            Cell::new(&result.worker_id),
            Cell::new(format!("{}%", result.match_score))
                .fg(tier_color(candidate.tier))
                .set_alignment(CellAlignment::Right),
            Cell::new(format!("{}%", result.skill_match_percent))
                .set_alignment(CellAlignment::Right),
            Cell::new(result.availability),
            workload,
            Cell::new(format!("{}%", result.skill_utilization_percent))
                .set_alignment(CellAlignment::Right),
        ]);
    }

    let mut out = String::new();
    let _ = writeln!(out, "{} candidate(s)", response.candidate_count);
    let _ = write!(out, "{table}");
    out
}
