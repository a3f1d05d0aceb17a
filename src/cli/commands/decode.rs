//! Decode command implementation
//!
//! Decodes every input bulletin and prints it as JSON or as a coloured
//! summary on stdout. Logging goes to stderr so JSON output stays clean.

use super::shared::{
    BulletinInput, CommandSummary, collect_inputs, decode_input, setup_logging,
};
use crate::app::models::{DecodedBulletin, FileType};
use crate::app::services::fleet_code::{BulletinDecoder, DecodeResult, DecodeStats};
use crate::cli::args::DecodeArgs;
use crate::config::{Config, OutputFormat};
use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use colored::*;
use serde::Serialize;
use std::io::Write;
use tracing::{error, info};

/// One decoded bulletin as written by the JSON output format
#[derive(Debug, Serialize)]
pub struct BulletinReport<'a> {
    /// Where the bulletin was read from
    pub source: String,

    /// Full issue timestamp, present with `--reference-date`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<DateTime<Utc>>,

    /// Full valid timestamp, present with `--reference-date`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_at: Option<DateTime<Utc>>,

    pub bulletin: &'a DecodedBulletin,
    pub stats: &'a DecodeStats,
}

impl<'a> BulletinReport<'a> {
    pub fn new(
        input: &BulletinInput,
        result: &'a DecodeResult,
        reference: Option<DateTime<Utc>>,
    ) -> Self {
        let metadata = &result.bulletin.metadata;
        let issued_at = reference.and_then(|r| metadata.issued?.resolve(r));
        let valid_at = reference.and_then(|r| metadata.valid_time(r));

        Self {
            source: input.to_string(),
            issued_at,
            valid_at,
            bulletin: &result.bulletin,
            stats: &result.stats,
        }
    }
}

/// Decode command runner
pub fn run_decode(args: DecodeArgs) -> Result<CommandSummary> {
    let mut config = Config::load_layered(args.config_file.as_deref())?;

    // Apply CLI argument overrides
    if args.verbose > 0 || args.quiet {
        config.logging.level = args.get_log_level().to_string();
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
    config.output.pretty |= args.pretty;

    setup_logging(&config.logging.level, args.quiet)?;

    let inputs = collect_inputs(&args.paths)?;
    let reference = args.reference_date.and_then(reference_timestamp);
    let decoder = BulletinDecoder::new(config.decoder.clone());

    info!("Decoding {} bulletins", inputs.len());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut summary = CommandSummary::default();

    for input in &inputs {
        let result = match decode_input(&decoder, input) {
            Ok(result) => result,
            Err(e) => {
                error!("Failed to decode {}: {}", input, e);
                summary.unreadable += 1;
                continue;
            }
        };

        summary.bulletins += 1;
        if !is_valid(&result) {
            summary.invalid_bulletins += 1;
        }

        let report = BulletinReport::new(input, &result, reference);
        match config.output.format {
            OutputFormat::Json => write_json(&mut out, &report, config.output.pretty)?,
            OutputFormat::Summary => write_summary(&mut out, &report)?,
        }
    }

    info!(
        "Decoded {} bulletins ({} invalid, {} unreadable)",
        summary.bulletins, summary.invalid_bulletins, summary.unreadable
    );

    if summary.bulletins == 0 {
        return Err(Error::data_validation("No bulletin could be decoded"));
    }

    Ok(summary)
}

/// Midnight UTC of the reference date
fn reference_timestamp(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0)
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn is_valid(result: &DecodeResult) -> bool {
    let metadata = &result.bulletin.metadata;
    metadata.is_valid_noaa_file && metadata.has_valid_preamble
}

/// Write one JSON document per bulletin
pub fn write_json<W: Write>(out: &mut W, report: &BulletinReport<'_>, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    writeln!(out, "{}", json).map_err(|e| Error::io("Failed to write output", e))
}

/// Write a human-readable summary of one bulletin
pub fn write_summary<W: Write>(out: &mut W, report: &BulletinReport<'_>) -> Result<()> {
    render_summary(out, report).map_err(|e| Error::io("Failed to write output", e))
}

fn render_summary<W: Write>(out: &mut W, report: &BulletinReport<'_>) -> std::io::Result<()> {
    let bulletin = report.bulletin;
    let metadata = &bulletin.metadata;

    writeln!(out, "{}", report.source.as_str().bold())?;

    let header = if metadata.is_valid_noaa_file {
        "valid".green()
    } else {
        "invalid".red()
    };
    let preamble = if metadata.has_valid_preamble {
        "valid".green()
    } else {
        "invalid".red()
    };
    writeln!(out, "  Header:    {}", header)?;
    writeln!(out, "  Preamble:  {}", preamble)?;

    let kind = match (metadata.file_type, metadata.valid_hour) {
        (FileType::Forecast, Some(hours)) => format!("forecast, T+{}h", hours),
        (file_type, _) => file_type.to_string(),
    };
    writeln!(out, "  Type:      {}", kind)?;

    if let Some(issued) = metadata.issued {
        writeln!(out, "  Issued:    {}Z", issued)?;
    }
    if let Some(issued_at) = report.issued_at {
        writeln!(out, "  Issued at: {}", issued_at.format("%Y-%m-%d %H:%MZ"))?;
    }
    if let Some(valid_at) = report.valid_at {
        writeln!(out, "  Valid at:  {}", valid_at.format("%Y-%m-%d %H:%MZ"))?;
    }
    if let Some(mode) = metadata.position_mode {
        writeln!(out, "  Positions: {:?}", mode)?;
    }

    writeln!(
        out,
        "  Features:  {} pressure centres, {} fronts, {} isobars ({} points)",
        bulletin.pressure_centers.len(),
        bulletin.fronts.len(),
        bulletin.isobars.len(),
        bulletin.point_count()
    )?;

    for center in &bulletin.pressure_centers {
        let symbol = match center.kind.symbol() {
            "H" => "H".blue(),
            other => other.red(),
        };
        writeln!(
            out,
            "    {} {:>4} hPa at {:>5.1}, {:>6.1}",
            symbol, center.pressure_hpa, center.position.latitude, center.position.longitude
        )?;
    }
    for front in &bulletin.fronts {
        writeln!(out, "    {} front, {} points", front.front_type, front.points.len())?;
    }
    for isobar in &bulletin.isobars {
        writeln!(out, "    {} hPa isobar, {} points", isobar.value_hpa, isobar.points.len())?;
    }

    if let Some(bounds) = bulletin.bounds() {
        writeln!(
            out,
            "  Extent:    lat {:.1}..{:.1}, lon {:.1}..{:.1}",
            bounds.min_lat, bounds.max_lat, bounds.min_lon, bounds.max_lon
        )?;
    }

    let stats = report.stats;
    writeln!(
        out,
        "  Lines:     {} read, {} ignored; positions {:.1}% decoded",
        stats.lines_read,
        stats.lines_ignored,
        stats.position_success_rate()
    )?;
    for message in &stats.errors {
        writeln!(out, "  {} {}", "!".yellow(), message)?;
    }

    Ok(())
}
