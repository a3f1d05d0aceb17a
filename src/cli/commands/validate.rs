//! Validate command implementation
//!
//! Decodes each bulletin and reports whether its header and preamble were
//! accepted. The command fails when any bulletin does not validate.

use super::shared::{
    BulletinInput, CommandSummary, collect_inputs, decode_input, setup_logging,
};
use crate::app::services::fleet_code::{BulletinDecoder, DecodeResult};
use crate::cli::args::ValidateArgs;
use crate::config::Config;
use crate::{Error, Result};
use colored::*;
use tracing::{debug, info};

/// Validate command runner
pub fn run_validate(args: ValidateArgs) -> Result<CommandSummary> {
    let mut config = Config::load_layered(args.config_file.as_deref())?;
    if args.verbose > 0 || args.quiet {
        config.logging.level = args.get_log_level().to_string();
    }
    setup_logging(&config.logging.level, args.quiet)?;

    let inputs = collect_inputs(&args.paths)?;
    let decoder = BulletinDecoder::new(config.decoder);

    info!("Validating {} bulletins", inputs.len());

    let mut summary = CommandSummary::default();
    for input in &inputs {
        match decode_input(&decoder, input) {
            Ok(result) => {
                summary.bulletins += 1;
                match validation_failure(input, &result) {
                    Some(failure) => {
                        summary.invalid_bulletins += 1;
                        println!("{} {}", "FAIL".red().bold(), failure);
                    }
                    None if !args.quiet => {
                        println!("{} {}", "PASS".green().bold(), describe(input, &result));
                    }
                    None => {}
                }
            }
            Err(e) => {
                summary.unreadable += 1;
                println!("{} {}: {}", "FAIL".red().bold(), input, e);
            }
        }
    }

    print_totals(&summary, args.quiet);

    if summary.all_valid() {
        Ok(summary)
    } else {
        Err(Error::data_validation(format!(
            "{} of {} bulletins failed validation",
            summary.invalid_bulletins + summary.unreadable,
            inputs.len()
        )))
    }
}

/// Explain why a decoded bulletin failed validation
pub fn validation_failure(input: &BulletinInput, result: &DecodeResult) -> Option<Error> {
    let metadata = &result.bulletin.metadata;

    let reason = match (metadata.is_valid_noaa_file, metadata.has_valid_preamble) {
        (true, true) => return None,
        (false, true) => "no valid bulletin header",
        (true, false) => "no valid preamble",
        (false, false) => "no valid bulletin header or preamble",
    };

    let reason = match result.stats.errors.first() {
        Some(first) => format!("{} ({})", reason, first),
        None => reason.to_string(),
    };

    debug!("{} failed validation: {}", input, reason);
    Some(Error::bulletin_validation(input.to_string(), reason))
}

fn describe(input: &BulletinInput, result: &DecodeResult) -> String {
    let metadata = &result.bulletin.metadata;
    let issued = metadata
        .issued
        .map(|i| format!("{}Z", i))
        .unwrap_or_else(|| "------".to_string());

    format!(
        "{}: {} issued {}, {} features",
        input,
        metadata.file_type,
        issued,
        result.bulletin.feature_count()
    )
}

fn print_totals(summary: &CommandSummary, quiet: bool) {
    if quiet && summary.all_valid() {
        return;
    }

    let valid = summary.bulletins - summary.invalid_bulletins;
    let line = format!(
        "{} valid, {} invalid, {} unreadable",
        valid, summary.invalid_bulletins, summary.unreadable
    );

    if summary.all_valid() {
        println!("\n{}", line.green());
    } else {
        println!("\n{}", line.red());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(text: &str) -> DecodeResult {
        BulletinDecoder::default().decode_str(text)
    }

    #[test]
    fn test_valid_bulletin_passes() {
        let result = decode("ASXX21 EGRR 151200\n10001 33300 15120\n");
        assert!(validation_failure(&BulletinInput::Stdin, &result).is_none());

        let line = describe(&BulletinInput::Stdin, &result);
        assert_eq!(line, "<stdin>: analysis issued 151200Z, 0 features");
    }

    #[test]
    fn test_missing_preamble_fails() {
        let result = decode("ASXX21 EGRR 151200\n");
        let failure = validation_failure(&BulletinInput::Stdin, &result).unwrap();

        assert!(matches!(
            &failure,
            Error::BulletinValidation { reason, .. } if reason == "no valid preamble"
        ));
    }

    #[test]
    fn test_rejected_header_reports_first_error() {
        let result = decode("ASXX21 KWBC 151200\n10001 33300 15120\n");
        let input = BulletinInput::File("bad.txt".into());
        let failure = validation_failure(&input, &result).unwrap();

        match failure {
            Error::BulletinValidation { path, reason } => {
                assert_eq!(path, "bad.txt");
                assert!(reason.starts_with("no valid bulletin header (line 1: header"));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }
}
