//! Per-bulletin decoding state machine
//!
//! A [`BulletinSession`] holds every register the line dispatcher needs: the
//! current section, the metadata and the three feature builders. It is
//! created at the start of a bulletin, fed one line at a time and consumed by
//! [`BulletinSession::finish`].

use super::fronts::FrontBuilder;
use super::header::{validate_header, validate_preamble};
use super::isobars::IsobarBuilder;
use super::pressure_centers::PressureCenterBuilder;
use super::stats::{DecodeResult, DecodeStats};
use super::tokenizer::{group_code, tokenize_with};
use crate::app::models::{BulletinMetadata, DecodedBulletin};
use crate::config::DecoderConfig;
use crate::constants::{GROUP_WIDTH, preamble, sections};
use tracing::{debug, trace};

/// Data section selected by the last marker line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    NoSection,
    PressureCenters,
    Fronts,
    Isobars,
}

impl Section {
    /// Map a single-group marker line to its section
    pub fn from_marker(code: Option<u32>) -> Self {
        match code {
            Some(sections::PRESSURE_CENTERS) => Section::PressureCenters,
            Some(sections::FRONTS) => Section::Fronts,
            Some(sections::ISOBARS) => Section::Isobars,
            _ => Section::NoSection,
        }
    }
}

/// Decoding state for a single bulletin
#[derive(Debug)]
pub struct BulletinSession<'a> {
    config: &'a DecoderConfig,
    section: Section,
    metadata: BulletinMetadata,
    pressure_centers: PressureCenterBuilder,
    fronts: FrontBuilder,
    isobars: IsobarBuilder,
    stats: DecodeStats,
}

impl<'a> BulletinSession<'a> {
    pub fn new(config: &'a DecoderConfig) -> Self {
        Self {
            config,
            section: Section::NoSection,
            metadata: BulletinMetadata::default(),
            pressure_centers: PressureCenterBuilder::new(),
            fronts: FrontBuilder::new(),
            isobars: IsobarBuilder::new(),
            stats: DecodeStats::new(),
        }
    }

    /// Tokenize and decode one raw line
    ///
    /// Carriage returns and newlines anywhere in the line are removed first.
    pub fn process_line(&mut self, line: &str) {
        self.stats.lines_read += 1;
        let line = line.replace(|c: char| c == '\r' || c == '\n', "");
        let tokens = tokenize_with(&line, self.config.bulletin_types.as_slice());
        self.dispatch(&tokens);
    }

    /// Decode one already tokenized line
    pub fn process_tokens(&mut self, tokens: &[String]) {
        self.stats.lines_read += 1;
        self.dispatch(tokens);
    }

    fn dispatch(&mut self, tokens: &[String]) {
        let Some(first) = tokens.first() else {
            self.stats.lines_ignored += 1;
            return;
        };

        if self.is_header(tokens) {
            self.handle_header(tokens);
            return;
        }

        if first.chars().count() != GROUP_WIDTH {
            trace!("Ignoring non fleet-code line starting with '{}'", first);
            self.stats.lines_ignored += 1;
            return;
        }

        let code = group_code(first);
        if tokens.len() == 1 {
            self.enter_section(Section::from_marker(code));
            return;
        }

        match code {
            Some(preamble::ANALYSIS | preamble::FORECAST) => self.handle_preamble(tokens),
            _ => self.handle_data_line(tokens),
        }
    }

    fn is_header(&self, tokens: &[String]) -> bool {
        let first = tokens[0].as_str();
        (tokens.len() >= 3 && self.config.is_bulletin_type(first))
            || (tokens.len() == 3 && first == self.config.fiji_bulletin_type)
    }

    fn handle_header(&mut self, tokens: &[String]) {
        self.stats.header_lines += 1;

        match validate_header(tokens, self.config) {
            Ok(issued) => {
                debug!("Valid bulletin header, issued {}", issued);
                self.metadata.issued = Some(issued);
                self.metadata.is_valid_noaa_file = true;
            }
            Err(e) => {
                debug!("Rejected bulletin header: {}", e);
                self.metadata.is_valid_noaa_file = false;
                self.record_error(format!("header: {}", e));
            }
        }
    }

    fn handle_preamble(&mut self, tokens: &[String]) {
        self.stats.preamble_lines += 1;

        match validate_preamble(tokens) {
            Ok(parsed) => {
                debug!(
                    "Preamble: {} bulletin, position mode {:?}",
                    parsed.file_type, parsed.position_mode
                );
                self.metadata.file_type = parsed.file_type;
                self.metadata.valid_hour = parsed.valid_hour;
                self.metadata.position_mode = Some(parsed.position_mode);
                self.metadata.has_valid_preamble = true;
            }
            Err(e) => {
                debug!("Rejected preamble: {}", e);
                self.metadata.has_valid_preamble = false;
                self.record_error(format!("preamble: {}", e));
            }
        }
    }

    fn enter_section(&mut self, section: Section) {
        trace!("Section {:?} -> {:?}", self.section, section);
        self.stats.section_markers += 1;
        self.section = section;
        self.fronts.end_continuation();
        self.isobars.end_continuation();
    }

    fn handle_data_line(&mut self, tokens: &[String]) {
        let mode = self.metadata.position_mode;
        let stats = &mut self.stats;

        match self.section {
            Section::PressureCenters => self.pressure_centers.process_line(tokens, mode, stats),
            Section::Fronts => self.fronts.process_line(tokens, mode, stats),
            Section::Isobars => self.isobars.process_line(tokens, mode, stats),
            Section::NoSection => {
                stats.lines_ignored += 1;
                return;
            }
        }
        stats.data_lines += 1;
    }

    fn record_error(&mut self, message: String) {
        let line = self.stats.lines_read;
        self.stats.errors.push(format!("line {}: {}", line, message));
    }

    /// Section the next data line will be routed to
    pub fn section(&self) -> Section {
        self.section
    }

    /// Metadata gathered so far
    pub fn metadata(&self) -> &BulletinMetadata {
        &self.metadata
    }

    /// Statistics gathered so far
    pub fn stats(&self) -> &DecodeStats {
        &self.stats
    }

    /// Finalise the bulletin
    pub fn finish(self) -> DecodeResult {
        DecodeResult {
            bulletin: DecodedBulletin {
                metadata: self.metadata,
                pressure_centers: self.pressure_centers.finish(),
                fronts: self.fronts.finish(),
                isobars: self.isobars.finish(),
            },
            stats: self.stats,
        }
    }
}
