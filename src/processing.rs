use chrono::NaiveDate;

use crate::aggregate::{Observation, aggregate};
use crate::config::ConverterConfig;
use crate::filter::TimeWindow;
use crate::hdob::{Message, MissionInfo, ReportLine, package_messages, render_messages};
use crate::iwg1::{Sample, SampleParser, candidate_records};

/// Stage counts of one conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines that looked like IWG1 records
    pub candidates: usize,
    /// Records decoded into samples
    pub parsed: usize,
    /// Samples left after the time-of-day window
    pub retained: usize,
    /// Non-empty bins, one report line each
    pub bins: usize,
    pub messages: usize,
}

/// A rendered HDOB product
#[derive(Debug, Clone)]
pub struct Report {
    pub mission: MissionInfo,
    pub observations: Vec<Observation>,
    pub lines: Vec<ReportLine>,
    pub messages: Vec<Message>,
}

impl Report {
    pub fn text(&self) -> String {
        render_messages(&self.messages)
    }
}

/// How a conversion ended
///
/// The empty cases are ordinary results, not errors: each leaves nothing to
/// transmit and renders as empty text.
#[derive(Debug, Clone)]
pub enum Outcome {
    Report(Report),
    /// No input line decoded into a sample
    NoSamplesParsed,
    /// The time-of-day window excluded every sample
    NoSamplesInWindow,
    /// Binning produced no report lines
    NoBins,
}

impl Outcome {
    pub fn report(&self) -> Option<&Report> {
        match self {
            Self::Report(report) => Some(report),
            _ => None,
        }
    }

    pub fn text(&self) -> String {
        self.report().map(Report::text).unwrap_or_default()
    }
}

/// IWG1 to HDOB pipeline
///
/// Parse, filter by time of day, bin, reduce, render and package. Only
/// parsing may run on worker threads; everything after it is sequential and
/// deterministic.
pub struct Converter<'a> {
    config: &'a ConverterConfig,
    parser: SampleParser,
    window: TimeWindow,
}

impl<'a> Converter<'a> {
    pub fn new(config: &'a ConverterConfig, window: TimeWindow) -> Self {
        Self {
            config,
            parser: SampleParser::new(&config.parse),
            window,
        }
    }

    /// Replace the time-of-day window, keeping the parser.
    pub fn with_window(self, window: TimeWindow) -> Self {
        Self { window, ..self }
    }

    /// Decode the IWG1 records of `text`.
    ///
    /// Returns the samples in input order and the number of candidate records.
    pub fn parse_text(&self, text: &str) -> (Vec<Sample>, usize) {
        let records = candidate_records(text);
        let samples = self.parser.parse(&records);
        log::info!(
            "Parsed {} samples from {} candidate records ({:?})",
            samples.len(),
            records.len(),
            self.parser
        );
        (samples, records.len())
    }

    /// Convert raw IWG1 text.
    ///
    /// `storm_date` defaults to the UTC date of the earliest retained sample.
    pub fn convert_text(
        &self,
        text: &str,
        mission: &str,
        storm_date: Option<NaiveDate>,
    ) -> (Outcome, RunSummary) {
        let (samples, candidates) = self.parse_text(text);
        let (outcome, mut summary) = self.convert_samples(samples, mission, storm_date);
        summary.candidates = candidates;
        (outcome, summary)
    }

    /// Convert already-parsed samples.
    pub fn convert_samples(
        &self,
        samples: Vec<Sample>,
        mission: &str,
        storm_date: Option<NaiveDate>,
    ) -> (Outcome, RunSummary) {
        let mut summary = RunSummary {
            parsed: samples.len(),
            ..Default::default()
        };
        if samples.is_empty() {
            log::warn!("No IWG1 samples parsed");
            return (Outcome::NoSamplesParsed, summary);
        }

        let mut samples = self.window.apply(samples);
        summary.retained = samples.len();
        if !self.window.is_unbounded() {
            log::info!(
                "{} of {} samples inside time window",
                summary.retained,
                summary.parsed
            );
        }
        if samples.is_empty() {
            log::warn!("Time window excluded every sample");
            return (Outcome::NoSamplesInWindow, summary);
        }

        let report_config = &self.config.report;
        let observations = aggregate(&mut samples, report_config.interval.as_secs());
        summary.bins = observations.len();
        if observations.is_empty() {
            log::warn!("No bins produced");
            return (Outcome::NoBins, summary);
        }

        let storm_date = storm_date.unwrap_or_else(|| samples[0].time.date_naive());
        let mission = MissionInfo {
            mission: mission.to_string(),
            storm_date,
        };

        let lines: Vec<ReportLine> = observations
            .iter()
            .map(|obs| ReportLine::render(obs, &report_config.flags))
            .collect();
        let messages = package_messages(&lines, report_config, &mission);
        summary.messages = messages.len();
        log::info!(
            "Rendered {} report lines in {} messages at {} resolution",
            lines.len(),
            messages.len(),
            report_config.interval
        );

        let report = Report {
            mission,
            observations,
            lines,
            messages,
        };
        (Outcome::Report(report), summary)
    }
}
