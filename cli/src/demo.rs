//! The calling side of the record: every optional and fallible result is
//! handled explicitly before it reaches the output.

use std::io::Write;

use anyhow::{Context, Result, bail};
use interop_types::{PersonRecord, RandomSource};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show { json: bool, words: Vec<String> },
    Stats { trials: Option<u32> },
}

impl Command {
    /// Parse everything after the program name.
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter().peekable();
        match args.peek().map(String::as_str) {
            Some("stats") => {
                args.next();
                let mut trials = None;
                while let Some(arg) = args.next() {
                    match arg.as_str() {
                        "--trials" => {
                            let raw = args.next().context("--trials needs a value")?;
                            let parsed: u32 = raw
                                .parse()
                                .with_context(|| format!("invalid trial count: {raw}"))?;
                            trials = Some(parsed.max(1));
                        }
                        other => bail!("unknown argument for stats: {other}"),
                    }
                }
                Ok(Command::Stats { trials })
            }
            Some("show") => {
                args.next();
                Self::parse_show(args)
            }
            _ => Self::parse_show(args),
        }
    }

    fn parse_show(args: impl Iterator<Item = String>) -> Result<Self> {
        let mut json = false;
        let mut words = Vec::new();
        for arg in args {
            if arg == "--json" {
                json = true;
            } else if arg.starts_with("--") {
                bail!("unknown flag: {arg}");
            } else {
                words.push(arg);
            }
        }
        Ok(Command::Show { json, words })
    }
}

/// Walk through every operation on `record`, writing one line per result.
pub fn show(
    record: &PersonRecord,
    words: &[String],
    json: bool,
    source: &mut impl RandomSource,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "name: {}", record.name())?;
    writeln!(out, "age: {}", record.age())?;

    match record.description_with(source) {
        Some(description) => writeln!(out, "{description}")?,
        None => writeln!(out, "no description available")?,
    }

    writeln!(out, "concatenated: {}", record.concatenate(words))?;

    match record.risky_method_with(source) {
        Ok(message) => writeln!(out, "risky: {message}")?,
        Err(err) => {
            tracing::info!(error = %err, "handled risky method failure");
            writeln!(out, "risky failed: {err}")?;
        }
    }

    writeln!(out, "greeting: {}", PersonRecord::static_greeting())?;
    writeln!(out, "names: {}", record.names().join(", "))?;

    let mut scores: Vec<_> = record.scores().into_iter().collect();
    scores.sort();
    let scores: Vec<String> = scores
        .into_iter()
        .map(|(name, score)| format!("{name}={score}"))
        .collect();
    writeln!(out, "scores: {}", scores.join(", "))?;

    if json {
        let serialized = serde_json::to_string(record).context("serializing record")?;
        writeln!(out, "{serialized}")?;
    } else {
        writeln!(out, "{record}")?;
    }
    Ok(())
}

/// How often one branch of a random operation was taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub total: u32,
    pub hits: u32,
}

impl Tally {
    pub fn record(&mut self, hit: bool) {
        self.total += 1;
        if hit {
            self.hits += 1;
        }
    }

    #[must_use]
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.hits) / f64::from(self.total)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsReport {
    pub absent_descriptions: Tally,
    pub risky_failures: Tally,
}

pub fn collect_stats(
    record: &PersonRecord,
    trials: u32,
    source: &mut impl RandomSource,
) -> StatsReport {
    let mut report = StatsReport::default();
    for _ in 0..trials {
        report
            .absent_descriptions
            .record(record.description_with(source).is_none());
        report
            .risky_failures
            .record(record.risky_method_with(source).is_err());
    }
    tracing::debug!(trials, ?report, "stats collected");
    report
}

pub fn write_stats(report: &StatsReport, out: &mut impl Write) -> Result<()> {
    let StatsReport {
        absent_descriptions: absent,
        risky_failures: failures,
    } = report;
    writeln!(
        out,
        "description absent: {}/{} ({:.1}%)",
        absent.hits,
        absent.total,
        absent.ratio() * 100.0
    )?;
    writeln!(
        out,
        "risky failed: {}/{} ({:.1}%)",
        failures.hits,
        failures.total,
        failures.ratio() * 100.0
    )?;
    Ok(())
}
