use anyhow::{anyhow, bail, Context, Result};
use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, TimeZone};
use regex::Regex;

/// Turns the time label rendered on a video card into an absolute time.
pub trait TimeParser {
    fn parse(&self, text: &str) -> Result<DateTime<Local>>;
}

impl<F> TimeParser for F
where
    F: Fn(&str) -> Result<DateTime<Local>>,
{
    fn parse(&self, text: &str) -> Result<DateTime<Local>> {
        self(text)
    }
}

/// Parser for the labels TikTok shows on cards: `just now`, `3h ago`,
/// `2 days ago`, `1-15` and `2024-1-15`.
#[derive(Debug, Clone, Default)]
pub struct RelativeTimeParser {
    reference: Option<DateTime<Local>>,
}

impl RelativeTimeParser {
    pub fn new() -> Self {
        Self { reference: None }
    }

    /// Resolve relative labels against `reference` instead of the current time.
    pub fn with_reference(reference: DateTime<Local>) -> Self {
        Self {
            reference: Some(reference),
        }
    }
}

impl TimeParser for RelativeTimeParser {
    fn parse(&self, text: &str) -> Result<DateTime<Local>> {
        let now = self.reference.unwrap_or_else(Local::now);
        parse_tiktok_time(text, now)
    }
}

/// Parses `text` relative to `now`.
pub fn parse_tiktok_time(text: &str, now: DateTime<Local>) -> Result<DateTime<Local>> {
    let lowered = text.trim().to_lowercase();

    if lowered.ends_with("just now") || lowered == "now" {
        return Ok(now);
    }

    let relative = Regex::new(r"(\d+)\s*([a-z]+)\s+ago")?;
    if let Some(caps) = relative.captures(&lowered) {
        let amount: i64 = caps[1]
            .parse()
            .with_context(|| format!("Invalid amount in `{}`", text))?;
        let span = relative_span(&caps[2], amount)
            .with_context(|| format!("Invalid time label `{}`", text))?;
        return now
            .checked_sub_signed(span)
            .ok_or_else(|| anyhow!("Time out of range in `{}`", text));
    }

    let full_date = Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$")?;
    if let Some(caps) = full_date.captures(&lowered) {
        return local_midnight(caps[1].parse()?, caps[2].parse()?, caps[3].parse()?, text);
    }

    let month_day = Regex::new(r"^(\d{1,2})-(\d{1,2})$")?;
    if let Some(caps) = month_day.captures(&lowered) {
        return local_midnight(now.year(), caps[1].parse()?, caps[2].parse()?, text);
    }

    Err(anyhow!("Unrecognized time format: `{}`", text))
}

fn relative_span(unit: &str, amount: i64) -> Result<Duration> {
    let span = match unit {
        "s" | "sec" | "secs" | "second" | "seconds" => Duration::try_seconds(amount),
        "m" | "min" | "mins" | "minute" | "minutes" => Duration::try_minutes(amount),
        "h" | "hr" | "hrs" | "hour" | "hours" => Duration::try_hours(amount),
        "d" | "day" | "days" => Duration::try_days(amount),
        "w" | "wk" | "week" | "weeks" => Duration::try_weeks(amount),
        _ => bail!("Unknown time unit `{}`", unit),
    };

    span.ok_or_else(|| anyhow!("Time amount {} out of range", amount))
}

fn local_midnight(year: i32, month: u32, day: u32, text: &str) -> Result<DateTime<Local>> {
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| anyhow!("Invalid date in `{}`", text))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| anyhow!("Invalid time in `{}`", text))?;

    Local
        .from_local_datetime(&midnight)
        .earliest()
        .ok_or_else(|| anyhow!("Nonexistent local time for `{}`", text))
}
