//! Generated performance reviews.
//!
//! Wording is flavour and picked at random per species; the facts in a
//! review (completion count, completed chore titles) come from the chore
//! data. Callers pass the RNG so tests can seed it.

mod templates;

use chrono::{Datelike, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::household::Chore;
use crate::schedule::{parse_calendar_date, Period};

/// Member species, as far as review wording is concerned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    #[default]
    Dog,
    Cat,
    Goldfish,
    Parrot,
    Lizard,
    Hamster,
    Rabbit,
    Snake,
}

impl Species {
    /// Case-insensitive lookup; anything unrecognised reads as a dog.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "cat" => Self::Cat,
            "goldfish" => Self::Goldfish,
            "parrot" => Self::Parrot,
            "lizard" => Self::Lizard,
            "hamster" => Self::Hamster,
            "rabbit" => Self::Rabbit,
            "snake" => Self::Snake,
            _ => Self::Dog,
        }
    }
}

/// `YYYY-MM` key identifying a month's audit.
pub fn month_key(year: i32, month: u32) -> String {
    format!("{year:04}-{month:02}")
}

/// Parse a `YYYY-MM` key into `(year, month)`.
pub fn parse_month_key(key: &str) -> Option<(i32, u32)> {
    let (year, month) = key.trim().split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}

/// Render a completion count, dropping `.0` from whole numbers.
pub fn format_count(count: f64) -> String {
    if count.fract() == 0.0 {
        format!("{count:.0}")
    } else {
        format!("{count}")
    }
}

fn pick<'a, R: Rng + ?Sized>(options: &'a [&'a str], rng: &mut R) -> &'a str {
    options.choose(rng).copied().unwrap_or("{name} had a month.")
}

/// A short weekly review, ending with the verified completion count.
pub fn weekly_review<R: Rng + ?Sized>(name: &str, species: Species, completed: f64, rng: &mut R) -> String {
    let options = if completed == 0.0 {
        templates::weekly_idle(species)
    } else {
        templates::weekly(species)
    };
    format!(
        "{} ({} tasks verified).",
        pick(options, rng).replace("{name}", name),
        format_count(completed)
    )
}

/// A monthly review quoting the titles the member completed.
pub fn monthly_review<R: Rng + ?Sized>(name: &str, species: Species, titles: &[String], rng: &mut R) -> String {
    if titles.is_empty() {
        return pick(templates::monthly_idle(species), rng).replace("{name}", name);
    }
    let tasks = titles
        .iter()
        .map(|t| format!("\"{t}\""))
        .collect::<Vec<_>>()
        .join(", ");
    pick(templates::monthly(species), rng)
        .replace("{name}", name)
        .replace("{tasks}", &tasks)
}

/// Titles of chores `member_id` is assigned to with a completion in the
/// given month, first-seen order, without duplicates or blanks.
pub fn completed_titles_for_month(chores: &[Chore], member_id: &str, year: i32, month: u32) -> Vec<String> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let period = Period::month_containing(first);

    let mut titles: Vec<String> = Vec::new();
    for chore in chores.iter().filter(|c| c.is_assigned_to(member_id)) {
        let title = chore.title.trim();
        if title.is_empty() || title.eq_ignore_ascii_case("undefined") {
            continue;
        }
        let done_this_month = chore
            .completed_dates
            .iter()
            .filter_map(|d| parse_calendar_date(d).ok())
            .any(|d| period.contains(d));
        if done_this_month && !titles.iter().any(|t| t == title) {
            titles.push(title.to_string());
        }
    }
    titles
}

/// `(year, month)` of a date.
pub fn year_month(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month())
}
