//! Tokenizer and boundary rules for period codes.

use tracing::debug;

use crate::models::{merge_intervals, TimeInterval, Weekday};

/// Night marker glyph prefixing evening periods.
const NIGHT_MARKER: char = '야';

/// Result of parsing one notation string.
///
/// Intervals are merged; `skipped_tokens` counts tokens that could not
/// be read (diagnostic only, never fatal).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOutcome {
    /// Extracted intervals, sorted and fused.
    pub intervals: Vec<TimeInterval>,
    /// Number of malformed or unrecognized tokens that were skipped.
    pub skipped_tokens: usize,
}

/// Half-period suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Half {
    /// First half of the period.
    A,
    /// Second half of the period.
    B,
}

/// One parsed period code, e.g. `7`, `5B`, `야1`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PeriodCode {
    night: bool,
    period: u32,
    half: Option<Half>,
}

/// Anchor on the standard scale for night periods 1..=3.
///
/// A fixed lookup: the evening sub-scale is not linear beyond these
/// three slots, so no arithmetic mapping exists.
fn night_anchor(period: u32) -> Option<f64> {
    match period {
        1 => Some(10.0),
        2 => Some(11.0),
        3 => Some(12.0),
        _ => None,
    }
}

impl PeriodCode {
    /// Base position of this period on the canonical timeline.
    fn base(&self) -> Option<f64> {
        if self.night {
            night_anchor(self.period)
        } else {
            Some(self.period as f64)
        }
    }

    /// Start boundary: `p` for plain and `A`, `p + 0.5` for `B`.
    fn start_boundary(&self) -> Option<f64> {
        let base = self.base()?;
        Some(match self.half {
            Some(Half::B) => base + 0.5,
            _ => base,
        })
    }

    /// End boundary: `p + 0.5` for `A` ("up to and including A"),
    /// `p + 1` for plain and `B`.
    fn end_boundary(&self) -> Option<f64> {
        let base = self.base()?;
        Some(match self.half {
            Some(Half::A) => base + 0.5,
            _ => base + 1.0,
        })
    }
}

/// Parses one period code token. `None` means malformed.
fn parse_code(token: &str) -> Option<PeriodCode> {
    let mut chars = token.chars().peekable();

    let night = chars.peek() == Some(&NIGHT_MARKER);
    if night {
        chars.next();
    }

    let mut digits = String::new();
    while let Some(c) = chars.peek() {
        if c.is_ascii_digit() {
            digits.push(*c);
            chars.next();
        } else {
            break;
        }
    }
    if digits.is_empty() || digits.len() > 2 {
        return None;
    }
    let period: u32 = digits.parse().ok()?;
    if period == 0 {
        return None;
    }

    let half = match chars.next() {
        None => None,
        Some('A') => Some(Half::A),
        Some('B') => Some(Half::B),
        Some(_) => return None,
    };
    if chars.next().is_some() {
        return None;
    }

    // Night periods only exist on anchors 1..=3
    if night && night_anchor(period).is_none() {
        return None;
    }

    Some(PeriodCode {
        night,
        period,
        half,
    })
}

/// Night-wrap correction: when a computed start exceeds its end, the
/// range crossed onto the evening sub-scale and the end boundary is
/// shifted up by a flat 8.0 units.
fn correct_wrap(start: f64, end: f64) -> f64 {
    if start > end {
        end + 8.0
    } else {
        end
    }
}

/// Parses a raw notation string into merged intervals.
///
/// See the module docs for the grammar. Text before the first weekday
/// glyph has no weekday context and is ignored.
pub fn parse_time_codes(raw: &str) -> ParseOutcome {
    let cleaned = strip_annotations(raw);

    let mut intervals: Vec<TimeInterval> = Vec::new();
    let mut skipped = 0usize;

    for (weekday, chunk) in split_weekday_chunks(&cleaned) {
        parse_chunk(weekday, &chunk, &mut intervals, &mut skipped);
    }

    if skipped > 0 {
        debug!(raw, skipped, "skipped unrecognized period tokens");
    }

    ParseOutcome {
        intervals: merge_intervals(intervals),
        skipped_tokens: skipped,
    }
}

/// Removes parenthesized room annotations, e.g. `"월 1-2 (5-107)"`.
fn strip_annotations(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut depth = 0usize;
    for c in raw.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

/// Splits the input into `(weekday, remainder-until-next-glyph)` chunks.
fn split_weekday_chunks(input: &str) -> Vec<(Weekday, String)> {
    let mut chunks: Vec<(Weekday, String)> = Vec::new();
    for c in input.chars() {
        if let Some(day) = Weekday::from_glyph(c) {
            chunks.push((day, String::new()));
        } else if let Some((_, chunk)) = chunks.last_mut() {
            chunk.push(c);
        }
        // Leading text with no weekday context is dropped
    }
    chunks
}

/// Parses the period tokens of one weekday chunk.
///
/// A chunk containing at least one range token parses every token
/// independently (ranges span, lone codes become single periods). A
/// chunk with no range marker is a contiguous run from the first code's
/// start to the last code's end.
fn parse_chunk(
    weekday: Weekday,
    chunk: &str,
    intervals: &mut Vec<TimeInterval>,
    skipped: &mut usize,
) {
    let tokens: Vec<&str> = chunk.split_whitespace().collect();
    if tokens.is_empty() {
        return;
    }

    let has_range = tokens.iter().any(|t| t.contains('-'));

    if has_range {
        for token in tokens {
            match parse_token(weekday, token) {
                Some(interval) => intervals.push(interval),
                None => *skipped += 1,
            }
        }
        return;
    }

    // Contiguous run: first start to last end
    let mut codes: Vec<PeriodCode> = Vec::new();
    for token in tokens {
        match parse_code(token) {
            Some(code) => codes.push(code),
            None => *skipped += 1,
        }
    }
    let (Some(first), Some(last)) = (codes.first(), codes.last()) else {
        return;
    };
    let (Some(start), Some(end)) = (first.start_boundary(), last.end_boundary()) else {
        *skipped += 1;
        return;
    };
    push_interval(weekday, start, end, intervals, skipped);
}

/// Parses a single token (range or lone code) into one interval.
fn parse_token(weekday: Weekday, token: &str) -> Option<TimeInterval> {
    if let Some((left, right)) = token.split_once('-') {
        let start_code = parse_code(left)?;
        let mut end_code = parse_code(right)?;
        // A plain right endpoint after a night left endpoint stays on
        // the night scale
        if start_code.night && !end_code.night {
            end_code.night = true;
            if night_anchor(end_code.period).is_none() {
                return None;
            }
        }
        let start = start_code.start_boundary()?;
        let end = correct_wrap(start, end_code.end_boundary()?);
        (start < end).then(|| TimeInterval::new(weekday, start, end))
    } else {
        let code = parse_code(token)?;
        let start = code.start_boundary()?;
        let end = code.end_boundary()?;
        (start < end).then(|| TimeInterval::new(weekday, start, end))
    }
}

fn push_interval(
    weekday: Weekday,
    start: f64,
    end: f64,
    intervals: &mut Vec<TimeInterval>,
    skipped: &mut usize,
) {
    let end = correct_wrap(start, end);
    if start < end {
        intervals.push(TimeInterval::new(weekday, start, end));
    } else {
        *skipped += 1;
    }
}
