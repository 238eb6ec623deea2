//! Period-notation parser.
//!
//! Converts compact per-weekday schedule notation such as `"월 7-9"`,
//! `"월 5B-6"`, or `"화 야1-야2"` into merged [`TimeInterval`] values on
//! the canonical timeline.
//!
//! # Grammar
//!
//! A notation string is a sequence of weekday chunks. Each chunk starts
//! with a weekday glyph (월화수목금토일) and runs until the next glyph.
//! Inside a chunk, whitespace-separated tokens are either period ranges
//! (`7-9`, `5B-6`, `야1-야2`) or lone period codes (`7`, `5B`, `야1`).
//! Parenthesized room annotations are stripped before tokenizing.
//!
//! # Canonical timeline
//!
//! Period `p` occupies `[p, p + 1)`. Suffix `A` selects the first half
//! (start `p`, end `p + 0.5`), suffix `B` the second (start `p + 0.5`,
//! end `p + 1`). The night marker `야` moves a period onto the evening
//! sub-scale via a fixed anchor table: night periods 1, 2, 3 anchor at
//! 10.0, 11.0, 12.0. In a range, a plain right endpoint after a night
//! left endpoint is read on the night scale as well.
//!
//! # Degradation
//!
//! Malformed tokens are skipped and counted, never fatal: the parser
//! returns every interval it could extract plus the skip count. A fully
//! unparseable string yields zero intervals, which downstream treats as
//! a course with no meetings.

mod timecode;

pub use timecode::{parse_time_codes, ParseOutcome};
