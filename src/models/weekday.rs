//! Weekday model.
//!
//! Weekdays carry two fixed process-wide tables: the Korean glyph set
//! used by the period notation (월화수목금토일) and the ordering index
//! used to sort intervals. Saturday and Sunday exist on the scale but
//! are not academic days: free-day computation covers Monday–Friday only.

use serde::{Deserialize, Serialize};

/// A day of the week on the timetable scale.
///
/// Ordering follows the notation glyph order: Monday first, Sunday last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

/// The academic week (Monday–Friday), in order.
///
/// Free-day reporting is computed against this set; weekend days are
/// never reported as free days.
pub const ACADEMIC_WEEK: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

impl Weekday {
    /// All seven weekdays in notation order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Maps a notation glyph (월, 화, 수, 목, 금, 토, 일) to a weekday.
    ///
    /// Returns `None` for any other character.
    pub fn from_glyph(c: char) -> Option<Self> {
        match c {
            '월' => Some(Weekday::Mon),
            '화' => Some(Weekday::Tue),
            '수' => Some(Weekday::Wed),
            '목' => Some(Weekday::Thu),
            '금' => Some(Weekday::Fri),
            '토' => Some(Weekday::Sat),
            '일' => Some(Weekday::Sun),
            _ => None,
        }
    }

    /// The notation glyph for this weekday.
    pub fn glyph(self) -> char {
        match self {
            Weekday::Mon => '월',
            Weekday::Tue => '화',
            Weekday::Wed => '수',
            Weekday::Thu => '목',
            Weekday::Fri => '금',
            Weekday::Sat => '토',
            Weekday::Sun => '일',
        }
    }

    /// Position in notation order (Mon = 0 .. Sun = 6).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether this is an academic day (Monday–Friday).
    #[inline]
    pub fn is_academic(self) -> bool {
        !matches!(self, Weekday::Sat | Weekday::Sun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_round_trip() {
        for day in Weekday::ALL {
            assert_eq!(Weekday::from_glyph(day.glyph()), Some(day));
        }
        assert_eq!(Weekday::from_glyph('x'), None);
        assert_eq!(Weekday::from_glyph('야'), None); // night marker, not a day
    }

    #[test]
    fn test_ordering_follows_notation() {
        assert!(Weekday::Mon < Weekday::Tue);
        assert!(Weekday::Fri < Weekday::Sat);
        assert_eq!(Weekday::Mon.index(), 0);
        assert_eq!(Weekday::Sun.index(), 6);
    }

    #[test]
    fn test_academic_week() {
        assert_eq!(ACADEMIC_WEEK.len(), 5);
        assert!(ACADEMIC_WEEK.iter().all(|d| d.is_academic()));
        assert!(!Weekday::Sat.is_academic());
        assert!(!Weekday::Sun.is_academic());
    }
}
