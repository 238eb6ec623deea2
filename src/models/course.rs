//! Course model.
//!
//! A course is an immutable record built once from catalog data plus the
//! parsed, merged meeting intervals. Intervals are owned by value; the
//! search layers only ever read them.

use serde::{Deserialize, Serialize};

use super::TimeInterval;

/// Catalog completion category of a course.
///
/// Fixed set carried over from the institutional catalog; labels follow
/// the catalog's long-form names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CourseType {
    /// 전공핵심 — major core.
    MajorCore,
    /// 전공심화 — major advanced.
    MajorAdvanced,
    /// 전공기초 — major foundation.
    MajorFoundation,
    /// 핵심교양 — core general education.
    CoreGeneral,
    /// 심화교양 — advanced general education.
    AdvancedGeneral,
    /// 기초교양 — basic general education.
    BasicGeneral,
    /// 일반선택 — general elective.
    GeneralElective,
    /// 군사학 — military science.
    MilitaryScience,
    /// 교직 — teacher training.
    TeacherTraining,
}

impl CourseType {
    /// Catalog long-form label.
    pub fn label(self) -> &'static str {
        match self {
            CourseType::MajorCore => "전공핵심",
            CourseType::MajorAdvanced => "전공심화",
            CourseType::MajorFoundation => "전공기초",
            CourseType::CoreGeneral => "핵심교양",
            CourseType::AdvancedGeneral => "심화교양",
            CourseType::BasicGeneral => "기초교양",
            CourseType::GeneralElective => "일반선택",
            CourseType::MilitaryScience => "군사학",
            CourseType::TeacherTraining => "교직",
        }
    }
}

/// How a course is delivered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryMode {
    /// In-person classes.
    #[default]
    Offline,
    /// Fully remote.
    Online,
    /// Mixed in-person and remote.
    Blended,
}

/// An immutable course record.
///
/// Built once by the catalog/parsing layer; the combination engine
/// treats courses as read-only values identified by `id` and
/// deduplicated by `name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Catalog identifier.
    pub id: u64,
    /// Course name. Wishlist deduplication keys on this.
    pub name: String,
    /// Credit hours (positive).
    pub credit_hours: u32,
    /// Catalog completion category.
    pub course_type: CourseType,
    /// Delivery mode.
    pub delivery: DeliveryMode,
    /// Whether the course sits on the evening sub-scale.
    pub is_night: bool,
    /// Instructor name (catalog default: unassigned).
    pub professor: String,
    /// Target grade year, if the catalog specifies one.
    pub grade: Option<u8>,
    /// Offering department.
    pub department: String,
    /// Merged weekly meeting intervals. Empty for courses whose
    /// notation could not be parsed (tolerated, never fatal).
    pub intervals: Vec<TimeInterval>,
}

impl Course {
    /// Creates a course with the given identity and credits.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        credit_hours: u32,
        course_type: CourseType,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            credit_hours,
            course_type,
            delivery: DeliveryMode::default(),
            is_night: false,
            professor: "미배정".to_string(),
            grade: None,
            department: String::new(),
            intervals: Vec::new(),
        }
    }

    /// Sets the delivery mode.
    pub fn with_delivery(mut self, delivery: DeliveryMode) -> Self {
        self.delivery = delivery;
        self
    }

    /// Marks the course as a night offering.
    pub fn with_night(mut self, is_night: bool) -> Self {
        self.is_night = is_night;
        self
    }

    /// Sets the instructor name.
    pub fn with_professor(mut self, professor: impl Into<String>) -> Self {
        self.professor = professor.into();
        self
    }

    /// Sets the target grade year.
    pub fn with_grade(mut self, grade: u8) -> Self {
        self.grade = Some(grade);
        self
    }

    /// Sets the offering department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Sets the meeting intervals (expected to be pre-merged).
    pub fn with_intervals(mut self, intervals: Vec<TimeInterval>) -> Self {
        self.intervals = intervals;
        self
    }

    /// Whether the course has any scheduled meetings.
    pub fn has_meetings(&self) -> bool {
        !self.intervals.is_empty()
    }
}
