use std::fmt;

use hashbrown::HashMap;
use serde::Serialize;

use crate::enrollment::Enrollment;

/// Enrollment count for one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseCount {
    /// Course name.
    pub course: String,
    /// Records registered for it.
    pub count: usize,
}

/// Total plus per-course breakdown, courses in first-occurrence order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    /// Number of records.
    pub total: usize,
    /// One entry per distinct course.
    pub by_course: Vec<CourseCount>,
}

impl Summary {
    /// Groups `records` by course.
    pub fn from_records(records: &[Enrollment]) -> Self {
        let mut pos: HashMap<&str, usize> = HashMap::new();
        let mut by_course: Vec<CourseCount> = Vec::new();

        for rec in records {
            let idx = *pos.entry(rec.course()).or_insert_with(|| {
                by_course.push(CourseCount {
                    course: rec.course().to_string(),
                    count: 0,
                });
                by_course.len() - 1
            });
            by_course[idx].count += 1;
        }

        Self {
            total: records.len(),
            by_course,
        }
    }

    /// Count for `course`, zero when absent.
    pub fn count_for(&self, course: &str) -> usize {
        self.by_course
            .iter()
            .find(|c| c.course == course)
            .map_or(0, |c| c.count)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total: {}", self.total)?;
        writeln!(f, "By course:")?;
        for c in &self.by_course {
            writeln!(f, " - {}: {}", c.course, c.count)?;
        }
        Ok(())
    }
}
