//! Letter grades from completion ratios.

use serde::Serialize;

/// `(minimum percentage, grade, colour, description)`, best band first.
const BANDS: &[(f64, &str, &str, &str)] = &[
    (95.0, "A+", "#2ecc71", "Outstanding performance"),
    (90.0, "A", "#27ae60", "Excellent work"),
    (85.0, "B+", "#3498db", "Very good"),
    (80.0, "B", "#2980b9", "Good performance"),
    (75.0, "C+", "#f39c12", "Satisfactory"),
    (70.0, "C", "#e67e22", "Average"),
    (60.0, "D", "#e74c3c", "Below average"),
];

const FAILING: (&str, &str, &str) = ("F", "#c0392b", "Needs improvement");

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerGrade {
    pub grade: &'static str,
    /// Rounded to a whole percent
    pub percentage: u32,
    pub color: &'static str,
    pub description: &'static str,
}

impl ManagerGrade {
    /// Grade `completed` credit against `scheduled` occurrences.
    ///
    /// Bands compare the exact ratio; only the reported percentage is
    /// rounded.
    pub fn from_counts(completed: f64, scheduled: u32) -> Self {
        if scheduled == 0 {
            return Self {
                grade: "N/A",
                percentage: 0,
                color: "#999",
                description: "No tasks assigned",
            };
        }

        let percentage = completed * 100.0 / f64::from(scheduled);
        let (grade, color, description) = BANDS
            .iter()
            .find(|(min, ..)| percentage >= *min)
            .map(|&(_, grade, color, description)| (grade, color, description))
            .unwrap_or(FAILING);

        Self {
            grade,
            percentage: percentage.max(0.0).round() as u32,
            color,
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_scheduled_is_not_graded() {
        let grade = ManagerGrade::from_counts(3.0, 0);
        assert_eq!(grade.grade, "N/A");
        assert_eq!(grade.color, "#999");
    }

    #[test]
    fn band_edges() {
        assert_eq!(ManagerGrade::from_counts(19.0, 20).grade, "A+");
        assert_eq!(ManagerGrade::from_counts(18.0, 20).grade, "A");
        assert_eq!(ManagerGrade::from_counts(17.0, 20).grade, "B+");
        assert_eq!(ManagerGrade::from_counts(16.0, 20).grade, "B");
        assert_eq!(ManagerGrade::from_counts(15.0, 20).grade, "C+");
        assert_eq!(ManagerGrade::from_counts(14.0, 20).grade, "C");
        assert_eq!(ManagerGrade::from_counts(12.0, 20).grade, "D");
        assert_eq!(ManagerGrade::from_counts(11.0, 20).grade, "F");
        assert_eq!(ManagerGrade::from_counts(0.0, 20).grade, "F");
    }

    #[test]
    fn rounding_does_not_promote() {
        // 94.6% reports as 95 but stays an A
        let grade = ManagerGrade::from_counts(94.6, 100);
        assert_eq!(grade.percentage, 95);
        assert_eq!(grade.grade, "A");
    }

    #[test]
    fn half_credit_grades() {
        let grade = ManagerGrade::from_counts(3.5, 7);
        assert_eq!(grade.percentage, 50);
        assert_eq!(grade.grade, "F");
        assert_eq!(grade.description, "Needs improvement");
    }
}
