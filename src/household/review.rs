//! Stored performance reviews, hand-written or generated.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{HouseholdData, HouseholdError, HouseholdResult, ValidationError};
use crate::reviews::{completed_titles_for_month, month_key, monthly_review, weekly_review, Species};
use crate::schedule::Period;
use crate::stats::aggregate_for_period;
use crate::util::{double_option, new_id, now_string, null_default};

/// Rating given to generated monthly audits.
const AUDIT_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default, deserialize_with = "null_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_default")]
    pub member_id: String,
    /// 1-5 stars
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default, deserialize_with = "null_default")]
    pub comment: String,
    #[serde(default, deserialize_with = "null_default")]
    pub is_monthly_audit: bool,
    /// `YYYY-MM` for monthly audits
    #[serde(default)]
    pub month_year: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    #[serde(default)]
    pub member_id: String,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub is_monthly_audit: bool,
    #[serde(default)]
    pub month_year: Option<String>,
}

/// Only rating and comment are editable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPatch {
    #[serde(default, deserialize_with = "double_option")]
    pub rating: Option<Option<u8>>,
    pub comment: Option<String>,
}

fn check_rating(rating: Option<u8>) -> Result<(), ValidationError> {
    match rating {
        Some(r) if !(1..=5).contains(&r) => Err(ValidationError::RatingOutOfRange(r)),
        _ => Ok(()),
    }
}

fn check_comment(comment: &str) -> Result<String, ValidationError> {
    let comment = comment.trim();
    if comment.is_empty() {
        return Err(ValidationError::EmptyComment);
    }
    Ok(comment.to_string())
}

impl HouseholdData {
    pub fn add_review(&mut self, new: NewReview) -> HouseholdResult<Review> {
        if !self.has_member(&new.member_id) {
            return Err(ValidationError::UnknownMember(new.member_id).into());
        }
        check_rating(new.rating)?;
        let review = Review {
            id: new_id(),
            member_id: new.member_id,
            rating: new.rating,
            comment: check_comment(&new.comment)?,
            is_monthly_audit: new.is_monthly_audit,
            month_year: new.month_year,
            created_at: now_string(),
            updated_at: None,
        };
        self.reviews.push(review.clone());
        Ok(review)
    }

    pub fn update_review(&mut self, id: &str, patch: ReviewPatch) -> HouseholdResult<Review> {
        let review = self
            .reviews
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| HouseholdError::review_not_found(id))?;

        if let Some(rating) = patch.rating {
            check_rating(rating)?;
            review.rating = rating;
        }
        if let Some(comment) = patch.comment {
            review.comment = check_comment(&comment)?;
        }
        review.updated_at = Some(now_string());
        Ok(review.clone())
    }

    pub fn remove_review(&mut self, id: &str) -> HouseholdResult<Review> {
        let index = self
            .reviews
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| HouseholdError::review_not_found(id))?;
        Ok(self.reviews.remove(index))
    }

    /// Delete every review. Returns how many were removed.
    pub fn clear_reviews(&mut self) -> usize {
        let count = self.reviews.len();
        self.reviews.clear();
        tracing::info!(count, "Cleared all reviews");
        count
    }

    /// Generate and store a review of `member_id`'s completions in `week`.
    pub fn add_weekly_review<R: Rng + ?Sized>(
        &mut self,
        member_id: &str,
        week: &Period,
        rng: &mut R,
    ) -> HouseholdResult<Review> {
        let member = self
            .member(member_id)
            .ok_or_else(|| HouseholdError::member_not_found(member_id))?;
        let totals = aggregate_for_period(&self.chores, &self.team_members, week);
        let comment = weekly_review(
            &member.name,
            Species::from_label(&member.species),
            totals.completed(member_id),
            rng,
        );
        let review = Review {
            id: new_id(),
            member_id: member.id.clone(),
            rating: None,
            comment,
            is_monthly_audit: false,
            month_year: None,
            created_at: now_string(),
            updated_at: None,
        };
        self.reviews.push(review.clone());
        Ok(review)
    }

    /// Write a monthly audit for every member who has none for `year`/`month`.
    ///
    /// Running it again for the same month adds nothing.
    pub fn generate_monthly_audits<R: Rng + ?Sized>(
        &mut self,
        year: i32,
        month: u32,
        rng: &mut R,
    ) -> Vec<Review> {
        let key = month_key(year, month);
        let mut created = Vec::new();

        for member in &self.team_members {
            let audited = self.reviews.iter().any(|r| {
                r.member_id == member.id && r.is_monthly_audit && r.month_year.as_deref() == Some(key.as_str())
            });
            if audited {
                continue;
            }
            let titles = completed_titles_for_month(&self.chores, &member.id, year, month);
            let comment = monthly_review(&member.name, Species::from_label(&member.species), &titles, rng);
            created.push(Review {
                id: new_id(),
                member_id: member.id.clone(),
                rating: Some(AUDIT_RATING),
                comment,
                is_monthly_audit: true,
                month_year: Some(key.clone()),
                created_at: now_string(),
                updated_at: None,
            });
        }

        if !created.is_empty() {
            tracing::info!(month = %key, count = created.len(), "Generated monthly audits");
        }
        self.reviews.extend(created.iter().cloned());
        created
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::household::{Chore, Member};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn household() -> HouseholdData {
        let mut data = HouseholdData::default();
        data.team_members.push(Member::new("m1", "Rex", "dog"));
        data.team_members.push(Member::new("m2", "Tom", "cat"));
        data
    }

    fn review_for(member: &str, rating: Option<u8>) -> NewReview {
        NewReview {
            member_id: member.to_string(),
            rating,
            comment: "Good boy".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn add_review_validates_input() {
        let mut data = household();
        assert!(data.add_review(review_for("m1", Some(5))).is_ok());
        assert!(data.add_review(review_for("m1", None)).is_ok());
        assert_eq!(
            data.add_review(review_for("m1", Some(6))),
            Err(HouseholdError::Invalid(ValidationError::RatingOutOfRange(6)))
        );
        assert_eq!(
            data.add_review(review_for("ghost", Some(3))),
            Err(HouseholdError::Invalid(ValidationError::UnknownMember("ghost".into())))
        );
        let mut blank = review_for("m1", Some(3));
        blank.comment = "   ".into();
        assert_eq!(
            data.add_review(blank),
            Err(HouseholdError::Invalid(ValidationError::EmptyComment))
        );
        assert_eq!(data.reviews.len(), 2);
    }

    #[test]
    fn update_review_touches_rating_and_comment_only() {
        let mut data = household();
        let review = data.add_review(review_for("m1", Some(4))).unwrap();

        let patch: ReviewPatch = serde_json::from_str(r#"{"rating": null}"#).unwrap();
        let updated = data.update_review(&review.id, patch).unwrap();
        assert_eq!(updated.rating, None);
        assert_eq!(updated.comment, "Good boy");
        assert!(updated.updated_at.is_some());

        let patch: ReviewPatch = serde_json::from_str(r#"{"comment": "Very good boy"}"#).unwrap();
        let updated = data.update_review(&review.id, patch).unwrap();
        assert_eq!(updated.comment, "Very good boy");
        assert_eq!(updated.member_id, "m1");
    }

    #[test]
    fn remove_and_clear_reviews() {
        let mut data = household();
        let first = data.add_review(review_for("m1", Some(4))).unwrap();
        data.add_review(review_for("m2", Some(2))).unwrap();
        data.add_review(review_for("m2", Some(3))).unwrap();

        data.remove_review(&first.id).unwrap();
        assert!(data.remove_review(&first.id).is_err());
        assert_eq!(data.clear_reviews(), 2);
        assert!(data.reviews.is_empty());
    }

    #[test]
    fn weekly_review_reports_period_credit() {
        let mut data = household();
        data.chores.push(Chore {
            recurrence: "daily".into(),
            start_date: "2024-06-01".into(),
            assigned_to_id: Some("m1".into()),
            co_assignee_id: Some("m2".into()),
            is_team_task: true,
            completed_dates: vec!["2024-06-03".into(), "2024-06-04".into(), "2024-06-20".into()],
            ..Chore::fixture("c1", "Guard sofa")
        });
        let week = Period::week_containing(chrono::NaiveDate::from_ymd_opt(2024, 6, 5).unwrap()).unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        let review = data.add_weekly_review("m2", &week, &mut rng).unwrap();
        assert!(review.comment.contains("Tom"), "{}", review.comment);
        assert!(review.comment.ends_with("(1 tasks verified)."), "{}", review.comment);
        assert!(!review.is_monthly_audit);
        assert_eq!(data.reviews.len(), 1);

        assert_eq!(
            data.add_weekly_review("ghost", &week, &mut rng).unwrap_err(),
            HouseholdError::member_not_found("ghost")
        );
    }

    #[test]
    fn monthly_audits_are_generated_once_per_member() {
        let mut data = household();
        data.chores.push(Chore {
            assigned_to_id: Some("m1".into()),
            completed_dates: vec!["2024-06-12".into()],
            ..Chore::fixture("c1", "Walk")
        });
        let mut rng = StdRng::seed_from_u64(3);

        let created = data.generate_monthly_audits(2024, 6, &mut rng);
        assert_eq!(created.len(), 2);
        let rex = created.iter().find(|r| r.member_id == "m1").unwrap();
        assert!(rex.is_monthly_audit);
        assert_eq!(rex.month_year.as_deref(), Some("2024-06"));
        assert_eq!(rex.rating, Some(5));
        assert!(rex.comment.contains("\"Walk\""), "{}", rex.comment);

        assert!(data.generate_monthly_audits(2024, 6, &mut rng).is_empty());
        assert_eq!(data.generate_monthly_audits(2024, 7, &mut rng).len(), 2);
        assert_eq!(data.reviews.len(), 4);
    }
}
