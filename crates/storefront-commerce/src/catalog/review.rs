//! Customer reviews.

use crate::ids::{ProductId, ReviewId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A customer review shown on a product page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: ReviewId,
    /// Product the review belongs to.
    pub product_id: ProductId,
    pub user_name: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    pub comment: String,
    pub date: NaiveDate,
    /// Reviewer bought the product.
    pub verified: bool,
}

/// Aggregate of a product's reviews.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct ReviewSummary {
    pub count: usize,
    /// Mean star rating, 0 when there are no reviews.
    pub average: f64,
    /// Number of reviews per star, index 0 is one star.
    pub histogram: [usize; 5],
}

impl ReviewSummary {
    pub fn from_reviews<'a>(reviews: impl IntoIterator<Item = &'a Review>) -> Self {
        let mut summary = ReviewSummary::default();
        let mut total: u64 = 0;
        for review in reviews {
            let stars = review.rating.clamp(1, 5);
            summary.histogram[usize::from(stars - 1)] += 1;
            summary.count += 1;
            total += u64::from(stars);
        }
        if summary.count > 0 {
            summary.average = total as f64 / summary.count as f64;
        }
        summary
    }

    /// Share of reviews with the given star count, as a percentage.
    pub fn percent_with(&self, stars: u8) -> f64 {
        if self.count == 0 || !(1..=5).contains(&stars) {
            return 0.0;
        }
        self.histogram[usize::from(stars - 1)] as f64 / self.count as f64 * 100.0
    }
}
