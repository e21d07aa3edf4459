//! Top-level product categories.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of storefront departments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Men,
    Women,
    Children,
    Accessories,
}

impl Category {
    /// All categories in navigation order.
    pub const ALL: [Category; 4] = [
        Category::Men,
        Category::Women,
        Category::Children,
        Category::Accessories,
    ];

    /// URL slug (e.g. "men").
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Men => "men",
            Category::Women => "women",
            Category::Children => "children",
            Category::Accessories => "accessories",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Men => "Men",
            Category::Women => "Women",
            Category::Children => "Children",
            Category::Accessories => "Accessories",
        }
    }

    pub fn from_slug(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "men" => Some(Category::Men),
            "women" => Some(Category::Women),
            "children" => Some(Category::Children),
            "accessories" => Some(Category::Accessories),
            _ => None,
        }
    }

    /// Resolve a shop route segment. `"all"` means no restriction.
    pub fn from_route(segment: &str) -> Result<Option<Self>, CommerceError> {
        if segment.eq_ignore_ascii_case("all") {
            return Ok(None);
        }
        Self::from_slug(segment)
            .map(Some)
            .ok_or_else(|| CommerceError::UnknownCategory(segment.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slug(s).ok_or_else(|| CommerceError::UnknownCategory(s.to_string()))
    }
}
