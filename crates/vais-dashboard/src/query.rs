//! Search, status filter, sort and pagination over campaign rows.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::campaign::{Campaign, CampaignStatus};
use crate::error::Error;

/// Column to sort by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    /// Campaign name, case-insensitive.
    Name,
    /// Status name.
    Status,
    /// Creation date.
    #[default]
    CreatedAt,
    /// Leads generated.
    Leads,
    /// Conversion rate.
    ConversionRate,
    /// Budget.
    Budget,
    /// Spend to date.
    Spent,
}

impl SortField {
    const NAMES: [(&'static str, SortField); 7] = [
        ("name", SortField::Name),
        ("status", SortField::Status),
        ("created", SortField::CreatedAt),
        ("leads", SortField::Leads),
        ("conversion", SortField::ConversionRate),
        ("budget", SortField::Budget),
        ("spent", SortField::Spent),
    ];

    fn compare(&self, a: &Campaign, b: &Campaign) -> Ordering {
        match self {
            Self::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            Self::Status => a.status.as_str().cmp(b.status.as_str()),
            Self::CreatedAt => a.created_at.cmp(&b.created_at),
            Self::Leads => a.leads.cmp(&b.leads),
            Self::ConversionRate => a.conversion_rate.total_cmp(&b.conversion_rate),
            Self::Budget => a.budget.cmp(&b.budget),
            Self::Spent => a.spent.cmp(&b.spent),
        }
    }
}

impl std::str::FromStr for SortField {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::NAMES
            .into_iter()
            .find(|(name, _)| *name == wanted)
            .map(|(_, field)| field)
            .ok_or_else(|| Error::invalid("sort field", s))
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    Asc,
    /// Largest first.
    #[default]
    Desc,
}

impl std::str::FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(Error::invalid("sort direction", s)),
        }
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Rows on this page.
    pub items: Vec<T>,
    /// 1-based page number actually served.
    pub page: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Rows matching the filters across all pages.
    pub total_items: usize,
    /// Number of pages, at least 1.
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Whether a later page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether an earlier page exists.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// Campaign table state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CampaignQuery {
    /// Case-insensitive substring of the name.
    pub search: Option<String>,
    /// Exact status.
    pub status: Option<CampaignStatus>,
    /// Sort column.
    pub sort_by: SortField,
    /// Sort direction.
    pub direction: SortDirection,
    /// Requested 1-based page.
    pub page: usize,
    /// Rows per page.
    pub page_size: usize,
}

impl Default for CampaignQuery {
    fn default() -> Self {
        Self {
            search: None,
            status: None,
            sort_by: SortField::CreatedAt,
            direction: SortDirection::Desc,
            page: 1,
            page_size: 10,
        }
    }
}

impl CampaignQuery {
    /// Newest first, ten per page, no filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by name. Blank input clears the filter.
    pub fn search(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.search = (!text.trim().is_empty()).then_some(text);
        self
    }

    /// Filter by status.
    pub fn status(mut self, status: CampaignStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sort order.
    pub fn sort(mut self, field: SortField, direction: SortDirection) -> Self {
        self.sort_by = field;
        self.direction = direction;
        self
    }

    /// Requested page.
    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Rows per page.
    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = size;
        self
    }

    /// Whether `campaign` passes the search and status filters.
    pub fn matches(&self, campaign: &Campaign) -> bool {
        let status_ok = self.status.is_none_or(|s| s == campaign.status);
        let search_ok = self.search.as_deref().is_none_or(|needle| {
            campaign
                .name
                .to_lowercase()
                .contains(&needle.trim().to_lowercase())
        });
        status_ok && search_ok
    }

    /// Filter, sort and paginate `campaigns`.
    ///
    /// The sort is stable. `page` is clamped to `1..=total_pages`; a zero
    /// page size is treated as one.
    pub fn run(&self, campaigns: &[Campaign]) -> Page<Campaign> {
        let mut rows: Vec<&Campaign> = campaigns.iter().filter(|c| self.matches(c)).collect();
        rows.sort_by(|a, b| {
            let ord = self.sort_by.compare(a, b);
            match self.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });

        let page_size = self.page_size.max(1);
        let total_items = rows.len();
        let total_pages = total_items.div_ceil(page_size).max(1);
        let page = self.page.clamp(1, total_pages);
        let items: Vec<Campaign> = rows
            .into_iter()
            .skip((page - 1) * page_size)
            .take(page_size)
            .cloned()
            .collect();

        tracing::debug!(
            search = self.search.as_deref().unwrap_or(""),
            status = ?self.status,
            total_items,
            page,
            "campaign query"
        );

        Page {
            items,
            page,
            page_size,
            total_items,
            total_pages,
        }
    }
}
