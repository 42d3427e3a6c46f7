//! Campaign rows and the built-in mock dataset.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Error;

/// Lifecycle state of a campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CampaignStatus {
    /// Running.
    Active,
    /// Temporarily stopped.
    Paused,
    /// Finished.
    Completed,
    /// Not yet launched.
    Draft,
    /// Launch date set.
    Scheduled,
}

impl CampaignStatus {
    /// Every status, in display order.
    pub const ALL: [CampaignStatus; 5] = [
        CampaignStatus::Active,
        CampaignStatus::Paused,
        CampaignStatus::Completed,
        CampaignStatus::Draft,
        CampaignStatus::Scheduled,
    ];

    /// Display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Paused => "Paused",
            Self::Completed => "Completed",
            Self::Draft => "Draft",
            Self::Scheduled => "Scheduled",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CampaignStatus {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::invalid("status", s))
    }
}

/// Campaign channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CampaignKind {
    /// Email sequence.
    Email,
    /// Account-based marketing.
    Abm,
    /// Intent-data driven outreach.
    Intent,
    /// Webinar promotion.
    Webinar,
    /// Content syndication.
    Content,
}

impl CampaignKind {
    /// Display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Abm => "ABM",
            Self::Intent => "Intent",
            Self::Webinar => "Webinar",
            Self::Content => "Content",
        }
    }
}

impl fmt::Display for CampaignKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A row of the campaigns table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    /// Row id.
    pub id: u32,
    /// Campaign name.
    pub name: String,
    /// Channel.
    pub kind: CampaignKind,
    /// Lifecycle state.
    pub status: CampaignStatus,
    /// Creation date.
    pub created_at: NaiveDate,
    /// Leads generated.
    pub leads: u32,
    /// Lead-to-opportunity rate, percent.
    pub conversion_rate: f64,
    /// Budget in whole dollars.
    pub budget: u64,
    /// Spend to date in whole dollars.
    pub spent: u64,
}

impl Campaign {
    /// Share of the budget already spent, `0.0..=1.0` unless overspent.
    pub fn spend_ratio(&self) -> f64 {
        if self.budget == 0 {
            0.0
        } else {
            self.spent as f64 / self.budget as f64
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn row(
    id: u32,
    name: &str,
    kind: CampaignKind,
    status: CampaignStatus,
    created: (i32, u32, u32),
    leads: u32,
    conversion_rate: f64,
    budget: u64,
    spent: u64,
) -> Campaign {
    Campaign {
        id,
        name: name.to_string(),
        kind,
        status,
        created_at: NaiveDate::from_ymd_opt(created.0, created.1, created.2).unwrap_or_default(),
        leads,
        conversion_rate,
        budget,
        spent,
    }
}

/// The dataset shown on the dashboard.
pub fn mock_campaigns() -> Vec<Campaign> {
    use CampaignKind::*;
    use CampaignStatus::*;

    vec![
        row(1, "Q4 Enterprise ABM Push", Abm, Active, (2024, 10, 1), 1_245, 12.4, 50_000, 32_500),
        row(2, "Healthcare Marketing Push", Intent, Active, (2024, 9, 18), 842, 9.8, 30_000, 18_750),
        row(3, "Fintech Intent Surge", Intent, Paused, (2024, 8, 27), 613, 7.2, 25_000, 11_200),
        row(4, "Manufacturing Decision Makers", Abm, Completed, (2024, 6, 3), 1_502, 14.1, 40_000, 39_800),
        row(5, "SaaS Webinar Series", Webinar, Completed, (2024, 5, 14), 956, 11.3, 15_000, 14_950),
        row(6, "Retail Expansion Outreach", Email, Draft, (2024, 10, 9), 0, 0.0, 12_000, 0),
        row(7, "EdTech Lead Nurture", Email, Active, (2024, 7, 22), 388, 6.5, 8_000, 4_100),
        row(8, "Cybersecurity Buyers Q3", Intent, Completed, (2024, 7, 1), 1_120, 13.6, 35_000, 34_200),
        row(9, "Logistics Re-engagement", Email, Paused, (2024, 4, 30), 274, 4.9, 6_000, 3_300),
        row(10, "Cloud Migration Accounts", Abm, Scheduled, (2024, 10, 14), 0, 0.0, 45_000, 0),
        row(11, "Product Launch Teaser", Content, Draft, (2024, 10, 11), 0, 0.0, 10_000, 0),
        row(12, "Partner Co-marketing Blitz", Content, Active, (2024, 9, 2), 531, 8.7, 18_000, 9_600),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_ids_are_unique() {
        let campaigns = mock_campaigns();
        let mut ids: Vec<u32> = campaigns.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), campaigns.len());
    }

    #[test]
    fn test_mock_dates_are_valid() {
        let epoch = NaiveDate::default();
        assert!(mock_campaigns().iter().all(|c| c.created_at != epoch));
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(
            "completed".parse::<CampaignStatus>().unwrap(),
            CampaignStatus::Completed
        );
        assert!("archived".parse::<CampaignStatus>().is_err());
    }

    #[test]
    fn test_spend_ratio() {
        let campaigns = mock_campaigns();
        assert!((campaigns[0].spend_ratio() - 0.65).abs() < 1e-9);
        assert_eq!(campaigns[5].spend_ratio(), 0.0);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(&mock_campaigns()[1]).unwrap();
        assert_eq!(json["name"], "Healthcare Marketing Push");
        assert_eq!(json["createdAt"], "2024-09-18");
        assert_eq!(json["conversionRate"], 9.8);
    }
}
