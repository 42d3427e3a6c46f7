//! Totals for the dashboard stat cards.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::campaign::{Campaign, CampaignStatus};

/// Summary of a set of campaigns.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignStats {
    /// Number of campaigns.
    pub total: usize,
    /// Campaigns per status; statuses with no campaigns are omitted.
    pub by_status: BTreeMap<CampaignStatus, usize>,
    /// Sum of leads.
    pub total_leads: u64,
    /// Mean conversion rate over campaigns that produced leads, percent.
    pub average_conversion_rate: f64,
    /// Sum of budgets.
    pub total_budget: u64,
    /// Sum of spend.
    pub total_spent: u64,
}

impl CampaignStats {
    /// Summarise `campaigns`.
    pub fn from_campaigns(campaigns: &[Campaign]) -> Self {
        let mut by_status = BTreeMap::new();
        for campaign in campaigns {
            *by_status.entry(campaign.status).or_insert(0) += 1;
        }

        let converting: Vec<f64> = campaigns
            .iter()
            .filter(|c| c.leads > 0)
            .map(|c| c.conversion_rate)
            .collect();
        let average_conversion_rate = if converting.is_empty() {
            0.0
        } else {
            converting.iter().sum::<f64>() / converting.len() as f64
        };

        Self {
            total: campaigns.len(),
            by_status,
            total_leads: campaigns.iter().map(|c| u64::from(c.leads)).sum(),
            average_conversion_rate,
            total_budget: campaigns.iter().map(|c| c.budget).sum(),
            total_spent: campaigns.iter().map(|c| c.spent).sum(),
        }
    }

    /// Campaigns in `status`.
    pub fn count(&self, status: CampaignStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }

    /// Budget not yet spent.
    pub fn remaining_budget(&self) -> u64 {
        self.total_budget.saturating_sub(self.total_spent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::mock_campaigns;

    #[test]
    fn test_mock_stats() {
        let stats = CampaignStats::from_campaigns(&mock_campaigns());
        assert_eq!(stats.total, 12);
        assert_eq!(stats.count(CampaignStatus::Active), 4);
        assert_eq!(stats.count(CampaignStatus::Completed), 3);
        assert_eq!(stats.count(CampaignStatus::Paused), 2);
        assert_eq!(stats.count(CampaignStatus::Draft), 2);
        assert_eq!(stats.count(CampaignStatus::Scheduled), 1);
        assert_eq!(stats.total_leads, 7_471);
        assert!(stats.remaining_budget() < stats.total_budget);
    }

    #[test]
    fn test_average_ignores_campaigns_without_leads() {
        let stats = CampaignStats::from_campaigns(&mock_campaigns());
        let expected = (12.4 + 9.8 + 7.2 + 14.1 + 11.3 + 6.5 + 13.6 + 4.9 + 8.7) / 9.0;
        assert!((stats.average_conversion_rate - expected).abs() < 1e-9);
    }

    #[test]
    fn test_empty_input() {
        let stats = CampaignStats::from_campaigns(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_conversion_rate, 0.0);
        assert_eq!(stats.count(CampaignStatus::Active), 0);
    }
}
