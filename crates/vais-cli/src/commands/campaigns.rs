use std::io::Write;

use vais_dashboard::{Campaign, CampaignQuery, CampaignStats, CampaignStatus, mock_campaigns};

use crate::cli::CampaignsArgs;

/// Query built from the arguments.
pub fn build_query(args: &CampaignsArgs) -> CampaignQuery {
    let mut query = CampaignQuery::new()
        .sort(args.sort, args.direction)
        .page(args.page)
        .page_size(args.page_size);
    if let Some(search) = &args.search {
        query = query.search(search.as_str());
    }
    if let Some(status) = args.status {
        query = query.status(status);
    }
    query
}

fn write_row(campaign: &Campaign, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(
        out,
        "{:<32} {:<10} {:<8} {:>6} {:>6.1}% {:>9}",
        campaign.name,
        campaign.status.as_str(),
        campaign.kind.as_str(),
        campaign.leads,
        campaign.conversion_rate,
        campaign.spent
    )
}

/// `vais campaigns`
pub fn run_campaigns(args: &CampaignsArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let campaigns = mock_campaigns();
    let page = build_query(args).run(&campaigns);

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&page)?)?;
    } else {
        writeln!(
            out,
            "{:<32} {:<10} {:<8} {:>6} {:>7} {:>9}",
            "Name", "Status", "Type", "Leads", "Conv.", "Spent"
        )?;
        for campaign in &page.items {
            write_row(campaign, out)?;
        }
        if page.items.is_empty() {
            writeln!(out, "No campaigns match.")?;
        }
        writeln!(
            out,
            "Page {} of {} ({} campaigns)",
            page.page, page.total_pages, page.total_items
        )?;
    }

    if args.stats {
        let stats = CampaignStats::from_campaigns(&campaigns);
        writeln!(out, "Total campaigns: {}", stats.total)?;
        for status in CampaignStatus::ALL {
            writeln!(out, "  {:<10} {}", status.as_str(), stats.count(status))?;
        }
        writeln!(out, "Total leads: {}", stats.total_leads)?;
        writeln!(out, "Average conversion: {:.1}%", stats.average_conversion_rate)?;
        writeln!(out, "Remaining budget: {}", stats.remaining_budget())?;
    }
    Ok(())
}
