//! # vais-dashboard
//!
//! Campaign list views for the VAIS dashboard. All data is in memory; the
//! table state is a [`CampaignQuery`] applied to a slice of [`Campaign`]s.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod campaign;
pub mod error;
mod proptests;
pub mod query;
pub mod stats;

pub use campaign::{Campaign, CampaignKind, CampaignStatus, mock_campaigns};
pub use error::{Error, Result};
pub use query::{CampaignQuery, Page, SortDirection, SortField};
pub use stats::CampaignStats;
