//! Onboarding answers.
//!
//! A flat record of optional answers persisted under
//! [`keys::ONBOARDING`](crate::keys::ONBOARDING). Partial updates merge over
//! the stored record; nothing has a default value.

use serde::{Deserialize, Serialize};
use vais_storage::{KeyValueStore, SharedStore, load_record, merge_record};

use crate::keys;
use crate::Result;

/// Placeholder shown for unanswered questions.
pub const UNSET: &str = "—";

macro_rules! answer_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum $name {
            $(
                #[doc = $label]
                $variant,
            )+
        }

        impl $name {
            /// Every option, in display order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Human-readable label.
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

answer_enum! {
    /// What the user does.
    Role {
        MarketingLeader => "Marketing Leader",
        DemandGeneration => "Demand Generation",
        SalesLeader => "Sales Leader",
        SalesRepresentative => "Sales Representative",
        Founder => "Founder / Executive",
        Other => "Other",
    }
}

answer_enum! {
    /// What the user wants VAIS for.
    UseCase {
        AccountBasedMarketing => "Account-Based Marketing",
        LeadGeneration => "Lead Generation",
        IntentData => "Buyer Intent Research",
        MarketExpansion => "Market Expansion",
        Other => "Other",
    }
}

answer_enum! {
    /// Familiarity with intent-data tooling.
    Experience {
        Beginner => "Beginner",
        Intermediate => "Intermediate",
        Advanced => "Advanced",
    }
}

answer_enum! {
    /// Industry the user sells into.
    TargetIndustry {
        Technology => "Technology",
        Healthcare => "Healthcare",
        FinancialServices => "Financial Services",
        Manufacturing => "Manufacturing",
        Retail => "Retail",
        Education => "Education",
        Other => "Other",
    }
}

answer_enum! {
    /// What the user sells.
    ProductCategory {
        Software => "Software / SaaS",
        Hardware => "Hardware",
        ProfessionalServices => "Professional Services",
        Consulting => "Consulting",
        Other => "Other",
    }
}

/// Onboarding answers; every field is optional.
///
/// Also used as the patch type: unset fields are skipped when serialized, so
/// they never clear an existing answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OnboardingRecord {
    /// Role question.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Use-case question.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_case: Option<UseCase>,
    /// Experience question.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<Experience>,
    /// Target industry question.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_industry: Option<TargetIndustry>,
    /// Product category question.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_category: Option<ProductCategory>,
}

impl OnboardingRecord {
    /// `(question, answer)` rows with [`UNSET`] for unanswered questions.
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        fn show<T: std::fmt::Display>(value: Option<T>) -> String {
            value.map_or_else(|| UNSET.to_string(), |v| v.to_string())
        }

        vec![
            ("Role", show(self.role)),
            ("Use case", show(self.use_case)),
            ("Experience", show(self.experience)),
            ("Target industry", show(self.target_industry)),
            ("Product category", show(self.product_category)),
        ]
    }

    /// Number of answered questions.
    pub fn answered(&self) -> usize {
        [
            self.role.is_some(),
            self.use_case.is_some(),
            self.experience.is_some(),
            self.target_industry.is_some(),
            self.product_category.is_some(),
        ]
        .into_iter()
        .filter(|answered| *answered)
        .count()
    }

    /// Whether every question has an answer.
    pub fn is_complete(&self) -> bool {
        self.answered() == 5
    }
}

/// Reads and merges the onboarding record.
#[derive(Clone)]
pub struct OnboardingStore {
    store: SharedStore,
}

impl OnboardingStore {
    /// Create a store over `store`.
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Load the record; missing data yields an empty record.
    pub fn load(&self) -> Result<OnboardingRecord> {
        Ok(load_record(&self.store, keys::ONBOARDING)?.unwrap_or_default())
    }

    /// Load the record, logging and defaulting on corrupt data.
    pub fn get(&self) -> OnboardingRecord {
        self.load().unwrap_or_else(|e| {
            tracing::warn!(key = keys::ONBOARDING, error = %e, "unreadable onboarding record");
            OnboardingRecord::default()
        })
    }

    /// Merge `patch` over the stored record and return the result.
    pub fn save(&self, patch: &OnboardingRecord) -> Result<OnboardingRecord> {
        let merged: OnboardingRecord = merge_record(&self.store, keys::ONBOARDING, patch)?;
        tracing::debug!(answered = merged.answered(), "onboarding record saved");
        Ok(merged)
    }

    /// Remove the record.
    pub fn clear(&self) -> Result<()> {
        self.store.remove(keys::ONBOARDING)?;
        Ok(())
    }
}

impl std::fmt::Debug for OnboardingStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnboardingStore")
            .field("key", &keys::ONBOARDING)
            .finish()
    }
}
