//! Sites-below-SLA-target payload returned by the report endpoint.

use serde::{Deserialize, Deserializer, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_domain_enum_conversions;

/* -------------------------------------------------------------------------- */
/* Site entries */
/* -------------------------------------------------------------------------- */

/// SP (service penalty) classification of a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum StatusSp {
    #[serde(rename = "Potensi SP")]
    PotensiSp,
    #[serde(rename = "Clear SP")]
    ClearSp,
}

impl StatusSp {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::PotensiSp => crate::constants::STATUS_POTENSI_SP,
            Self::ClearSp => crate::constants::STATUS_CLEAR_SP,
        }
    }
}

/// One site that missed the SLA target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct SiteSlaEntry {
    /// Site identifier
    pub site: String,

    /// Availability percentage, 0-100
    pub sla: f64,

    /// Human-readable downtime, empty when unknown
    #[serde(default, deserialize_with = "null_as_default")]
    pub downtime: String,

    /// Problem description, if one was recorded
    #[serde(default)]
    pub problem: Option<String>,

    #[serde(rename = "statusSP")]
    pub status_sp: StatusSp,
}

/* -------------------------------------------------------------------------- */
/* Battery categories */
/* -------------------------------------------------------------------------- */

/// The three fixed battery categories, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BatteryCategoryKey {
    Talis5,
    Mix,
    Jspro,
}

impl_domain_enum_conversions!(BatteryCategoryKey {
    Talis5 => "talis5",
    Mix => "mix",
    Jspro => "jspro",
});

impl BatteryCategoryKey {
    pub const ORDERED: [Self; 3] = [Self::Talis5, Self::Mix, Self::Jspro];
}

/// Sites of one battery category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct BatteryCategory {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub total_sites: u32,
    #[serde(default)]
    pub sites: Vec<SiteSlaEntry>,
}

impl BatteryCategory {
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Split the sites into (Potensi SP, Clear SP), keeping payload order
    /// inside each half.
    pub fn partition_by_status(&self) -> (Vec<&SiteSlaEntry>, Vec<&SiteSlaEntry>) {
        self.sites.iter().partition(|entry| entry.status_sp == StatusSp::PotensiSp)
    }
}

/// Category breakdown keyed by the fixed category names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct BatteryCategories {
    #[serde(default)]
    pub talis5: BatteryCategory,
    #[serde(default)]
    pub mix: BatteryCategory,
    #[serde(default)]
    pub jspro: BatteryCategory,
}

impl BatteryCategories {
    pub fn get(&self, key: BatteryCategoryKey) -> &BatteryCategory {
        match key {
            BatteryCategoryKey::Talis5 => &self.talis5,
            BatteryCategoryKey::Mix => &self.mix,
            BatteryCategoryKey::Jspro => &self.jspro,
        }
    }

    /// Categories in fixed report order (talis5, mix, jspro).
    pub fn iter(&self) -> impl Iterator<Item = (BatteryCategoryKey, &BatteryCategory)> + '_ {
        BatteryCategoryKey::ORDERED.into_iter().map(move |key| (key, self.get(key)))
    }

    /// Every site entry across categories, in report order.
    pub fn entries(&self) -> impl Iterator<Item = &SiteSlaEntry> + '_ {
        self.iter().flat_map(|(_, category)| category.sites.iter())
    }
}

/* -------------------------------------------------------------------------- */
/* Payload */
/* -------------------------------------------------------------------------- */

/// Response body of the "SLA below target" report endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct SlaBelowTargetPayload {
    /// Free-text header; carries the report date as `YYYY-MM-DD`
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub total_sites: u32,
    #[serde(default)]
    pub battery_categories: BatteryCategories,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
