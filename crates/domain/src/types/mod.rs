//! Domain types and models

pub mod clipboard;
pub mod context;
pub mod date_range;
pub mod sla;

pub use clipboard::{
    CopyResult, CopyStrategy, FieldId, Notification, NotificationLevel, SelectionMode,
};
pub use context::{GenericMonthVariant, ReportingContext};
pub use date_range::DateRange;
pub use sla::{
    BatteryCategories, BatteryCategory, BatteryCategoryKey, SiteSlaEntry, SlaBelowTargetPayload,
    StatusSp,
};
