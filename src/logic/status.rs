//! Composite render-only row status classification.

use chrono::NaiveDate;

use crate::logic::safety::is_high_risk;
use crate::state::PantryItem;
use crate::util::{parse_expiry, parse_quantity};

/// The single visual slot shared by expiry and stock-level signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotTag {
    /// Expiry date is today or in the past.
    Expired,
    /// Expiry date is within three days.
    ExpiringSoon,
    /// Quantity at or below 1.
    CriticalStock,
    /// Quantity at or below 3.
    LowStock,
}

impl SlotTag {
    /// Stable class-style name for the tag.
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Expired => "expired",
            Self::ExpiringSoon => "expiring-soon",
            Self::CriticalStock => "critical-stock",
            Self::LowStock => "low-stock",
        }
    }
}

/// Derived status for one table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowStatus {
    /// The expiry/stock slot, when any signal fired.
    pub slot: Option<SlotTag>,
    /// Additive safety flag: set for CCP or high-risk rows.
    pub ccp_row: bool,
}

impl RowStatus {
    /// Space-separated class set, e.g. `"critical-stock ccp-row"`.
    #[must_use]
    pub fn classes(&self) -> String {
        let mut out = String::new();
        if let Some(slot) = self.slot {
            out.push_str(slot.as_class());
        }
        if self.ccp_row {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str("ccp-row");
        }
        out
    }

    /// Whether no signal fired at all.
    #[must_use]
    pub const fn is_normal(&self) -> bool {
        self.slot.is_none() && !self.ccp_row
    }
}

/// Classify `item` relative to `today`.
///
/// Slot precedence mirrors the long-standing observed behavior: the expiry
/// tag is computed first, then a quantity of ≤ 1 overwrites the slot with
/// critical-stock, and ≤ 3 claims the slot only when it is still empty. The
/// safety flag is independent and purely additive.
#[must_use]
pub fn classify(item: &PantryItem, today: NaiveDate) -> RowStatus {
    let mut slot = parse_expiry(&item.expiry).and_then(|expiry| {
        if expiry <= today {
            Some(SlotTag::Expired)
        } else if (expiry - today).num_days() <= 3 {
            Some(SlotTag::ExpiringSoon)
        } else {
            None
        }
    });

    let qty = parse_quantity(&item.quantity);
    if qty <= 1.0 {
        slot = Some(SlotTag::CriticalStock);
    } else if qty <= 3.0 && slot.is_none() {
        slot = Some(SlotTag::LowStock);
    }

    RowStatus {
        slot,
        ccp_row: item.is_ccp || is_high_risk(item),
    }
}
