//! Serializable view models for every dashboard panel
//!
//! A frontend paints these directly. Amounts stay as [`Decimal`] and are
//! serialized as strings so no precision is lost on the way out.

use novaearn_domain::{
    AdvanceEntry, ApprovalKind, Brand, Deal, DealStatus, MonthlyTrendPoint, PayoutPeriod,
    PayoutStatus, Referral, ReferralPayout, ReferralStatus, Role, RoleClass, Stage,
    TimelineEvent, View,
};
use rust_decimal::Decimal;
use serde::Serialize;
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::earnings::aggregator::{KilowattAverage, StageCount};
use crate::earnings::referrals::{ReferralStep, ReferralSummary};
use crate::earnings::stepper::StageStep;
use crate::navigation::router::MenuItem;

/// Colour intent for pills and stat cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Good,
    Warn,
    Bad,
    Info,
    Neutral,
}

impl Tone {
    /// Active deals read as good, held deals as a warning, closed as bad.
    pub const fn for_deal_status(status: DealStatus) -> Self {
        match status {
            DealStatus::Active => Self::Good,
            DealStatus::OnHold => Self::Warn,
            DealStatus::Closed => Self::Bad,
        }
    }

    /// Paid is settled; pending still needs attention.
    pub const fn for_payout_status(status: PayoutStatus) -> Self {
        match status {
            PayoutStatus::Paid => Self::Good,
            PayoutStatus::Pending => Self::Warn,
        }
    }

    /// Only the install and qualified steps are highlighted.
    pub const fn for_referral_status(status: ReferralStatus) -> Self {
        match status {
            ReferralStatus::Install => Self::Good,
            ReferralStatus::Qualified => Self::Info,
            ReferralStatus::Submitted | ReferralStatus::Appt | ReferralStatus::Paid => {
                Self::Neutral
            }
        }
    }

    /// Chargebacks are the only approval that claws money back.
    pub const fn for_approval(kind: ApprovalKind) -> Self {
        match kind {
            ApprovalKind::AdjustmentPending => Self::Warn,
            ApprovalKind::ChargebackReview => Self::Bad,
            ApprovalKind::PlanVersionChange => Self::Info,
        }
    }

    /// `tone` when `amount` is above zero, neutral otherwise.
    pub fn when_positive(amount: Decimal, tone: Self) -> Self {
        if amount > Decimal::ZERO {
            tone
        } else {
            Self::Neutral
        }
    }
}

/// Labelled pill
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Badge {
    pub label: String,
    pub tone: Tone,
}

impl Badge {
    /// Pill with `label` painted in `tone`.
    pub fn new(label: impl Into<String>, tone: Tone) -> Self {
        Self { label: label.into(), tone }
    }
}

/// One line of the deals table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct DealRow {
    pub id: String,
    pub customer: String,
    pub location: String,
    pub stage: Stage,
    pub status: DealStatus,
    pub status_tone: Tone,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub locked: Decimal,
    /// Info when anything is locked, else neutral
    pub locked_tone: Tone,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub pending: Decimal,
    /// Warn when anything is pending, else neutral
    pub pending_tone: Tone,
    pub blocked: bool,
    /// Whether this row is the active deal
    pub selected: bool,
}

impl DealRow {
    /// Row for `deal`, marked selected when its id is `active_id`.
    pub fn from_deal(deal: &Deal, active_id: Option<&str>) -> Self {
        let locked = deal.commission_locked.unwrap_or(Decimal::ZERO);
        let pending = deal.commission_pending.unwrap_or(Decimal::ZERO);
        Self {
            id: deal.id.clone(),
            customer: deal.customer.clone(),
            location: deal.location(),
            stage: deal.stage,
            status: deal.status,
            status_tone: Tone::for_deal_status(deal.status),
            locked,
            locked_tone: Tone::when_positive(locked, Tone::Info),
            pending,
            pending_tone: Tone::when_positive(pending, Tone::Warn),
            blocked: deal.is_blocked(),
            selected: active_id == Some(deal.id.as_str()),
        }
    }
}

/// Headline commission figures for the brand in scope
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct CommissionTotals {
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub pending: Decimal,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub locked: Decimal,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub paid: Decimal,
    /// Rounded to whole currency units
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub contract_value: Decimal,
}

/// Commission overview for staff
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct DashboardPanel {
    pub totals: CommissionTotals,
    pub monthly_trend: Vec<MonthlyTrendPoint>,
    pub stage_mix: Vec<StageCount>,
    pub deals: Vec<DealRow>,
    pub stepper: Vec<StageStep>,
    pub timeline: Vec<TimelineEvent>,
}

/// Pay date card on the pipeline panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct NextPay {
    pub label: String,
    pub customer: String,
}

/// Detail card for the active deal
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct DealDetails {
    pub id: String,
    pub customer: String,
    pub status: DealStatus,
    pub status_tone: Tone,
    pub stage: Stage,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub contract_value: Decimal,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub adders: Decimal,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub pending: Decimal,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub locked: Decimal,
    pub blocks: Vec<String>,
}

impl DealDetails {
    pub fn from_deal(deal: &Deal) -> Self {
        Self {
            id: deal.id.clone(),
            customer: deal.customer.clone(),
            status: deal.status,
            status_tone: Tone::for_deal_status(deal.status),
            stage: deal.stage,
            contract_value: deal.contract_value.unwrap_or(Decimal::ZERO),
            adders: deal.adders,
            pending: deal.commission_pending.unwrap_or(Decimal::ZERO),
            locked: deal.commission_locked.unwrap_or(Decimal::ZERO),
            blocks: deal.blocks.clone(),
        }
    }
}

/// Deal pipeline with the active deal in detail
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct PipelinePanel {
    pub active_count: usize,
    pub blocked_count: usize,
    /// `None` when the brand has no deals
    pub next_pay: Option<NextPay>,
    pub average_kilowatts: KilowattAverage,
    /// One decimal place, or the placeholder
    pub average_kilowatts_label: String,
    pub deals: Vec<DealRow>,
    pub active_deal: Option<DealDetails>,
    pub stepper: Vec<StageStep>,
    pub timeline: Vec<TimelineEvent>,
}

/// One weekly payout period
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct PayoutRow {
    pub period: String,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub total: Decimal,
    pub status: PayoutStatus,
    pub tone: Tone,
}

impl From<&PayoutPeriod> for PayoutRow {
    fn from(period: &PayoutPeriod) -> Self {
        Self {
            period: period.period.clone(),
            total: period.total,
            status: period.status,
            tone: Tone::for_payout_status(period.status),
        }
    }
}

/// Weekly payout schedule for staff
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct PayoutSchedulePanel {
    pub periods: Vec<PayoutRow>,
    /// Kinds of line item a payout is made of
    pub line_items: Vec<Badge>,
}

/// Advance balance and movements
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct AdvancesPanel {
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub balance: Decimal,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub next_deduction: Decimal,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub ytd_issued: Decimal,
    pub history: Vec<AdvanceRow>,
}

/// One advance ledger movement
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct AdvanceRow {
    pub at: String,
    pub description: String,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub amount: Decimal,
    pub deduction: bool,
}

impl From<&AdvanceEntry> for AdvanceRow {
    fn from(entry: &AdvanceEntry) -> Self {
        Self {
            at: entry.at.clone(),
            description: entry.description.clone(),
            amount: entry.amount,
            deduction: entry.is_deduction(),
        }
    }
}

/// Items waiting for ops or admin sign-off
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ApprovalsPanel {
    pub queue: Vec<Badge>,
}

/// Referral row with its status pill
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ReferralRow {
    pub id: String,
    pub name: String,
    pub status: ReferralStatus,
    pub tone: Tone,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub earnings: Decimal,
    pub last_update: String,
}

impl From<&Referral> for ReferralRow {
    fn from(referral: &Referral) -> Self {
        Self {
            id: referral.id.clone(),
            name: referral.name.clone(),
            status: referral.status,
            tone: Tone::for_referral_status(referral.status),
            earnings: referral.earnings,
            last_update: referral.last_update.clone(),
        }
    }
}

/// Leaderboard entry with its 1-based rank
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct RankedRow {
    pub rank: usize,
    pub name: String,
    pub conversions: u32,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub earnings: Decimal,
}

/// Portal landing page for customers and partners
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct HomePanel {
    pub summary: ReferralSummary,
    pub referrals: Vec<ReferralRow>,
    pub leaderboard: Vec<RankedRow>,
    pub payout_rules: Vec<Badge>,
}

/// Referral row plus its five-step tracker
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ReferralProgress {
    #[serde(flatten)]
    pub referral: ReferralRow,
    pub steps: Vec<ReferralStep>,
}

/// Every referral with its progress tracker
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ReferralsPanel {
    pub summary: ReferralSummary,
    pub referrals: Vec<ReferralProgress>,
}

/// Ranked referrers
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct LeaderboardPanel {
    pub rows: Vec<RankedRow>,
}

/// One payout to the signed-in referrer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ReferralPayoutRow {
    pub at: String,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub amount: Decimal,
    pub status: PayoutStatus,
    pub tone: Tone,
}

impl From<&ReferralPayout> for ReferralPayoutRow {
    fn from(payout: &ReferralPayout) -> Self {
        Self {
            at: payout.at.clone(),
            amount: payout.amount,
            status: payout.status,
            tone: Tone::for_payout_status(payout.status),
        }
    }
}

/// Payouts made to the signed-in referrer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ReferralPayoutsPanel {
    pub payouts: Vec<ReferralPayoutRow>,
}

/// Settings card shown to every role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum SettingsSection {
    Account,
    Permissions,
    Integrations,
    Brands,
}

impl SettingsSection {
    /// Sections in display order.
    pub const ALL: [Self; 4] = [Self::Account, Self::Permissions, Self::Integrations, Self::Brands];

    /// Card heading.
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Account => "Account",
            Self::Permissions => "Permissions",
            Self::Integrations => "Integrations",
            Self::Brands => "Brands",
        }
    }
}

/// Settings card with its heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct SettingsEntry {
    pub section: SettingsSection,
    pub title: &'static str,
}

impl From<SettingsSection> for SettingsEntry {
    fn from(section: SettingsSection) -> Self {
        Self { section, title: section.title() }
    }
}

/// Account, permission and brand settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct SettingsPanel {
    pub role_class: RoleClass,
    pub sections: Vec<SettingsEntry>,
    /// Lines of business available in the brand selector
    pub brands: Vec<&'static str>,
}

/// Content of the main area for the routed view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(tag = "panel", rename_all = "snake_case")]
pub enum Panel {
    Dashboard(DashboardPanel),
    Pipeline(PipelinePanel),
    PayoutSchedule(PayoutSchedulePanel),
    Advances(AdvancesPanel),
    Approvals(ApprovalsPanel),
    Home(HomePanel),
    Referrals(ReferralsPanel),
    Leaderboard(LeaderboardPanel),
    ReferralPayouts(ReferralPayoutsPanel),
    Settings(SettingsPanel),
}

/// Everything a frontend needs to paint one screen
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct RenderedView {
    pub role: Role,
    pub role_label: &'static str,
    pub brand: Brand,
    pub brand_label: &'static str,
    pub view: View,
    #[cfg_attr(feature = "ts-gen", ts(as = "Vec<MenuItem>"))]
    pub menu: &'static [MenuItem],
    pub panel: Panel,
}
