//! Dashboard service - composes panel view models from repository data

use std::sync::Arc;

use novaearn_domain::{
    ApprovalKind, Brand, Deal, ReferralStatus, Result, RoleClass, SessionDefaults, Stage,
};
use rust_decimal::RoundingStrategy;
use tracing::{debug, instrument};

use super::panels::{
    AdvanceRow, AdvancesPanel, ApprovalsPanel, Badge, CommissionTotals, DashboardPanel,
    DealDetails, DealRow, HomePanel, LeaderboardPanel, NextPay, Panel, PayoutRow,
    PayoutSchedulePanel, PipelinePanel, RankedRow, ReferralPayoutRow, ReferralPayoutsPanel,
    ReferralProgress, ReferralRow, ReferralsPanel, RenderedView, SettingsEntry, SettingsPanel,
    SettingsSection, Tone,
};
use crate::earnings::aggregator::{aggregate, DealAggregate};
use crate::earnings::ports::EarningsRepository;
use crate::earnings::referrals::{progress, summarize};
use crate::earnings::selector::{active_deal, scope_deals};
use crate::earnings::stepper::stage_steps;
use crate::navigation::router::{menu, route, Route};
use crate::navigation::state::SessionState;

/// Renders sessions against an earnings repository
pub struct DashboardService {
    repository: Arc<dyn EarningsRepository>,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn EarningsRepository>) -> Self {
        Self { repository }
    }

    /// Fresh session with the first deal in the data set selected.
    pub fn initial_state(&self, defaults: &SessionDefaults) -> Result<SessionState> {
        let deals = self.repository.deals()?;
        let selected = deals.first().map(|deal| deal.id.clone());
        Ok(SessionState::from_defaults(defaults, selected))
    }

    /// Render the panel the session is looking at.
    ///
    /// Every figure is recomputed from the repository on each call.
    #[instrument(skip(self, state), fields(role = %state.role(), brand = %state.brand(), view = %state.view()))]
    pub fn render(&self, state: &SessionState) -> Result<RenderedView> {
        let role = state.role();
        let routed = route(role, state.view());
        debug!(route = ?routed, "Rendering panel");

        let panel = match routed {
            Route::Dashboard => Panel::Dashboard(self.dashboard(state)?),
            Route::Pipeline => Panel::Pipeline(self.pipeline(state)?),
            Route::PayoutSchedule => Panel::PayoutSchedule(self.payout_schedule()?),
            Route::Advances => Panel::Advances(self.advances()?),
            Route::Approvals => Panel::Approvals(self.approvals()?),
            Route::Settings => Panel::Settings(settings(role.class())),
            Route::Home => Panel::Home(self.home()?),
            Route::Referrals => Panel::Referrals(self.referrals()?),
            Route::Leaderboard => Panel::Leaderboard(LeaderboardPanel { rows: self.ranked()? }),
            Route::ReferralPayouts => Panel::ReferralPayouts(self.referral_payouts()?),
        };

        Ok(RenderedView {
            role,
            role_label: role.label(),
            brand: state.brand(),
            brand_label: state.brand().label(),
            view: state.view(),
            menu: menu(role),
            panel,
        })
    }

    fn dashboard(&self, state: &SessionState) -> Result<DashboardPanel> {
        let deals = self.repository.deals()?;
        let scope = Scope::new(&deals, state.brand(), state.selected_deal_id());
        let totals = aggregate(&scope.deals);

        Ok(DashboardPanel {
            totals: commission_totals(&totals),
            monthly_trend: self.repository.monthly_trend()?,
            stage_mix: totals.stage_counts,
            deals: scope.rows(),
            stepper: stage_steps(scope.current_stage()),
            timeline: self.repository.timeline()?,
        })
    }

    fn pipeline(&self, state: &SessionState) -> Result<PipelinePanel> {
        let deals = self.repository.deals()?;
        let scope = Scope::new(&deals, state.brand(), state.selected_deal_id());
        let totals = aggregate(&scope.deals);

        Ok(PipelinePanel {
            active_count: totals.active_count,
            blocked_count: totals.blocked_count,
            next_pay: scope.active.map(|deal| NextPay {
                label: deal.expected_next_pay_label().to_string(),
                customer: deal.customer.clone(),
            }),
            average_kilowatts_label: totals.average_kilowatts.display(),
            average_kilowatts: totals.average_kilowatts,
            deals: scope.rows(),
            active_deal: scope.active.map(DealDetails::from_deal),
            stepper: stage_steps(scope.current_stage()),
            timeline: self.repository.timeline()?,
        })
    }

    fn payout_schedule(&self) -> Result<PayoutSchedulePanel> {
        let periods = self.repository.payout_periods()?;
        Ok(PayoutSchedulePanel {
            periods: periods.iter().map(PayoutRow::from).collect(),
            line_items: vec![
                Badge::new("Commission P2", Tone::Info),
                Badge::new("Adders", Tone::Neutral),
                Badge::new("Advance deduction", Tone::Bad),
            ],
        })
    }

    fn advances(&self) -> Result<AdvancesPanel> {
        let ledger = self.repository.advance_ledger()?;
        Ok(AdvancesPanel {
            balance: ledger.balance,
            next_deduction: ledger.next_deduction,
            ytd_issued: ledger.ytd_issued,
            history: ledger.history.iter().map(AdvanceRow::from).collect(),
        })
    }

    fn approvals(&self) -> Result<ApprovalsPanel> {
        let queue = self
            .repository
            .approvals()?
            .into_iter()
            .map(|kind: ApprovalKind| Badge::new(kind.as_str(), Tone::for_approval(kind)))
            .collect();
        Ok(ApprovalsPanel { queue })
    }

    fn home(&self) -> Result<HomePanel> {
        let referrals = self.repository.referrals()?;
        Ok(HomePanel {
            summary: summarize(&referrals),
            referrals: referrals.iter().map(ReferralRow::from).collect(),
            leaderboard: self.ranked()?,
            payout_rules: payout_rules(),
        })
    }

    fn referrals(&self) -> Result<ReferralsPanel> {
        let referrals = self.repository.referrals()?;
        Ok(ReferralsPanel {
            summary: summarize(&referrals),
            referrals: referrals
                .iter()
                .map(|referral| ReferralProgress {
                    referral: ReferralRow::from(referral),
                    steps: progress(referral.status),
                })
                .collect(),
        })
    }

    fn ranked(&self) -> Result<Vec<RankedRow>> {
        Ok(self
            .repository
            .leaderboard()?
            .into_iter()
            .enumerate()
            .map(|(position, row)| RankedRow {
                rank: position + 1,
                name: row.name,
                conversions: row.conversions,
                earnings: row.earnings,
            })
            .collect())
    }

    fn referral_payouts(&self) -> Result<ReferralPayoutsPanel> {
        let payouts = self.repository.referral_payouts()?;
        Ok(ReferralPayoutsPanel { payouts: payouts.iter().map(ReferralPayoutRow::from).collect() })
    }
}

/// Brand-scoped deals and the active one among them
struct Scope<'a> {
    deals: Vec<&'a Deal>,
    active: Option<&'a Deal>,
}

impl<'a> Scope<'a> {
    fn new(all: &'a [Deal], brand: Brand, selected_id: Option<&str>) -> Self {
        let deals = scope_deals(all, brand);
        let active = active_deal(&deals, selected_id);
        debug!(scoped = deals.len(), active = ?active.map(|d| d.id.as_str()), "Scoped deals");
        Self { deals, active }
    }

    fn rows(&self) -> Vec<DealRow> {
        let active_id = self.active.map(|deal| deal.id.as_str());
        self.deals.iter().map(|deal| DealRow::from_deal(deal, active_id)).collect()
    }

    fn current_stage(&self) -> Stage {
        self.active.map_or(Stage::Lead, |deal| deal.stage)
    }
}

fn commission_totals(totals: &DealAggregate) -> CommissionTotals {
    CommissionTotals {
        pending: totals.pending,
        locked: totals.locked,
        paid: totals.paid,
        contract_value: totals
            .contract_value_total
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
    }
}

fn payout_rules() -> Vec<Badge> {
    let steps = [
        (ReferralStatus::Submitted, ReferralStatus::Qualified, Tone::Neutral),
        (ReferralStatus::Qualified, ReferralStatus::Install, Tone::Neutral),
        (ReferralStatus::Install, ReferralStatus::Paid, Tone::Good),
    ];
    steps.iter().map(|(from, to, tone)| Badge::new(format!("{from} → {to}"), *tone)).collect()
}

fn settings(class: RoleClass) -> SettingsPanel {
    SettingsPanel {
        role_class: class,
        sections: SettingsSection::ALL.into_iter().map(SettingsEntry::from).collect(),
        brands: Brand::ALL.iter().map(Brand::label).collect(),
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn contract_value_rounds_half_away_from_zero() {
        let totals = DealAggregate {
            pending: Decimal::ZERO,
            locked: Decimal::ZERO,
            paid: Decimal::ZERO,
            contract_value_total: dec!(75344.7),
            active_count: 0,
            blocked_count: 0,
            average_kilowatts: crate::KilowattAverage::NoData,
            stage_counts: Vec::new(),
        };
        assert_eq!(commission_totals(&totals).contract_value, dec!(75345));

        let half = DealAggregate { contract_value_total: dec!(100.5), ..totals };
        assert_eq!(commission_totals(&half).contract_value, dec!(101));
    }

    #[test]
    fn payout_rules_read_as_transitions() {
        let labels: Vec<String> = payout_rules().into_iter().map(|b| b.label).collect();
        assert_eq!(labels, vec!["Submitted → Qualified", "Qualified → Install", "Install → Paid"]);
        assert_eq!(payout_rules()[2].tone, Tone::Good);
    }

    #[test]
    fn settings_lists_all_sections_and_brands() {
        let panel = settings(RoleClass::External);
        let titles: Vec<&str> = panel.sections.iter().map(|entry| entry.title).collect();
        assert_eq!(titles, vec!["Account", "Permissions", "Integrations", "Brands"]);
        assert_eq!(panel.sections[3].section, SettingsSection::Brands);
        assert_eq!(panel.brands, vec!["Nova NRG Solar", "Nova NRG Roofing"]);
    }
}
