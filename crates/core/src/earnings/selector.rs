//! Brand scoping and active-deal selection

use novaearn_domain::{Brand, Deal};

/// Deals belonging to `brand`, in their original relative order.
pub fn scope_deals(deals: &[Deal], brand: Brand) -> Vec<&Deal> {
    deals.iter().filter(|deal| deal.brand == brand).collect()
}

/// The deal the detail panels should show.
///
/// Returns the scoped deal whose id matches `selected_id`, else the first
/// scoped deal, else `None` when the brand has no deals. `None` is a normal
/// state; callers render a placeholder for it.
pub fn active_deal<'a>(scoped: &[&'a Deal], selected_id: Option<&str>) -> Option<&'a Deal> {
    selected_id
        .and_then(|id| scoped.iter().copied().find(|deal| deal.id == id))
        .or_else(|| scoped.first().copied())
}

#[cfg(test)]
mod tests {
    use novaearn_domain::{DealStatus, Stage};
    use rust_decimal::Decimal;

    use super::*;

    fn deal(id: &str, brand: Brand) -> Deal {
        Deal {
            id: id.to_string(),
            customer: format!("Customer {id}"),
            city: "Miami".to_string(),
            state: "FL".to_string(),
            brand,
            stage: Stage::Lead,
            status: DealStatus::Active,
            kw: None,
            contract_value: None,
            adders: Decimal::ZERO,
            commission_pending: None,
            commission_locked: None,
            commission_paid: None,
            expected_next_pay: None,
            blocks: Vec::new(),
        }
    }

    fn mixed() -> Vec<Deal> {
        vec![
            deal("A", Brand::Solar),
            deal("B", Brand::Roofing),
            deal("C", Brand::Solar),
            deal("D", Brand::Roofing),
        ]
    }

    #[test]
    fn scope_keeps_only_brand_in_order() {
        let deals = mixed();
        for brand in Brand::ALL {
            let scoped = scope_deals(&deals, brand);
            assert!(scoped.len() <= deals.len());
            assert!(scoped.iter().all(|d| d.brand == brand));
        }

        let ids: Vec<&str> =
            scope_deals(&deals, Brand::Solar).iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "C"]);
    }

    #[test]
    fn scope_of_empty_collection_is_empty() {
        assert!(scope_deals(&[], Brand::Roofing).is_empty());
    }

    #[test]
    fn active_prefers_matching_id() {
        let deals = mixed();
        let scoped = scope_deals(&deals, Brand::Solar);
        assert_eq!(active_deal(&scoped, Some("C")).map(|d| d.id.as_str()), Some("C"));
    }

    #[test]
    fn active_falls_back_to_first_when_id_out_of_scope() {
        let deals = mixed();
        let scoped = scope_deals(&deals, Brand::Roofing);
        assert_eq!(active_deal(&scoped, Some("A")).map(|d| d.id.as_str()), Some("B"));
        assert_eq!(active_deal(&scoped, None).map(|d| d.id.as_str()), Some("B"));
    }

    #[test]
    fn active_is_none_for_empty_scope() {
        let deals = vec![deal("A", Brand::Solar)];
        let scoped = scope_deals(&deals, Brand::Roofing);
        assert!(active_deal(&scoped, Some("A")).is_none());
    }
}
