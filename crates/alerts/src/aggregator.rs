use botica_catalog::Medication;
use botica_core::{AlertConfig, dates};
use chrono::NaiveDate;

use crate::notification::{AlertKind, Notification};

/// Scan the visible catalog rows, in order, and derive stock/expiry
/// notifications, most severe first.
///
/// Per row: zero stock is a danger, otherwise below-threshold stock is a
/// warning; independently, an expired date is a danger, otherwise a date
/// within the horizon is a warning. The final list is stably sorted by
/// severity rank, so ties keep catalog order.
pub fn build_alerts(
    items: &[Medication],
    today: NaiveDate,
    config: &AlertConfig,
) -> Vec<Notification> {
    let mut notifications = Vec::new();

    for item in items {
        if item.on_hand_quantity == 0 {
            notifications.push(Notification::derive(
                AlertKind::OutOfStock,
                item.id,
                format!("{} is out of stock", item.name),
                None,
                today,
            ));
        } else if item.on_hand_quantity < config.low_stock_threshold {
            notifications.push(Notification::derive(
                AlertKind::LowStock,
                item.id,
                format!("{} is running low", item.name),
                Some(format!("{} units left", item.on_hand_quantity)),
                today,
            ));
        }

        if item.is_expired(today) {
            notifications.push(Notification::derive(
                AlertKind::Expired,
                item.id,
                format!("{} has expired", item.name),
                Some(format!(
                    "expired on {}",
                    dates::format_display(item.expiry_date)
                )),
                today,
            ));
        } else if item.is_near_expiry(today, config.near_expiry_horizon_days) {
            notifications.push(Notification::derive(
                AlertKind::NearExpiry,
                item.id,
                format!("{} expires soon", item.name),
                Some(format!(
                    "expires {} (within {} days)",
                    dates::format_display(item.expiry_date),
                    config.near_expiry_horizon_days
                )),
                today,
            ));
        }
    }

    notifications.sort_by_key(|n| n.severity.rank());
    notifications
}

/// Unread badge value for a fresh aggregation pass. The aggregator keeps
/// no state between passes; the caller caches this if it wants to.
pub fn unread_count(items: &[Medication], today: NaiveDate, config: &AlertConfig) -> usize {
    build_alerts(items, today, config).len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::Severity;
    use botica_catalog::{LaboratoryId, MedicationId};
    use chrono::Days;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 24).unwrap()
    }

    fn med(id: i64, name: &str, stock: u32, expiry: Option<NaiveDate>) -> Medication {
        Medication {
            id: MedicationId(id),
            name: name.to_owned(),
            laboratory_id: LaboratoryId(1),
            laboratory_name: String::new(),
            manufacture_date: None,
            expiry_date: expiry,
            on_hand_quantity: stock,
            unit_price: 100.0,
        }
    }

    fn days_from_today(days: i64) -> Option<NaiveDate> {
        if days >= 0 {
            today().checked_add_days(Days::new(days as u64))
        } else {
            today().checked_sub_days(Days::new((-days) as u64))
        }
    }

    #[test]
    fn out_of_stock_is_a_single_danger() {
        let alerts = build_alerts(
            &[med(1, "Med A", 0, days_from_today(60))],
            today(),
            &AlertConfig::default(),
        );
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].id, "stock-0-1");
        assert_eq!(alerts[0].severity, Severity::Danger);
    }

    #[test]
    fn expired_beats_near_expiry() {
        let alerts = build_alerts(
            &[med(3, "Med C", 20, days_from_today(-5))],
            today(),
            &AlertConfig::default(),
        );
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].id, "vencido-3");
        assert_eq!(alerts[0].severity, Severity::Danger);
    }

    #[test]
    fn low_stock_and_near_expiry_stack_on_one_item() {
        let alerts = build_alerts(
            &[med(2, "Med B", 5, days_from_today(10))],
            today(),
            &AlertConfig::default(),
        );
        let ids: Vec<_> = alerts.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["stock-bajo-2", "por-vencer-2"]);
        assert!(alerts.iter().all(|n| n.severity == Severity::Warning));
        assert_eq!(alerts[0].detail.as_deref(), Some("5 units left"));
    }

    #[test]
    fn dashboard_page_produces_the_expected_mix() {
        // One out-of-stock row, one low-and-expiring row, one expired row.
        let items = vec![
            med(1, "Med A", 0, days_from_today(60)),
            med(2, "Med B", 5, days_from_today(10)),
            med(3, "Med C", 20, days_from_today(-1)),
        ];
        let alerts = build_alerts(&items, today(), &AlertConfig::default());

        let ids: Vec<_> = alerts.iter().map(|n| n.id.as_str()).collect();
        // Dangers first (catalog order preserved), then warnings.
        assert_eq!(
            ids,
            vec!["stock-0-1", "vencido-3", "stock-bajo-2", "por-vencer-2"]
        );
        assert_eq!(unread_count(&items, today(), &AlertConfig::default()), 4);
    }

    #[test]
    fn aggregation_is_idempotent() {
        let items = vec![
            med(1, "Med A", 0, days_from_today(60)),
            med(2, "Med B", 5, days_from_today(10)),
        ];
        let first = build_alerts(&items, today(), &AlertConfig::default());
        let second = build_alerts(&items, today(), &AlertConfig::default());
        assert_eq!(first, second);
    }

    #[test]
    fn horizon_boundary_is_inclusive() {
        let at_horizon = build_alerts(
            &[med(1, "Med", 50, days_from_today(30))],
            today(),
            &AlertConfig::default(),
        );
        assert_eq!(at_horizon.len(), 1);
        assert_eq!(at_horizon[0].id, "por-vencer-1");

        let past_horizon = build_alerts(
            &[med(1, "Med", 50, days_from_today(31))],
            today(),
            &AlertConfig::default(),
        );
        assert!(past_horizon.is_empty());
    }

    #[test]
    fn missing_expiry_date_raises_no_expiry_alert() {
        let alerts = build_alerts(&[med(1, "Med", 50, None)], today(), &AlertConfig::default());
        assert!(alerts.is_empty());
    }

    #[test]
    fn thresholds_are_overridable() {
        let config = AlertConfig {
            low_stock_threshold: 3,
            near_expiry_horizon_days: 5,
        };
        let alerts = build_alerts(
            &[med(1, "Med", 5, days_from_today(10))],
            today(),
            &config,
        );
        // 5 units is fine against threshold 3; day 10 is past horizon 5.
        assert!(alerts.is_empty());
    }
}
