//! Sales read models and aggregate figures.

use botica_catalog::MedicationId;
use botica_core::{DomainError, DomainResult, dates, money};
use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Sale line. Invariant (backend-owned): `line_total = quantity * unit_price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleLine {
    pub medication_id: MedicationId,
    #[serde(default)]
    pub medication_name: String,
    pub quantity: u32,
    #[serde(default, deserialize_with = "money::deserialize_lenient")]
    pub unit_price: f64,
    #[serde(default, deserialize_with = "money::deserialize_lenient")]
    pub line_total: f64,
}

/// Finalized sale as returned by the persistence collaborator.
/// Invariant (backend-owned): `total = sum(lines.line_total)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: i64,
    /// Effective sale time, ISO-8601 (e.g. `2025-08-24T12:34:56`).
    pub timestamp: NaiveDateTime,
    #[serde(default, deserialize_with = "money::deserialize_lenient")]
    pub total: f64,
    #[serde(default)]
    pub lines: Vec<SaleLine>,
}

impl Sale {
    /// Display name of the first line (sales are single-line in
    /// practice); em-dash placeholder when there are no lines.
    pub fn first_line_name(&self) -> &str {
        self.lines
            .first()
            .map_or(dates::DISPLAY_PLACEHOLDER, |l| l.medication_name.as_str())
    }

    pub fn first_line_quantity(&self) -> u32 {
        self.lines.first().map_or(0, |l| l.quantity)
    }

    /// Unit price of the first line, normalized for display.
    pub fn first_line_unit_price(&self) -> f64 {
        self.lines
            .first()
            .map_or(0.0, |l| money::normalize_number(l.unit_price))
    }
}

/// Date-range filter for the sales listing (`YYYY-MM-DD` strings).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesRangeQuery {
    pub from: String,
    pub to: String,
}

impl SalesRangeQuery {
    /// Both ends are required and must be in order.
    pub fn validate(&self) -> DomainResult<()> {
        if self.from.trim().is_empty() || self.to.trim().is_empty() {
            return Err(DomainError::validation("both dates are required"));
        }
        dates::validate_range(&self.from, &self.to)
    }
}

/// Headline figures over a listed set of sales.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    pub count: usize,
    pub total_revenue: f64,
    /// Average ticket, rounded to the nearest peso; zero with no sales.
    pub average_ticket: f64,
}

impl SalesSummary {
    pub fn compute(sales: &[Sale]) -> Self {
        let count = sales.len();
        let total_revenue: f64 = sales
            .iter()
            .map(|s| money::normalize_number(s.total))
            .sum();
        let average_ticket = if count == 0 {
            0.0
        } else {
            (total_revenue / count as f64).round()
        };
        Self {
            count,
            total_revenue,
            average_ticket,
        }
    }
}

/// Revenue restricted to sales whose timestamp falls in the given
/// calendar month.
pub fn monthly_revenue(sales: &[Sale], year: i32, month: u32) -> f64 {
    sales
        .iter()
        .filter(|s| s.timestamp.year() == year && s.timestamp.month() == month)
        .map(|s| money::normalize_number(s.total))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sale(id: i64, y: i32, m: u32, d: u32, total: f64) -> Sale {
        Sale {
            id,
            timestamp: NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap(),
            total,
            lines: vec![SaleLine {
                medication_id: MedicationId(1),
                medication_name: "Ibuprofeno 400mg".to_owned(),
                quantity: 2,
                unit_price: total / 2.0,
                line_total: total,
            }],
        }
    }

    #[test]
    fn deserializes_backend_payload_with_stringly_prices() {
        let s: Sale = serde_json::from_str(
            r#"{
                "id": 10,
                "timestamp": "2025-08-24T12:34:56",
                "total": "$ 6.400",
                "lines": [{
                    "medicationId": 42,
                    "medicationName": "Ibuprofeno 400mg",
                    "quantity": 2,
                    "unitPrice": "3.200",
                    "lineTotal": 6400
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(s.total, 6400.0);
        assert_eq!(s.lines[0].unit_price, 3200.0);
        assert_eq!(s.first_line_name(), "Ibuprofeno 400mg");
        assert_eq!(s.first_line_quantity(), 2);
        assert_eq!(s.first_line_unit_price(), 3200.0);
    }

    #[test]
    fn lineless_sale_uses_placeholders() {
        let s = Sale {
            id: 1,
            timestamp: NaiveDate::from_ymd_opt(2025, 8, 24)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            total: 0.0,
            lines: Vec::new(),
        };
        assert_eq!(s.first_line_name(), "—");
        assert_eq!(s.first_line_quantity(), 0);
        assert_eq!(s.first_line_unit_price(), 0.0);
    }

    #[test]
    fn summary_over_sales() {
        let sales = vec![
            sale(1, 2025, 8, 1, 1000.0),
            sale(2, 2025, 8, 2, 2000.0),
            sale(3, 2025, 8, 3, 500.0),
        ];
        let summary = SalesSummary::compute(&sales);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.total_revenue, 3500.0);
        assert_eq!(summary.average_ticket, 1167.0); // rounded
    }

    #[test]
    fn summary_of_nothing_is_zero() {
        let summary = SalesSummary::compute(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.total_revenue, 0.0);
        assert_eq!(summary.average_ticket, 0.0);
    }

    #[test]
    fn monthly_revenue_filters_by_calendar_month() {
        let sales = vec![
            sale(1, 2025, 7, 31, 1000.0),
            sale(2, 2025, 8, 1, 2000.0),
            sale(3, 2025, 8, 31, 300.0),
            sale(4, 2024, 8, 15, 999.0), // same month, previous year
        ];
        assert_eq!(monthly_revenue(&sales, 2025, 8), 2300.0);
        assert_eq!(monthly_revenue(&sales, 2025, 7), 1000.0);
        assert_eq!(monthly_revenue(&sales, 2025, 6), 0.0);
    }

    #[test]
    fn range_query_requires_both_ends_in_order() {
        let ok = SalesRangeQuery {
            from: "2025-08-01".to_owned(),
            to: "2025-08-31".to_owned(),
        };
        assert!(ok.validate().is_ok());

        let missing = SalesRangeQuery {
            from: String::new(),
            to: "2025-08-31".to_owned(),
        };
        assert!(missing.validate().is_err());

        let inverted = SalesRangeQuery {
            from: "2025-09-01".to_owned(),
            to: "2025-08-31".to_owned(),
        };
        assert!(inverted.validate().is_err());
    }
}
