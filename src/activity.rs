use crate::classifier::{label_for, RecordKind};
use crate::config::{RECENT_EXPENSES_SHOWN, RECENT_INCOME_SHOWN};
use crate::format::{format_currency, format_date};
use crate::models::DashboardSnapshot;

/// One row of the dashboard's recent activity list, ready to render.
#[derive(Clone, Debug, PartialEq)]
pub struct ActivityItem {
    pub kind: RecordKind,
    pub label: String,
    pub date: String,
    pub amount: String,
}

/// Newest income first, then newest expenses. Order is the snapshot's own.
pub fn recent_activity(snapshot: &DashboardSnapshot) -> Vec<ActivityItem> {
    let income = snapshot
        .recent_income
        .iter()
        .take(RECENT_INCOME_SHOWN)
        .map(|entry| ActivityItem {
            kind: RecordKind::Income,
            label: label_for(RecordKind::Income, entry.source.as_str()),
            date: format_date(&entry.date),
            amount: format!("+{}", format_currency(entry.amount)),
        });
    let expenses = snapshot
        .recent_expenses
        .iter()
        .take(RECENT_EXPENSES_SHOWN)
        .map(|entry| ActivityItem {
            kind: RecordKind::Expense,
            label: label_for(RecordKind::Expense, entry.category.as_str()),
            date: format_date(&entry.date),
            amount: format!("-{}", format_currency(entry.amount)),
        });
    income.chain(expenses).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> DashboardSnapshot {
        serde_json::from_str(
            r#"{
                "recent_income": [
                    {"amount": 1500, "source": "freelancing", "date": "2025-07-04"},
                    {"amount": 800, "source": "selling_phones", "date": "2025-07-03"},
                    {"amount": 300, "source": "tips", "date": "2025-07-02"},
                    {"amount": 50, "source": "trading", "date": "2025-07-01"}
                ],
                "recent_expenses": [
                    {"amount": 450, "category": "gym", "date": "2025-07-04"},
                    {"amount": 1200, "category": "wifi", "date": "2025-07-02"},
                    {"amount": 90, "category": "food", "date": "2025-07-01"}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn shows_three_income_then_two_expenses() {
        let items = recent_activity(&snapshot());
        let kinds: Vec<RecordKind> = items.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            [
                RecordKind::Income,
                RecordKind::Income,
                RecordKind::Income,
                RecordKind::Expense,
                RecordKind::Expense
            ]
        );
        assert_eq!(items[0].label, "💻 Freelancing");
        assert_eq!(items[2].label, "tips");
        assert_eq!(items[4].label, "🌐 WiFi");
    }

    #[test]
    fn amounts_are_signed_by_kind() {
        let items = recent_activity(&snapshot());
        assert_eq!(items[0].amount, "+P1,500");
        assert_eq!(items[0].date, "4 Jul 2025");
        assert_eq!(items[3].amount, "-P450");
    }

    #[test]
    fn empty_snapshot_has_no_activity() {
        assert!(recent_activity(&DashboardSnapshot::default()).is_empty());
    }
}
