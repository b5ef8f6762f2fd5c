use serde::Serialize;

use crate::domain::{Amount, Expense, Ledger, title_case};

/// Aggregate view of a non-empty ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerSummary {
    pub total: Amount,
    pub by_category: Vec<GroupTotal>,
    pub by_date: Vec<GroupTotal>,
}

/// Sum of amounts sharing one key, in the order the key first appeared.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupTotal {
    pub key: String,
    pub total: Amount,
}

/// Sum of every expense; zero for an empty ledger.
pub fn total_spending(ledger: &Ledger) -> Amount {
    ledger.iter().map(|e| e.amount).sum()
}

/// Sum of expenses in `category`, compared after title-casing the query.
pub fn spending_by_category(ledger: &Ledger, category: &str) -> Amount {
    let category = title_case(category);
    ledger
        .iter()
        .filter(|e| e.category == category)
        .map(|e| e.amount)
        .sum()
}

/// Sum of expenses whose stored date is exactly `date`.
pub fn spending_by_date(ledger: &Ledger, date: &str) -> Amount {
    ledger
        .iter()
        .filter(|e| e.date == date)
        .map(|e| e.amount)
        .sum()
}

/// Total plus per-category and per-date breakdowns, or `None` when there is
/// nothing recorded.
pub fn summarize(ledger: &Ledger) -> Option<LedgerSummary> {
    if ledger.is_empty() {
        return None;
    }

    Some(LedgerSummary {
        total: total_spending(ledger),
        by_category: group_in_order(ledger, |e| e.category.as_str()),
        by_date: group_in_order(ledger, |e| e.date.as_str()),
    })
}

// Linear lookup keeps first-seen order; ledgers are small.
fn group_in_order<F>(ledger: &Ledger, key: F) -> Vec<GroupTotal>
where
    F: Fn(&Expense) -> &str,
{
    let mut groups: Vec<GroupTotal> = Vec::new();
    for expense in ledger {
        let k = key(expense);
        match groups.iter_mut().find(|g| g.key == k) {
            Some(group) => group.total += expense.amount,
            None => groups.push(GroupTotal {
                key: k.to_string(),
                total: expense.amount,
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Ledger {
        Ledger::from(vec![
            Expense::new(10.0, "Food", "2024-01-01"),
            Expense::new(5.5, "Food", "2024-01-02"),
            Expense::new(20.0, "Transport", "2024-01-01"),
        ])
    }

    #[test]
    fn test_group_keeps_first_seen_order() {
        let ledger = Ledger::from(vec![
            Expense::new(1.0, "Zoo", "2024-02-01"),
            Expense::new(2.0, "Apples", "2024-01-01"),
            Expense::new(3.0, "Zoo", "2024-01-01"),
        ]);
        let groups = group_in_order(&ledger, |e| e.category.as_str());
        let keys: Vec<_> = groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["Zoo", "Apples"]);
        assert_eq!(groups[0].total, 4.0);
    }

    #[test]
    fn test_summary_totals() {
        let summary = summarize(&sample()).unwrap();
        assert_eq!(summary.total, 35.5);
        assert_eq!(
            summary.by_date,
            vec![
                GroupTotal {
                    key: "2024-01-01".into(),
                    total: 30.0
                },
                GroupTotal {
                    key: "2024-01-02".into(),
                    total: 5.5
                },
            ]
        );
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize(&Ledger::new()), None);
    }
}
