use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::models::category::Category;
use crate::models::transaction::{Transaction, TransactionType};

// Derived totals; always recomputed from the store contents, never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
    // Expense amounts only; categories without expenses are absent.
    pub category_totals: HashMap<Category, Decimal>,
}

pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut total_income = Decimal::ZERO;
    let mut total_expense = Decimal::ZERO;
    let mut category_totals: HashMap<Category, Decimal> = HashMap::new();

    for transaction in transactions {
        match transaction.transaction_type {
            TransactionType::Income => total_income += transaction.amount,
            TransactionType::Expense => {
                total_expense += transaction.amount;
                let entry = category_totals
                    .entry(transaction.category)
                    .or_insert(Decimal::ZERO);
                *entry += transaction.amount;
            }
        }
    }

    Summary {
        total_income,
        total_expense,
        balance: total_income - total_expense,
        category_totals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TransactionStore;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn test_transaction(
        id: u64,
        amount: &str,
        transaction_type: TransactionType,
        category: Category,
    ) -> Transaction {
        Transaction::new(
            id,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            "Test Transaction".to_string(),
            Decimal::from_str(amount).unwrap(),
            transaction_type,
            category,
        )
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[]);

        assert_eq!(summary.total_income, Decimal::ZERO);
        assert_eq!(summary.total_expense, Decimal::ZERO);
        assert_eq!(summary.balance, Decimal::ZERO);
        assert!(summary.category_totals.is_empty());
    }

    #[test]
    fn test_summarize_single_expense() {
        let transactions = vec![test_transaction(
            1,
            "25.50",
            TransactionType::Expense,
            Category::Alimentacao,
        )];

        let summary = summarize(&transactions);

        assert_eq!(summary.total_income, Decimal::ZERO);
        assert_eq!(summary.total_expense, Decimal::from_str("25.50").unwrap());
        assert_eq!(summary.balance, Decimal::from_str("-25.50").unwrap());
        assert_eq!(
            summary.category_totals.get(&Category::Alimentacao),
            Some(&Decimal::from_str("25.50").unwrap())
        );
    }

    #[test]
    fn test_summarize_income_excluded_from_category_totals() {
        let transactions = vec![
            test_transaction(1, "100.00", TransactionType::Income, Category::Outros),
            test_transaction(2, "30.00", TransactionType::Expense, Category::Transporte),
        ];

        let summary = summarize(&transactions);

        assert_eq!(summary.total_income, Decimal::from_str("100.00").unwrap());
        assert_eq!(summary.total_expense, Decimal::from_str("30.00").unwrap());
        assert_eq!(summary.category_totals.len(), 1);
        assert!(!summary.category_totals.contains_key(&Category::Outros));
    }

    #[test]
    fn test_summarize_accumulates_per_category() {
        let transactions = vec![
            test_transaction(1, "10.00", TransactionType::Expense, Category::Transporte),
            test_transaction(2, "5.00", TransactionType::Expense, Category::Transporte),
            test_transaction(3, "7.25", TransactionType::Expense, Category::Lazer),
        ];

        let summary = summarize(&transactions);

        assert_eq!(
            summary.category_totals.get(&Category::Transporte),
            Some(&Decimal::from_str("15.00").unwrap())
        );
        assert_eq!(
            summary.category_totals.get(&Category::Lazer),
            Some(&Decimal::from_str("7.25").unwrap())
        );
    }

    #[test]
    fn test_balance_is_income_minus_expense() {
        let transactions = vec![
            test_transaction(1, "1500.00", TransactionType::Income, Category::Outros),
            test_transaction(2, "800.00", TransactionType::Expense, Category::Moradia),
            test_transaction(3, "120.30", TransactionType::Expense, Category::Alimentacao),
        ];

        let summary = summarize(&transactions);

        assert_eq!(summary.balance, summary.total_income - summary.total_expense);
        assert_eq!(summary.balance, Decimal::from_str("579.70").unwrap());
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let transactions = vec![
            test_transaction(1, "100.00", TransactionType::Income, Category::Outros),
            test_transaction(2, "30.00", TransactionType::Expense, Category::Saude),
        ];

        assert_eq!(summarize(&transactions), summarize(&transactions));
    }

    #[test]
    fn test_summarize_after_remove() {
        let mut store = TransactionStore::new();
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        store
            .add("Salary", "100.00", "Outros", TransactionType::Income, date)
            .unwrap();
        let expense_id = store
            .add("Groceries", "30.00", "Alimentação", TransactionType::Expense, date)
            .unwrap()
            .unwrap();

        store.remove(expense_id);
        let summary = summarize(store.transactions());

        assert_eq!(summary.total_income, Decimal::from_str("100.00").unwrap());
        assert_eq!(summary.total_expense, Decimal::ZERO);
        assert_eq!(summary.balance, Decimal::from_str("100.00").unwrap());
        assert!(summary.category_totals.is_empty());
    }
}
