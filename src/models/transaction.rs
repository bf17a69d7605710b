use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::category::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    // Display labels used in listings and CSV exports.
    pub fn display_label(&self) -> &'static str {
        match self {
            TransactionType::Income => "Entrada",
            TransactionType::Expense => "Saída",
        }
    }

    pub fn parse(input: &str) -> Result<TransactionType, String> {
        match input.trim().to_lowercase().as_str() {
            "income" | "entrada" => Ok(TransactionType::Income),
            "expense" | "saida" | "saída" => Ok(TransactionType::Expense),
            _ => Err("Invalid transaction type. Use 'income'/'entrada' or 'expense'/'saida'.".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: u64,
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub transaction_type: TransactionType,
    pub category: Category,
}

impl Transaction {
    pub fn new(
        id: u64,
        date: NaiveDate,
        description: String,
        amount: Decimal,
        transaction_type: TransactionType,
        category: Category,
    ) -> Self {
        Self {
            id,
            date,
            description,
            amount,
            transaction_type,
            category,
        }
    }
}
