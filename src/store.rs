use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::category::Category;
use crate::models::transaction::{Transaction, TransactionType};

// Insertion-ordered; ids come from a monotonic counter and are never reused.
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    next_id: u64,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            next_id: 1,
        }
    }

    // An empty required field skips the add (Ok(None)); a bad amount or
    // unknown category is a validation error.
    pub fn add(
        &mut self,
        description: &str,
        amount_text: &str,
        category_label: &str,
        transaction_type: TransactionType,
        date: NaiveDate,
    ) -> Result<Option<u64>, String> {
        let description = description.trim();
        let amount_text = amount_text.trim();
        let category_label = category_label.trim();
        if description.is_empty() || amount_text.is_empty() || category_label.is_empty() {
            return Ok(None);
        }

        let amount = amount_text.parse::<Decimal>().map_err(|_| {
            format!(
                "Invalid amount '{}'. Please provide a valid decimal number.",
                amount_text
            )
        })?;
        if amount <= Decimal::ZERO {
            return Err(format!(
                "Invalid amount '{}'. Amount must be positive.",
                amount_text
            ));
        }

        let category = Category::from_label(category_label)?;

        let id = self.next_id;
        self.next_id += 1;
        self.transactions.push(Transaction::new(
            id,
            date,
            description.to_string(),
            amount,
            transaction_type,
            category,
        ));
        Ok(Some(id))
    }

    // Ids are unique, so at most one record is ever removed.
    pub fn remove(&mut self, id: u64) -> bool {
        if let Some(pos) = self.transactions.iter().position(|t| t.id == id) {
            self.transactions.remove(pos);
            true
        } else {
            false
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
