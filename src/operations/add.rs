use chrono::NaiveDate;

use crate::models::transaction::TransactionType;

// Raw fields for one add, as entered by the user. Amount and category stay
// as text here; the store validates them when the transaction is created.
#[derive(Debug)]
pub struct AddDetails {
    pub description: String,
    pub amount_text: String,
    pub category_label: String,
    pub transaction_type: TransactionType,
    pub date: NaiveDate,
}

// Parses one details line: description, amount, category[, type[, date]].
// Omitted or blank type/date fall back to the defaults from the previous add.
pub fn parse_details(
    details: &str,
    default_type: TransactionType,
    default_date: NaiveDate,
) -> Result<AddDetails, String> {
    let detail_parts: Vec<&str> = details.split(',').map(|s| s.trim()).collect();
    if detail_parts.len() < 3 || detail_parts.len() > 5 {
        return Err(format!(
            "Invalid number of details provided. Expected 3 to 5 details separated by commas but got {}",
            detail_parts.len()
        ));
    }

    let transaction_type = match detail_parts.get(3) {
        Some(raw) if !raw.is_empty() => TransactionType::parse(raw)?,
        _ => default_type,
    };

    let date = match detail_parts.get(4) {
        Some(raw) if !raw.is_empty() => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| "Invalid date format. Please use YYYY-MM-DD.".to_string())?,
        _ => default_date,
    };

    Ok(AddDetails {
        description: detail_parts[0].to_string(),
        amount_text: detail_parts[1].to_string(),
        category_label: detail_parts[2].to_string(),
        transaction_type,
        date,
    })
}
