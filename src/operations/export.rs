use chrono::NaiveDate;
use std::fs;
use std::path::Path;

use crate::models::category::Category;
use crate::models::transaction::Transaction;
use crate::operations::summarize::Summary;

const TRANSACTION_HEADERS: [&str; 5] = ["Data", "Descrição", "Categoria", "Tipo", "Valor"];

pub fn transactions_filename(date: NaiveDate) -> String {
    format!("gastos_mensais_{}.csv", date)
}

pub fn summary_filename(date: NaiveDate) -> String {
    format!("resumo_financeiro_{}.csv", date)
}

// One row per transaction in store order, every field double-quoted, amounts
// with two decimal places. No trailing newline.
pub fn serialize_transactions(transactions: &[Transaction]) -> Result<String, String> {
    let mut writer = quoted_writer();
    writer.write_record(TRANSACTION_HEADERS).map_err(record_error)?;

    for transaction in transactions {
        writer
            .write_record([
                transaction.date.to_string(),
                transaction.description.clone(),
                transaction.category.label().to_string(),
                transaction.transaction_type.display_label().to_string(),
                format!("{:.2}", transaction.amount),
            ])
            .map_err(record_error)?;
    }

    finish(writer)
}

// Fixed preamble, then one row per populated category in category order.
pub fn serialize_summary(summary: &Summary) -> Result<String, String> {
    let mut writer = quoted_writer();

    writer
        .write_record(["Resumo Financeiro", ""])
        .map_err(record_error)?;
    writer
        .write_record(["Total Entradas".to_string(), format!("{:.2}", summary.total_income)])
        .map_err(record_error)?;
    writer
        .write_record(["Total Saídas".to_string(), format!("{:.2}", summary.total_expense)])
        .map_err(record_error)?;
    writer
        .write_record(["Saldo".to_string(), format!("{:.2}", summary.balance)])
        .map_err(record_error)?;
    writer.write_record(["", ""]).map_err(record_error)?;
    writer
        .write_record(["Gastos por Categoria", ""])
        .map_err(record_error)?;

    for category in Category::ALL {
        if let Some(total) = summary.category_totals.get(&category) {
            writer
                .write_record([category.label().to_string(), format!("{:.2}", total)])
                .map_err(record_error)?;
        }
    }

    finish(writer)
}

pub fn write_csv_file(csv_text: &str, path: &Path) -> Result<(), String> {
    fs::write(path, csv_text)
        .map_err(|e| format!("Failed to write '{}': {}", path.display(), e))
}

fn quoted_writer() -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(Vec::new())
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String, String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| format!("Failed to flush CSV data: {}", e))?;
    let mut text =
        String::from_utf8(bytes).map_err(|e| format!("CSV data is not valid UTF-8: {}", e))?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

fn record_error(e: csv::Error) -> String {
    format!("Failed to write CSV record: {}", e)
}
