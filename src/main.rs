mod models;
mod operations;
mod store;

use chrono::Local;
use models::category::Category;
use models::transaction::{Transaction, TransactionType};
use operations::add::parse_details;
use operations::export::{
    serialize_summary, serialize_transactions, summary_filename, transactions_filename,
    write_csv_file,
};
use operations::remove::remove_transaction;
use operations::summarize::summarize;
use std::io;
use std::path::Path;
use store::TransactionStore;

pub enum UserCommands {
    Add,
    Remove,
    List,
    Summary,
    Export,
    ExportSummary,
    Exit,
    Unknown,
}

fn main() {
    println!("Welcome to the expense tracker!");
    let mut store = TransactionStore::new();

    // Type and date carry over between adds, like a form that only clears
    // description, amount and category after each entry.
    let mut default_type = TransactionType::Expense;
    let mut default_date = Local::now().date_naive();

    loop {
        println!("Please enter a command (add, remove, list, summary, export, export-summary, exit):");

        let input = match read_user_input() {
            Ok(cmd) => cmd,
            Err(e) => {
                println!("Error reading input: {}", e);
                continue;
            }
        };
        let parts: Vec<&str> = input.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }
        let command = check_for_command(parts[0]);
        match command {
            UserCommands::Add => {
                println!("Add command selected. Please enter transaction details in the format:\ndescription, amount, category[, type(income/expense)[, date(YYYY-MM-DD)]]");
                println!("Categories: {}", category_list());
                let input = match read_user_input() {
                    Ok(details) => details,
                    Err(e) => {
                        println!("Error reading input: {}", e);
                        continue;
                    }
                };
                let details = match parse_details(&input, default_type, default_date) {
                    Ok(details) => details,
                    Err(e) => {
                        println!("Error adding transaction: {}", e);
                        println!("Please try again.");
                        continue;
                    }
                };
                match store.add(
                    &details.description,
                    &details.amount_text,
                    &details.category_label,
                    details.transaction_type,
                    details.date,
                ) {
                    Ok(Some(id)) => {
                        default_type = details.transaction_type;
                        default_date = details.date;
                        println!("Transaction {} added successfully!", id);
                    }
                    Ok(None) => {
                        println!("Nothing added: description, amount and category are required.");
                    }
                    Err(e) => {
                        println!("Error adding transaction: {}", e);
                        println!("Please try again.");
                    }
                }
            }
            UserCommands::Remove => {
                println!("Remove command selected. Provide the transaction ID to remove:");
                let input = match read_user_input() {
                    Ok(details) => details,
                    Err(e) => {
                        println!("Error reading input: {}", e);
                        continue;
                    }
                };
                match remove_transaction(&mut store, &input) {
                    Ok(true) => println!("Transaction removed successfully."),
                    Ok(false) => println!("No transaction found with ID {}.", input.trim()),
                    Err(err) => println!("Error: {}", err),
                }
            }
            UserCommands::List => {
                if store.is_empty() {
                    println!("No transactions recorded yet.");
                } else {
                    println!("Current Transactions:");
                    for transaction in store.transactions() {
                        print_transaction(transaction);
                    }
                }
            }
            UserCommands::Summary => {
                print_summary(&store);
            }
            UserCommands::Export => {
                let filename = transactions_filename(Local::now().date_naive());
                match serialize_transactions(store.transactions())
                    .and_then(|csv| write_csv_file(&csv, Path::new(&filename)))
                {
                    Ok(_) => println!(
                        "Exported {} transactions to {}.",
                        store.len(),
                        filename
                    ),
                    Err(err) => println!("Error exporting transactions: {}", err),
                }
            }
            UserCommands::ExportSummary => {
                let filename = summary_filename(Local::now().date_naive());
                let summary = summarize(store.transactions());
                match serialize_summary(&summary)
                    .and_then(|csv| write_csv_file(&csv, Path::new(&filename)))
                {
                    Ok(_) => println!("Exported summary to {}.", filename),
                    Err(err) => println!("Error exporting summary: {}", err),
                }
            }
            UserCommands::Exit => {
                println!("Exiting the application.");
                break;
            }
            UserCommands::Unknown => {
                println!("No valid command found. Please try again.");
            }
        }
    }
}

fn read_user_input() -> Result<String, String> {
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|_| "Failed to read line".to_string())?;
    Ok(input.trim().to_string())
}

fn check_for_command(input: &str) -> UserCommands {
    match input {
        "add" => UserCommands::Add,
        "remove" => UserCommands::Remove,
        "list" => UserCommands::List,
        "summary" => UserCommands::Summary,
        "export" => UserCommands::Export,
        "export-summary" => UserCommands::ExportSummary,
        "exit" => UserCommands::Exit,
        _ => UserCommands::Unknown,
    }
}

fn category_list() -> String {
    Category::ALL
        .iter()
        .map(|category| category.label())
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_transaction(transaction: &Transaction) {
    println!(
        "[{}] {}  {:<7} {:<13} {:>10}  {}",
        transaction.id,
        transaction.date.format("%d/%m/%Y"),
        transaction.transaction_type.display_label(),
        transaction.category.label(),
        format!("{:.2}", transaction.amount),
        transaction.description,
    );
}

fn print_summary(store: &TransactionStore) {
    let summary = summarize(store.transactions());
    println!("Total Entradas: {:.2}", summary.total_income);
    println!("Total Saídas:   {:.2}", summary.total_expense);
    println!("Saldo:          {:.2}", summary.balance);
    if !summary.category_totals.is_empty() {
        println!("Gastos por Categoria:");
        for category in Category::ALL {
            if let Some(total) = summary.category_totals.get(&category) {
                println!("  {:<13} {:>10}", category.label(), format!("{:.2}", total));
            }
        }
    }
}
