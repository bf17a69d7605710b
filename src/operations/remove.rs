use crate::store::TransactionStore;

// Ok(false) means the id was valid but nothing matched; the store is untouched.
pub fn remove_transaction(store: &mut TransactionStore, id_input: &str) -> Result<bool, String> {
    let id_input = id_input.trim();

    if id_input.is_empty() {
        return Err("Transaction ID cannot be empty.".to_string());
    }

    let id = id_input
        .parse::<u64>()
        .map_err(|_| format!("Invalid transaction ID '{}'. Please provide a number.", id_input))?;

    Ok(store.remove(id))
}
