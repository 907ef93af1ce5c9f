//! Builds one retrieval document per table from its DDL, sample rows, and a
//! hand-written business description.

use sqlscout_core::SchemaDocument;
use sqlscout_db::{Database, DbError};

/// Hand-written business context per demo table. Phrased to pull in the
/// vocabulary users actually ask with, so embedding similarity lands on the
/// right table.
#[must_use]
pub fn business_description(table: &str) -> Option<&'static str> {
    match table {
        "customers" => Some(
            "Customer information including name, email, region/location, and signup date. \
             Use this table for queries about customers, users, buyers, clients, or people \
             who make purchases.",
        ),
        "products" => Some(
            "Product catalog with product names, categories (Electronics, Furniture, \
             Accessories), and prices. Use this for queries about items, merchandise, \
             inventory, or what is being sold.",
        ),
        "orders" => Some(
            "Order records showing which customers made a purchase, when (order_date), and \
             the total amount. Use this for queries about purchases, transactions, sales, \
             or revenue.",
        ),
        "order_items" => Some(
            "Line items within each order - links orders to products with quantity and \
             subtotal. Use this for queries about what products were in an order, \
             quantities sold, or detailed purchase breakdowns.",
        ),
        _ => None,
    }
}

/// Build a schema document for every usable table in the database.
pub fn build_schema_documents(db: &Database) -> Result<Vec<SchemaDocument>, DbError> {
    let tables = db.usable_tables()?;
    let mut documents = Vec::with_capacity(tables.len());

    for table in tables {
        let schema_info = db.table_info(&table)?;
        let description = business_description(&table).unwrap_or("No description available.");

        let content = format!(
            "TABLE: {table}\n\nBUSINESS CONTEXT:\n{description}\n\nSCHEMA AND SAMPLE DATA:\n{schema_info}"
        );
        documents.push(SchemaDocument::new(table, content));
    }

    tracing::debug!(count = documents.len(), "built schema documents");
    Ok(documents)
}
