#![allow(dead_code)]

use std::fs::File;
use std::io::Error;
use std::path::Path;

pub const HEADER: [&str; 3] = ["action", "target", "value"];

/// Writes an event script with the given rows after the header.
pub fn write_script(path: &Path, rows: &[[&str; 3]]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Rows that fill both forms with valid data for the given payment method.
pub fn customer_rows(method: &str) -> Vec<[&str; 3]> {
    vec![
        ["customer", "name", "Анна Смирнова"],
        ["customer", "email", "anna@example.com"],
        ["customer", "phone", "89161234567"],
        ["customer", "payment_method", method],
    ]
}

/// A script that places `orders` identical cash orders of `quantity` units of item 2.
pub fn generate_orders(path: &Path, orders: usize, quantity: u32) -> Result<(), Error> {
    let quantity = quantity.to_string();
    let mut rows = Vec::new();
    for _ in 0..orders {
        rows.push(["quantity", "2", quantity.as_str()]);
        rows.extend(customer_rows("cash"));
        rows.push(["submit", "", ""]);
    }
    write_script(path, &rows)
}
