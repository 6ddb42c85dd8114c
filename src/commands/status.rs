use std::path::PathBuf;

use crate::services::{format_currency, load_sales_csv};
use crate::utils::get_sales_data_path;

pub fn run(source: Option<PathBuf>) {
    let path = source.unwrap_or_else(get_sales_data_path);
    println!("📊 Sales Data Status\n");

    match show_status(&path) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn show_status(path: &std::path::Path) -> crate::error::Result<()> {
    let table = load_sales_csv(path)?;

    println!("🔹 Source: {}", path.display());
    println!("   Months:  {:>2} rows", table.rows.len());

    if let (Some(first), Some(last)) = (table.first_month(), table.last_month()) {
        println!("   Range:   {} → {}", first, last);
    }

    println!("   Sellers: {}", table.sellers.join(", "));

    let grand_total: f64 = table.rows.iter().map(|r| r.total).sum();
    println!("   Total:   {}", format_currency(grand_total));

    println!("\n💡 Tip: run 'report' for period metrics or 'serve' for the JSON API");
    Ok(())
}
