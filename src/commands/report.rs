use std::path::PathBuf;

use crate::error::{AppError, Result};
use crate::models::{Month, Selection};
use crate::services::{aggregate, display_table, format_currency, load_sales_csv};
use crate::utils::get_sales_data_path;

pub fn run(source: Option<PathBuf>, start: Option<String>, end: Option<String>, sellers: Vec<String>) {
    let path = source.unwrap_or_else(get_sales_data_path);

    match print_report(&path, start, end, sellers) {
        Ok(()) => {}
        Err(AppError::EmptySelection(msg)) => {
            eprintln!("⚠️  {}", msg);
            eprintln!("   Select at least one seller to see the report.");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_report(
    path: &std::path::Path,
    start: Option<String>,
    end: Option<String>,
    sellers: Vec<String>,
) -> Result<()> {
    let table = load_sales_csv(path)?;
    let start = start.map(|label| label.parse::<Month>()).transpose()?;
    let end = end.map(|label| label.parse::<Month>()).transpose()?;
    let selection = Selection::resolve(&table, start, end, sellers)?;
    let summary = aggregate(&table, &selection)?;

    println!("📊 Sales Potential Report");
    println!("   Source: {}", path.display());
    println!("   Period: {} - {}\n", selection.start, selection.end);

    let delta_text = match summary.delta_pct {
        Some(pct) => format!("{:+.1}%", pct),
        None => "N/A".to_string(),
    };

    println!("💰 Period total:      {}", format_currency(summary.period_total));
    println!(
        "🏆 Best month:        {} ({})",
        summary.best_month,
        format_currency(summary.best_month_total)
    );
    println!(
        "🥇 Top seller:        {} ({})",
        summary.top_seller().name,
        format_currency(summary.top_seller().total)
    );
    println!(
        "📈 Last vs previous:  {} ({})\n",
        format_currency(summary.last_month_total),
        delta_text
    );

    println!("Seller ranking:");
    for (rank, seller) in summary.seller_totals.iter().enumerate() {
        println!(
            "   {}. {:<20} {}",
            rank + 1,
            seller.name,
            format_currency(seller.total)
        );
    }

    let formatted = display_table(&table, &selection)?;
    println!("\nDetail:");
    println!("   {}", formatted.columns.join(" | "));
    for row in &formatted.rows {
        println!("   {}", row.join(" | "));
    }

    Ok(())
}
