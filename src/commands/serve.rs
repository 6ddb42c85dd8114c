use std::path::PathBuf;
use std::sync::Arc;

use crate::server;
use crate::services::DataStore;
use crate::utils::get_sales_data_path;

pub async fn run(source: Option<PathBuf>, port: u16) {
    let path = source.unwrap_or_else(get_sales_data_path);
    println!("🚀 Starting painel-comercial server on port {}", port);
    println!("📁 Data source: {}", path.display());

    let data_store = Arc::new(DataStore::new());

    // Warm the cache so the first request doesn't pay the disk read.
    // A missing file is not fatal here: the health endpoint reports it
    // and a later request retries once the file appears.
    match data_store.get(&path).await {
        Ok(table) => {
            println!("✅ Data loaded successfully:");
            println!("   📅 Months:  {}", table.rows.len());
            println!("   👥 Sellers: {}", table.sellers.len());
        }
        Err(e) => {
            eprintln!("⚠️  Warning: failed to preload data: {}", e);
            eprintln!("   Server will start anyway; requests will retry the load.");
        }
    }

    if let Err(e) = server::serve(data_store, path, port).await {
        eprintln!("❌ Server error: {}", e);
        std::process::exit(1);
    }
}
