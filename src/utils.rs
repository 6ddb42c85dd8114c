use std::path::PathBuf;

/// Get the sales CSV path from environment variable or use default
pub fn get_sales_data_path() -> PathBuf {
    std::env::var("SALES_DATA_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data/ventas_2025.csv"))
}
