use painel_comercial::cli;

#[tokio::main]
async fn main() {
    cli::run().await;
}
