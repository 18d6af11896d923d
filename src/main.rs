#[tokio::main]
async fn main() -> anyhow::Result<()> {
    product_catalog::run_server().await
}
