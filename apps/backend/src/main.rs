#[tokio::main]
async fn main() -> anyhow::Result<()> {
    quiz_import_backend::run().await
}
