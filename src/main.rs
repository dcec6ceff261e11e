use anyhow::Result;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    markdown_rag::cli::run()
}
