use clap::Parser;
use warren::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = App::parse();
    app.init_tracing();
    app.run().await
}
