use anyhow::Result;

use user_search::app::App;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    App::run().await
}
