//! `stockroom` — print the inventory table from a terminal.
//!
//! Usage: `stockroom [search terms...]`. The backend URL comes from
//! `STOCKROOM_API_URL` (default `http://localhost:4173`).

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main(flavor = "current_thread")]
async fn main() -> std::process::ExitCode {
    use stockroom_client::{ClientConfig, HttpProductApi};
    use stockroom_desktop::InventoryController;
    use stockroom_desktop::terminal::TerminalView;

    stockroom_observability::init();

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            return std::process::ExitCode::FAILURE;
        }
    };
    tracing::info!("using inventory API at {}", config.base_url());

    let search = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let controller = InventoryController::new(HttpProductApi::new(config), TerminalView::new());
    controller.set_search(search).await;

    if controller.view().has_errors() {
        std::process::ExitCode::FAILURE
    } else {
        std::process::ExitCode::SUCCESS
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
