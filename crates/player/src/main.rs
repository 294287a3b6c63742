//! Strategy Memo Player - composition root binary.

use std::sync::Arc;

use stratmemo_domain::StrategyMemo;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    use stratmemo_player::infrastructure::http_client::ReqwestDocumentClient;
    use stratmemo_player::infrastructure::platform::DesktopStorageProvider;
    use stratmemo_player::{PersistenceService, PlayerConfig, SaveFailure, ShareImportService};

    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stratmemo_player=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Strategy Memo Player");

    let config = PlayerConfig::from_env()?;

    // Shared memos open read-only and never touch local storage.
    if let Some(share_url) = config.share_url.as_deref() {
        let client = ReqwestDocumentClient::new().context("failed to build HTTP client")?;
        let share = ShareImportService::new(Arc::new(client), config.share_hosts.clone());
        let (outcome, error) = share.import_or_empty(share_url).await;
        if let Some(error) = error {
            tracing::error!("Could not open shared memo: {}", error);
        }
        log_summary(&outcome.memo, outcome.read_only);
        return Ok(());
    }

    let storage_path = config
        .storage_path
        .clone()
        .unwrap_or_else(DesktopStorageProvider::default_path);
    let storage = Arc::new(DesktopStorageProvider::open(storage_path));
    let (persistence, _failures) = PersistenceService::new(storage, config.save_debounce);

    let memo = persistence.get();
    log_summary(&memo, false);

    // Write back in the current record layout.
    persistence.set(&memo);
    if let Err(e) = persistence.flush() {
        let failure = SaveFailure::from(e);
        tracing::error!("{}", failure.user_message());
    }

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use stratmemo_player::infrastructure::platform::LocalStorageProvider;
    use stratmemo_player::{PersistenceService, PlayerConfig};

    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::info!("Starting Strategy Memo Player");

    let config = PlayerConfig::default();
    let (persistence, _failures) =
        PersistenceService::new(Arc::new(LocalStorageProvider), config.save_debounce);
    log_summary(&persistence.get(), false);
}

fn log_summary(memo: &StrategyMemo, read_only: bool) {
    let details: usize = memo.game_maps().iter().map(|map| map.details().len()).sum();
    let shapes: usize = memo.game_maps().iter().map(|map| map.shapes().len()).sum();
    tracing::info!(
        game_name = memo.game_name(),
        maps = memo.game_maps().len(),
        details,
        shapes,
        preparations = memo.preparations().len(),
        memos = memo.memos().len(),
        read_only,
        "Strategy memo loaded"
    );
}

#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
