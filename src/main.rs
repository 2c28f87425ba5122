// Bundled values fill in whatever the environment leaves unset; see
// `ClientConfig::load`.
#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv() {
    // .env next to the binary (desktop dev)
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            eprintln!("ignoring .env: {err}");
        }
    }
}

// No process environment on wasm.
#[cfg(target_arch = "wasm32")]
fn load_dotenv() {}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, fmt};

    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
}

// The web renderer installs its own console logger.
#[cfg(target_arch = "wasm32")]
fn init_tracing() -> anyhow::Result<()> {
    Ok(())
}

fn main() {
    load_dotenv();
    if let Err(err) = init_tracing() {
        eprintln!("logging disabled: {err}");
    }
    dioxus::launch(horoskops::ui::App);
}
