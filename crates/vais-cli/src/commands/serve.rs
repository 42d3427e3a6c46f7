use vais_api::{Server, ServerConfig};

use crate::cli::ServeArgs;

/// File, then environment, then flags.
pub fn resolve_server_config(args: &ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = ServerConfig::load(args.config.as_deref())?;
    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(dir) = &args.static_dir {
        config.static_dir = dir.clone();
    }
    if let Some(message) = &args.ping_message {
        config.ping_message = message.clone();
    }
    Ok(config)
}

/// Run the HTTP server until Ctrl-C.
pub async fn run_serve(args: &ServeArgs) -> anyhow::Result<()> {
    let config = resolve_server_config(args)?;
    tracing::info!(
        addr = %config.bind_address(),
        static_dir = %config.static_dir.display(),
        "starting server"
    );
    Server::new(config).run().await?;
    Ok(())
}
