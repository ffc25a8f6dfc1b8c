use loginkit::api;
use loginkit::logger::*;
use loginkit::server::*;
use loginkit::settings::*;
use std::fs;
use tokio::signal;
use warp::Filter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let logger = Logger::new_bootstrap();

    let project_settings = parse_settings(cli.settings.as_deref())?;
    info!(?project_settings);
    logger.reload_from_config(&LogConfig::from(&project_settings.log))?;

    let address: std::net::SocketAddr = project_settings.http.address.parse()?;

    let server = Server::try_new(&project_settings).await?;

    let routes = api::public::routes()
        .recover(api::public::recover_error)
        .with(warp::trace::request());

    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("could not register SIGINT: {}", e);
        }
    };

    match (&project_settings.http.cert_path, &project_settings.http.key_path) {
        (Some(cert_path), Some(key_path)) => {
            for (what, path) in [("cert", cert_path), ("key", key_path)] {
                if !fs::metadata(path)?.is_file() {
                    return Err(anyhow::anyhow!(
                        "TLS {} is not a regular file: {:?}",
                        what,
                        path
                    ));
                }
            }
            info!(%address, "listening (tls)");
            warp::serve(routes)
                .tls()
                .cert_path(cert_path)
                .key_path(key_path)
                .bind_with_graceful_shutdown(address, shutdown)
                .1
                .await;
        }
        (None, None) => {
            info!(%address, "listening");
            let (_, serving) =
                warp::serve(routes).try_bind_with_graceful_shutdown(address, shutdown)?;
            serving.await;
        }
        _ => {
            return Err(anyhow::anyhow!(
                "http.cert_path and http.key_path must be set together"
            ));
        }
    }

    let shutdown_timeout = std::time::Duration::from_secs(10);
    match tokio::time::timeout(shutdown_timeout, server.shutdown()).await {
        Ok(_) => info!("server shutdown successfully"),
        Err(_) => error!("server shutdown timed out"),
    }

    Ok(())
}
