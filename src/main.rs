#[tokio::main]
async fn main() {
    if let Err(err) = qe_web::serve().await {
        tracing::error!(%err, "qe-web-server failed");
        eprintln!("qe-web-server: {err}");
        std::process::exit(1);
    }
}
