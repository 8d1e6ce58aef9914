#[tokio::main]
async fn main() {
    if let Err(e) = clinical_reports::run().await {
        eprintln!("clinical-reports: {e}");
        std::process::exit(1);
    }
}
