fn main() {
    if let Err(e) = report_charts::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
