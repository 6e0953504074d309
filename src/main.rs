fn main() {
    if let Err(error) = bench_avg::run_cli() {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
