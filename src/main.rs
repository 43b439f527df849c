fn main() {
    if let Err(e) = graphsearch::driver() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
