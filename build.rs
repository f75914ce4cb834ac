fn main() {
    // Process LALRPOP grammar
    lalrpop::process_root().unwrap();
}
