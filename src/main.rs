fn main() {
    if let Err(e) = pulpit_lib::run() {
        eprintln!("pulpit: {e}");
        std::process::exit(1);
    }
}
