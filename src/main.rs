fn main() {
    casework::cli::run();
}
