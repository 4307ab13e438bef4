fn main() {
    // Run the CLI
    tocify::cli::run();
}
