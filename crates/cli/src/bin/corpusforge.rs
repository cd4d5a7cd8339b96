fn main() -> anyhow::Result<()> {
    corpusforge_cli::run()
}
