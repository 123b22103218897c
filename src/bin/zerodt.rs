fn main() -> anyhow::Result<()> {
    zerodt::cli::run_cli()
}
