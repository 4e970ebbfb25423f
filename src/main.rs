fn main() -> anyhow::Result<()> {
    depthchart::cli::run()
}
