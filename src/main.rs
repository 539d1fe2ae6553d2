fn main() -> anyhow::Result<()> {
    sc_console::run()
}
