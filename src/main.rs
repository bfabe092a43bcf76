fn main() -> anyhow::Result<()> {
    env_logger::init();
    dataops_rs::run()?;
    Ok(())
}
