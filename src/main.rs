use roofkit::init_logging;

fn main() -> anyhow::Result<()> {
    init_logging()?;

    roofkit::cli::run(std::env::args_os())
}
