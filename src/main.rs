use life_term::{
    app::App,
    config::{CliArgs, Config},
    draw,
};

use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG overrides; stderr keeps logs off the board
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = CliArgs::parse();
    let config = match Config::load_with_args(&args) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    log::debug!("{:?}", config);

    let app = App::new(config)?;
    draw::run(app)?;
    Ok(())
}
