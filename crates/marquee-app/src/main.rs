use clap::Parser;
use marquee_app::cli::{self, Cli};
use marquee_app::{build_store, logger};
use marquee_client::{build_client, User};
use marquee_config::{AppConfig, ProfileConfig};

fn profile_user(profile: &ProfileConfig) -> User {
    User::new(&profile.id, &profile.name, &profile.email)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let log_file = logger::init()?;
    log::info!("Starting marquee, logging to {}", log_file.display());

    let config = match &args.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    log::debug!("Using {:?} backend", config.api.backend);

    let api = build_client(&config.api)?;
    let user = config.user.as_ref().map(profile_user);

    let mut store = build_store(api, user);

    let page = cli::run(&mut store, &args.command).await;
    print!("{}", page);

    log::info!("Exiting marquee");
    Ok(())
}
