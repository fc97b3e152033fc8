use bloomwatch::models::popup::ClickEvent;
use bloomwatch::{Cli, Command, OutputMode, publish, render};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.map_config();
    config.validate()?;
    log::debug!("Map config: {:?}", config);

    let artifact = render(&config);
    match cli.command {
        Command::Render { output } => publish(artifact, OutputMode::StaticFile(output)).await,
        Command::Serve { port } => publish(artifact, OutputMode::Embedded { port }).await,
        Command::Popup { lat, lng } => {
            let click = ClickEvent { lat, lng };
            click.validate()?;
            let popup = artifact.popup.evaluate(click);
            println!("{}", serde_json::to_string_pretty(&popup)?);
            Ok(())
        }
    }
}
