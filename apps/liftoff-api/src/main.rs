use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = liftoff_api::Args::parse();

	liftoff_api::run(args).await
}
