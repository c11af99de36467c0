use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = liftoff_browse::Args::parse();

	liftoff_browse::run(args).await
}
