use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = margin_api::Args::parse();
	margin_api::run(args).await
}
