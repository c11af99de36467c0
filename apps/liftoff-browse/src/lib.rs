//! Terminal front end for the launch query service.

pub mod render;

use clap::Parser;
use color_eyre::eyre;
use tokio::{
	io::{self, AsyncBufRead, AsyncBufReadExt, BufReader},
	time::{self, Instant},
};

use liftoff_client::{
	DEFAULT_PAGE_SIZE, DebounceToken, Debouncer, HttpLaunchesApi, LaunchesApi, PageRequest,
	SEARCH_DEBOUNCE, Session,
};
use liftoff_domain::{LaunchFilter, StatusFilter};

#[derive(Debug, Parser)]
#[command(
	version = liftoff_cli::VERSION,
	rename_all = "kebab",
	styles = liftoff_cli::styles(),
)]
pub struct Args {
	#[arg(long, value_name = "URL", default_value = "http://127.0.0.1:5000")]
	pub api_base: String,
	#[arg(long, value_name = "TEXT")]
	pub search: Option<String>,
	#[arg(long, value_name = "YEAR")]
	pub year: Option<String>,
	#[arg(long, value_name = "STATUS")]
	pub status: Option<String>,
	/// Pages to load before printing. The first page is always loaded.
	#[arg(long, value_name = "N", default_value_t = 1)]
	pub pages: usize,
	#[arg(long, value_name = "N", default_value_t = DEFAULT_PAGE_SIZE)]
	pub page_size: usize,
	#[arg(long, value_name = "MS", default_value_t = 10_000)]
	pub timeout_ms: u64,
	#[arg(long, value_name = "FILTER", default_value = "warn")]
	pub log_level: String,
	/// Keep reading commands from stdin after the first render.
	#[arg(long, short = 'i')]
	pub interactive: bool,
}

/// A line of interactive input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
	/// Free text replaces the search term once typing pauses.
	Search(String),
	Year(Option<String>),
	Status(Option<StatusFilter>),
	More,
	Clear,
	Quit,
}
impl Command {
	pub fn parse(line: &str) -> eyre::Result<Self> {
		let line = line.trim();
		let Some(rest) = line.strip_prefix(':') else {
			return Ok(Self::Search(line.to_string()));
		};
		let (name, arg) = rest.split_once(' ').unwrap_or((rest, ""));
		let arg = arg.trim();

		match name {
			"more" | "m" => Ok(Self::More),
			"clear" => Ok(Self::Clear),
			"quit" | "q" => Ok(Self::Quit),
			"year" => Ok(Self::Year((!arg.is_empty()).then(|| arg.to_string()))),
			"status" if arg.is_empty() => Ok(Self::Status(None)),
			"status" => Ok(Self::Status(Some(arg.parse()?))),
			other => Err(eyre::eyre!("Unknown command ':{other}'.")),
		}
	}
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	liftoff_cli::init_tracing(&args.log_level);

	let api = HttpLaunchesApi::new(&args.api_base, args.timeout_ms)?;
	let filters =
		LaunchFilter::parse(args.search.as_deref(), args.year.as_deref(), args.status.as_deref())?;
	let years = api.fetch_years().await.unwrap_or_else(|err| {
		tracing::warn!(error = %err, "Failed to load year options.");

		Vec::new()
	});
	let mut session = Session::new(args.page_size);
	let first = match session.set_filters(filters) {
		Some(request) => request,
		None => session.start(),
	};

	session.load(&api, first).await;

	for _ in 1..args.pages {
		let Some(next) = session.near_bottom() else {
			break;
		};

		session.load(&api, next).await;
	}

	print!("{}", render::session(&session, &years));

	if args.interactive {
		interact(&api, &mut session, &years, BufReader::new(io::stdin())).await?;
	}

	Ok(())
}

/// Applies [`Command`]s read from `input` until `:quit` or end of input.
///
/// Search text is held back until [`SEARCH_DEBOUNCE`] passes without another line; a search
/// still pending at end of input is applied immediately.
pub async fn interact<R>(
	api: &dyn LaunchesApi,
	session: &mut Session,
	years: &[String],
	input: R,
) -> color_eyre::Result<()>
where
	R: AsyncBufRead + Unpin,
{
	let debouncer = Debouncer::new(SEARCH_DEBOUNCE);
	let mut lines = input.lines();
	let mut pending: Option<(DebounceToken, String)> = None;

	loop {
		let deadline = pending.as_ref().map(|(token, _)| token.deadline());

		tokio::select! {
			line = lines.next_line() => {
				let Some(line) = line? else {
					if let Some((_, text)) = pending.take() {
						let request = session.set_search(&text);

						load_and_render(api, session, years, request).await;
					}

					break;
				};
				let command = match Command::parse(&line) {
					Ok(command) => command,
					Err(err) => {
						eprintln!("{err}");

						continue;
					},
				};
				let request = match command {
					Command::Search(text) => {
						pending = Some((debouncer.schedule(), text));

						None
					},
					Command::Year(year) => {
						let filters = LaunchFilter::new(
							&session.filters().search,
							year,
							session.filters().status,
						);

						session.set_filters(filters)
					},
					Command::Status(status) => {
						let filters = LaunchFilter { status, ..session.filters().clone() };

						session.set_filters(filters)
					},
					Command::More => session.near_bottom(),
					Command::Clear => {
						debouncer.cancel();
						pending = None;

						session.clear_filters()
					},
					Command::Quit => break,
				};

				load_and_render(api, session, years, request).await;
			},
			_ = quiet_period(deadline) => {
				if let Some((token, text)) = pending.take()
					&& token.is_current()
				{
					let request = session.set_search(&text);

					load_and_render(api, session, years, request).await;
				}
			},
		}
	}

	Ok(())
}

async fn load_and_render(
	api: &dyn LaunchesApi,
	session: &mut Session,
	years: &[String],
	request: Option<PageRequest>,
) {
	let Some(request) = request else {
		return;
	};

	session.load(api, request).await;

	println!();
	print!("{}", render::session(session, years));
}

async fn quiet_period(deadline: Option<Instant>) {
	match deadline {
		Some(deadline) => time::sleep_until(deadline).await,
		None => std::future::pending().await,
	}
}
