use clap::Parser;
use color_eyre::eyre::{eyre, Report, Result};
use proptable::{evaluate, read, to_rpn, LogicError, Node};
use std::io::BufRead;

#[derive(Parser)]
#[command(author, version, about = "Truth tables for propositional logic expressions")]
struct Cli {
	/// Expressions to evaluate, read one per line from stdin when absent
	expressions: Vec<String>,

	/// Print each expression in reverse polish notation
	#[arg(long)]
	rpn: bool,

	/// Print each expression tree in prefix form
	#[arg(long)]
	tree: bool,

	/// Refuse expressions with more free variables than this
	#[arg(long, value_name = "INT", default_value_t = 16)]
	max_variables: usize,

	/// More log output, repeatable
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

// points at the offending column under the source
fn locate(source: &str, error: LogicError) -> Report {
	eyre!("{}\n  {}\n  {}^", error, source, " ".repeat(error.position()))
}

fn disp(source: &str, cli: &Cli) -> Result<()> {
	let tokens = read(source).map_err(|e| locate(source, e))?;
	if cli.tree {
		if let Some(root) = Node::build(&tokens.tokens).map_err(|e| locate(source, e))? {
			println!("{}", root);
		}
	}
	let rpn = to_rpn(tokens).map_err(|e| locate(source, e))?;
	if cli.rpn {
		println!("{}", rpn.source_text());
	}
	if rpn.free_variables.len() > cli.max_variables {
		return Err(eyre!(
			"{} free variables, at most {} allowed",
			rpn.free_variables.len(),
			cli.max_variables
		));
	}
	let table = evaluate(rpn).map_err(|e| locate(source, e))?;
	print!("{}", table);
	println!();
	Ok(())
}

fn main() -> Result<()> {
	color_eyre::install()?;

	let cli = Cli::parse();

	let level = match cli.verbose {
		0 => simplelog::LevelFilter::Warn,
		1 => simplelog::LevelFilter::Info,
		2 => simplelog::LevelFilter::Debug,
		_ => simplelog::LevelFilter::Trace,
	};
	simplelog::TermLogger::init(
		level,
		simplelog::Config::default(),
		simplelog::TerminalMode::Mixed,
		simplelog::ColorChoice::Auto,
	)?;

	let expressions = if cli.expressions.is_empty() {
		log::info!("Reading expressions from stdin");
		std::io::stdin().lock().lines().collect::<std::io::Result<Vec<_>>>()?
	} else {
		cli.expressions.clone()
	};

	let mut failed = 0;
	for source in expressions.iter().map(|line| line.trim()).filter(|line| !line.is_empty()) {
		println!("{}", source);
		if let Err(report) = disp(source, &cli) {
			log::error!("{:?}", report);
			failed += 1;
		}
	}

	if failed > 0 {
		return Err(eyre!("{} expression(s) failed", failed));
	}
	Ok(())
}
