use anyhow::{Context, Result, bail};
use chatmark_config::{Config, OutputFormat};
use chatmark_engine::{
    ContainerKind, Document, Node, parse_bytes, parsing::snapshot::outline,
};
use std::{
    env,
    io::{self, Read, Write},
    path::PathBuf,
    process,
};

const USAGE: &str =
    "Usage: chatmark-cli [--format outline|text|ranges] [--config PATH] [--save-config] [FILE]";

#[derive(Debug, Default, PartialEq)]
struct Args {
    format: Option<OutputFormat>,
    config: Option<PathBuf>,
    /// `None` or `-` reads stdin.
    input: Option<PathBuf>,
    /// Write the effective config instead of parsing input.
    save_config: bool,
    help: bool,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => parsed.help = true,
            "--save-config" => parsed.save_config = true,
            "--format" => {
                let value = args.next().context("--format needs a value")?;
                parsed.format = Some(value.parse()?);
            }
            "--config" => {
                let value = args.next().context("--config needs a value")?;
                parsed.config = Some(PathBuf::from(value));
            }
            _ if arg.starts_with("--format=") => {
                parsed.format = Some(arg["--format=".len()..].parse()?);
            }
            _ if arg.starts_with("--config=") => {
                parsed.config = Some(PathBuf::from(&arg["--config=".len()..]));
            }
            _ if arg.starts_with("--") => bail!("Unknown option {arg}"),
            _ => {
                if parsed.input.is_some() {
                    bail!("Only one input file may be given");
                }
                parsed.input = Some(PathBuf::from(arg));
            }
        }
    }

    Ok(parsed)
}

fn load_config(args: &Args) -> Result<Config> {
    let config_path = args.config.clone().unwrap_or_else(Config::config_path);
    log::info!("Config path: {}", config_path.display());

    let loaded = Config::load_from_path(&config_path)?;
    if loaded.is_none() && args.config.is_some() && !args.save_config {
        bail!("Config file '{}' does not exist", config_path.display());
    }
    Ok(loaded.unwrap_or_default())
}

fn read_input(input: Option<&PathBuf>) -> Result<Vec<u8>> {
    match input {
        Some(path) if path.as_os_str() != "-" => std::fs::read(path)
            .with_context(|| format!("Failed to read '{}'", path.display())),
        _ => {
            let mut buf = vec![];
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn is_code_span(node: &Node) -> bool {
    matches!(
        node,
        Node::Container {
            kind: ContainerKind::CodeSpan { .. },
            ..
        }
    )
}

/// Decoded text, one block of lines per paragraph.
fn render_text(doc: &Document) -> String {
    let paragraphs: Vec<String> = doc
        .paragraphs()
        .iter()
        .map(|para| {
            let mut out = String::new();
            for node in para.children() {
                match node {
                    Node::LineBreak { .. } => out.push('\n'),
                    Node::Container {
                        kind: ContainerKind::CodeSpan { content },
                        ..
                    } => out.push_str(content),
                    _ => {
                        if let Some(text) = node.text() {
                            out.push_str(&text);
                        }
                    }
                }
            }
            out.push('\n');
            out
        })
        .collect();
    paragraphs.join("\n")
}

/// `start..end<TAB>value` for every text leaf, in inspect order.
fn render_ranges(doc: &Document) -> String {
    let mut out = String::new();
    doc.inspect(|node| {
        if let Some(text) = node.text() {
            let sp = node.span();
            out.push_str(&format!("{}..{}\t{}\n", sp.start, sp.end, text));
        }
        !is_code_span(node)
    });
    out
}

fn render(doc: &Document, format: OutputFormat) -> String {
    match format {
        OutputFormat::Outline => outline(&doc.root),
        OutputFormat::Text => render_text(doc),
        OutputFormat::Ranges => render_ranges(doc),
    }
}

/// Saves `config` with the format chosen on the command line, if any.
fn save_config(args: &Args, config: Config) -> Result<()> {
    let config_path = args.config.clone().unwrap_or_else(Config::config_path);
    let config = Config {
        format: args.format.unwrap_or(config.format),
        ..config
    };
    config
        .save_to_path(&config_path)
        .with_context(|| format!("Failed to save config to '{}'", config_path.display()))?;
    log::info!("Saved config to {}", config_path.display());
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    if args.save_config {
        return save_config(&args, config);
    }
    let format = args.format.unwrap_or(config.format);
    log::debug!("Output format: {format}");

    let bytes = read_input(args.input.as_ref())?;
    let doc = parse_bytes(&bytes, &config.inline).context("Input is not valid UTF-8")?;

    io::stdout()
        .lock()
        .write_all(render(&doc, format).as_bytes())
        .context("Failed to write output")?;
    Ok(())
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    if args.help {
        println!("{USAGE}");
        return;
    }

    if let Err(e) = run(args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
