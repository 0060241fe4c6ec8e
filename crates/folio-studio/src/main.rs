//! folio command-line front end.
//!
//! Usage:
//!   folio templates
//!   folio compose --template ebook --add paragraph="Chapter 2" --move 2:1
//!   folio preview --template report --author "Amy"
//!   folio keywords --query passive --niche finance
//!   folio titles --topic "passive income" --type listicle
//!   folio niches --timeframe quarter
//!   folio plans
//!
//! Logs go to stderr; set RUST_LOG to change the level.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

use folio_market::{format_volume, growth_label, parse_choice, parse_niche, parse_timeframe};
use folio_studio::{LatencyConfig, Studio, TextPreview, load_config, load_or_default};
use folio_types::{BlockKind, NicheCategory};

/// Block document editor with market-intelligence widgets.
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Block document editor with market-intelligence widgets")]
struct Args {
    /// Config file (defaults to ~/.config/folio/studio.ron)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Skip the simulated network latency
    #[arg(long, global = true)]
    instant: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List document templates
    Templates,
    /// Build a document from a template and print its markup
    Compose(ComposeArgs),
    /// Build a document and print its preview page
    Preview(ComposeArgs),
    /// Keyword research table
    Keywords {
        /// Case-insensitive substring filter
        #[arg(short, long, default_value = "")]
        query: String,
        /// Niche selector (all, finance, fitness, marketing, self-improvement, technology)
        #[arg(long, default_value = "all")]
        niche: String,
    },
    /// Scored title suggestions
    Titles {
        #[arg(long, default_value = "")]
        topic: String,
        /// how-to, listicle, guide, case-study, tutorial or all
        #[arg(long = "type", default_value = "all")]
        title_type: String,
        /// curiosity, urgency, value, fear, aspiration or all
        #[arg(long, default_value = "all")]
        appeal: String,
        /// Comma-separated focus keywords
        #[arg(long, default_value = "")]
        keywords: String,
    },
    /// Niche opportunity scores and insights
    Niches {
        /// week, month or quarter
        #[arg(long, default_value = "month")]
        timeframe: String,
    },
    /// Subscription plans
    Plans,
}

#[derive(clap::Args, Debug)]
struct ComposeArgs {
    /// Template id
    #[arg(short, long, default_value = "blank")]
    template: String,

    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    author: Option<String>,

    /// Append a block: `kind=content`, or just `kind` for its placeholder (repeatable)
    #[arg(long = "add", value_parser = parse_add)]
    add: Vec<(BlockKind, Option<String>)>,

    /// Move a block: `from:to`, applied after every --add (repeatable)
    #[arg(long = "move", value_parser = parse_move)]
    moves: Vec<(usize, usize)>,

    /// Print the document snapshot as JSON instead of markup
    #[arg(long)]
    json: bool,
}

fn parse_add(s: &str) -> std::result::Result<(BlockKind, Option<String>), String> {
    let (kind, content) = match s.split_once('=') {
        Some((kind, content)) => (kind, Some(content.to_string())),
        None => (s, None),
    };
    let kind = BlockKind::from_str(kind.trim()).ok_or_else(|| format!("unknown block kind '{kind}'"))?;
    Ok((kind, content))
}

fn parse_move(s: &str) -> std::result::Result<(usize, usize), String> {
    let (from, to) = s
        .split_once(':')
        .ok_or_else(|| format!("expected from:to, got '{s}'"))?;
    let from = from.trim().parse().map_err(|e| format!("bad source index: {e}"))?;
    let to = to.trim().parse().map_err(|e| format!("bad destination index: {e}"))?;
    Ok((from, to))
}

fn compose(studio: &mut Studio, args: &ComposeArgs) -> Result<()> {
    studio.choose_template(&args.template)?;
    let session = studio.session_mut();
    if let Some(title) = &args.title {
        session.set_title(title.clone());
    }
    if let Some(author) = &args.author {
        session.set_author(author.clone());
    }
    for (kind, content) in &args.add {
        match content {
            Some(content) => session.add_block_with(*kind, content.clone())?,
            None => session.add_block(*kind)?,
        };
    }
    for &(from, to) in &args.moves {
        session.reorder(from, Some(to))?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_or_default(path),
        None => load_config(),
    };
    if args.instant {
        config.latency = LatencyConfig::instant();
    }
    let mut studio = Studio::with_defaults(config)?;

    match args.command {
        Command::Templates => {
            for t in studio.templates().all() {
                println!("{:<12} {:<16} {}", t.id, t.name, t.description);
            }
        }

        Command::Compose(compose_args) => {
            compose(&mut studio, &compose_args)?;
            if compose_args.json {
                println!("{}", studio.session().document().to_json()?);
            } else {
                println!("{}", studio.session().markup());
            }
        }

        Command::Preview(compose_args) => {
            compose(&mut studio, &compose_args)?;
            let page = studio.preview(chrono::Local::now().date_naive())?;
            let renderer = TextPreview::new(&studio.config().preview);
            print!("{}", renderer.to_text(&page));
        }

        Command::Keywords { query, niche } => {
            let niche = parse_niche(&niche)?;
            if niche != NicheCategory::All {
                studio.select_keyword_niche(niche).await;
            }
            let widget = studio.keywords_mut();
            widget.set_query(query);
            if let Some(error) = widget.feed().error() {
                eprintln!("error: {error}");
            }
            println!("niche: {}", widget.niche().label());
            for m in widget.visible() {
                println!(
                    "{:<34} {:>8} {:<8} {} ${:.2}",
                    m.keyword,
                    format_volume(m.search_volume),
                    m.competition.label(),
                    m.trend.arrow(),
                    m.cost_per_click
                );
            }
        }

        Command::Titles {
            topic,
            title_type,
            appeal,
            keywords,
        } => {
            let query = folio_market::TitleQuery::new(topic)
                .with_type(parse_choice("type", &title_type)?)
                .with_appeal(parse_choice("appeal", &appeal)?)
                .with_keyword_list(&keywords);
            studio.titles_mut().set_query(query);
            if studio.generate_titles().await.is_none() {
                println!("Enter a topic to generate titles.");
                return Ok(());
            }
            if let Some(error) = studio.titles().feed().error() {
                eprintln!("error: {error}");
            }
            for c in studio.titles().results() {
                println!(
                    "{:>3} {:<10} {:<11} {:<10} {}",
                    c.score,
                    format!("{:?}", c.tier()),
                    c.title_type.label(),
                    c.emotional_appeal.label(),
                    c.title
                );
            }
        }

        Command::Niches { timeframe } => {
            let timeframe = parse_timeframe(&timeframe)?;
            studio.select_timeframe(timeframe).await;
            let widget = studio.niches();
            if let Some(error) = widget.feed().error() {
                eprintln!("error: {error}");
            }
            println!("timeframe: {}", widget.timeframe());
            for n in &widget.report().niches {
                println!("{:<20} {:>3} {:>12} {}", n.name, n.value, growth_label(n.growth_percent), n.color);
            }
            let summary = widget.summary();
            println!();
            for insight in &summary.top {
                println!(
                    "{:<20} {:>5.1}% share  {:<8} {}",
                    insight.name,
                    insight.share_percent,
                    insight.growth.as_str(),
                    insight.growth_label()
                );
            }
            if let Some(top) = &summary.top_opportunity {
                println!("top opportunity: {top}");
            }
            if let Some(fastest) = &summary.fastest_growing {
                println!("fastest growing: {fastest}");
            }
        }

        Command::Plans => {
            for plan in studio.plans().all() {
                let badge = if plan.popular { " (most popular)" } else { "" };
                println!("{} {}{}", plan.name, plan.price_label(), badge);
                for feature in &plan.features {
                    println!("  - {feature}");
                }
            }
        }
    }

    Ok(())
}
