use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use pagecmp_report::compare_and_export;
use pagecmp_scraper::{collect_all, load_lines, load_page_specs, load_user_agents};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::runtime;

mod config;

use config::RunConfig;

/// Styled page content comparator
#[derive(Debug, Parser)]
#[clap(version)]
pub struct Args {
    /// Optional run yaml configuration file
    #[clap(env = "PAGECMP_CONFIG", long)]
    pub config: Option<PathBuf>,
    /// Override the user agent list file
    #[clap(long)]
    pub user_agents: Option<PathBuf>,
    /// Override the proxy list file
    #[clap(long)]
    pub proxies: Option<PathBuf>,
    /// Override the base page spec file
    #[clap(long)]
    pub base_pages: Option<PathBuf>,
    /// Override the compare page spec file
    #[clap(long)]
    pub compare_pages: Option<PathBuf>,
    /// Override the output spreadsheet file
    #[clap(long, short)]
    pub output_file: Option<PathBuf>,
    /// When quiet no logs are outputted
    #[clap(long, short)]
    pub quiet: bool,
}

impl TryFrom<&Args> for RunConfig {
    type Error = anyhow::Error;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        let mut conf = if let Some(file) = args.config.as_ref().map(File::open) {
            serde_yaml::from_reader(file?)?
        } else {
            RunConfig::default()
        };
        if let Some(user_agents) = &args.user_agents {
            conf.user_agents_file = user_agents.clone();
        }
        if let Some(proxies) = &args.proxies {
            conf.proxies_file = proxies.clone();
        }
        if let Some(base_pages) = &args.base_pages {
            conf.base_pages_file = base_pages.clone();
        }
        if let Some(compare_pages) = &args.compare_pages {
            conf.compare_pages_file = compare_pages.clone();
        }
        if let Some(output_file) = &args.output_file {
            conf.output_file = output_file.clone();
        }
        Ok(conf)
    }
}

pub fn run(conf: &RunConfig) -> anyhow::Result<()> {
    let user_agents = load_user_agents(&conf.user_agents_file)?;
    let proxies = load_lines(&conf.proxies_file)?;
    let base_specs = load_page_specs(&conf.base_pages_file)?;
    let compare_specs = load_page_specs(&conf.compare_pages_file)?;

    let mut rng = StdRng::from_entropy();
    let rt = runtime::Builder::new_multi_thread().enable_all().build()?;
    let (base, other) = rt.block_on(async {
        let base = collect_all(&base_specs, &user_agents, &proxies, &mut rng).await;
        let other = collect_all(&compare_specs, &user_agents, &proxies, &mut rng).await;
        (base, other)
    });

    compare_and_export(&base, &other, &conf.output_file)?;
    log::info!("Report written to {}", conf.output_file.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if !args.quiet {
        env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    }
    let conf = (&args).try_into()?;
    run(&conf)
}
