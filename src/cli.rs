//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::feed::Route;

#[derive(Debug, Clone, Parser)]
#[command(name = "conduit-feed", version, about = "Browse a Conduit article feed in the terminal")]
pub struct Cli {
    /// Override the API base URL from the config file
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,

    /// Only show articles with this tag
    #[arg(long)]
    pub tag: Option<String>,

    /// Only show articles written by this user
    #[arg(long, value_name = "NAME")]
    pub author: Option<String>,

    /// Only show articles favorited by this user
    #[arg(long, value_name = "NAME")]
    pub favorited: Option<String>,

    /// Zero-based page to open on
    #[arg(long, default_value_t = 0)]
    pub page: usize,

    /// JSON file `{"articles": [...], "articlesCount": N}` shown until the
    /// first fetch completes
    #[arg(long, value_name = "FILE")]
    pub seed: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the fetch URL for the requested page and exit
    #[arg(long)]
    pub print_url: bool,
}

impl Cli {
    /// Route described by the filter flags.
    pub fn route(&self) -> Route {
        Route::from_filters(
            self.tag.as_deref(),
            self.author.as_deref(),
            self.favorited.as_deref(),
        )
    }
}
