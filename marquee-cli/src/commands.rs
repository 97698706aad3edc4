//! CLI command implementations

use anyhow::anyhow;
use clap::Subcommand;
use marquee_core::MarqueeConfig;
use marquee_search::{CatalogClient, MovieRecord, SearchClient, SortKey};
use marquee_suggest::{HttpTitleSource, TitleIndex};

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Suggest titles completing a partial query
    Suggest {
        /// The query as typed so far
        term: String,
        /// Endpoint serving the autocomplete title list
        #[arg(long)]
        titles_url: Option<String>,
    },
    /// Search movies by free-text query
    Search {
        /// Search query
        query: String,
        /// Base URL of the movie API
        #[arg(long)]
        api_url: Option<String>,
    },
    /// Browse the movie catalog
    Browse {
        /// Genre to filter by ("all" for no filter)
        #[arg(short, long, default_value = "all")]
        genre: String,
        /// Sort order: score or date
        #[arg(short, long, default_value = "score")]
        sort: String,
        /// Page to show (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,
        /// Base URL of the movie API
        #[arg(long)]
        api_url: Option<String>,
    },
    /// List the genres the catalog can filter by
    Genres {
        /// Base URL of the movie API
        #[arg(long)]
        api_url: Option<String>,
    },
}

/// Handle the CLI command
///
/// # Errors
/// Returns appropriate error based on the command that fails
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    let config = MarqueeConfig::default();

    match command {
        Commands::Suggest { term, titles_url } => suggest(&config, &term, titles_url).await,
        Commands::Search { query, api_url } => search(&config, &query, api_url).await,
        Commands::Browse {
            genre,
            sort,
            page,
            api_url,
        } => browse(&config, &genre, &sort, page, api_url).await,
        Commands::Genres { api_url } => genres(&config, api_url).await,
    }
}

/// Load the title corpus and print highlighted suggestions
async fn suggest(
    config: &MarqueeConfig,
    term: &str,
    titles_url: Option<String>,
) -> anyhow::Result<()> {
    let endpoint = titles_url.as_deref().unwrap_or(config.network.titles_url);
    let source = HttpTitleSource::new(&config.network, endpoint)?;
    let index = TitleIndex::new(Box::new(source), config.suggest.clone());

    index.load().await?;

    let entries = index.suggestions(term);
    if entries.is_empty() {
        println!("No suggestions for '{term}'");
        return Ok(());
    }

    for entry in entries {
        let (prefix, matched, suffix) = entry.parts();
        if matched.is_empty() {
            println!("  {prefix}");
        } else {
            println!("  {prefix}[{matched}]{suffix}");
        }
    }
    Ok(())
}

/// Run a full-text search and print result cards
async fn search(config: &MarqueeConfig, query: &str, api_url: Option<String>) -> anyhow::Result<()> {
    let base_url = api_url.as_deref().unwrap_or(config.network.api_base_url);
    let client = SearchClient::new(&config.network, base_url)?;

    let page = client.search(query).await?;
    if page.results.is_empty() {
        println!("No results for '{query}'");
        return Ok(());
    }

    println!(
        "{} results for '{query}' (page {}/{})",
        page.total, page.page, page.total_pages
    );
    for movie in &page.results {
        print_movie(movie);
    }
    Ok(())
}

/// Print one page of the catalog for a genre and sort order
async fn browse(
    config: &MarqueeConfig,
    genre: &str,
    sort: &str,
    page: usize,
    api_url: Option<String>,
) -> anyhow::Result<()> {
    let sort: SortKey = sort.parse().map_err(|e: String| anyhow!(e))?;
    let base_url = api_url.as_deref().unwrap_or(config.network.api_base_url);
    let client = CatalogClient::new(&config.network, &config.catalog, base_url)?;

    let listing = client.page(genre, sort, page).await?;
    println!(
        "Catalog {genre}/{sort}: page {}/{} ({} movies)",
        listing.page, listing.total_pages, listing.total
    );
    for movie in &listing.results {
        print_movie(movie);
    }
    Ok(())
}

/// Print the genre list
async fn genres(config: &MarqueeConfig, api_url: Option<String>) -> anyhow::Result<()> {
    let base_url = api_url.as_deref().unwrap_or(config.network.api_base_url);
    let client = SearchClient::new(&config.network, base_url)?;

    let genres = client.genres().await?;
    println!("{}", genres.join(", "));
    Ok(())
}

/// One result card on the terminal
fn print_movie(movie: &MovieRecord) {
    match movie.release_year() {
        Some(year) => println!("  {} ({year})", movie.title),
        None => println!("  {}", movie.title),
    }
    if let Some(score) = movie.score {
        println!("    score: {score:.1}");
    }
    if let Some(plot) = &movie.plot {
        println!("    {plot}");
    }
    if let Some(url) = &movie.url {
        println!("    {url}");
    }
}
