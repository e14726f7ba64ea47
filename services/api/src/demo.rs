use crate::infra::{render_badges, ScoredListingView};
use clap::Args;
use locality_scoring::config::ScoringConfig;
use locality_scoring::error::AppError;
use locality_scoring::scoring::{
    load_properties, LocalityScoringService, PropertyInput, ScoreBreakdown,
};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct ScoringArgs {
    /// Disable the random jitter so repeated runs print identical scores
    #[arg(long)]
    pub(crate) no_variance: bool,
    /// Seed the jitter generator for reproducible output
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Pin the year used for construction-age decay (defaults to the current year)
    #[arg(long)]
    pub(crate) reference_year: Option<i32>,
}

impl ScoringArgs {
    fn build_service(&self) -> LocalityScoringService {
        let config = ScoringConfig {
            variance: !self.no_variance,
            seed: self.seed,
            ..ScoringConfig::default()
        };
        let service = config.build_service();
        match self.reference_year {
            Some(year) => service.with_reference_year(year),
            None => service,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Listing identifier
    #[arg(long, default_value = "cli-listing")]
    pub(crate) id: String,
    /// Free-text address or area description
    #[arg(long)]
    pub(crate) location: String,
    /// Asking price (INR)
    #[arg(long)]
    pub(crate) price: f64,
    /// Floor area in square feet
    #[arg(long)]
    pub(crate) area: Option<f64>,
    /// Property category (villa, house, apartment, condo, townhouse, commercial, land)
    #[arg(long = "type", default_value = "apartment")]
    pub(crate) property_type: String,
    /// Construction year
    #[arg(long)]
    pub(crate) year_built: Option<i32>,
    /// Print the per-factor breakdown
    #[arg(long)]
    pub(crate) explain: bool,
    #[command(flatten)]
    pub(crate) scoring: ScoringArgs,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export with id,location,latitude,longitude,price,area,type,year_built columns
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Emit JSON instead of a text listing
    #[arg(long)]
    pub(crate) json: bool,
    #[command(flatten)]
    pub(crate) scoring: ScoringArgs,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Include per-factor breakdowns for each sample listing
    #[arg(long)]
    pub(crate) explain: bool,
    #[command(flatten)]
    pub(crate) scoring: ScoringArgs,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let service = args.scoring.build_service();
    let property = PropertyInput {
        id: args.id,
        location: args.location,
        latitude: None,
        longitude: None,
        price: args.price,
        area: args.area,
        property_type: args.property_type,
        year_built: args.year_built,
    };

    let view = ScoredListingView::new(&property, service.get_cached_locality_scores(&property));
    println!("{} ({})", view.id, view.location);
    println!("  {}", render_badges(&view));

    if args.explain {
        render_breakdown(&service.explain(&property));
    }

    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let service = args.scoring.build_service();
    let properties = load_properties(&args.csv)?;

    let views: Vec<ScoredListingView> = properties
        .iter()
        .map(|property| {
            ScoredListingView::new(property, service.get_cached_locality_scores(property))
        })
        .collect();

    if args.json {
        match serde_json::to_string_pretty(&views) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("JSON output unavailable: {err}"),
        }
        return Ok(());
    }

    println!("Scored {} listing(s) from {}", views.len(), args.csv.display());
    for view in &views {
        println!("- {} ({}): {}", view.id, view.location, render_badges(view));
    }

    let stats = service.cache_stats();
    println!(
        "\nCache: {} entr{} ({} hit(s), {} miss(es))",
        stats.entries,
        if stats.entries == 1 { "y" } else { "ies" },
        stats.hits,
        stats.misses
    );

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = args.scoring.build_service();

    println!("Locality scoring demo");
    println!("Reference year: {}", service.reference_year());

    for property in sample_listings() {
        let view = ScoredListingView::new(&property, service.get_cached_locality_scores(&property));
        println!("\n{} | {} | {}", view.id, property.property_type, view.location);
        println!("  {}", render_badges(&view));

        if args.explain {
            render_breakdown(&service.explain(&property));
        }
    }

    let repeat = sample_listings()
        .into_iter()
        .next()
        .map(|property| service.get_cached_locality_scores(&property));
    if let Some(scores) = repeat {
        println!(
            "\nRepeat lookup for the first listing served from cache: locality {}",
            scores.locality_score
        );
    }

    let stats = service.cache_stats();
    println!(
        "Cache holds {}/{} entries ({} hit(s), {} miss(es))",
        stats.entries, stats.capacity, stats.hits, stats.misses
    );

    Ok(())
}

fn render_breakdown(breakdown: &ScoreBreakdown) {
    match breakdown.city {
        Some(city) => println!("  City table: {city}"),
        None => println!("  City table: default"),
    }
    for component in &breakdown.components {
        println!(
            "    - {:?}: locality {:+.1}, walk {:+.1}, amenities {:+.1} ({})",
            component.factor,
            component.locality,
            component.walk,
            component.amenities,
            component.notes
        );
    }
    println!(
        "  Without jitter: locality {}, walk {}, amenities {}",
        breakdown.scores.locality_score,
        breakdown.scores.walk_score,
        breakdown.scores.amenities_score
    );
}

fn sample_listings() -> Vec<PropertyInput> {
    vec![
        PropertyInput::new("demo-1", "Bandra West, Mumbai", 25_000_000.0, "apartment")
            .with_area(1200.0)
            .with_year_built(2020)
            .with_coordinates(19.0596, 72.8295),
        PropertyInput::new("demo-2", "Jubilee Hills, Hyderabad", 62_000_000.0, "villa")
            .with_area(4800.0)
            .with_year_built(2011),
        PropertyInput::new("demo-3", "Cyber City, Gurugram", 42_000_000.0, "commercial")
            .with_area(3200.0)
            .with_year_built(2016),
        PropertyInput::new("demo-4", "Arera Colony, Bhopal", 7_500_000.0, "house")
            .with_year_built(1994),
        PropertyInput::new("demo-5", "Outskirts, Nashik", 1_800_000.0, "land").with_area(10_000.0),
    ]
}
