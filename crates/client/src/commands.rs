//! Command-line interface for the marketplace.

use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

use nearsell_core::{
    filter::{self, FilterSpec},
    listings::ListingStatus,
};

use crate::{
    api::{ApiClient, NewItemRequest},
    render,
};

#[derive(Debug, Parser)]
#[command(name = "nearsell", about = "Nearsell marketplace CLI", long_about = None)]
pub(crate) struct Cli {
    /// Marketplace server base URL
    #[arg(long, env = "NEARSELL_URL", default_value = "http://localhost:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Browse listings, narrowed locally by the given filters
    Browse(BrowseArgs),
    /// Post a new listing
    Sell(SellArgs),
    /// Show the listings posted under a seller contact
    Mine(MineArgs),
    /// Mark a listing as sold
    MarkSold(StatusArgs),
    /// Put a sold listing back on the market
    Relist(StatusArgs),
}

#[derive(Debug, Args)]
struct BrowseArgs {
    /// State to browse, or "All"
    #[arg(long, default_value = filter::ALL)]
    location: String,

    /// Category to browse, or "All"
    #[arg(long, default_value = filter::ALL)]
    category: String,

    /// Case-insensitive search over titles and descriptions
    #[arg(long, default_value = "")]
    search: String,

    /// Hide listings already marked sold
    #[arg(long)]
    available_only: bool,
}

impl From<&BrowseArgs> for FilterSpec {
    fn from(args: &BrowseArgs) -> Self {
        Self {
            location: args.location.clone(),
            category: args.category.clone(),
            search: args.search.clone(),
            active_only: args.available_only,
        }
    }
}

#[derive(Debug, Args)]
struct SellArgs {
    #[arg(long)]
    title: String,

    #[arg(long)]
    description: Option<String>,

    /// Asking price in whole currency units
    #[arg(long)]
    price: u64,

    #[arg(long)]
    category: String,

    #[arg(long)]
    state: String,

    #[arg(long)]
    city: String,

    #[arg(long)]
    seller_name: Option<String>,

    #[arg(long)]
    seller_contact: String,

    /// Image reference; repeat for multiple images
    #[arg(long = "image")]
    images: Vec<String>,
}

impl From<SellArgs> for NewItemRequest {
    fn from(args: SellArgs) -> Self {
        Self {
            title: args.title,
            description: args.description,
            price: args.price,
            category: args.category,
            state: args.state,
            city: args.city,
            seller_name: args.seller_name,
            seller_contact: args.seller_contact,
            images: args.images,
        }
    }
}

#[derive(Debug, Args)]
struct MineArgs {
    #[arg(long)]
    seller_contact: String,
}

#[derive(Debug, Args)]
struct StatusArgs {
    /// Listing identifier, as shown by `mine`
    uuid: Uuid,
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        let client = ApiClient::new(&self.base_url);

        match self.command {
            Commands::Browse(args) => browse(&client, &args).await,
            Commands::Sell(args) => sell(&client, args).await,
            Commands::Mine(args) => mine(&client, &args).await,
            Commands::MarkSold(args) => {
                update_status(&client, args.uuid, ListingStatus::Sold).await
            }
            Commands::Relist(args) => {
                update_status(&client, args.uuid, ListingStatus::Active).await
            }
        }
    }
}

async fn browse(client: &ApiClient, args: &BrowseArgs) -> Result<(), String> {
    let listings = client
        .items()
        .await
        .map_err(|error| format!("failed to fetch listings: {error}"))?;

    let spec = FilterSpec::from(args);
    let visible = filter::filter(&listings, &spec);

    if visible.is_empty() {
        println!("No items available in {}.", spec.location);

        return Ok(());
    }

    println!("{}", render::listing_table(&visible));

    Ok(())
}

async fn sell(client: &ApiClient, args: SellArgs) -> Result<(), String> {
    let posted = client
        .create_item(&args.into())
        .await
        .map_err(|error| format!("failed to post listing: {error}"))?;

    println!("{}", posted.message);

    // Refetch so the seller sees the listing in its final, stored position.
    let listings = client
        .items()
        .await
        .map_err(|error| format!("failed to refresh listings: {error}"))?;

    println!("{}", render::listing_table(&listings.iter().collect::<Vec<_>>()));

    Ok(())
}

async fn mine(client: &ApiClient, args: &MineArgs) -> Result<(), String> {
    let listings = client
        .user_listings(&args.seller_contact)
        .await
        .map_err(|error| format!("failed to fetch your listings: {error}"))?;

    if listings.is_empty() {
        println!("No listings posted under {} yet.", args.seller_contact);

        return Ok(());
    }

    println!("{}", render::owned_listing_table(&listings));

    Ok(())
}

async fn update_status(
    client: &ApiClient,
    uuid: Uuid,
    status: ListingStatus,
) -> Result<(), String> {
    let listing = client
        .update_status(uuid, status)
        .await
        .map_err(|error| format!("failed to update listing: {error}"))?;

    println!("\"{}\" is now {}.", listing.title, listing.status);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browse_defaults_match_everything() {
        let cli = Cli::try_parse_from(["nearsell", "browse"]).expect("browse must parse");

        let Commands::Browse(args) = cli.command else {
            panic!("expected browse command");
        };

        assert_eq!(FilterSpec::from(&args), FilterSpec::default());
    }

    #[test]
    fn test_browse_args_map_onto_filter_spec() {
        let cli = Cli::try_parse_from([
            "nearsell",
            "browse",
            "--location",
            "Goa",
            "--category",
            "Vehicles",
            "--search",
            "bike",
            "--available-only",
        ])
        .expect("browse must parse");

        let Commands::Browse(args) = cli.command else {
            panic!("expected browse command");
        };

        let spec = FilterSpec::from(&args);

        assert_eq!(spec.location, "Goa");
        assert_eq!(spec.category, "Vehicles");
        assert_eq!(spec.search, "bike");
        assert!(spec.active_only, "available-only must enable active_only");
    }

    #[test]
    fn test_sell_requires_contact() {
        let result = Cli::try_parse_from([
            "nearsell", "sell", "--title", "Bike", "--price", "1500", "--category", "Vehicles",
            "--state", "Goa", "--city", "Panaji",
        ]);

        assert!(result.is_err(), "sell without a contact must be rejected");
    }

    #[test]
    fn test_repeated_image_flags_accumulate() {
        let cli = Cli::try_parse_from([
            "nearsell",
            "sell",
            "--title",
            "Bike",
            "--price",
            "1500",
            "--category",
            "Vehicles",
            "--state",
            "Goa",
            "--city",
            "Panaji",
            "--seller-contact",
            "+91 9876500000",
            "--image",
            "front.jpg",
            "--image",
            "side.jpg",
        ])
        .expect("sell must parse");

        let Commands::Sell(args) = cli.command else {
            panic!("expected sell command");
        };

        let request = NewItemRequest::from(args);

        assert_eq!(request.images, vec!["front.jpg", "side.jpg"]);
    }
}
