//! Terminal rendering for listings.

use tabled::{builder::Builder, settings::Style};

use nearsell_core::listings::Listing;

/// Renders the browse view: one row per visible listing.
pub(crate) fn listing_table(listings: &[&Listing]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Title", "Price", "Category", "Location", "Status", "Contact"]);

    for listing in listings {
        builder.push_record(listing_record(listing));
    }

    finish(builder)
}

/// Renders the seller view, prefixing each row with the listing identifier so
/// it can be passed back to `mark-sold` and `relist`.
pub(crate) fn owned_listing_table(listings: &[Listing]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Id", "Title", "Price", "Category", "Location", "Status", "Contact"]);

    for listing in listings {
        let mut record = vec![listing.uuid.to_string()];
        record.extend(listing_record(listing));

        builder.push_record(record);
    }

    finish(builder)
}

fn listing_record(listing: &Listing) -> Vec<String> {
    vec![
        listing.title.clone(),
        format!("₹{}", listing.price),
        listing.category.clone(),
        format!("{}, {}", listing.city, listing.state),
        listing.status.to_string(),
        listing.seller_contact.clone(),
    ]
}

fn finish(builder: Builder) -> String {
    let mut table = builder.build();

    table.with(Style::modern_rounded());

    table.to_string()
}
