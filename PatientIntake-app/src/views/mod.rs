// Views over fetched collections
mod listing;

pub use listing::ListingView;
