pub mod donation;

pub use donation::{Donation, DonationUpdate, NewDonation};
