pub mod donation;

pub use donation::DonationData;
