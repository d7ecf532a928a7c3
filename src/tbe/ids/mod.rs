mod account_id;
mod client_id;
mod tax_id;

pub use account_id::AccountId;
pub use client_id::ClientId;
pub use tax_id::TaxId;
