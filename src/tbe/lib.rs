pub mod ids;
pub mod models;
mod money;
mod result;
pub mod services;

pub use money::{Money, MoneyError};
pub use result::Result;

pub fn build_bank_service() -> services::BankService {
    let bank_service = services::BankService::new();

    return bank_service;
}
