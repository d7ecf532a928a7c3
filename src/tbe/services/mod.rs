mod bank_service;

pub use bank_service::{BankService, TellerError};
