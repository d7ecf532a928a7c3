mod config;
mod menu;
mod writer;

use menu::MenuOption;

use tbe::ids::TaxId;
use tbe::services::BankService;
use tbe::{build_bank_service, Money, Result};

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Opening teller session...");

    let mut bank = build_bank_service();

    loop {
        match menu::prompt_menu()? {
            MenuOption::Deposit => handle_deposit(&mut bank)?,
            MenuOption::Withdraw => handle_withdraw(&mut bank)?,
            MenuOption::Statement => handle_statement(&bank)?,
            MenuOption::NewClient => handle_new_client(&mut bank)?,
            MenuOption::NewAccount => handle_new_account(&mut bank)?,
            MenuOption::ListAccounts => handle_list_accounts(&bank)?,
            MenuOption::Quit => {
                println!("Closing teller session.");
                break;
            }
            MenuOption::Unknown(choice) => {
                println!("Unknown option {choice:?}. Please pick one of the listed operations.");
            }
        }
    }

    log::debug!("Teller session finished successfully!");

    Ok(())
}

fn handle_deposit(bank: &mut BankService) -> Result {
    let tax_id = TaxId(menu::prompt_line("Client tax id: ")?);

    let amount = match prompt_amount("Amount to deposit: ")? {
        Some(amount) => amount,
        None => return Ok(()),
    };

    match bank.deposit(&tax_id, amount) {
        Ok(()) => println!("Deposited R$ {amount}."),
        Err(e) => println!("{e}"),
    }

    Ok(())
}

fn handle_withdraw(bank: &mut BankService) -> Result {
    let tax_id = TaxId(menu::prompt_line("Client tax id: ")?);

    let amount = match prompt_amount("Amount to withdraw: ")? {
        Some(amount) => amount,
        None => return Ok(()),
    };

    match bank.withdraw(&tax_id, amount) {
        Ok(()) => println!("Withdrew R$ {amount}."),
        Err(e) => println!("{e}"),
    }

    Ok(())
}

fn handle_statement(bank: &BankService) -> Result {
    let tax_id = TaxId(menu::prompt_line("Client tax id: ")?);

    match bank.statement(&tax_id) {
        Ok(statement) => println!("{statement}"),
        Err(e) => println!("{e}"),
    }

    Ok(())
}

fn handle_new_client(bank: &mut BankService) -> Result {
    let tax_id = TaxId(menu::prompt_line("Client tax id: ")?);
    let full_name = menu::prompt_line("Full name: ")?;
    let birth_date = menu::prompt_line("Birth date (dd-mm-yyyy): ")?;
    let address = menu::prompt_line("Address (street - number - district - city/state): ")?;

    match bank.register_client(tax_id, full_name, birth_date, address) {
        Ok(client_id) => println!("Client registered as {client_id}."),
        Err(e) => println!("{e}"),
    }

    Ok(())
}

fn handle_new_account(bank: &mut BankService) -> Result {
    let tax_id = TaxId(menu::prompt_line("Client tax id: ")?);

    match bank.open_checking_account(&tax_id) {
        Ok(account_id) => println!("Checking account {account_id} opened."),
        Err(e) => println!("{e}"),
    }

    Ok(())
}

fn handle_list_accounts(bank: &BankService) -> Result {
    let summaries = bank.account_summaries()?;

    if summaries.is_empty() {
        println!("No accounts open.");
        return Ok(());
    }

    let listing = writer::render_account_listing(&summaries)?;
    println!("{listing}");

    Ok(())
}

/// Prompts for a decimal amount; parse failures are reported to the operator
/// and yield `None` so the menu loop continues.
fn prompt_amount(label: &str) -> Result<Option<Money>> {
    let input = menu::prompt_line(label)?;

    match Money::parse(&input) {
        Ok(amount) => Ok(Some(amount)),
        Err(e) => {
            println!("{e}");
            Ok(None)
        }
    }
}
