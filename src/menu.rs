use tbe::Result;

use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOption {
    Deposit,
    Withdraw,
    Statement,
    NewClient,
    NewAccount,
    ListAccounts,
    Quit,
    Unknown(String),
}

const MENU: &str = "
Pick an operation:

[d] = deposit
[w] = withdraw
[s] = statement
[n] = new client
[a] = new checking account
[l] = list accounts
[q] = quit
";

pub fn prompt_menu() -> Result<MenuOption> {
    println!("{MENU}");

    let choice = prompt_line("> ")?;

    let option = match choice.as_str() {
        "d" => MenuOption::Deposit,
        "w" => MenuOption::Withdraw,
        "s" => MenuOption::Statement,
        "n" => MenuOption::NewClient,
        "a" => MenuOption::NewAccount,
        "l" => MenuOption::ListAccounts,
        "q" => MenuOption::Quit,
        other => MenuOption::Unknown(other.to_string()),
    };

    return Ok(option);
}

pub fn prompt_line(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    return Ok(line.trim().to_string());
}
