use tbe::models::AccountSummary;
use tbe::Result;

use csv::Writer;

/// Renders the account listing as CSV text, one row per account.
pub fn render_account_listing(summaries: &[AccountSummary]) -> Result<String> {
    let mut wtr = Writer::from_writer(vec![]);

    for summary in summaries {
        log::debug!("Serializing summary: {summary:?}");
        wtr.serialize(summary)?;
    }

    let utf8 = wtr.into_inner()?;
    let string = String::from_utf8(utf8)?;

    return Ok(string);
}
