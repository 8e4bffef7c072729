//! Summary statistics panel.

use serde::Serialize;

use crate::aggregate::{totals, Totals};
use crate::data::DataStore;
use crate::error::ContractError;
use crate::state::SelectionState;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsPayload {
    /// Display names of the selected countries, in ISO-code order.
    pub countries: Vec<String>,
    pub totals: Totals,
    pub markdown: String,
}

/// Build the stats panel.
///
/// Every selected code must resolve through the country lookup; a missing
/// entry is a data inconsistency and is returned as an error.
pub fn build_stats(store: &DataStore, state: &SelectionState) -> Result<StatsPayload, ContractError> {
    let countries = state
        .countries()
        .iter()
        .map(|code| {
            store
                .countries()
                .name(code)
                .map(str::to_string)
                .ok_or_else(|| ContractError::UnknownCountry {
                    iso_code: code.clone(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let totals = totals(store, state.countries());
    let markdown = render_markdown(&countries, &totals);

    Ok(StatsPayload {
        countries,
        totals,
        markdown,
    })
}

fn render_markdown(countries: &[String], totals: &Totals) -> String {
    let selection = if countries.is_empty() {
        "None".to_string()
    } else {
        countries.join(", ")
    };

    format!(
        "**Selected countries:** {}\n\
         - Total infections: {}\n\
         - Total deaths: {}\n\
         - Total vaccinations: {}\n",
        selection, totals.infections, totals.deaths, totals.vaccinations
    )
}
