//! `--snapshot`: print the default view frame as JSON.

use color_eyre::Result;
use std::io::Write;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::data::{load_data, DataPaths};
use crate::events::EventRouter;

/// Serialize the frame a fresh session would show.
pub fn render_snapshot(router: &EventRouter) -> Result<String> {
    Ok(serde_json::to_string_pretty(router.frame())?)
}

/// Handle the --snapshot command.
pub fn handle_snapshot_command(config: &AppConfig) -> Result<()> {
    let store = load_data(&DataPaths::from_root(&config.data_root))?;
    let router = EventRouter::new(Arc::new(store))?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", render_snapshot(&router)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataStore;

    #[test]
    fn test_snapshot_of_empty_store() {
        let router = EventRouter::new(Arc::new(DataStore::default())).unwrap();
        let json = render_snapshot(&router).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["selection"]["metric"], "Infections");
        assert_eq!(value["timeline"]["label"], "Date selected: 2022-01-01");
        assert_eq!(value["map"]["date"], "2022-01-01");
        assert_eq!(value["stats"]["totals"]["infections"], 0);
    }
}
