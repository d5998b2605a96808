//! Destination select options.

use serde::Serialize;
use tracing::debug;

use crate::App;

/// One `<option>` of the destination select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationOption {
    pub id: String,
    pub name: String,
}

/// Destinations in catalog order. Empty until the catalog has loaded.
pub async fn list_destinations(app: &App) -> Vec<DestinationOption> {
    debug!("list_destinations command");

    app.catalog()
        .await
        .destinations()
        .iter()
        .map(|d| DestinationOption {
            id: d.id.clone(),
            name: d.name.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    #[tokio::test]
    async fn test_list_destinations() {
        let app = test_support::app().await;

        let options = list_destinations(&app).await;
        let names: Vec<&str> = options.iter().map(|o| o.name.as_str()).collect();

        assert_eq!(names, vec!["Punta Cana", "Rio de Janeiro", "Cancún"]);
        assert_eq!(options[0].id, "punta-cana");
    }
}
