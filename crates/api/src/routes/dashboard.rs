//! Dashboard Route

use crate::{AppState, ErrorResponse};
use aggregation_engine::{aggregate, DashboardView};
use axum::{extract::State, http::StatusCode, Json};
use dataset::DatasetError;
use schema_normalizer::normalize;
use std::sync::Arc;
use tracing::error;

/// Serve the dashboard view model.
///
/// Each request performs the pipeline's one dataset read, then
/// normalizes and aggregates. Nothing is cached across requests.
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardView>, (StatusCode, Json<ErrorResponse>)> {
    match build_view(&state) {
        Ok(view) => Ok(Json(view)),
        Err(err) => {
            error!("Dashboard request failed: {err}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            ))
        }
    }
}

fn build_view(state: &AppState) -> Result<DashboardView, DatasetError> {
    let raw = dataset::load_dataset(&state.config.dataset_path)?;
    let normalized = normalize(&raw)?;
    Ok(aggregate(&normalized))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppConfig;
    use std::io::Write;

    fn state_for_csv(content: &str) -> (AppState, tempfile::NamedTempFile) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();

        let config = AppConfig {
            dataset_path: file.path().to_string_lossy().into_owned(),
            model_path: "no/such/model.json".to_string(),
            bind_addr: "127.0.0.1:0".to_string(),
        };
        (AppState::new(config), file)
    }

    #[test]
    fn test_pipeline_over_raw_headers() {
        let (state, _file) = state_for_csv(
            " Outlet Type ,sales\n\
             A,100\n\
             A,50\n\
             B,30\n",
        );

        let view = build_view(&state).unwrap();
        assert_eq!(view.kpis.total_revenue, 180.0);

        let summary = view.summary.unwrap();
        let rows: Vec<(&str, f64, f64)> = summary
            .rows
            .iter()
            .map(|r| (r.outlet_type.as_str(), r.total_sales, r.avg_sales))
            .collect();
        assert_eq!(rows, vec![("A", 150.0, 75.0), ("B", 30.0, 30.0)]);
    }

    #[test]
    fn test_missing_dataset_is_fatal() {
        let config = AppConfig {
            dataset_path: "no/such/data.csv".to_string(),
            model_path: "no/such/model.json".to_string(),
            bind_addr: "127.0.0.1:0".to_string(),
        };
        let state = AppState::new(config);

        assert!(matches!(
            build_view(&state),
            Err(DatasetError::NotFound { .. })
        ));
    }
}
