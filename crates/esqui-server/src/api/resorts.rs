use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use chrono::{DateTime, Local};
use esqui_core::ResortSlug;
use esqui_scraper::StatusRecord;
use serde::Serialize;

use crate::middleware::RequestId;
use crate::state::AppState;

use super::ApiError;

const API_NAME: &str = "Esqui Scraping API";

#[derive(Debug, Serialize)]
pub(super) struct IndexData {
    nombre: &'static str,
    version: &'static str,
    descripcion: &'static str,
    endpoints: Endpoints,
}

#[derive(Debug, Serialize)]
struct Endpoints {
    todas: &'static str,
    seleccion: &'static str,
    por_slug: &'static str,
    refresh: &'static str,
    status: &'static str,
}

#[derive(Debug, Serialize)]
pub(super) struct BatchData {
    estaciones: Vec<StatusRecord>,
    total: usize,
    ultima_actualizacion: DateTime<Local>,
}

#[derive(Debug, Serialize)]
pub(super) struct RefreshData {
    mensaje: &'static str,
    estaciones: Vec<StatusRecord>,
    timestamp: DateTime<Local>,
}

/// Inline rejection for slugs outside the catalog, listing what is available.
#[derive(Debug, Serialize)]
struct UnknownResort {
    error: String,
    estaciones_disponibles: Vec<String>,
}

pub(super) async fn index() -> Json<IndexData> {
    Json(IndexData {
        nombre: API_NAME,
        version: env!("CARGO_PKG_VERSION"),
        descripcion: "API para obtener información de estaciones de esquí españolas",
        endpoints: Endpoints {
            todas: "/estaciones",
            seleccion: "/estaciones/{slug1,slug2,...}",
            por_slug: "/estacion/{slug}",
            refresh: "/refresh",
            status: "/status",
        },
    })
}

/// Scrapes every catalog resort, one after another.
pub(super) async fn list_catalog(State(state): State<AppState>) -> Json<BatchData> {
    tracing::info!(count = state.catalog.len(), "scraping all catalog resorts");
    let estaciones = state.client.extract_all(state.catalog.slugs()).await;
    let ultima_actualizacion = state.last_updated.touch().await;

    Json(BatchData {
        total: estaciones.len(),
        estaciones,
        ultima_actualizacion,
    })
}

/// Scrapes a comma-separated list of slugs, catalog or not, in the given order.
pub(super) async fn list_selected(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(raw): Path<String>,
) -> Result<Json<BatchData>, ApiError> {
    let slugs = parse_slug_list(&raw)
        .map_err(|message| ApiError::new(req_id.0.clone(), "bad_request", message))?;

    tracing::info!(count = slugs.len(), "scraping selected resorts");
    let estaciones = state.client.extract_all(&slugs).await;
    let ultima_actualizacion = state.last_updated.touch().await;

    Ok(Json(BatchData {
        total: estaciones.len(),
        estaciones,
        ultima_actualizacion,
    }))
}

pub(super) async fn get_resort(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Response {
    let Some(resort) = state.catalog.get(&raw) else {
        tracing::debug!(slug = %raw, "rejected slug outside catalog");
        return (
            StatusCode::NOT_FOUND,
            Json(UnknownResort {
                error: format!("Estación '{raw}' no encontrada"),
                estaciones_disponibles: state.catalog.slugs().map(ToString::to_string).collect(),
            }),
        )
            .into_response();
    };

    tracing::info!(slug = %resort.slug, "scraping resort");
    Json(state.client.extract(&resort.slug).await).into_response()
}

pub(super) async fn refresh(State(state): State<AppState>) -> Json<RefreshData> {
    tracing::info!(count = state.catalog.len(), "manual refresh of catalog resorts");
    let estaciones = state.client.extract_all(state.catalog.slugs()).await;
    let timestamp = state.last_updated.touch().await;

    Json(RefreshData {
        mensaje: "Datos actualizados correctamente",
        estaciones,
        timestamp,
    })
}

/// Splits `a,b,c` into validated slugs. Blank entries are skipped; an empty
/// result or any unsafe entry is rejected.
fn parse_slug_list(raw: &str) -> Result<Vec<ResortSlug>, String> {
    let slugs = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| ResortSlug::parse(s).map_err(|e| e.to_string()))
        .collect::<Result<Vec<_>, _>>()?;

    if slugs.is_empty() {
        return Err("at least one resort slug is required".to_string());
    }

    Ok(slugs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_slug_list_splits_and_trims() {
        let slugs = parse_slug_list("formigal, candanchu,,").unwrap();
        let raw: Vec<&str> = slugs.iter().map(ResortSlug::as_str).collect();
        assert_eq!(raw, vec!["formigal", "candanchu"]);
    }

    #[test]
    fn parse_slug_list_rejects_empty() {
        assert!(parse_slug_list(" , ").is_err());
    }

    #[test]
    fn parse_slug_list_rejects_unsafe_entry() {
        let err = parse_slug_list("formigal,bad slug").unwrap_err();
        assert!(err.contains("bad slug"), "unexpected message: {err}");
    }
}
