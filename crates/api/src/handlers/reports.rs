//! Handlers for abuse reports and their moderation.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use huntbase_core::error::CoreError;
use huntbase_db::models::outcome::{DeleteOutcome, InsertOutcome};
use huntbase_db::models::report::{CreateReport, Report};
use huntbase_db::repositories::{ProductRepo, ReportRepo};

use super::parse_object_id;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireModerator};
use crate::response::ResolveOutcome;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /reported-content
// ---------------------------------------------------------------------------

/// File a report against a product.
pub async fn file_report(
    State(state): State<AppState>,
    Json(input): Json<CreateReport>,
) -> AppResult<impl IntoResponse> {
    let report = Report::new(input);
    let result = ReportRepo::create(&state.db, &report).await?;

    tracing::info!(
        product_id = %report.report_id,
        reporter = %report.owner.email,
        "Report filed",
    );

    Ok((StatusCode::CREATED, Json(InsertOutcome::from(result))))
}

// ---------------------------------------------------------------------------
// GET /get-report/{email}
// ---------------------------------------------------------------------------

/// Reports filed by the given email.
pub async fn list_by_reporter(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<Vec<Report>>> {
    let reports = ReportRepo::list_by_reporter(&state.db, &email).await?;
    Ok(Json(reports))
}

// ---------------------------------------------------------------------------
// GET /report-details/{id}
// ---------------------------------------------------------------------------

/// Fetch a single report.
pub async fn get_by_id(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Report>> {
    let oid = parse_object_id(&id)?;
    let report = ReportRepo::find_by_id(&state.db, oid)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Report",
            id,
        }))?;
    Ok(Json(report))
}

// ---------------------------------------------------------------------------
// DELETE /delete-content/{id}
// ---------------------------------------------------------------------------

/// Resolve a report by deleting the reported product and its report record.
///
/// `{id}` is the product's id. The two deletions are sequential, not
/// transactional: if the second fails the product stays gone while the
/// report remains. Both outcomes are always returned so the client can see
/// a partial result (`reportDelete.deletedCount == 0` when no report was
/// tagged with this product).
pub async fn resolve_by_deletion(
    RequireModerator(moderator): RequireModerator,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ResolveOutcome>> {
    let oid = parse_object_id(&id)?;

    let product_delete = ProductRepo::delete(&state.db, oid).await?;
    let report_delete = ReportRepo::delete_by_product_id(&state.db, &id).await?;

    tracing::info!(
        product_id = %id,
        product_deleted = product_delete.deleted_count,
        report_deleted = report_delete.deleted_count,
        moderator = %moderator.email,
        "Reported content removed",
    );

    Ok(Json(ResolveOutcome {
        product_delete: DeleteOutcome::from(product_delete),
        report_delete: DeleteOutcome::from(report_delete),
        message: "Reported content removed",
    }))
}
