use actix_web::{web, HttpResponse};
use sf_shared::types::PaginationParams;

use crate::app::AppState;
use crate::handlers::paginated_response;

/// `GET /api/v1/categories?page=&limit=`
pub async fn list_categories(
    state: web::Data<AppState>,
    query: web::Query<PaginationParams>,
) -> HttpResponse {
    let page = query.resolve(&state.config.pagination);
    let active: Vec<_> = state.categories.iter().filter(|c| c.is_active).collect();
    let total = active.len() as u64;

    let items: Vec<_> = active
        .into_iter()
        .skip(usize::try_from(page.skip).unwrap_or(usize::MAX))
        .take(page.take as usize)
        .cloned()
        .collect();

    paginated_response(items, page.page, page.limit, total)
}
