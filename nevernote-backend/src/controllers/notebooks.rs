//! Notebook endpoints — list, create and delete notebooks, count their notes.

use actix_web::{web, HttpResponse, Responder};

use crate::notebooks::StoreError;
use crate::AppState;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/listNotebooks").route(web::get().to(list_notebooks)));
    cfg.service(web::resource("/createNotebook/{title}").route(web::post().to(create_notebook)));
    cfg.service(web::resource("/deleteNotebook/{title}").route(web::delete().to(delete_notebook)));
    cfg.service(web::resource("/numberOfNotes/{title}").route(web::get().to(number_of_notes)));
}

/// All notebook titles
async fn list_notebooks(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(data.store.list_notebook_titles())
}

/// Create an empty notebook (replaces an existing one with the same title)
async fn create_notebook(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let title = path.into_inner();
    HttpResponse::Ok().json(data.store.create_notebook(&title))
}

/// Delete a notebook and every note in it
async fn delete_notebook(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, StoreError> {
    let title = path.into_inner();
    let titles = data.store.delete_notebook(&title)?;
    Ok(HttpResponse::Ok().json(titles))
}

/// Number of notes in a notebook (0 when it does not exist)
async fn number_of_notes(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let title = path.into_inner();
    HttpResponse::Ok().json(data.store.count_notes(&title))
}
