//! Note endpoints — list (with tag filter), create, update, read and delete
//! notes inside a notebook.
//!
//! Mutations answer with the notebook's full note list so clients can
//! refresh their view from a single response.

use actix_web::http::Method;
use actix_web::{web, HttpResponse, Responder};
use nevernote_types::{NoteInput, TagFilter};

use super::parse_body;
use crate::notebooks::StoreError;
use crate::AppState;

/// Non-standard `UPDATE` verb used by the update endpoint
pub fn update_method() -> Method {
    Method::from_bytes(b"UPDATE").expect("UPDATE is a valid method token")
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/listNotes/{title}").route(web::get().to(list_notes)));
    cfg.service(web::resource("/createNote/{title}").route(web::post().to(create_note)));
    cfg.service(
        web::resource("/updateNote/{title}/{note_id}")
            .route(web::method(update_method()).to(update_note)),
    );
    cfg.service(web::resource("/readNote/{title}/{note_id}").route(web::get().to(read_note)));
    cfg.service(
        web::resource("/deleteNote/{title}/{note_id}").route(web::delete().to(delete_note)),
    );
}

/// List notes carrying every tag in the optional `{"Tags": [...]}` body
async fn list_notes(
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> impl Responder {
    let title = path.into_inner();
    let filter: TagFilter = parse_body(&body);

    HttpResponse::Ok().json(data.store.list_notes(&title, filter.tags()))
}

async fn create_note(
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, StoreError> {
    let title = path.into_inner();
    let input: NoteInput = parse_body(&body);

    let notes = data.store.create_note(&title, input)?;
    Ok(HttpResponse::Ok().json(notes))
}

async fn update_note(
    data: web::Data<AppState>,
    path: web::Path<(String, String)>,
    body: web::Bytes,
) -> Result<HttpResponse, StoreError> {
    let (title, note_id) = path.into_inner();
    let input: NoteInput = parse_body(&body);

    let notes = data.store.update_note(&title, &note_id, input)?;
    Ok(HttpResponse::Ok().json(notes))
}

async fn read_note(
    data: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, StoreError> {
    let (title, note_id) = path.into_inner();
    let note = data.store.read_note(&title, &note_id)?;
    Ok(HttpResponse::Ok().json(note))
}

async fn delete_note(
    data: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, StoreError> {
    let (title, note_id) = path.into_inner();
    let notes = data.store.delete_note(&title, &note_id)?;
    Ok(HttpResponse::Ok().json(notes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notebooks::NotebookStore;
    use crate::test_support::app_state;
    use actix_web::{http::StatusCode, test, App};
    use nevernote_types::Note;

    const HAMLET_JSON: &str = r#"{"Id":"1","Title":"Hamlet","Body":"This is Hamlet","Tags":["Classics","Shakespeare"],"Created":"HamletCreated","LastModified":"HamletModified"}"#;

    fn note(id: &str, title: &str, body: &str, tags: &[&str], stamp: &str) -> Note {
        Note {
            id: id.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            created: format!("{}Created", stamp),
            last_modified: format!("{}Modified", stamp),
        }
    }

    fn english() -> NotebookStore {
        let store = NotebookStore::new();
        store.insert_notebook(
            "English",
            vec![
                note("1", "Hamlet", "This is Hamlet", &["Classics", "Shakespeare"], "Hamlet"),
                note("2", "Animal Farm", "Farm of Animals", &["Classics"], "Animal"),
            ],
        );
        store
    }

    fn ids(notes: &[Note]) -> Vec<&str> {
        notes.iter().map(|n| n.id.as_str()).collect()
    }

    #[actix_web::test]
    async fn test_read_seeded_note_exact_json() {
        let app = test::init_service(
            App::new().app_data(app_state(NotebookStore::seeded())).configure(config),
        )
        .await;

        let req = test::TestRequest::get().uri("/readNote/English/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(body, HAMLET_JSON.as_bytes());
    }

    #[actix_web::test]
    async fn test_read_note_errors() {
        let app = test::init_service(App::new().app_data(app_state(english())).configure(config)).await;

        let req = test::TestRequest::get().uri("/readNote/English/7").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(test::read_body(resp).await, "Note with id \"7\" does not exist".as_bytes());

        let req = test::TestRequest::get().uri("/readNote/Math/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(test::read_body(resp).await, "Notebook \"Math\" does not exist".as_bytes());
    }

    #[actix_web::test]
    async fn test_list_notes_with_tag_filter() {
        let app = test::init_service(App::new().app_data(app_state(english())).configure(config)).await;

        let req = test::TestRequest::get()
            .uri("/listNotes/English")
            .set_payload(r#"{"Tags": ["Shakespeare"]}"#)
            .to_request();
        let notes: Vec<Note> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(ids(&notes), vec!["1"]);
    }

    #[actix_web::test]
    async fn test_list_notes_without_filter() {
        let app = test::init_service(App::new().app_data(app_state(english())).configure(config)).await;

        let req = test::TestRequest::get().uri("/listNotes/English").to_request();
        let notes: Vec<Note> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(ids(&notes), vec!["1", "2"]);

        let req = test::TestRequest::get()
            .uri("/listNotes/English")
            .set_payload(r#"{"Tags": []}"#)
            .to_request();
        let notes: Vec<Note> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(ids(&notes), vec!["1", "2"]);
    }

    #[actix_web::test]
    async fn test_list_notes_missing_notebook_is_empty() {
        let app = test::init_service(App::new().app_data(app_state(english())).configure(config)).await;

        let req = test::TestRequest::get().uri("/listNotes/Math").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "[]".as_bytes());

        let req = test::TestRequest::get()
            .uri("/listNotes/English")
            .set_payload(r#"{"Tags": ["Poetry"]}"#)
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "[]".as_bytes());
    }

    #[actix_web::test]
    async fn test_create_note() {
        let store = NotebookStore::new();
        store.create_notebook("Science");
        let app = test::init_service(App::new().app_data(app_state(store)).configure(config)).await;

        let req = test::TestRequest::post()
            .uri("/createNote/Science")
            .set_payload(r#"{"Title": "Physics", "Body": "F = ma", "Tags": ["Newton"]}"#)
            .to_request();
        let notes: Vec<Note> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].id, "0");
        assert_eq!(notes[0].title, "Physics");
        assert_eq!(notes[0].body, "F = ma");
        assert_eq!(notes[0].tags, vec!["Newton".to_string()]);
        assert_eq!(notes[0].created, notes[0].last_modified);
    }

    #[actix_web::test]
    async fn test_create_note_validation() {
        let app = test::init_service(App::new().app_data(app_state(english())).configure(config)).await;

        let cases = [
            (r#"{"Body": "b", "Tags": []}"#, "Need Title to create note"),
            (r#"{"Title": "t", "Tags": []}"#, "Need Body to create note"),
            (r#"{"Title": "t", "Body": "b"}"#, "Need Tags to create note"),
            (r#"{"Title": "t", "Body": "b", "Tags": null}"#, "Need Tags to create note"),
            (r#"{"Title": "t", "Body": "b", "Tags": "Classics"}"#, "Need Tags to create note"),
            (r#"{"Title": "t", "Body": 7, "Tags": []}"#, "Need Body to create note"),
            (r#"{"Title": ["t"], "Body": "b", "Tags": []}"#, "Need Title to create note"),
            ("not json at all", "Need Title to create note"),
        ];

        for (payload, expected) in cases {
            let req = test::TestRequest::post()
                .uri("/createNote/English")
                .set_payload(payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(test::read_body(resp).await, expected.as_bytes());
        }
    }

    #[actix_web::test]
    async fn test_create_note_in_missing_notebook() {
        let app = test::init_service(App::new().app_data(app_state(english())).configure(config)).await;

        let req = test::TestRequest::post()
            .uri("/createNote/Math")
            .set_payload(r#"{"Title": "t", "Body": "b", "Tags": []}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(test::read_body(resp).await, "Notebook \"Math\" does not exist".as_bytes());
    }

    #[actix_web::test]
    async fn test_update_note_with_update_verb() {
        let app = test::init_service(App::new().app_data(app_state(english())).configure(config)).await;

        let req = test::TestRequest::default()
            .method(update_method())
            .uri("/updateNote/English/2")
            .set_payload(r#"{"Title": "1984", "Body": "Big Brother", "Tags": ["Orwell"]}"#)
            .to_request();
        let notes: Vec<Note> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(ids(&notes), vec!["1", "2"]);
        let updated = &notes[1];
        assert_eq!(updated.title, "1984");
        assert_eq!(updated.body, "Big Brother");
        assert_eq!(updated.tags, vec!["Orwell".to_string()]);
        assert_eq!(updated.created, "AnimalCreated");
        assert_ne!(updated.last_modified, "AnimalModified");
    }

    #[actix_web::test]
    async fn test_update_note_with_mistyped_tags() {
        let app = test::init_service(App::new().app_data(app_state(english())).configure(config)).await;

        let req = test::TestRequest::default()
            .method(update_method())
            .uri("/updateNote/English/1")
            .set_payload(r#"{"Title": "t", "Body": "b", "Tags": {"Classics": true}}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(test::read_body(resp).await, "Need Tags to create note".as_bytes());
    }

    #[actix_web::test]
    async fn test_update_missing_note() {
        let app = test::init_service(App::new().app_data(app_state(english())).configure(config)).await;

        let req = test::TestRequest::default()
            .method(update_method())
            .uri("/updateNote/English/5")
            .set_payload(r#"{"Title": "t", "Body": "b", "Tags": []}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(test::read_body(resp).await, "Note with id \"5\" does not exist".as_bytes());
    }

    #[actix_web::test]
    async fn test_update_rejects_put() {
        let app = test::init_service(App::new().app_data(app_state(english())).configure(config)).await;

        let req = test::TestRequest::put()
            .uri("/updateNote/English/1")
            .set_payload(r#"{"Title": "t", "Body": "b", "Tags": []}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[actix_web::test]
    async fn test_delete_note() {
        let state = app_state(english());
        let app = test::init_service(App::new().app_data(state.clone()).configure(config)).await;

        let req = test::TestRequest::delete().uri("/deleteNote/English/1").to_request();
        let notes: Vec<Note> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(ids(&notes), vec!["2"]);
        assert_eq!(state.store.count_notes("English"), 1);

        let req = test::TestRequest::delete().uri("/deleteNote/English/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(test::read_body(resp).await, "Note with id \"1\" does not exist".as_bytes());
    }
}
