use actix_web::web;
use std::sync::Arc;

use crate::config::Config;
use crate::notebooks::NotebookStore;
use crate::AppState;

pub fn app_state(store: NotebookStore) -> web::Data<AppState> {
    web::Data::new(AppState {
        store: Arc::new(store),
        config: Config::default(),
    })
}
