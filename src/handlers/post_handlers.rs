use std::sync::Arc;

use axum::{
    extract::{ Form, State },
    response::{ Html, IntoResponse, Redirect, Response },
};
use tower_cookies::Cookies;
use tracing::{ info, warn };
use validator::Validate;

use crate::{
    database::{ RequestConnection, StoreError },
    dto::PostForm,
    errors::{ ErrorMessage, HttpError },
    handlers::extractors::PostId,
    middleware::cookies::{ push_flash, take_flashes, FlashCookieOptions },
    models::{ Flash, Post },
    repositories::PostRepository,
    views::Page,
    AppState,
};

pub const INDEX_PATH: &str = "/";

/// What a handler decided to do with the request.
///
/// A `Render` carries the messages for the page being rendered right now; a
/// `Redirect` carries the message for whichever page is rendered next.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Render {
        page: Page,
        flashes: Vec<Flash>,
    },
    Redirect {
        to: &'static str,
        flash: Flash,
    },
}

impl Outcome {
    pub fn render(page: Page) -> Self {
        Outcome::Render { page, flashes: Vec::new() }
    }

    pub fn to_index(flash: Flash) -> Self {
        Outcome::Redirect { to: INDEX_PATH, flash }
    }

    pub fn post_not_found() -> Self {
        Outcome::to_index(Flash::error(ErrorMessage::PostNotFound.to_string()))
    }
}

fn find_post(db: &mut RequestConnection, post_id: i64) -> Result<Option<Post>, StoreError> {
    let post = PostRepository::get(db.acquire()?, post_id)?;
    if post.is_none() {
        warn!(post_id, "post not found");
    }

    Ok(post)
}

fn validation_flash(form: &PostForm) -> Option<Flash> {
    let errors = form.validate().err()?;
    let message = errors
        .field_errors()
        .values()
        .flat_map(|field| field.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| ErrorMessage::TitleRequired.to_string());

    Some(Flash::error(message))
}

// INDEX
pub fn show_index(db: &mut RequestConnection) -> Result<Outcome, HttpError> {
    let posts = PostRepository::list_all(db.acquire()?)?;

    Ok(Outcome::render(Page::Index { posts }))
}

// CREATE
pub fn show_create() -> Outcome {
    Outcome::render(Page::Create { form: PostForm::default() })
}

pub fn submit_create(db: &mut RequestConnection, form: PostForm) -> Result<Outcome, HttpError> {
    if let Some(flash) = validation_flash(&form) {
        return Ok(Outcome::Render { page: Page::Create { form }, flashes: vec![flash] });
    }

    let post = PostRepository::insert(db.acquire()?, &form.into_new_post())?;
    info!(post_id = post.id, title = %post.title, "post created");

    Ok(Outcome::to_index(Flash::post_created()))
}

// EDIT
pub fn show_edit(db: &mut RequestConnection, post_id: i64) -> Result<Outcome, HttpError> {
    let Some(post) = find_post(db, post_id)? else {
        return Ok(Outcome::post_not_found());
    };

    let form = PostForm::from_post(&post);
    Ok(Outcome::render(Page::Edit { post, form }))
}

pub fn submit_edit(
    db: &mut RequestConnection,
    post_id: i64,
    form: PostForm
) -> Result<Outcome, HttpError> {
    let Some(post) = find_post(db, post_id)? else {
        return Ok(Outcome::post_not_found());
    };

    if let Some(flash) = validation_flash(&form) {
        return Ok(Outcome::Render { page: Page::Edit { post, form }, flashes: vec![flash] });
    }

    // the row can vanish between lookup and update
    if PostRepository::update(db.acquire()?, post_id, &form.into_update())? == 0 {
        return Ok(Outcome::post_not_found());
    }
    info!(post_id, "post updated");

    Ok(Outcome::to_index(Flash::post_updated()))
}

// DELETE
pub fn submit_delete(db: &mut RequestConnection, post_id: i64) -> Result<Outcome, HttpError> {
    let Some(post) = find_post(db, post_id)? else {
        return Ok(Outcome::post_not_found());
    };

    if PostRepository::delete(db.acquire()?, post_id)? == 0 {
        return Ok(Outcome::post_not_found());
    }
    info!(post_id, title = %post.title, "post deleted");

    Ok(Outcome::to_index(Flash::post_deleted(&post.title)))
}

// an id past the `i64` range cannot match any row
fn with_post_id(
    post_id: PostId,
    action: impl FnOnce(i64) -> Result<Outcome, HttpError>
) -> Result<Outcome, HttpError> {
    match post_id.0 {
        Some(id) => action(id),
        None => {
            warn!("post id out of range");
            Ok(Outcome::post_not_found())
        }
    }
}

fn flash_cookie_options(state: &AppState) -> FlashCookieOptions {
    FlashCookieOptions {
        secure: state.config.server.environment.is_production(),
        ..Default::default()
    }
}

/// Turns an [`Outcome`] into the HTTP response: pages pick up any queued
/// messages from the flash cookie, redirects queue theirs into it.
pub fn finish(state: &AppState, cookies: &Cookies, outcome: Outcome) -> Result<Response, HttpError> {
    match outcome {
        Outcome::Render { page, flashes } => {
            let mut shown = take_flashes(cookies);
            shown.extend(flashes);

            let body = state.templates.render(&page, &shown)?;
            Ok(Html(body).into_response())
        }
        Outcome::Redirect { to, flash } => {
            push_flash(cookies, flash, flash_cookie_options(state));
            Ok(Redirect::to(to).into_response())
        }
    }
}

/// GET /
pub async fn index(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    mut db: RequestConnection
) -> Result<Response, HttpError> {
    let outcome = show_index(&mut db)?;
    finish(&state, &cookies, outcome)
}

/// GET /create
pub async fn create_form(
    State(state): State<Arc<AppState>>,
    cookies: Cookies
) -> Result<Response, HttpError> {
    finish(&state, &cookies, show_create())
}

/// POST /create
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    mut db: RequestConnection,
    Form(form): Form<PostForm>
) -> Result<Response, HttpError> {
    let outcome = submit_create(&mut db, form)?;
    finish(&state, &cookies, outcome)
}

/// GET /{id}/edit
pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    post_id: PostId,
    cookies: Cookies,
    mut db: RequestConnection
) -> Result<Response, HttpError> {
    let outcome = with_post_id(post_id, |id| show_edit(&mut db, id))?;
    finish(&state, &cookies, outcome)
}

/// POST /{id}/edit
pub async fn edit_post(
    State(state): State<Arc<AppState>>,
    post_id: PostId,
    cookies: Cookies,
    mut db: RequestConnection,
    Form(form): Form<PostForm>
) -> Result<Response, HttpError> {
    let outcome = with_post_id(post_id, |id| submit_edit(&mut db, id, form))?;
    finish(&state, &cookies, outcome)
}

/// POST /{id}/delete
pub async fn delete_post(
    State(state): State<Arc<AppState>>,
    post_id: PostId,
    cookies: Cookies,
    mut db: RequestConnection
) -> Result<Response, HttpError> {
    let outcome = with_post_id(post_id, |id| submit_delete(&mut db, id))?;
    finish(&state, &cookies, outcome)
}
