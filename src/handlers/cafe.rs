use axum::{
    extract::{Form, Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use tera::Context;
use tower_cookies::Cookies;

use crate::{
    controller::AppState,
    error::{AppError, Result},
    flash::{self, FlashData},
    forms::{CafeForm, FormErrors, csrf},
    models::cafe::CafeRecord,
};

const ADDED_NOTICE: &str = "Cafe added successfully";
const DUPLICATE_NAME: &str = "A cafe with this name already exists.";

/// Heading and submit target of the add/edit page
struct FormPage {
    title: &'static str,
    action: String,
}

impl FormPage {
    fn add() -> Self {
        Self {
            title: "Add a new cafe",
            action: "/add-cafe".to_string(),
        }
    }

    fn edit(id: i64) -> Self {
        Self {
            title: "Edit cafe",
            action: format!("/update/{id}"),
        }
    }
}

/// Home page handler
pub async fn home(State(state): State<AppState>, cookies: Cookies) -> Result<Html<String>> {
    let mut ctx = Context::new();
    ctx.insert("flash", &flash::take_flash(&cookies, &state.key));
    state.render("index.html", &ctx)
}

/// List all cafes handler
pub async fn all_cafes(State(state): State<AppState>) -> Result<Html<String>> {
    let cafes = state.store.list_all().await?;

    let mut ctx = Context::new();
    ctx.insert("cafes", &cafes);
    state.render("all_cafes.html", &ctx)
}

/// Empty add form handler
pub async fn add_cafe_form(
    State(state): State<AppState>,
    cookies: Cookies,
) -> Result<Html<String>> {
    render_form(
        &state,
        &cookies,
        &FormPage::add(),
        &CafeForm::default(),
        &FormErrors::default(),
    )
}

/// Add form submission handler
pub async fn add_cafe(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<CafeForm>,
) -> Result<Response> {
    let page = FormPage::add();
    let record = match accept(&state, &cookies, &form) {
        Ok(record) => record.with_currency_prefix(),
        Err(errors) => return redisplay(&state, &cookies, &page, &form, &errors),
    };

    match state.store.insert(&record).await {
        Ok(_) => {}
        Err(AppError::DuplicateName(_)) => {
            return redisplay(&state, &cookies, &page, &form, &duplicate_name());
        }
        Err(e) => return Err(e),
    }

    flash::set_flash(&cookies, &state.key, &FlashData::success(ADDED_NOTICE))?;
    Ok(Redirect::to("/").into_response())
}

/// Pre-populated edit form handler
pub async fn update_cafe_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    cookies: Cookies,
) -> Result<Html<String>> {
    let cafe = state.store.get(id).await?;
    render_form(
        &state,
        &cookies,
        &FormPage::edit(id),
        &CafeForm::from(&cafe),
        &FormErrors::default(),
    )
}

/// Edit form submission handler
pub async fn update_cafe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    cookies: Cookies,
    Form(form): Form<CafeForm>,
) -> Result<Response> {
    // Unknown ids are a 404 even when the submission is invalid
    state.store.get(id).await?;

    let page = FormPage::edit(id);
    let record = match accept(&state, &cookies, &form) {
        Ok(record) => record,
        Err(errors) => return redisplay(&state, &cookies, &page, &form, &errors),
    };

    match state.store.update(id, &record).await {
        Ok(_) => Ok(Redirect::to("/all-cafes").into_response()),
        Err(AppError::DuplicateName(_)) => {
            redisplay(&state, &cookies, &page, &form, &duplicate_name())
        }
        Err(e) => Err(e),
    }
}

/// Delete cafe handler
pub async fn delete_cafe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect> {
    state.store.delete(id).await?;
    Ok(Redirect::to("/all-cafes"))
}

/// Run the CSRF check and field validation together so every problem is reported at once.
fn accept(
    state: &AppState,
    cookies: &Cookies,
    form: &CafeForm,
) -> std::result::Result<CafeRecord, FormErrors> {
    let csrf_ok = !state.csrf_enabled || csrf::verify_token(cookies, &state.key, &form.csrf_token);

    let mut errors = match form.validate() {
        Ok(record) if csrf_ok => return Ok(record),
        Ok(_) => FormErrors::default(),
        Err(errors) => errors,
    };
    if !csrf_ok {
        errors.add(csrf::CSRF_FIELD, csrf::CSRF_ERROR);
    }

    tracing::debug!("Rejected cafe form with {} error(s)", errors.len());
    Err(errors)
}

fn duplicate_name() -> FormErrors {
    let mut errors = FormErrors::default();
    errors.add("cafe", DUPLICATE_NAME);
    errors
}

fn redisplay(
    state: &AppState,
    cookies: &Cookies,
    page: &FormPage,
    form: &CafeForm,
    errors: &FormErrors,
) -> Result<Response> {
    Ok(render_form(state, cookies, page, form, errors)?.into_response())
}

fn render_form(
    state: &AppState,
    cookies: &Cookies,
    page: &FormPage,
    form: &CafeForm,
    errors: &FormErrors,
) -> Result<Html<String>> {
    let csrf_token = if state.csrf_enabled {
        csrf::issue_token(cookies, &state.key)
    } else {
        String::new()
    };

    let mut ctx = Context::new();
    ctx.insert("title", page.title);
    ctx.insert("action", &page.action);
    ctx.insert("fields", &form.fields(errors));
    ctx.insert("form_error", &errors.get(csrf::CSRF_FIELD));
    ctx.insert("csrf_token", &csrf_token);
    state.render("cafe_form.html", &ctx)
}
