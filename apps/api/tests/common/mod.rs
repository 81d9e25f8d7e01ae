#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::Utc;
use serde_json::Value;
use tower::ServiceExt;

use features_provider::build_app;
use features_provider::errors::AppError;
use features_provider::llm_client::{ChatModel, LlmError};
use features_provider::models::profile::{
    EducationCreate, EducationRow, ExperienceCreate, ExperienceRow, ProfileCreate, ProfileRow,
};
use features_provider::profiles::store::ProfileStore;
use features_provider::state::AppState;

// ---------------------------------------------------------------------------
// In-memory profile store
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Tables {
    next_id: i64,
    profiles: Vec<ProfileRow>,
    education: Vec<EducationRow>,
    experience: Vec<ExperienceRow>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// `ProfileStore` over plain vectors, with the same cascade and ordering rules
/// as the Postgres schema.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

fn profile_row(id: i64, p: &ProfileCreate) -> ProfileRow {
    let now = Utc::now();
    ProfileRow {
        id,
        first_name: p.first_name.clone(),
        last_name: p.last_name.clone(),
        email: p.email.clone(),
        country: p.country.clone(),
        state: p.state.clone(),
        city: p.city.clone(),
        phone: p.phone.clone(),
        linkedin_url: p.linkedin_url.clone(),
        github_url: p.github_url.clone(),
        personal_website: p.personal_website.clone(),
        other_url: p.other_url.clone(),
        about_me: p.about_me.clone(),
        created_at: now,
        updated_at: now,
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn find_profile(&self, profile_id: i64) -> Result<Option<ProfileRow>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.profiles.iter().find(|p| p.id == profile_id).cloned())
    }

    async fn upsert_profile(&self, profile: &ProfileCreate) -> Result<ProfileRow, AppError> {
        let mut tables = self.tables.lock().unwrap();
        if let Some(existing) = tables.profiles.iter_mut().find(|p| p.email == profile.email) {
            let created_at = existing.created_at;
            *existing = profile_row(existing.id, profile);
            existing.created_at = created_at;
            return Ok(existing.clone());
        }
        let id = tables.next_id();
        let row = profile_row(id, profile);
        tables.profiles.push(row.clone());
        Ok(row)
    }

    async fn delete_profile(&self, profile_id: i64) -> Result<bool, AppError> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.profiles.len();
        tables.profiles.retain(|p| p.id != profile_id);
        if tables.profiles.len() == before {
            return Ok(false);
        }
        tables.education.retain(|e| e.profile_id != profile_id);
        tables.experience.retain(|e| e.profile_id != profile_id);
        Ok(true)
    }

    async fn insert_education(
        &self,
        profile_id: i64,
        education: &EducationCreate,
    ) -> Result<EducationRow, AppError> {
        let mut tables = self.tables.lock().unwrap();
        let now = Utc::now();
        let row = EducationRow {
            id: tables.next_id(),
            profile_id,
            institution: education.institution.clone(),
            degree: education.degree.clone(),
            start_date: education.start_date,
            end_date: education.end_date,
            additional_info: education.additional_info.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.education.push(row.clone());
        Ok(row)
    }

    async fn list_educations(&self, profile_id: i64) -> Result<Vec<EducationRow>, AppError> {
        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<EducationRow> = tables
            .education
            .iter()
            .filter(|e| e.profile_id == profile_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.start_date.cmp(&a.start_date).then(a.id.cmp(&b.id)));
        Ok(rows)
    }

    async fn delete_education(&self, profile_id: i64, education_id: i64) -> Result<bool, AppError> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.education.len();
        tables
            .education
            .retain(|e| !(e.id == education_id && e.profile_id == profile_id));
        Ok(tables.education.len() < before)
    }

    async fn insert_experience(&self, experience: &ExperienceCreate) -> Result<ExperienceRow, AppError> {
        let mut tables = self.tables.lock().unwrap();
        let now = Utc::now();
        let row = ExperienceRow {
            id: tables.next_id(),
            profile_id: experience.profile_id,
            job_title: experience.job_title.clone(),
            company: experience.company.clone(),
            start_date: experience.start_date,
            end_date: experience.end_date,
            description: experience.description.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.experience.push(row.clone());
        Ok(row)
    }

    async fn list_experiences(&self, profile_id: i64) -> Result<Vec<ExperienceRow>, AppError> {
        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<ExperienceRow> = tables
            .experience
            .iter()
            .filter(|e| e.profile_id == profile_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.start_date.cmp(&a.start_date).then(a.id.cmp(&b.id)));
        Ok(rows)
    }

    async fn delete_experience(&self, profile_id: i64, experience_id: i64) -> Result<bool, AppError> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.experience.len();
        tables
            .experience
            .retain(|e| !(e.id == experience_id && e.profile_id == profile_id));
        Ok(tables.experience.len() < before)
    }
}

// ---------------------------------------------------------------------------
// Scripted chat model
// ---------------------------------------------------------------------------

/// Returns the same canned reply to every prompt, or fails every call when
/// built with `failing()`. Records each `(prompt, system)` pair it receives.
pub struct ScriptedModel {
    reply: Option<String>,
    calls: Mutex<Vec<(String, Option<String>)>>,
}

impl ScriptedModel {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<(String, Option<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatModel for ScriptedModel {
    async fn complete(&self, prompt: &str, system: Option<&str>) -> Result<String, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), system.map(str::to_string)));
        self.reply.clone().ok_or(LlmError::Api {
            status: 503,
            message: "model offline".to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// App + request helpers
// ---------------------------------------------------------------------------

/// Full application (same middleware as production) over the given model and
/// a fresh in-memory store.
pub fn build_test_app(model: Arc<ScriptedModel>) -> Router {
    build_test_app_with_store(Arc::new(MemoryStore::default()), model)
}

pub fn build_test_app_with_store(store: Arc<MemoryStore>, model: Arc<ScriptedModel>) -> Router {
    let state = AppState {
        store,
        llm: model,
        http: reqwest::Client::new(),
    };
    build_app(state)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn profile_payload(email: &str) -> Value {
    serde_json::json!({
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": email,
        "city": "London",
        "country": "United Kingdom",
        "phone": "+44 20 7946 0000",
        "github_url": "https://github.com/ada",
        "other_url": "https://ada.dev",
        "about_me": "Analytical engine programmer."
    })
}

/// Creates a profile through the API and returns its id.
pub async fn create_profile(app: &Router, email: &str) -> i64 {
    let response = post_json(app, "/api/profile", profile_payload(email)).await;
    assert_eq!(response.status(), 201);
    body_json(response).await["id"].as_i64().unwrap()
}
