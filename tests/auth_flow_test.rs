//! End-to-end workflow tests for registration and login.
//!
//! These tests run the real authentication service against in-memory
//! infrastructure fakes, so the full guard ordering and persistence
//! behavior is exercised without a database.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chrono::Utc;
use uuid::Uuid;

use agency_api::config::Config;
use agency_api::domain::{Agency, LoginAgency, NewAgency, Password, RegisterAgency, UserType};
use agency_api::errors::{AppError, AppResult};
use agency_api::infra::{AgencyRepository, MediaResolver, MediaStore};
use agency_api::services::{AuthService, Authenticator, SessionIssuer};

// =============================================================================
// In-memory fakes
// =============================================================================

/// In-memory agency repository enforcing the same unique keys as the
/// real table.
#[derive(Default)]
struct InMemoryAgencies {
    rows: Mutex<Vec<Agency>>,
}

impl InMemoryAgencies {
    fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl AgencyRepository for InMemoryAgencies {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Agency>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|a| a.email == email).cloned())
    }

    async fn find_by_agent_id(&self, agent_id: &str) -> AppResult<Option<Agency>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|a| a.agent_id == agent_id).cloned())
    }

    async fn insert(&self, record: NewAgency) -> AppResult<Agency> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|a| a.email == record.email || a.agent_id == record.agent_id)
        {
            return Err(AppError::storage("unique key violation"));
        }

        let now = Utc::now();
        let agency = Agency {
            id: Uuid::new_v4(),
            email: record.email,
            agent_id: record.agent_id,
            password_hash: record.password_hash,
            name: record.name,
            area: record.area,
            district: record.district,
            division: record.division,
            country: record.country,
            motive: record.motive,
            user_type: record.user_type,
            title_pic: record.title_pic,
            cover_pic: record.cover_pic,
            created_at: now,
            updated_at: now,
        };
        rows.push(agency.clone());
        Ok(agency)
    }
}

/// In-memory media store. `failing` makes every write fail.
#[derive(Default)]
struct MemoryMediaStore {
    files: Mutex<HashMap<String, Vec<u8>>>,
    failing: bool,
}

impl MemoryMediaStore {
    fn failing() -> Self {
        Self {
            files: Mutex::new(HashMap::new()),
            failing: true,
        }
    }

    fn stored_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }
}

#[async_trait]
impl MediaStore for MemoryMediaStore {
    async fn store(&self, file_name: &str, bytes: &[u8]) -> AppResult<String> {
        if self.failing {
            return Err(AppError::internal("store unavailable"));
        }
        self.files
            .lock()
            .unwrap()
            .insert(file_name.to_string(), bytes.to_vec());
        Ok(format!("/public/{}", file_name))
    }
}

// =============================================================================
// Test helpers
// =============================================================================

fn test_config() -> Config {
    Config::for_tests("test-secret-key-for-testing-32ch!")
}

struct Harness {
    agencies: Arc<InMemoryAgencies>,
    media: Arc<MemoryMediaStore>,
    service: Authenticator,
    issuer: SessionIssuer,
}

fn harness_with_store(store: MemoryMediaStore) -> Harness {
    let config = test_config();
    let agencies = Arc::new(InMemoryAgencies::default());
    let media = Arc::new(store);
    let issuer = SessionIssuer::new(&config);
    let service = Authenticator::new(
        agencies.clone(),
        MediaResolver::new(media.clone(), &config),
        issuer.clone(),
    );
    Harness {
        agencies,
        media,
        service,
        issuer,
    }
}

fn harness() -> Harness {
    harness_with_store(MemoryMediaStore::default())
}

fn register_request(email: &str, agent_id: &str, name: &str) -> RegisterAgency {
    RegisterAgency {
        email: email.to_string(),
        agent_id: agent_id.to_string(),
        password: "SecurePass123!".to_string(),
        confirm_password: "SecurePass123!".to_string(),
        name: name.to_string(),
        area: "Banani".to_string(),
        district: "Dhaka".to_string(),
        division: "Dhaka".to_string(),
        country: "Bangladesh".to_string(),
        motive: "Travel for everyone".to_string(),
        user_type: UserType::Agency,
        title_pic: None,
        cover_pic: None,
    }
}

fn login_request(candidate: &str, password: &str) -> LoginAgency {
    LoginAgency {
        email_or_agent_id: candidate.to_string(),
        password: password.to_string(),
    }
}

// =============================================================================
// Registration
// =============================================================================

#[tokio::test]
async fn register_persists_one_record_with_hashed_password() {
    let h = harness();

    let agency = h
        .service
        .register(register_request("a@example.com", "AG-1", "Skyline Travels"))
        .await
        .unwrap();

    assert_eq!(h.agencies.count(), 1);
    assert_ne!(agency.password_hash, "SecurePass123!");
    assert!(Password::from_hash(agency.password_hash.clone()).verify("SecurePass123!"));
    assert!(!agency.title_pic.is_empty());
    assert!(!agency.cover_pic.is_empty());
}

#[tokio::test]
async fn confirm_mismatch_persists_nothing() {
    let h = harness();

    let mut request = register_request("a@example.com", "AG-1", "Skyline Travels");
    request.confirm_password = "SomethingElse123".to_string();

    let err = h.service.register(request).await.unwrap_err();
    assert!(matches!(err, AppError::ConfirmPasswordMismatch));
    assert_eq!(h.agencies.count(), 0);
}

#[tokio::test]
async fn duplicate_email_leaves_a_single_record() {
    let h = harness();

    h.service
        .register(register_request("a@example.com", "AG-1", "Skyline Travels"))
        .await
        .unwrap();

    let err = h
        .service
        .register(register_request("a@example.com", "AG-2", "Other Agency"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::AlreadyRegistered));
    assert_eq!(h.agencies.count(), 1);
}

#[tokio::test]
async fn default_picture_urls_are_deterministic_per_name() {
    let h = harness();

    let first = h
        .service
        .register(register_request("a@example.com", "AG-1", "Skyline Travels"))
        .await
        .unwrap();
    let second = h
        .service
        .register(register_request("b@example.com", "AG-2", "Skyline Travels"))
        .await
        .unwrap();

    assert_eq!(first.title_pic, second.title_pic);
    assert_eq!(first.cover_pic, second.cover_pic);
    assert_ne!(first.title_pic, first.cover_pic);
    // Defaults are URLs only, nothing was written to storage
    assert_eq!(h.media.stored_count(), 0);
}

#[tokio::test]
async fn inline_images_are_stored_and_addressed_by_url() {
    let h = harness();

    let mut request = register_request("a@example.com", "AG-1", "Skyline Travels");
    request.title_pic = Some(BASE64.encode(b"title-bytes"));
    request.cover_pic = Some(format!("data:image/png;base64,{}", BASE64.encode(b"cover-bytes")));

    let agency = h.service.register(request).await.unwrap();

    assert_eq!(h.media.stored_count(), 2);
    assert!(agency.title_pic.starts_with("/public/title-skyline-travels-"));
    assert!(agency.cover_pic.starts_with("/public/cover-skyline-travels-"));
}

#[tokio::test]
async fn media_failure_aborts_registration() {
    let h = harness_with_store(MemoryMediaStore::failing());

    let mut request = register_request("a@example.com", "AG-1", "Skyline Travels");
    request.cover_pic = Some(BASE64.encode(b"cover-bytes"));

    let err = h.service.register(request).await.unwrap_err();
    assert!(matches!(err, AppError::MediaUpload(_)));
    assert_eq!(h.agencies.count(), 0);
}

// =============================================================================
// Login
// =============================================================================

#[tokio::test]
async fn login_works_by_email_and_by_agent_id() {
    let h = harness();
    h.service
        .register(register_request("a@example.com", "AG-1", "Skyline Travels"))
        .await
        .unwrap();

    let by_email = h
        .service
        .login(login_request("a@example.com", "SecurePass123!"))
        .await
        .unwrap();
    let by_agent_id = h
        .service
        .login(login_request("AG-1", "SecurePass123!"))
        .await
        .unwrap();

    assert_eq!(by_email.agency.email, by_agent_id.agency.email);

    // The session cookie carries a token whose claims identify the account
    let claims = h.issuer.verify(&by_email.session.token).unwrap();
    assert_eq!(claims.id, "AG-1");
    assert_eq!(claims.email, "a@example.com");
    assert!(by_email.session.cookie.starts_with("auth="));
}

#[tokio::test]
async fn login_profile_never_carries_the_password_hash() {
    let h = harness();
    h.service
        .register(register_request("a@example.com", "AG-1", "Skyline Travels"))
        .await
        .unwrap();

    let outcome = h
        .service
        .login(login_request("a@example.com", "SecurePass123!"))
        .await
        .unwrap();

    let json = serde_json::to_value(&outcome.agency).unwrap();
    assert!(json.get("password").is_none());
    assert!(json.get("passwordHash").is_none());
    assert!(json.get("password_hash").is_none());
    assert_eq!(json["agentID"], "AG-1");
    assert_eq!(json["name"], "Skyline Travels");
}

#[tokio::test]
async fn wrong_password_and_unknown_candidate_fail_without_a_session() {
    let h = harness();
    h.service
        .register(register_request("a@example.com", "AG-1", "Skyline Travels"))
        .await
        .unwrap();

    let err = h
        .service
        .login(login_request("a@example.com", "WrongPassword1"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::PasswordMismatch));

    let err = h
        .service
        .login(login_request("nobody@example.com", "SecurePass123!"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::AgencyNotFound));
}

#[tokio::test]
async fn email_match_wins_over_agent_id_on_combined_lookup() {
    let h = harness();

    // First account keyed by email "a@example.com"
    h.service
        .register(register_request("a@example.com", "AG-1", "First Agency"))
        .await
        .unwrap();
    // Second account whose agent id collides with the first's email
    h.service
        .register(register_request("b@example.com", "a@example.com", "Second Agency"))
        .await
        .unwrap();

    let outcome = h
        .service
        .login(login_request("a@example.com", "SecurePass123!"))
        .await
        .unwrap();

    assert_eq!(outcome.agency.name, "First Agency");
    assert_eq!(outcome.agency.email, "a@example.com");
}
