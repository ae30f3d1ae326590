//! Integration guardrails for the API client.
//!
//! These tests point a real client at a real Actix stub backend on an
//! ephemeral port. The stub records every request it receives, so the
//! tests can assert on what actually went over the wire: bearer-token
//! attachment, session side effects of login and logout, error
//! normalization precedence, and the sequential bulk loop.

use std::cell::RefCell;
use std::net::TcpListener;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::http::header;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use backoffice::domain::ports::{InMemoryKeyValueStore, KeyValueStore};
use backoffice::domain::resources::StoreStatus;
use backoffice::domain::{
    AUTH_TOKEN_KEY, CANNOT_REACH_BACKEND_MESSAGE, SessionContext, SessionToken,
};
use backoffice::outbound::http::{ApiClient, RequestSpec};
use envelope::{Envelope, ListQuery};
use reqwest::{Method, Url};
use rstest::{fixture, rstest};
use rstest_bdd_macros::{given, then, when};
use serde_json::{Value, json};
use tokio::runtime::Runtime;
use tokio::task::LocalSet;
use uuid::Uuid;

const MISSING_STORE_ID: &str = "00000000-0000-0000-0000-00000000dead";
const REJECTED_STORE_ID: &str = "00000000-0000-0000-0000-00000000beef";

// -----------------------------------------------------------------------------
// Stub backend
// -----------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct RecordedRequest {
    method: String,
    path: String,
    bearer: Option<String>,
}

#[derive(Clone, Default)]
struct Recorded {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    logout_fails: Arc<AtomicBool>,
}

impl Recorded {
    fn record(&self, request: &HttpRequest) {
        let bearer = request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::to_owned);
        self.requests
            .lock()
            .expect("recorded requests lock")
            .push(RecordedRequest {
                method: request.method().to_string(),
                path: request.path().to_owned(),
                bearer,
            });
    }

    fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("recorded requests lock").clone()
    }
}

fn admin_user_json() -> Value {
    json!({
        "id": "11111111-1111-1111-1111-111111111111",
        "name": "Amira",
        "email": "amira@example.test",
        "role": "owner",
        "active": true
    })
}

fn store_json(id: &str) -> Value {
    json!({
        "id": id,
        "businessId": "22222222-2222-2222-2222-222222222222",
        "name": "Corner Cafe",
        "address": "1 Harbour Road",
        "phone": null,
        "status": "active",
        "createdAt": "2026-01-15T09:30:00Z"
    })
}

async fn login(recorded: web::Data<Recorded>, request: HttpRequest, body: web::Json<Value>) -> HttpResponse {
    recorded.record(&request);
    if body.get("password").and_then(Value::as_str) == Some("secret") {
        HttpResponse::Ok().json(json!({
            "data": {"token": "token-123", "user": admin_user_json()}
        }))
    } else {
        HttpResponse::Unauthorized().json(json!({"message": "invalid credentials"}))
    }
}

async fn logout(recorded: web::Data<Recorded>, request: HttpRequest) -> HttpResponse {
    recorded.record(&request);
    if recorded.logout_fails.load(Ordering::SeqCst) {
        HttpResponse::InternalServerError().json(json!({"message": "session backend unavailable"}))
    } else {
        HttpResponse::Ok().json(json!({"data": null}))
    }
}

async fn list_stores(recorded: web::Data<Recorded>, request: HttpRequest) -> HttpResponse {
    recorded.record(&request);
    HttpResponse::Ok().json(json!({
        "data": [store_json("33333333-3333-3333-3333-333333333333")],
        "meta": {"total": 1, "page": 1, "perPage": 20}
    }))
}

async fn get_store(
    recorded: web::Data<Recorded>,
    request: HttpRequest,
    path: web::Path<String>,
) -> HttpResponse {
    recorded.record(&request);
    let id = path.into_inner();
    if id == MISSING_STORE_ID {
        HttpResponse::NotFound().json(json!({"message": "store not found"}))
    } else {
        HttpResponse::Ok().json(json!({"data": store_json(&id)}))
    }
}

async fn set_store_status(
    recorded: web::Data<Recorded>,
    request: HttpRequest,
    path: web::Path<String>,
) -> HttpResponse {
    recorded.record(&request);
    let id = path.into_inner();
    if id == REJECTED_STORE_ID {
        HttpResponse::UnprocessableEntity()
            .json(json!({"message": "pending stores cannot change status"}))
    } else {
        HttpResponse::Ok().json(json!({"data": store_json(&id)}))
    }
}

async fn broken(recorded: web::Data<Recorded>, request: HttpRequest) -> HttpResponse {
    recorded.record(&request);
    HttpResponse::InternalServerError().finish()
}

async fn slow(recorded: web::Data<Recorded>, request: HttpRequest) -> HttpResponse {
    recorded.record(&request);
    tokio::time::sleep(Duration::from_secs(2)).await;
    HttpResponse::Ok().json(json!({"data": null}))
}

async fn garbled(recorded: web::Data<Recorded>, request: HttpRequest) -> HttpResponse {
    recorded.record(&request);
    HttpResponse::Ok()
        .content_type("text/html")
        .body("<html>maintenance page</html>")
}

async fn looping(recorded: web::Data<Recorded>, request: HttpRequest) -> HttpResponse {
    recorded.record(&request);
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/looping"))
        .finish()
}

async fn spawn_stub_backend(recorded: Recorded) -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
    let addr = listener.local_addr().map_err(|err| err.to_string())?;

    let data = web::Data::new(recorded);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .route("/auth/login", web::post().to(login))
            .route("/auth/logout", web::post().to(logout))
            .route("/stores", web::get().to(list_stores))
            .route("/stores/{id}", web::get().to(get_store))
            .route("/stores/{id}/status", web::patch().to(set_store_status))
            .route("/broken", web::get().to(broken))
            .route("/slow", web::get().to(slow))
            .route("/garbled", web::get().to(garbled))
            .route("/looping", web::get().to(looping))
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .map_err(|err| err.to_string())?
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);

    Ok((format!("http://{addr}"), handle))
}

// -----------------------------------------------------------------------------
// World
// -----------------------------------------------------------------------------

struct ClientWorld {
    runtime: Runtime,
    local: LocalSet,
    base_url: String,
    server: ServerHandle,
    recorded: Recorded,
    session_store: Arc<InMemoryKeyValueStore>,
    last_error: Option<String>,
}

type SharedWorld = Rc<RefCell<ClientWorld>>;

impl ClientWorld {
    fn client(&self) -> ApiClient {
        let base_url = Url::parse(&self.base_url).expect("stub base URL parses");
        let session = SessionContext::new(self.session_store.clone());
        ApiClient::new(base_url, session).expect("client builds")
    }

    fn impatient_client(&self) -> ApiClient {
        let base_url = Url::parse(&self.base_url).expect("stub base URL parses");
        let session = SessionContext::new(self.session_store.clone());
        ApiClient::with_timeout(base_url, session, Duration::from_millis(200))
            .expect("client builds")
    }
}

fn shutdown(world: SharedWorld) {
    let ctx = world.borrow();
    let server = ctx.server.clone();
    ctx.local.block_on(&ctx.runtime, async move {
        server.stop(true).await;
    });
}

fn with_world_async<R, F>(world: &SharedWorld, operation: impl FnOnce(ApiClient) -> F) -> R
where
    F: std::future::Future<Output = R>,
{
    let ctx = world.borrow();
    let client = ctx.client();
    ctx.local.block_on(&ctx.runtime, operation(client))
}

#[fixture]
fn world() -> SharedWorld {
    // Surfaces the client's degradation warnings when a test fails.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    let local = LocalSet::new();

    let recorded = Recorded::default();
    let (base_url, server) = local
        .block_on(&runtime, spawn_stub_backend(recorded.clone()))
        .expect("stub backend should start");

    Rc::new(RefCell::new(ClientWorld {
        runtime,
        local,
        base_url,
        server,
        recorded,
        session_store: Arc::new(InMemoryKeyValueStore::new()),
        last_error: None,
    }))
}

// -----------------------------------------------------------------------------
// Step definitions
// -----------------------------------------------------------------------------

#[given("a stub backend and an empty session")]
fn a_stub_backend_and_an_empty_session(_world: SharedWorld) {}

#[given("a session holding a stored token")]
fn a_session_holding_a_stored_token(world: SharedWorld) {
    let ctx = world.borrow();
    ctx.session_store
        .set(AUTH_TOKEN_KEY, "stored-token")
        .expect("seed token write");
}

#[when("the console logs in with valid credentials")]
fn the_console_logs_in_with_valid_credentials(world: SharedWorld) {
    let payload = with_world_async(&world, |client| async move {
        client.login("amira@example.test", "secret").await
    })
    .expect("login succeeds");
    assert_eq!(payload.data.token, "token-123");
}

#[when("the console logs in with a wrong password")]
fn the_console_logs_in_with_a_wrong_password(world: SharedWorld) {
    let error = with_world_async(&world, |client| async move {
        client.login("amira@example.test", "wrong").await
    })
    .expect_err("login must fail");
    world.borrow_mut().last_error = Some(error.message().to_owned());
}

#[when("the console lists stores")]
fn the_console_lists_stores(world: SharedWorld) {
    let stores = with_world_async(&world, |client| async move {
        client.list_stores(&ListQuery::default()).await
    })
    .expect("list succeeds");
    assert_eq!(stores.data.len(), 1);
}

#[when("the console logs out")]
fn the_console_logs_out(world: SharedWorld) {
    let result = with_world_async(&world, |client| async move { client.logout().await });
    let mut ctx = world.borrow_mut();
    ctx.last_error = result.err().map(|error| error.message().to_owned());
}

#[then("the session holds the returned token and user")]
fn the_session_holds_the_returned_token_and_user(world: SharedWorld) {
    let ctx = world.borrow();
    let session = SessionContext::new(ctx.session_store.clone());
    let token = session.token().expect("token persisted");
    assert_eq!(token.reveal(), "token-123");
    let user = session.current_user().expect("user persisted");
    assert_eq!(user.email, "amira@example.test");
}

#[then("the session is empty")]
fn the_session_is_empty(world: SharedWorld) {
    let ctx = world.borrow();
    let session = SessionContext::new(ctx.session_store.clone());
    assert!(session.token().is_none());
    assert!(session.current_user().is_none());
}

#[then("the last request carried the session token")]
fn the_last_request_carried_the_session_token(world: SharedWorld) {
    let ctx = world.borrow();
    let requests = ctx.recorded.requests();
    let last = requests.last().expect("a request was made");
    assert_eq!(last.bearer.as_deref(), Some("token-123"));
}

// -----------------------------------------------------------------------------
// Session lifecycle scenarios
// -----------------------------------------------------------------------------

#[rstest]
fn login_persists_the_session_and_later_requests_carry_the_token(world: SharedWorld) {
    a_stub_backend_and_an_empty_session(world.clone());
    the_console_logs_in_with_valid_credentials(world.clone());
    the_session_holds_the_returned_token_and_user(world.clone());

    the_console_lists_stores(world.clone());
    the_last_request_carried_the_session_token(world.clone());

    shutdown(world);
}

#[rstest]
fn failed_login_leaves_the_session_empty(world: SharedWorld) {
    a_stub_backend_and_an_empty_session(world.clone());
    the_console_logs_in_with_a_wrong_password(world.clone());
    the_session_is_empty(world.clone());

    let error = world.borrow().last_error.clone().expect("login error stored");
    assert_eq!(error, "invalid credentials");

    shutdown(world);
}

#[rstest]
fn logout_clears_the_session_when_the_backend_accepts(world: SharedWorld) {
    a_stub_backend_and_an_empty_session(world.clone());
    the_console_logs_in_with_valid_credentials(world.clone());
    the_console_logs_out(world.clone());
    the_session_is_empty(world.clone());
    assert!(world.borrow().last_error.is_none());

    shutdown(world);
}

#[rstest]
fn logout_clears_the_session_even_when_the_backend_fails(world: SharedWorld) {
    a_stub_backend_and_an_empty_session(world.clone());
    the_console_logs_in_with_valid_credentials(world.clone());
    world
        .borrow()
        .recorded
        .logout_fails
        .store(true, Ordering::SeqCst);

    the_console_logs_out(world.clone());

    // The request failure surfaces, yet the local session is gone.
    let error = world.borrow().last_error.clone().expect("logout error stored");
    assert_eq!(error, "session backend unavailable");
    the_session_is_empty(world.clone());

    shutdown(world);
}

// -----------------------------------------------------------------------------
// Token resolution
// -----------------------------------------------------------------------------

#[rstest]
fn stored_token_is_attached_to_every_request(world: SharedWorld) {
    a_session_holding_a_stored_token(world.clone());
    the_console_lists_stores(world.clone());

    let requests = world.borrow().recorded.requests();
    assert_eq!(requests.last().expect("request recorded").bearer.as_deref(), Some("stored-token"));

    shutdown(world);
}

#[rstest]
fn explicit_token_override_beats_the_stored_token(world: SharedWorld) {
    a_session_holding_a_stored_token(world.clone());

    let override_token = SessionToken::new("override-token").expect("token validates");
    let spec = RequestSpec::new().with_bearer_override(override_token);
    with_world_async(&world, |client| async move {
        client
            .request::<Envelope<Vec<Value>>>(Method::GET, "stores", spec)
            .await
    })
    .expect("request succeeds");

    let requests = world.borrow().recorded.requests();
    assert_eq!(
        requests.last().expect("request recorded").bearer.as_deref(),
        Some("override-token")
    );

    shutdown(world);
}

#[rstest]
fn requests_without_any_token_are_unauthenticated(world: SharedWorld) {
    a_stub_backend_and_an_empty_session(world.clone());
    the_console_lists_stores(world.clone());

    let requests = world.borrow().recorded.requests();
    assert_eq!(requests.last().expect("request recorded").bearer, None);

    shutdown(world);
}

// -----------------------------------------------------------------------------
// Error normalization precedence
// -----------------------------------------------------------------------------

#[rstest]
fn server_message_takes_precedence_over_the_status_line(world: SharedWorld) {
    let missing = Uuid::parse_str(MISSING_STORE_ID).expect("fixture uuid");
    let error = with_world_async(&world, |client| async move { client.get_store(missing).await })
        .expect_err("missing store must fail");
    assert_eq!(error.message(), "store not found");

    shutdown(world);
}

#[rstest]
fn empty_error_bodies_fall_back_to_the_status_line(world: SharedWorld) {
    let error = with_world_async(&world, |client| async move {
        client
            .request::<Envelope<Value>>(Method::GET, "broken", RequestSpec::new())
            .await
    })
    .expect_err("broken route must fail");
    assert_eq!(error.message(), "server responded with 500 Internal Server Error");

    shutdown(world);
}

#[rstest]
fn timeouts_surface_the_fixed_unreachable_message(world: SharedWorld) {
    let error = {
        let ctx = world.borrow();
        let client = ctx.impatient_client();
        ctx.local.block_on(&ctx.runtime, async move {
            client
                .request::<Envelope<Value>>(Method::GET, "slow", RequestSpec::new())
                .await
        })
    }
    .expect_err("slow route must time out");
    assert_eq!(error.message(), CANNOT_REACH_BACKEND_MESSAGE);

    shutdown(world);
}

#[rstest]
fn successful_responses_that_are_not_json_surface_a_decode_error(world: SharedWorld) {
    let error = with_world_async(&world, |client| async move {
        client
            .request::<Envelope<Value>>(Method::GET, "garbled", RequestSpec::new())
            .await
    })
    .expect_err("garbled route must fail to decode");
    assert!(
        error
            .message()
            .starts_with("failed to decode the server response"),
        "unexpected message: {}",
        error.message()
    );

    shutdown(world);
}

#[rstest]
fn transport_failures_other_than_unreachable_surface_their_own_message(world: SharedWorld) {
    // A self-redirecting route exhausts the client's redirect budget,
    // which is neither a timeout nor a connect failure.
    let error = with_world_async(&world, |client| async move {
        client
            .request::<Envelope<Value>>(Method::GET, "looping", RequestSpec::new())
            .await
    })
    .expect_err("redirect loop must fail");
    assert_ne!(error.message(), CANNOT_REACH_BACKEND_MESSAGE);
    assert!(
        error.message().contains("redirect"),
        "unexpected message: {}",
        error.message()
    );

    shutdown(world);
}

#[rstest]
fn unreachable_backends_surface_the_fixed_message() {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");

    // Bind then drop a listener so the port is valid but nothing serves it.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
        listener.local_addr().expect("probe address").port()
    };

    let base_url = Url::parse(&format!("http://127.0.0.1:{port}")).expect("base URL parses");
    let session = SessionContext::new(Arc::new(InMemoryKeyValueStore::new()));
    let client = ApiClient::new(base_url, session).expect("client builds");

    let error = runtime
        .block_on(async move { client.list_stores(&ListQuery::default()).await })
        .expect_err("request must fail");
    assert_eq!(error.message(), CANNOT_REACH_BACKEND_MESSAGE);
}

// -----------------------------------------------------------------------------
// Bulk loop semantics
// -----------------------------------------------------------------------------

#[rstest]
fn bulk_status_updates_continue_past_failures(world: SharedWorld) {
    let first = Uuid::parse_str("44444444-4444-4444-4444-444444444444").expect("fixture uuid");
    let rejected = Uuid::parse_str(REJECTED_STORE_ID).expect("fixture uuid");
    let last = Uuid::parse_str("55555555-5555-5555-5555-555555555555").expect("fixture uuid");

    let outcome = with_world_async(&world, |client| async move {
        client
            .set_store_status_bulk(&[first, rejected, last], StoreStatus::Inactive)
            .await
    });

    assert_eq!(outcome.updated, vec![first, last]);
    assert_eq!(outcome.failed.len(), 1);
    assert_eq!(outcome.failed[0].id, rejected);
    assert_eq!(
        outcome.failed[0].error.message(),
        "pending stores cannot change status"
    );
    assert!(!outcome.is_complete());

    // The loop issued one request per id, in order.
    let patches: Vec<String> = world
        .borrow()
        .recorded
        .requests()
        .into_iter()
        .filter(|request| request.method == "PATCH")
        .map(|request| request.path)
        .collect();
    assert_eq!(
        patches,
        vec![
            format!("/stores/{first}/status"),
            format!("/stores/{rejected}/status"),
            format!("/stores/{last}/status"),
        ]
    );

    shutdown(world);
}
