use jobmatch::auth::DemoToken;
use jobmatch::types::{ActionResponse, EmployerJob, ErrorBody, Job, LoginResponse, User};
use jobmatch::{build_rocket, JobBoard};
use rocket::http::{ContentType, Header, Status};
use rocket::local::asynchronous::Client;

async fn client() -> Client {
    Client::tracked(build_rocket(JobBoard::default()))
        .await
        .expect("valid rocket instance")
}

fn bearer(token: &str) -> Header<'static> {
    Header::new("Authorization", format!("Bearer {}", token))
}

fn employer() -> Header<'static> {
    bearer(&DemoToken::mint("employer1"))
}

fn talent() -> Header<'static> {
    bearer("demo_token_1700000000000")
}

#[rocket::async_test]
async fn search_filters_public_jobs() {
    let client = client().await;
    let response = client.get("/api/jobs?search=react").dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let jobs: Vec<Job> = response.into_json().await.unwrap();
    let titles: Vec<&str> = jobs.iter().map(|j| j.title.as_str()).collect();
    assert!(titles.contains(&"Senior React Developer"));
    assert!(!titles.contains(&"Product Designer"));
}

#[rocket::async_test]
async fn job_lookup_by_id() {
    let client = client().await;

    let response = client.get("/api/jobs/1").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let job: Job = response.into_json().await.unwrap();
    assert_eq!(job.id, "1");

    let response = client.get("/api/jobs/999").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
    let body: ErrorBody = response.into_json().await.unwrap();
    assert!(!body.success);
    assert_eq!(body.error, "Job not found");
    assert_eq!(body.error_code, "NOT_FOUND");
}

#[rocket::async_test]
async fn me_requires_a_token() {
    let client = client().await;
    let response = client.get("/api/me").dispatch().await;
    assert_eq!(response.status(), Status::Unauthorized);

    let body: ErrorBody = response.into_json().await.unwrap();
    assert_eq!(body.error, "Authorization token required");
    assert_eq!(body.error_code, "AUTHORIZATION_ERROR");
}

#[rocket::async_test]
async fn login_then_me_returns_the_account() {
    let client = client().await;
    let response = client
        .post("/api/auth/login")
        .header(ContentType::JSON)
        .body(r#"{"email":"employer@techcorp.com"}"#)
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let login: LoginResponse = response.into_json().await.unwrap();
    assert!(login.token.starts_with("demo_token_employer1_"));

    let response = client.get("/api/me").header(bearer(&login.token)).dispatch().await;
    let user: User = response.into_json().await.unwrap();
    assert_eq!(user.email, "employer@techcorp.com");
}

#[rocket::async_test]
async fn accepting_an_invitation() {
    let client = client().await;
    let response = client
        .post("/api/talent/invitations/inv1/respond")
        .header(talent())
        .header(ContentType::JSON)
        .body(r#"{"status":"Accepted"}"#)
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let body: ActionResponse = response.into_json().await.unwrap();
    assert!(body.success);
    assert_eq!(body.message, "Invitation accepted");
}

#[rocket::async_test]
async fn invalid_invitation_status_is_rejected() {
    let client = client().await;
    let response = client
        .post("/api/talent/invitations/inv1/respond")
        .header(talent())
        .header(ContentType::JSON)
        .body(r#"{"status":"Maybe"}"#)
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);

    let body: ErrorBody = response.into_json().await.unwrap();
    assert_eq!(body.error_code, "VALIDATION_ERROR");
}

#[rocket::async_test]
async fn non_string_invitation_status_is_a_validation_error() {
    let client = client().await;
    for body in [r#"{"status":1}"#, r#"{"status":null}"#] {
        let response = client
            .post("/api/talent/invitations/inv1/respond")
            .header(talent())
            .header(ContentType::JSON)
            .body(body)
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::BadRequest, "body {}", body);

        let error: ErrorBody = response.into_json().await.unwrap();
        assert_eq!(error.error, "Invalid status");
        assert_eq!(error.error_code, "VALIDATION_ERROR");
    }
}

#[rocket::async_test]
async fn employer_cannot_see_another_employers_applicants() {
    let client = client().await;
    let response = client
        .get("/api/employer/jobs/3/applicants")
        .header(employer())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Forbidden);

    let response = client
        .get("/api/employer/jobs/1/applicants")
        .header(employer())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
}

#[rocket::async_test]
async fn talent_cannot_create_jobs() {
    let client = client().await;
    let response = client
        .post("/api/employer/jobs")
        .header(talent())
        .header(ContentType::JSON)
        .body(r#"{"title":"Rust Engineer","technologies":["Rust"],"deadline":"2027-06-30"}"#)
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Forbidden);
}

#[rocket::async_test]
async fn employer_creates_a_job() {
    let client = client().await;
    let response = client
        .post("/api/employer/jobs")
        .header(employer())
        .header(ContentType::JSON)
        .body(r#"{"title":"Rust Engineer","technologies":["Rust","Tokio"],"deadline":"2027-06-30"}"#)
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Created);

    let job: Job = response.into_json().await.unwrap();
    assert_eq!(job.title, "Rust Engineer");
    assert_eq!(job.company, "TechCorp");
    assert_eq!(job.owner_id, "employer1");
}

#[rocket::async_test]
async fn employer_job_list_only_has_owned_jobs() {
    let client = client().await;
    let response = client.get("/api/employer/jobs").header(employer()).dispatch().await;
    let jobs: Vec<EmployerJob> = response.into_json().await.unwrap();
    let ids: Vec<&str> = jobs.iter().map(|j| j.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[rocket::async_test]
async fn applying_to_open_and_closed_jobs() {
    let client = client().await;

    let response = client
        .post("/api/talent/jobs/1/apply")
        .header(talent())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Created);
    let body: ActionResponse = response.into_json().await.unwrap();
    assert_eq!(body.job_id.as_deref(), Some("1"));
    assert!(body.submitted_at.is_some());

    let response = client
        .post("/api/talent/jobs/4/apply")
        .header(talent())
        .header(ContentType::JSON)
        .body(r#"{"source":"invitation"}"#)
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);
}

#[rocket::async_test]
async fn unknown_route_uses_json_catcher() {
    let client = client().await;
    let response = client.get("/api/nowhere").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);

    let body: ErrorBody = response.into_json().await.unwrap();
    assert_eq!(body.error_code, "NOT_FOUND");
}

#[rocket::async_test]
async fn preflight_carries_cors_headers() {
    let client = client().await;
    let response = client.options("/api/jobs").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(
        response.headers().get_one("Access-Control-Allow-Origin"),
        Some("*")
    );
}

#[rocket::async_test]
async fn health_is_public() {
    let client = client().await;
    let response = client.get("/api/health").dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let body: ActionResponse = response.into_json().await.unwrap();
    assert!(body.success);
}

#[rocket::async_test]
async fn onboarding_validates_the_role() {
    let client = client().await;

    let response = client
        .post("/api/me/onboard")
        .header(talent())
        .header(ContentType::JSON)
        .body(r#"{"role":"employer"}"#)
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let body: ActionResponse = response.into_json().await.unwrap();
    assert_eq!(body.message, "Onboarding completed");

    let response = client
        .post("/api/me/onboard")
        .header(talent())
        .header(ContentType::JSON)
        .body(r#"{"role":"admin"}"#)
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);
}
