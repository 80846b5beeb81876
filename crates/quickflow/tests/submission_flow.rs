use std::io::Cursor;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use quickflow::application::{ApplicationInput, FormField, SubmissionPayload};
use quickflow::client::{
    HttpScoringClient, ScoringBackend, SubmissionError, SUBMIT_APPLICATION_PATH,
};
use quickflow::controller::{ApplicationController, ViewState, SUBMISSION_ERROR_MESSAGE};
use quickflow::report::{render_results, Palette, Tone};
use quickflow::session::{FormSession, SessionError};
use serde_json::{json, Value};

#[derive(Debug, Clone)]
struct RecordedRequest {
    content_type: Option<String>,
    body: Value,
}

/// Replies are served in order; the last one repeats once the script runs out.
#[derive(Clone)]
struct MockBackend {
    replies: Arc<Vec<(StatusCode, String)>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockBackend {
    fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("requests mutex poisoned").clone()
    }
}

async fn record(
    State(mock): State<MockBackend>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let mut requests = mock.requests.lock().expect("requests mutex poisoned");
    requests.push(RecordedRequest {
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_str(&body).unwrap_or(Value::Null),
    });
    let index = (requests.len() - 1).min(mock.replies.len() - 1);
    mock.replies[index].clone()
}

async fn spawn_backend(replies: Vec<(StatusCode, String)>) -> (String, MockBackend) {
    let mock = MockBackend {
        replies: Arc::new(replies),
        requests: Arc::new(Mutex::new(Vec::new())),
    };
    let app = Router::new()
        .route(SUBMIT_APPLICATION_PATH, post(record))
        .with_state(mock.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().expect("mock backend address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock backend serves");
    });

    (format!("http://{addr}"), mock)
}

fn approved_body() -> String {
    json!({
        "application_id": "app-1001",
        "qualification_score": 85,
        "qualification_status": "Approved",
        "risk_assessment": "Low",
        "recommended_loan_amount": 100000,
        "interest_rate_range": "6.5% - 9.0%",
        "ai_analysis": "Strong revenue relative to the requested amount.",
        "key_strengths": ["Established operating history", "Healthy cash flow"],
        "key_concerns": ["Moderate existing debt"],
        "matched_lenders": [
            {
                "lender_name": "Capital Growth Partners",
                "lender_type": "Bank",
                "interest_rate_range": "5.5% - 8.2%",
                "match_score": 92,
                "pre_approval_likelihood": "High"
            },
            {
                "lender_name": "SmallBiz Finance Co",
                "lender_type": "Alternative Lender",
                "interest_rate_range": "7.2% - 12.5%",
                "match_score": 78,
                "pre_approval_likelihood": "Medium"
            }
        ],
        "next_steps": [
            "Gather last two years of tax returns",
            "Schedule a call with a loan officer"
        ]
    })
    .to_string()
}

fn acme_input() -> ApplicationInput {
    let mut input = ApplicationInput::default();
    input.set(FormField::BusinessName, "Acme Corp");
    input.set(FormField::Industry, "Technology");
    input.set(FormField::YearsInBusiness, "5");
    input.set(FormField::AnnualRevenue, "500000");
    input.set(FormField::CreditScore, "720");
    input.set(FormField::MonthlyCashFlow, "25000");
    input.set(FormField::ExistingDebt, "50000");
    input.set(FormField::LoanAmountRequested, "100000");
    input.set(FormField::LoanPurpose, "Working Capital");
    input.set(FormField::ContactEmail, "john@acme.com");
    input.set(FormField::ContactPhone, "(555) 123-4567");
    input
}

/// Answers for every prompt of the form, in prompt order. Selects are answered by number.
const ACME_ANSWERS: &str = concat!(
    "Acme Corp\n",
    "1\n",
    "5\n",
    "500000\n",
    "720\n",
    "25000\n",
    "50000\n",
    "100000\n",
    "1\n",
    "john@acme.com\n",
    "(555) 123-4567\n",
);

#[tokio::test]
async fn client_posts_coerced_json_and_decodes_result() {
    let (base_url, mock) = spawn_backend(vec![(StatusCode::OK, approved_body())]).await;
    let client = HttpScoringClient::new(&base_url);

    let result = client
        .submit_application(&SubmissionPayload::from(&acme_input()))
        .await
        .expect("submission succeeds");

    assert_eq!(result.application_id.as_deref(), Some("app-1001"));
    assert_eq!(result.qualification_score, Some(85.0));
    assert_eq!(result.matched_lenders.len(), 2);

    let requests = mock.requests();
    assert_eq!(requests.len(), 1, "exactly one request per submission");
    assert!(requests[0]
        .content_type
        .as_deref()
        .is_some_and(|value| value.starts_with("application/json")));
    assert_eq!(
        requests[0].body,
        json!({
            "business_name": "Acme Corp",
            "industry": "Technology",
            "years_in_business": 5,
            "annual_revenue": 500000,
            "credit_score": 720,
            "monthly_cash_flow": 25000,
            "existing_debt": 50000,
            "loan_amount_requested": 100000,
            "loan_purpose": "Working Capital",
            "contact_email": "john@acme.com",
            "contact_phone": "(555) 123-4567"
        })
    );
}

#[tokio::test]
async fn client_sends_prefix_parsed_numbers_and_null_for_garbage() {
    let (base_url, mock) = spawn_backend(vec![(StatusCode::OK, approved_body())]).await;
    let client = HttpScoringClient::new(&format!("{base_url}/"));

    let mut input = acme_input();
    input.set(FormField::YearsInBusiness, "5.9");
    input.set(FormField::AnnualRevenue, "1e3");
    input.set(FormField::CreditScore, "720abc");
    input.set(FormField::ExistingDebt, "");
    input.set(FormField::MonthlyCashFlow, "-2500.5");

    client
        .submit_application(&SubmissionPayload::from(&input))
        .await
        .expect("submission succeeds");

    let requests = mock.requests();
    let body = &requests[0].body;
    assert_eq!(body["years_in_business"], json!(5));
    assert_eq!(body["annual_revenue"], json!(1000));
    assert_eq!(body["credit_score"], json!(720));
    assert_eq!(body["existing_debt"], Value::Null);
    assert_eq!(body["monthly_cash_flow"], json!(-2500.5));
}

#[tokio::test]
async fn non_success_status_is_a_status_error() {
    for status in [
        StatusCode::BAD_REQUEST,
        StatusCode::UNPROCESSABLE_ENTITY,
        StatusCode::SERVICE_UNAVAILABLE,
    ] {
        let (base_url, _mock) = spawn_backend(vec![(status, "{}".to_string())]).await;
        let client = HttpScoringClient::new(&base_url);

        let err = client
            .submit_application(&SubmissionPayload::from(&acme_input()))
            .await
            .expect_err("non-2xx fails");
        assert!(
            matches!(err, SubmissionError::Status { status: code } if code == status.as_u16()),
            "unexpected error {err:?}"
        );
    }
}

#[tokio::test]
async fn malformed_or_incomplete_body_is_a_decode_error() {
    let missing_lists = json!({
        "qualification_score": 85,
        "qualification_status": "Approved"
    })
    .to_string();

    for body in ["not json".to_string(), missing_lists] {
        let (base_url, _mock) = spawn_backend(vec![(StatusCode::OK, body)]).await;
        let client = HttpScoringClient::new(&base_url);

        let err = client
            .submit_application(&SubmissionPayload::from(&acme_input()))
            .await
            .expect_err("undecodable body fails");
        assert!(matches!(err, SubmissionError::Decode(_)), "unexpected error {err:?}");
    }
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind throwaway listener");
    let addr = listener.local_addr().expect("throwaway address");
    drop(listener);

    let client = HttpScoringClient::new(&format!("http://{addr}"));
    let err = client
        .submit_application(&SubmissionPayload::from(&acme_input()))
        .await
        .expect_err("nothing is listening");
    assert!(matches!(err, SubmissionError::Transport(_)), "unexpected error {err:?}");
}

#[tokio::test]
async fn controller_renders_acme_results_as_favorable() {
    let (base_url, _mock) = spawn_backend(vec![(StatusCode::OK, approved_body())]).await;
    let client = HttpScoringClient::new(&base_url);

    let mut controller = ApplicationController::new();
    for field in FormField::ordered() {
        controller.update_field(field, acme_input().get(field));
    }
    assert_eq!(controller.submit(&client).await, ViewState::Results);

    let view = controller.results_view().expect("results view available");
    assert_eq!(view.score_label, "85");
    assert_eq!(view.score_tone, Tone::Favorable);
    assert_eq!(view.status.tone, Tone::Favorable);

    let mut buffer = Vec::new();
    render_results(&mut buffer, &view, &Palette::plain()).expect("render results");
    let text = String::from_utf8(buffer).expect("utf8 output");
    assert!(text.contains("Application ID: app-1001"));
    assert!(text.contains("85 / 100"));
    assert!(text.contains("[Approved]"));
    assert!(text.contains("[Low Risk]"));
    assert!(text.contains("$100,000.00"));
    assert!(text.contains("Match Score: 92%  [High Pre-approval]"));
    assert!(text.contains("2. Schedule a call with a loan officer"));
}

#[tokio::test]
async fn session_fills_submits_prints_and_quits() {
    let (base_url, mock) = spawn_backend(vec![(StatusCode::OK, approved_body())]).await;
    let client = HttpScoringClient::new(&base_url);

    // A credit score above the range is refused and asked for again.
    let script = ACME_ANSWERS.replacen("720\n", "900\n720\n", 1) + "p\nq\n";
    let mut output = Vec::new();
    {
        let mut session =
            FormSession::new(&client, Cursor::new(script), &mut output, Palette::plain());
        session.run().await.expect("session completes");
        assert_eq!(session.controller().view(), ViewState::Results);
        assert_eq!(session.controller().input().industry, "Technology");
        assert_eq!(session.controller().input().loan_purpose, "Working Capital");
    }

    let text = String::from_utf8(output).expect("utf8 output");
    assert!(text.contains("! Value must be less than or equal to 850."));
    assert!(text.contains("[ Analyzing Application... ]"));
    assert_eq!(
        text.matches("Loan Prequalification Results").count(),
        2,
        "results shown once and printed once"
    );
    assert!(!text.contains('\u{1b}'));

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].body["credit_score"], json!(720));
}

#[tokio::test]
async fn session_retries_after_failure_until_results() {
    let (base_url, mock) = spawn_backend(vec![
        (StatusCode::INTERNAL_SERVER_ERROR, "{}".to_string()),
        (StatusCode::OK, approved_body()),
    ])
    .await;
    let client = HttpScoringClient::new(&base_url);

    let script = format!("{ACME_ANSWERS}r\nq\n");
    let mut output = Vec::new();
    {
        let mut session =
            FormSession::new(&client, Cursor::new(script), &mut output, Palette::plain());
        session.run().await.expect("session completes");
        assert_eq!(session.controller().view(), ViewState::Results);
        assert!(session.controller().error().is_none());
    }

    let text = String::from_utf8(output).expect("utf8 output");
    assert!(text.contains(&format!("! {SUBMISSION_ERROR_MESSAGE}")));
    assert!(text.contains("[r] Resubmit"));
    assert_eq!(mock.requests().len(), 2);
    assert_eq!(mock.requests()[0].body, mock.requests()[1].body, "input kept for resubmission");
}

#[tokio::test]
async fn session_starts_over_with_a_new_application() {
    let (base_url, mock) = spawn_backend(vec![(StatusCode::OK, approved_body())]).await;
    let client = HttpScoringClient::new(&base_url);

    let second = ACME_ANSWERS.replacen("Acme Corp", "Beta LLC", 1);
    let script = format!("{ACME_ANSWERS}n\n{second}q\n");
    let mut output = Vec::new();
    {
        let mut session =
            FormSession::new(&client, Cursor::new(script), &mut output, Palette::plain());
        session.run().await.expect("session completes");
        assert_eq!(session.controller().input().business_name, "Beta LLC");
    }

    let requests = mock.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].body["business_name"], json!("Acme Corp"));
    assert_eq!(requests[1].body["business_name"], json!("Beta LLC"));
}

#[tokio::test]
async fn session_reports_input_closed_mid_form() {
    let (base_url, mock) = spawn_backend(vec![(StatusCode::OK, approved_body())]).await;
    let client = HttpScoringClient::new(&base_url);

    let mut output = Vec::new();
    let mut session =
        FormSession::new(&client, Cursor::new("Acme Corp\n"), &mut output, Palette::plain());
    let err = session.run().await.expect_err("form is incomplete");

    assert!(matches!(err, SessionError::InputClosed));
    assert!(mock.requests().is_empty());
}
