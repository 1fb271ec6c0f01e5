use std::sync::Arc;

use portal_client::{ApiClient, ApiError, ClientConfig, PortalService};
use serde_json::json;
use shared::{Enrollment, EnrollmentConfirmation, NewCourse, NewStudent};
use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::with_base_url(server.uri()).unwrap()
}

// ── Students ────────────────────────────────────────────────────

#[tokio::test]
async fn create_student_posts_record_without_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/students"))
        .and(header("content-type", "application/json"))
        .and(header_exists("x-request-id"))
        .and(body_json(json!({"name": "Ada", "age": 30, "email": "ada@example.com"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 1, "name": "Ada", "age": 30, "email": "ada@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let student = client
        .create_student(&NewStudent::new("Ada", 30, "ada@example.com"))
        .await
        .unwrap();

    assert_eq!(student, NewStudent::new("Ada", 30, "ada@example.com").with_id(1));
}

#[tokio::test]
async fn create_student_rejection_surfaces_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/students"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"error": "Email already registered"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .create_student(&NewStudent::new("Ada", 30, "ada@example.com"))
        .await
        .unwrap_err();

    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, 422);
            assert_eq!(message, "Email already registered");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn get_student_returns_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/students/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7, "name": "Grace", "age": 45, "email": "grace@example.com"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let student = client.get_student(7).await.unwrap().unwrap();
    assert_eq!(student.id, 7);
    assert_eq!(student.name, "Grace");
}

#[tokio::test]
async fn get_student_not_found_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/students/404"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"error": "Student not found"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_eq!(client.get_student(404).await.unwrap(), None);
}

#[tokio::test]
async fn get_student_null_or_empty_body_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/students/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/students/2"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_eq!(client.get_student(1).await.unwrap(), None);
    assert_eq!(client.get_student(2).await.unwrap(), None);
}

#[tokio::test]
async fn get_student_server_error_is_not_absent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/students/1"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"error": "database unavailable"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.get_student(1).await.unwrap_err();
    assert!(err.is_server_error());
    assert_eq!(err.user_message(), "database unavailable");
}

#[tokio::test]
async fn get_all_students_preserves_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/students"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 2, "name": "Grace", "age": 45, "email": "grace@example.com"},
            {"id": 1, "name": "Ada", "age": 30, "email": "ada@example.com"}
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let students = client.get_all_students().await.unwrap();
    let ids: Vec<i64> = students.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[tokio::test]
async fn get_all_students_failure_without_body_uses_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/students"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.get_all_students().await.unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert_eq!(err.user_message(), "Failed to fetch students");
}

#[tokio::test]
async fn malformed_success_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/students"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"students": []})))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.get_all_students().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)), "got {err:?}");
}

// ── Courses ─────────────────────────────────────────────────────

#[tokio::test]
async fn create_course_posts_record_without_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/courses"))
        .and(body_json(json!({"title": "CS101", "description": "Intro"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 1, "title": "CS101", "description": "Intro"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let course = client
        .create_course(&NewCourse::new("CS101", "Intro"))
        .await
        .unwrap();
    assert_eq!(course, NewCourse::new("CS101", "Intro").with_id(1));
}

#[tokio::test]
async fn get_course_not_found_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/courses/9"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_eq!(client.get_course(9).await.unwrap(), None);
}

#[tokio::test]
async fn get_all_courses_failure_surfaces_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/courses"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.get_all_courses().await.unwrap_err();
    assert_eq!(err.user_message(), "boom");
}

// ── Enrollments ─────────────────────────────────────────────────

#[tokio::test]
async fn create_enrollment_returns_confirmation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/enrollments"))
        .and(body_json(json!({"student_id": 1, "course_id": 2})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Enrollment created",
            "student_id": 1,
            "course_id": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let confirmation = client
        .create_enrollment(&Enrollment::new(1, 2))
        .await
        .unwrap();
    assert_eq!(confirmation.message.as_deref(), Some("Enrollment created"));
    assert_eq!(confirmation.field("course_id"), Some(&json!(2)));
}

#[tokio::test]
async fn create_enrollment_accepts_empty_success_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/enrollments"))
        .and(body_json(json!({"student_id": 1, "course_id": 1})))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/enrollments"))
        .and(body_json(json!({"student_id": 2, "course_id": 1})))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    for student_id in [1, 2] {
        let confirmation = client
            .create_enrollment(&Enrollment::new(student_id, 1))
            .await
            .unwrap();
        assert_eq!(confirmation, EnrollmentConfirmation::default());
    }
}

#[tokio::test]
async fn create_enrollment_accepts_non_object_payloads() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/enrollments"))
        .and(body_json(json!({"student_id": 1, "course_id": 1})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!("Enrolled")))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/enrollments"))
        .and(body_json(json!({"student_id": 1, "course_id": 2})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(true)))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let text = client
        .create_enrollment(&Enrollment::new(1, 1))
        .await
        .unwrap();
    assert_eq!(text.message.as_deref(), Some("Enrolled"));

    let flag = client
        .create_enrollment(&Enrollment::new(1, 2))
        .await
        .unwrap();
    assert_eq!(flag.raw, Some(json!(true)));
}

#[tokio::test]
async fn create_enrollment_rejection_is_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/enrollments"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "error": "Student is already enrolled in this course"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .create_enrollment(&Enrollment::new(1, 1))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(409));
    assert_eq!(err.user_message(), "Student is already enrolled in this course");
}

#[tokio::test]
async fn create_enrollment_rejection_with_plain_body_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/enrollments"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Bad Request"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .create_enrollment(&Enrollment::new(1, 1))
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "Failed to create enrollment");
}

#[tokio::test]
async fn get_student_courses_uses_nested_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/enrollments/students/3/courses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "courses": [{"id": 1, "title": "CS101", "description": "Intro"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let payload = client.get_student_courses(3).await.unwrap();
    assert_eq!(payload.courses.len(), 1);
    assert!(payload.contains_course(1));
}

#[tokio::test]
async fn get_student_courses_rejection_is_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/enrollments/students/99/courses"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"error": "Student 99 not found"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.get_student_courses(99).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.user_message(), "Student 99 not found");
}

// ── Transport and configuration ─────────────────────────────────

#[tokio::test]
async fn base_url_path_prefix_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/courses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::with_base_url(format!("{}/api/", server.uri())).unwrap();
    assert!(client.get_all_courses().await.unwrap().is_empty());
}

#[tokio::test]
async fn configured_user_agent_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/students"))
        .and(header("user-agent", "portal-web/2.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::with_config(
        ClientConfig::new(server.uri()).with_user_agent("portal-web/2.0"),
    )
    .unwrap();
    assert!(client.get_all_students().await.unwrap().is_empty());
}

#[tokio::test]
async fn default_user_agent_names_the_crate() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/courses"))
        .and(header(
            "user-agent",
            concat!("portal-client/", env!("CARGO_PKG_VERSION")),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert!(client.get_all_courses().await.unwrap().is_empty());
}

#[tokio::test]
async fn unreachable_server_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = ApiClient::with_config(
        ClientConfig::new(uri).with_timeout(std::time::Duration::from_secs(5)),
    )
    .unwrap();
    let err = client.get_all_students().await.unwrap_err();
    assert!(err.is_network(), "got {err:?}");
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn service_trait_object_delegates_to_client() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/courses/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1, "title": "CS101", "description": "Intro"
        })))
        .mount(&server)
        .await;

    let service: Arc<dyn PortalService> = Arc::new(client_for(&server).await);
    let course = service.get_course(1).await.unwrap().unwrap();
    assert_eq!(course.title, "CS101");
}
