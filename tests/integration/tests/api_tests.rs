//! API Integration Tests
//!
//! These tests require a running PostgreSQL instance and the environment
//! variables DATABASE_URL and JWT_SECRET. Without them every test returns early.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn register(server: &TestServer) -> AuthResponse {
    let response = server
        .post("/api/auth/register", &RegisterRequest::unique())
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn create_habit(server: &TestServer, token: &str, name: &str) -> HabitResponse {
    let response = server
        .post_auth("/api/habits", token, &CreateHabitRequest::daily(name))
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

#[tokio::test]
async fn test_root_banner() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let body: Value = assert_json(server.get("/").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert!(body["message"].as_str().unwrap().ends_with("API is running"));
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.user.name, request.name);
    assert_eq!(auth.user.email, request.email);
    assert_eq!(auth.user.role, "user");
    assert_eq!(auth.user.level, 1);
    assert_eq!(auth.user.xp_to_next_level, 100);
    assert_eq!(auth.token_type, "Bearer");
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
}

#[tokio::test]
async fn test_register_ignores_role() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    let body = json!({
        "name": request.name,
        "email": request.email,
        "password": request.password,
        "role": "admin"
    });

    let response = server.post("/api/auth/register", &body).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(auth.user.role, "user");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    server.post("/api/auth/register", &request).await.unwrap();

    let response = server.post("/api/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_short_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.password = "12345".to_string();

    let response = server.post("/api/auth/register", &request).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    server.post("/api/auth/register", &register_req).await.unwrap();

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.email, register_req.email);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        email: "nonexistent@example.com".to_string(),
        password: "wrongpass".to_string(),
    };

    let response = server.post("/api/auth/login", &login_req).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.message, "Invalid credentials");
}

#[tokio::test]
async fn test_refresh_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let response = server
        .post(
            "/api/auth/refresh",
            &json!({ "refreshToken": auth.refresh_token }),
        )
        .await
        .unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(refreshed.user.id, auth.user.id);

    // Access tokens are not accepted as refresh tokens
    let response = server
        .post("/api/auth/refresh", &json!({ "refreshToken": auth.access_token }))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_me() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let response = server
        .get_auth("/api/auth/me", &auth.access_token)
        .await
        .unwrap();
    let me: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.id, auth.user.id);
    assert!(me.badges.is_empty());
    assert!(!me.daily_spin_available);
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/habits").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.message, "Not authorized, no token");

    let response = server.get_auth("/api/habits", "not-a-jwt").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Habit Tests
// ============================================================================

#[tokio::test]
async fn test_habit_crud() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;
    let token = &auth.access_token;

    let habit = create_habit(&server, token, "Drink water").await;
    assert_eq!(habit.user_id, auth.user.id);
    assert_eq!(habit.category, "Health");
    assert_eq!(habit.frequency, "Daily");
    assert_eq!(habit.description, "");
    assert_eq!(habit.start_date, today());
    assert_eq!(habit.current_streak, 0);

    let second = create_habit(&server, token, "Stretch").await;
    let response = server.get_auth("/api/habits", token).await.unwrap();
    let habits: Vec<HabitResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let ids: Vec<&str> = habits.iter().map(|h| h.id.as_str()).collect();
    assert_eq!(ids, vec![second.id.as_str(), habit.id.as_str()]);

    let path = format!("/api/habits/{}", habit.id);
    let response = server
        .put_auth(
            &path,
            token,
            &json!({ "frequency": "custom", "customDays": ["Mon", "Thu"], "reminderTime": "07:30" }),
        )
        .await
        .unwrap();
    let updated: HabitResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.name, "Drink water");
    assert_eq!(updated.frequency, "custom");
    assert_eq!(updated.reminder_time.as_deref(), Some("07:30"));

    let response = server.get_auth(&path, token).await.unwrap();
    let fetched: HabitResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.frequency, "custom");

    let response = server.delete_auth(&path, token).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["message"], "Habit deleted successfully");

    let response = server.get_auth(&path, token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_habit_validation() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;
    let token = &auth.access_token;

    let response = server
        .post_auth("/api/habits", token, &json!({ "name": "Read", "category": "Hobby" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .post_auth("/api/habits", token, &json!({ "name": "  ", "category": "Learning" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server.get_auth("/api/habits/not-an-id", token).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_habit_ownership() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = register(&server).await;
    let intruder = register(&server).await;
    let habit = create_habit(&server, &owner.access_token, "Journal").await;
    let path = format!("/api/habits/{}", habit.id);

    let response = server.get_auth(&path, &intruder.access_token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .delete_auth(&path, &intruder.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .post_auth(
            "/api/logs",
            &intruder.access_token,
            &CreateLogRequest::on(&habit.id, today()),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .get_auth("/api/habits/1", &owner.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Log Tests
// ============================================================================

#[tokio::test]
async fn test_log_streaks() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;
    let token = &auth.access_token;
    let habit = create_habit(&server, token, "Meditate").await;

    for n in [2, 1] {
        let response = server
            .post_auth("/api/logs", token, &CreateLogRequest::on(&habit.id, days_ago(n)))
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server
        .post_auth("/api/logs", token, &CreateLogRequest::on(&habit.id, today()))
        .await
        .unwrap();
    let created: LogCreatedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(!created.already_completed);
    assert_eq!(created.message, "Habit marked as completed");
    let streaks = created.streaks.unwrap();
    assert_eq!(streaks.current_streak, 3);
    assert_eq!(streaks.longest_streak, 3);

    let path = format!("/api/habits/{}", habit.id);
    let cached: HabitResponse = assert_json(
        server.get_auth(&path, token).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(cached.current_streak, 3);
}

#[tokio::test]
async fn test_duplicate_log_is_idempotent() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;
    let token = &auth.access_token;
    let habit = create_habit(&server, token, "Read").await;

    let request = CreateLogRequest::on(&habit.id, today());
    let first: LogCreatedResponse = assert_json(
        server.post_auth("/api/logs", token, &request).await.unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();

    // Same day as a full timestamp
    let timestamp = format!("{}T23:59:00.000Z", today().format("%Y-%m-%d"));
    let response = server
        .post_auth(
            "/api/logs",
            token,
            &json!({ "habitId": habit.id, "date": timestamp }),
        )
        .await
        .unwrap();
    let second: LogCreatedResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(second.already_completed);
    assert!(second.streaks.is_none());
    assert_eq!(second.log["id"], first.log["id"]);

    let progress: HabitProgressResponse = assert_json(
        server
            .get_auth(&format!("/api/logs/{}", habit.id), token)
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(progress.logs.len(), 1);
    assert_eq!(progress.total_completed, 1);
}

#[tokio::test]
async fn test_log_bad_date() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;
    let habit = create_habit(&server, &auth.access_token, "Run").await;

    let response = server
        .post_auth(
            "/api/logs",
            &auth.access_token,
            &json!({ "habitId": habit.id, "date": "yesterday" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_habit_progress() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;
    let token = &auth.access_token;
    let habit = create_habit(&server, token, "Walk").await;

    for date in [today(), days_ago(2)] {
        server
            .post_auth("/api/logs", token, &CreateLogRequest::on(&habit.id, date))
            .await
            .unwrap();
    }

    let response = server
        .get_auth(&format!("/api/logs/{}", habit.id), token)
        .await
        .unwrap();
    let progress: HabitProgressResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(progress.habit_id, habit.id);
    assert_eq!(progress.habit_name, "Walk");
    assert_eq!(progress.current_streak, 1);
    assert_eq!(progress.longest_streak, 1);
    assert_eq!(progress.total_completed, 2);
    assert_eq!(
        progress.logs[0]["date"],
        today().format("%Y-%m-%d").to_string()
    );
}

// ============================================================================
// Progress Tests
// ============================================================================

#[tokio::test]
async fn test_weekly_without_habits() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let response = server
        .get_auth("/api/progress/weekly", &auth.access_token)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["totalHabits"], 0);
    assert_eq!(body["message"], "No habits created yet");
}

#[tokio::test]
async fn test_weekly_and_monthly_reports() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;
    let token = &auth.access_token;
    let habit = create_habit(&server, token, "Floss").await;
    server
        .post_auth("/api/logs", token, &CreateLogRequest::on(&habit.id, today()))
        .await
        .unwrap();

    let weekly: Value = assert_json(
        server.get_auth("/api/progress/weekly", token).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(weekly["totalHabits"], 1);
    assert_eq!(weekly["totalCompletions"], 1);
    assert_eq!(weekly["dailyData"].as_array().unwrap().len(), 7);
    assert_eq!(weekly["insights"]["bestDay"]["percentage"], 100);

    let monthly: Value = assert_json(
        server.get_auth("/api/progress/monthly", token).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(monthly["totalCompletions"], 1);
    assert!(monthly["weeklyData"].as_array().unwrap().len() >= 4);
}

#[tokio::test]
async fn test_calendar() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;
    let token = &auth.access_token;
    let habit = create_habit(&server, token, "Sleep early").await;
    server
        .post_auth("/api/logs", token, &CreateLogRequest::on(&habit.id, today()))
        .await
        .unwrap();

    let calendar: Value = assert_json(
        server.get_auth("/api/progress/calendar", token).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(calendar["habits"].as_array().unwrap().len(), 1);
    assert_eq!(calendar["logs"].as_array().unwrap().len(), 1);
    assert!(calendar["monthName"].is_string());

    let empty: Value = assert_json(
        server
            .get_auth("/api/progress/calendar?year=2001&month=2", token)
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(empty["monthName"], "February");
    assert!(empty["logs"].as_array().unwrap().is_empty());

    let response = server
        .get_auth("/api/progress/calendar?month=13", token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Gamification Tests
// ============================================================================

#[tokio::test]
async fn test_award_xp_and_badges() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;
    let token = &auth.access_token;

    let response = server
        .post_auth(
            "/api/gamification/award-xp",
            token,
            &json!({ "amount": 250, "reason": "streak" }),
        )
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["message"], "Earned 250 XP for streak!");
    assert_eq!(body["level"], 3);
    assert_eq!(body["xpToNextLevel"], 50);

    let response = server
        .post_auth("/api/gamification/award-xp", token, &json!({ "amount": 0 }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let badge = json!({ "badgeId": "first-habit" });
    let first: Value = assert_json(
        server
            .post_auth("/api/gamification/award-badge", token, &badge)
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(first["newlyAwarded"], true);

    let second: Value = assert_json(
        server
            .post_auth("/api/gamification/award-badge", token, &badge)
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(second["newlyAwarded"], false);
    assert_eq!(second["badges"], json!(["first-habit"]));

    let stats: Value = assert_json(
        server
            .get_auth("/api/gamification/stats", token)
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(stats["xp"], 250);
    assert_eq!(stats["level"], 3);
}

#[tokio::test]
async fn test_daily_spin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;
    let token = &auth.access_token;
    let empty = json!({});

    // Locked until enabled
    let response = server
        .post_auth("/api/gamification/spin", token, &empty)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let enabled: Value = assert_json(
        server
            .post_auth("/api/gamification/enable-spin", token, &empty)
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(enabled["dailySpinAvailable"], true);

    let spun: Value = assert_json(
        server
            .post_auth("/api/gamification/spin", token, &empty)
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(spun["message"], "Spin successful!");
    assert!(spun["reward"]["type"].is_string());

    // Unlocking again does not grant a second spin today
    server
        .post_auth("/api/gamification/enable-spin", token, &empty)
        .await
        .unwrap();
    let response = server
        .post_auth("/api/gamification/spin", token, &empty)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}
