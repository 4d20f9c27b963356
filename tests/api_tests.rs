// tests/api_tests.rs

use quiz_server::{config::Config, routes, state::AppState};
use serde_json::{Value, json};
use tempfile::TempDir;

const CATALOG: &str = r#"{
    "1": {"label": "Which planet is known as the red planet?", "options": [
        {"id": "A", "label": "Mars", "is_correct": true},
        {"id": "B", "label": "Venus"}
    ]},
    "2": {"label": "How many legs does a spider have?", "options": [
        {"id": "A", "label": "Six"},
        {"id": "B", "label": "Eight", "is_correct": true}
    ]}
}"#;

struct TestApp {
    address: String,
    client: reqwest::Client,
    // Keeps the data files alive for the duration of the test.
    _dir: TempDir,
}

/// Helper function to spawn the app on a random port for testing.
/// Every app gets its own temporary users/questions files.
async fn spawn_app() -> TestApp {
    // 1. Prepare data files
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let questions_file = dir.path().join("questions.json");
    std::fs::write(&questions_file, CATALOG).expect("Failed to write catalog");

    // 2. Create test configuration and state
    let config = Config {
        users_file: dir.path().join("users.json"),
        questions_file,
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        rust_log: "error".to_string(),
        log_dir: dir.path().join("logs"),
    };
    let state = AppState::from_config(&config);

    // 3. Create the router with the app state
    let app = routes::create_router(state);

    // 4. Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    // 5. Spawn the server in the background
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        address,
        client: reqwest::Client::new(),
        _dir: dir,
    }
}

impl TestApp {
    async fn login(&self, name: &str) -> String {
        let response = self
            .client
            .post(format!("{}/users/login", self.address))
            .json(&json!({ "name": name }))
            .send()
            .await
            .expect("Login failed");
        assert_eq!(response.status().as_u16(), 201);

        let body: Value = response.json().await.expect("Failed to parse login json");
        body["user_id"].as_str().expect("user_id not found").to_string()
    }

    async fn answer(&self, user: &str, question_id: &str, option_id: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/users/{}/answer", self.address, user))
            .json(&json!({ "question_id": question_id, "option_id": option_id }))
            .send()
            .await
            .expect("Answer failed")
    }

    async fn finish(&self, user: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/users/{}/finish", self.address, user))
            .send()
            .await
            .expect("Finish failed")
    }

    async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }
}

#[tokio::test]
async fn health_check_404() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get("/random_path_that_does_not_exist").await;

    // Assert
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn login_assigns_sequential_ids() {
    let app = spawn_app().await;

    assert_eq!(app.login("Ada").await, "1");
    assert_eq!(app.login("Grace").await, "2");
}

#[tokio::test]
async fn login_fails_validation() {
    let app = spawn_app().await;

    // Blank name
    let response = app
        .client
        .post(format!("{}/users/login", app.address))
        .json(&json!({ "name": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);

    // Malformed body
    let response = app
        .client
        .post(format!("{}/users/login", app.address))
        .header("content-type", "application/json")
        .body("invalid_json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);

    // Well-formed JSON with the wrong shape
    let response = app
        .client
        .post(format!("{}/users/login", app.address))
        .json(&json!({ "nickname": "Ada" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn questions_hide_correct_answers() {
    let app = spawn_app().await;

    let response = app.get("/questions").await;
    assert_eq!(response.status().as_u16(), 200);
    let text = response.text().await.unwrap();
    assert!(!text.contains("is_correct"));

    let questions: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(questions["1"]["label"], "Which planet is known as the red planet?");
    assert_eq!(questions["2"]["options"][1], json!({"id": "B", "label": "Eight"}));

    let response = app.get("/questions/2").await;
    assert_eq!(response.status().as_u16(), 200);
    let question: Value = response.json().await.unwrap();
    assert_eq!(question["options"].as_array().unwrap().len(), 2);
    assert!(question["options"][0].get("is_correct").is_none());

    assert_eq!(app.get("/questions/3").await.status().as_u16(), 404);
}

#[tokio::test]
async fn answer_rejections() {
    let app = spawn_app().await;
    let user = app.login("Ada").await;

    // Unknown user
    assert_eq!(app.answer("99", "1", "A").await.status().as_u16(), 404);
    // Unknown question
    assert_eq!(app.answer(&user, "7", "A").await.status().as_u16(), 404);
    // Unknown option
    assert_eq!(app.answer(&user, "1", "Z").await.status().as_u16(), 400);

    // Nothing was stored
    let answered: Vec<Value> = app
        .get(&format!("/users/{}/answered", user))
        .await
        .json()
        .await
        .unwrap();
    assert!(answered.is_empty());
}

#[tokio::test]
async fn reanswer_keeps_latest_choice() {
    let app = spawn_app().await;
    let user = app.login("Ada").await;

    assert_eq!(app.answer(&user, "2", "A").await.status().as_u16(), 200);
    assert_eq!(app.answer(&user, "1", "A").await.status().as_u16(), 200);
    assert_eq!(app.answer(&user, "2", "B").await.status().as_u16(), 200);

    let answered: Vec<Value> = app
        .get(&format!("/users/{}/answered", user))
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(
        answered,
        vec![
            json!({
                "question": "Which planet is known as the red planet?",
                "question_id": "1",
                "option": "Mars",
                "option_id": "A"
            }),
            json!({
                "question": "How many legs does a spider have?",
                "question_id": "2",
                "option": "Eight",
                "option_id": "B"
            }),
        ]
    );
}

#[tokio::test]
async fn finish_requires_all_answers() {
    let app = spawn_app().await;
    let user = app.login("Ada").await;
    app.answer(&user, "1", "A").await;

    let response = app.finish(&user).await;
    assert_eq!(response.status().as_u16(), 403);

    // Score is unavailable before finishing
    let response = app.get(&format!("/users/{}/score", user)).await;
    assert_eq!(response.status().as_u16(), 403);

    assert_eq!(app.finish("99").await.status().as_u16(), 404);
    assert_eq!(app.get("/users/99/score").await.status().as_u16(), 404);
}

#[tokio::test]
async fn test_quiz_flow() {
    // Arrange
    let app = spawn_app().await;

    // 1. First user answers everything correctly
    let first = app.login("Ada").await;
    app.answer(&first, "1", "A").await;
    app.answer(&first, "2", "B").await;

    let response = app.finish(&first).await;
    assert_eq!(response.status().as_u16(), 200);
    let summary: Value = response.json().await.unwrap();
    assert_eq!(summary["score"], 1.0);
    assert_eq!(summary["correct_answers"], 2);
    assert_eq!(summary["total_questions"], 2);

    // Alone among finishers: no ranking yet
    let score: Value = app
        .get(&format!("/users/{}/score", first))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(score["better_than"], 0.0);
    assert_eq!(score["relative_performance"], 0.0);

    // 2. Second user gets half right
    let second = app.login("Grace").await;
    app.answer(&second, "1", "A").await;
    app.answer(&second, "2", "A").await;
    assert_eq!(app.finish(&second).await.status().as_u16(), 200);

    // 3. Compare
    let score: Value = app
        .get(&format!("/users/{}/score", first))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(score["score"], 1.0);
    assert_eq!(score["total_questions"], 2);
    assert_eq!(score["correct_answers"], 2);
    assert_eq!(score["better_than"], 1.0);
    assert_eq!(score["relative_performance"], 1.0);
    assert_eq!(
        score["answers_detail"][0],
        json!({
            "question": "Which planet is known as the red planet?",
            "answer": "Mars",
            "is_correct": true
        })
    );

    let score: Value = app
        .get(&format!("/users/{}/score", second))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(score["score"], 0.5);
    assert_eq!(score["correct_answers"], 1);
    assert_eq!(score["better_than"], 0.0);
    assert_eq!(score["relative_performance"], -0.5);
    assert_eq!(score["answers_detail"][1]["is_correct"], false);

    // 4. Finished users are frozen
    assert_eq!(app.answer(&first, "1", "B").await.status().as_u16(), 403);
    assert_eq!(app.finish(&first).await.status().as_u16(), 403);
}

#[tokio::test]
async fn concurrent_logins_get_unique_ids() {
    let app = spawn_app().await;

    let mut handles = Vec::new();
    for i in 0..10 {
        let client = app.client.clone();
        let url = format!("{}/users/login", app.address);
        handles.push(tokio::spawn(async move {
            let body: Value = client
                .post(url)
                .json(&json!({ "name": format!("user-{i}") }))
                .send()
                .await
                .unwrap()
                .json()
                .await
                .unwrap();
            body["user_id"].as_str().unwrap().to_string()
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids.sort();
    ids.dedup();

    assert_eq!(ids.len(), 10);
}
