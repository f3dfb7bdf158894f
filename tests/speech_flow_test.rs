//! 端到端流程：本服务 + 模拟的 Kokoro FastAPI

use std::path::Path;
use std::sync::{Arc, Mutex};

use axum::{extract::State, routing::post, Json, Router};
use serde_json::{json, Value};
use tempfile::tempdir;

use kokoro_studio::application::ProbeEngineCommand;
use kokoro_studio::infrastructure::adapters::{
    HttpSpeechClient, HttpSpeechClientConfig, ScratchSpace,
};
use kokoro_studio::infrastructure::http::{AppSettings, AppState, HttpServer, ServerConfig};
use kokoro_studio::infrastructure::memory::{InMemoryEngineStatus, InMemorySessionManager};

type Seen = Arc<Mutex<Vec<Value>>>;

async fn kokoro_speech(State(seen): State<Seen>, Json(body): Json<Value>) -> Vec<u8> {
    let reply = format!("MP3<{}|{}>", body["voice"].as_str().unwrap_or(""), body["input"].as_str().unwrap_or(""));
    seen.lock().unwrap().push(body);
    reply.into_bytes()
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn closed_port() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

async fn spawn_studio(kokoro_base: String, scratch_dir: &Path) -> String {
    let client = HttpSpeechClient::new(
        HttpSpeechClientConfig::new(format!("{}/v1", kokoro_base)),
        ScratchSpace::new(scratch_dir).unwrap(),
    )
    .unwrap();

    let state = Arc::new(AppState::new(
        Arc::new(InMemorySessionManager::new()),
        Arc::new(InMemoryEngineStatus::new()),
        Arc::new(client),
        AppSettings::default(),
    ));
    state.probe_engine_handler.handle(ProbeEngineCommand).await;

    let router = HttpServer::new(ServerConfig::new("127.0.0.1", 0), state).build_router();
    serve(router).await
}

fn scratch_entries(dir: &Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}

#[tokio::test]
async fn test_generate_through_kokoro_mock() {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let kokoro = serve(
        Router::new()
            .route("/v1/audio/speech", post(kokoro_speech))
            .with_state(seen.clone()),
    )
    .await;

    let scratch = tempdir().unwrap();
    let studio = spawn_studio(kokoro, scratch.path()).await;
    let http = reqwest::Client::new();

    let started: Value = http
        .post(format!("{}/api/session/start", studio))
        .json(&json!({}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(started["errno"], 0);
    let session_id = started["data"]["session_id"].as_str().unwrap().to_string();

    // 默认音色
    let response = http
        .post(format!("{}/api/speech/generate", studio))
        .json(&json!({"session_id": session_id, "text": "Hello world!"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.headers()["content-type"], "audio/mpeg");
    assert_eq!(response.bytes().await.unwrap().as_ref(), b"MP3<af|Hello world!>");

    // 组合音色
    for voice in ["af_bella", "am_adam"] {
        http.post(format!("{}/api/session/toggle", studio))
            .json(&json!({"session_id": session_id, "voice": voice}))
            .send()
            .await
            .unwrap();
    }
    let response = http
        .post(format!("{}/api/speech/generate", studio))
        .json(&json!({"session_id": session_id, "text": ""}))
        .send()
        .await
        .unwrap();
    assert_eq!(
        response.bytes().await.unwrap().as_ref(),
        b"MP3<af_bella+am_adam|>"
    );

    let seen = seen.lock().unwrap();
    // 启动探测 + 两次生成
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[0]["input"], "API Connected Successfully");
    assert!(seen.iter().all(|b| b["model"] == "kokoro" && b["response_format"] == "mp3"));

    assert_eq!(scratch_entries(scratch.path()), 0);
}

#[tokio::test]
async fn test_unreachable_kokoro_blocks_session() {
    let scratch = tempdir().unwrap();
    let studio = spawn_studio(closed_port().await, scratch.path()).await;
    let http = reqwest::Client::new();

    let status: Value = http
        .get(format!("{}/api/engine/status", studio))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(status["data"]["available"], false);
    assert!(!status["data"]["error"].as_str().unwrap().is_empty());

    let started: Value = http
        .post(format!("{}/api/session/start", studio))
        .json(&json!({}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(started["errno"], 503);
    assert!(started["error"]
        .as_str()
        .unwrap()
        .starts_with("Cannot connect to Kokoro FastAPI server"));

    assert_eq!(scratch_entries(scratch.path()), 0);
}
