//! 针对本地假服务端的端到端测试
//!
//! 用 axum 起一个只记录 multipart 字段的服务，验证真实 HTTP 请求的形状。

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tez_ozet::error::ApiError;
use tez_ozet::{App, AppError, Config, FlowOutcome, MemoryView, Region, View};
use tokio_test::{assert_err, assert_ok};

/// 一个 multipart 字段：(字段名, 文件名, 内容)
type Field = (String, Option<String>, String);

#[derive(Clone, Default)]
struct Recorder {
    requests: Arc<Mutex<Vec<(&'static str, Vec<Field>)>>>,
}

impl Recorder {
    fn requests(&self) -> Vec<(&'static str, Vec<Field>)> {
        self.requests.lock().unwrap().clone()
    }

    async fn record(&self, path: &'static str, mut multipart: Multipart) -> Vec<Field> {
        let mut fields = Vec::new();
        while let Some(field) = multipart.next_field().await.unwrap() {
            let name = field.name().unwrap_or("").to_string();
            let file_name = field.file_name().map(|s| s.to_string());
            let bytes = field.bytes().await.unwrap();
            fields.push((name, file_name, String::from_utf8_lossy(&bytes).to_string()));
        }
        self.requests.lock().unwrap().push((path, fields.clone()));
        fields
    }
}

fn field<'a>(fields: &'a [Field], name: &str) -> Option<&'a Field> {
    fields.iter().find(|(n, _, _)| n == name)
}

async fn upload(State(rec): State<Recorder>, multipart: Multipart) -> Json<Value> {
    let fields = rec.record("/upload-pdf/", multipart).await;
    let filename = field(&fields, "file")
        .and_then(|(_, f, _)| f.clone())
        .unwrap_or_default();
    Json(json!({"filename": filename, "boyut": fields.len()}))
}

async fn extract(State(rec): State<Recorder>, multipart: Multipart) -> Json<Value> {
    rec.record("/extract-text/", multipart).await;
    Json(json!({"text": "Hello world"}))
}

async fn analyze(State(rec): State<Recorder>, multipart: Multipart) -> Json<Value> {
    rec.record("/analyze/", multipart).await;
    Json(json!({
        "ozet": "Hi",
        "rake_keywords": ["a", "b"],
        "yake_keywords": ["c"],
        "kategori_kural": "X",
        "kategori_ml": "Y"
    }))
}

async fn analyze_rejected(State(rec): State<Recorder>, multipart: Multipart) -> impl IntoResponse {
    rec.record("/bozuk/analyze/", multipart).await;
    (
        StatusCode::BAD_REQUEST,
        Json(json!({"detail": "Metin çok kısa. En az 50 karakter olmalı."})),
    )
}

async fn analyze_garbage(State(rec): State<Recorder>, multipart: Multipart) -> &'static str {
    rec.record("/garbage/analyze/", multipart).await;
    "<html>not json</html>"
}

/// 启动假服务端，返回地址和记录器
async fn spawn_server() -> (String, Recorder) {
    let recorder = Recorder::default();
    let router = Router::new()
        .route("/upload-pdf/", post(upload))
        .route("/extract-text/", post(extract))
        .route("/analyze/", post(analyze))
        .route("/bozuk/analyze/", post(analyze_rejected))
        .route("/garbage/analyze/", post(analyze_garbage))
        .with_state(recorder.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (format!("http://{}", addr), recorder)
}

fn config_for(base_url: &str) -> Config {
    Config {
        base_url: base_url.to_string(),
        request_timeout_secs: Some(10),
        ..Config::default()
    }
}

fn write_pdf(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("doc.pdf");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(b"%PDF-1.4 wire test").unwrap();
    path
}

#[tokio::test]
async fn run_sends_expected_multipart_fields() {
    let (base_url, recorder) = spawn_server().await;
    let dir = tempfile::tempdir().unwrap();
    let pdf = write_pdf(&dir);
    let view = Arc::new(MemoryView::new());
    let app = assert_ok!(App::initialize(config_for(&base_url), view.clone()));

    let outcome = assert_ok!(app.run(&pdf).await);
    assert_eq!(outcome, FlowOutcome::Completed);

    let requests = recorder.requests();
    let paths: Vec<&str> = requests.iter().map(|(p, _)| *p).collect();
    assert_eq!(paths, vec!["/upload-pdf/", "/extract-text/", "/analyze/"]);

    // 上传：唯一字段 file，带文件名
    let upload_fields = &requests[0].1;
    assert_eq!(upload_fields.len(), 1);
    assert_eq!(
        upload_fields[0],
        (
            "file".to_string(),
            Some("doc.pdf".to_string()),
            "%PDF-1.4 wire test".to_string()
        )
    );

    // 提取：filename + method
    let extract_fields = &requests[1].1;
    assert_eq!(field(extract_fields, "filename").unwrap().2, "doc.pdf");
    assert_eq!(field(extract_fields, "method").unwrap().2, "pypdf2");

    // 分析：text 为提取出的文本
    let analyze_fields = &requests[2].1;
    assert_eq!(field(analyze_fields, "text").unwrap().2, "Hello world");

    assert_eq!(view.text_field(), "Hello world");
    assert_eq!(view.region_text(Region::Summary), "Özet: Hi");
    assert_eq!(
        view.region_text(Region::Category),
        "Kategori (Kural): X\nKategori (ML): Y"
    );
}

#[tokio::test]
async fn upload_only_shows_raw_json_and_text() {
    let (base_url, recorder) = spawn_server().await;
    let dir = tempfile::tempdir().unwrap();
    let pdf = write_pdf(&dir);
    let view = Arc::new(MemoryView::new());
    let app = assert_ok!(App::initialize(config_for(&base_url), view.clone()));

    let (outcome, text) = assert_ok!(app.upload(&pdf).await);
    assert_eq!(outcome, FlowOutcome::Completed);
    assert_eq!(text, "Hello world");
    assert_eq!(recorder.requests().len(), 2);

    let raw: Value = serde_json::from_str(&view.region_text(Region::RawResult)).unwrap();
    assert_eq!(raw, json!({"filename": "doc.pdf", "boyut": 1}));
}

#[tokio::test]
async fn summarize_blank_text_makes_no_request() {
    let (base_url, recorder) = spawn_server().await;
    let view = Arc::new(MemoryView::new());
    let app = assert_ok!(App::initialize(config_for(&base_url), view.clone()));

    let outcome = assert_ok!(app.summarize(Some("  \n ".to_string())).await);
    assert_eq!(outcome, FlowOutcome::Rejected);
    assert!(recorder.requests().is_empty());
    assert_eq!(view.alerts(), vec!["Özetlenecek metin yok!".to_string()]);
}

#[tokio::test]
async fn summarize_reader_sends_whole_stream() {
    let (base_url, recorder) = spawn_server().await;
    let view = Arc::new(MemoryView::new());
    let app = assert_ok!(App::initialize(config_for(&base_url), view.clone()));

    let outcome = assert_ok!(app.summarize_reader("stdin", &b"Hello world"[..]).await);
    assert_eq!(outcome, FlowOutcome::Completed);

    let requests = recorder.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(field(&requests[0].1, "text").unwrap().2, "Hello world");
    assert_eq!(view.region_text(Region::Summary), "Özet: Hi");
}

#[tokio::test]
async fn summarize_reader_rejects_invalid_utf8() {
    let (base_url, recorder) = spawn_server().await;
    let view = Arc::new(MemoryView::new());
    let app = assert_ok!(App::initialize(config_for(&base_url), view.clone()));

    let err = assert_err!(app.summarize_reader("stdin", &[0xff, 0xfe, 0xfd][..]).await);
    assert!(matches!(err, AppError::File(_)));
    assert!(recorder.requests().is_empty());
}

#[tokio::test]
async fn server_error_detail_is_surfaced() {
    let (base_url, recorder) = spawn_server().await;
    let view = Arc::new(MemoryView::new());
    let config = Config {
        analyze_path: "/bozuk/analyze/".to_string(),
        ..config_for(&base_url)
    };
    let app = assert_ok!(App::initialize(config, view.clone()));

    let err = assert_err!(app.summarize(Some("kısa".to_string())).await);
    match err {
        AppError::Api(ApiError::BadStatus { status, detail, .. }) => {
            assert_eq!(status, 400);
            assert_eq!(detail, "Metin çok kısa. En az 50 karakter olmalı.");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(recorder.requests().len(), 1);
    assert!(view
        .region_text(Region::Summary)
        .contains("Metin çok kısa"));
}

#[tokio::test]
async fn malformed_json_is_an_error() {
    let (base_url, _recorder) = spawn_server().await;
    let view = Arc::new(MemoryView::new());
    let config = Config {
        analyze_path: "/garbage/analyze/".to_string(),
        ..config_for(&base_url)
    };
    let app = assert_ok!(App::initialize(config, view.clone()));

    let err = assert_err!(app.summarize(Some("Hello world".to_string())).await);
    assert!(matches!(err, AppError::Api(ApiError::JsonParseFailed { .. })));
}

#[tokio::test]
async fn unreachable_server_is_a_request_error() {
    // 先占用端口再释放，保证连接被拒绝
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let view = Arc::new(MemoryView::new());
    let app = assert_ok!(App::initialize(config_for(&format!("http://{}", addr)), view.clone()));

    let err = assert_err!(app.summarize(Some("Hello world".to_string())).await);
    assert!(matches!(err, AppError::Api(ApiError::RequestFailed { .. })));
    assert!(view.region_text(Region::Summary).starts_with("Hata: "));
}
