use axum::extract::{Multipart, Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use client::RegistryClient;
use serde_json::{json, Value};
use shared_types::ApiSettings;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const API_KEY: &str = "test-key";

/// Seeded Panggilan rows: ids 1..=3 are from 2023, the rest from 2024.
pub const PANGGILAN_ROWS: i64 = 23;
pub const PER_PAGE: i64 = 10;
/// `tahun` value the Panggilan listing rejects with a 422.
pub const REJECTED_YEAR: &str = "1999";

/// One request as the mock backend saw it.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub method: &'static str,
    pub path: String,
    pub query: HashMap<String, String>,
    pub api_key: Option<String>,
    /// Multipart text fields; files appear as `("file:<field>", <file name>)`.
    pub form: Vec<(String, String)>,
}

#[derive(Default)]
struct MockState {
    requests: Mutex<Vec<Recorded>>,
    delays: Mutex<HashMap<i64, Duration>>,
}

impl MockState {
    fn record(
        &self,
        method: &'static str,
        path: impl Into<String>,
        headers: &HeaderMap,
        query: HashMap<String, String>,
        form: Vec<(String, String)>,
    ) {
        let api_key = headers
            .get("x-api-key")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        self.requests.lock().unwrap().push(Recorded {
            method,
            path: path.into(),
            query,
            api_key,
            form,
        });
    }
}

/// In-process registry backend on an ephemeral port.
pub struct MockBackend {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockBackend {
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let app = router(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().expect("Mock backend has no address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Mock backend stopped");
        });
        Self {
            base_url: format!("http://{addr}/api"),
            state,
        }
    }

    pub fn settings(&self) -> ApiSettings {
        ApiSettings {
            base_url: format!("{}/", self.base_url),
            api_key: Some(API_KEY.to_string()),
            timeout_secs: 5,
            ..ApiSettings::default()
        }
    }

    pub fn client(&self) -> RegistryClient {
        RegistryClient::new(&self.settings()).expect("Failed to build client")
    }

    /// Hold responses for `page` of the Panggilan listing.
    pub fn delay_page(&self, page: i64, delay: Duration) {
        self.state.delays.lock().unwrap().insert(page, delay);
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }
}

/// Client pointed at a port nothing listens on.
pub async fn unreachable_client() -> RegistryClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind spare port");
    let addr = listener.local_addr().expect("Spare port has no address");
    drop(listener);
    RegistryClient::new(&ApiSettings {
        base_url: format!("http://{addr}/api"),
        timeout_secs: 2,
        ..ApiSettings::default()
    })
    .expect("Failed to build client")
}

pub fn panggilan_year(id: i64) -> i32 {
    if id <= 3 {
        2023
    } else {
        2024
    }
}

fn panggilan_row(id: i64) -> Value {
    let tahun = panggilan_year(id);
    json!({
        "id": id,
        "tahun_perkara": tahun,
        "nomor_perkara": format!("{id}/Pdt.G/{tahun}/PA.Pnj"),
        "nama_dipanggil": format!("Pihak {id}"),
        "panggilan_1": "2024-03-05",
        "created_at": "2024-03-01T08:00:00Z"
    })
}

fn router(state: Arc<MockState>) -> Router {
    let api = Router::new()
        .route("/panggilan", get(list_panggilan).post(create_panggilan))
        .route(
            "/panggilan/{id}",
            get(get_panggilan).put(update_panggilan).delete(delete_panggilan),
        )
        .route("/agenda", get(list_agenda).post(create_agenda))
        .route("/agenda/{id}", put(update_agenda))
        .route("/pagu", get(list_pagu).post(upsert_pagu))
        .route("/lhkpn", get(failing_list))
        .route("/itsbat", get(bad_gateway))
        .route("/dipapok/{id}", post(update_dipapok))
        .route("/aset-bmn", post(create_aset_bmn))
        .with_state(state);
    Router::new().nest("/api", api)
}

async fn list_panggilan(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    state.record("GET", "/panggilan", &headers, query.clone(), Vec::new());
    if query.get("tahun").map(String::as_str) == Some(REJECTED_YEAR) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "success": false, "message": "Tahun tidak valid" })),
        );
    }

    let page: i64 = query.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    let delay = state.delays.lock().unwrap().get(&page).copied();
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    let tahun = query.get("tahun").and_then(|t| t.parse::<i32>().ok());
    let rows: Vec<Value> = (1..=PANGGILAN_ROWS)
        .filter(|id| tahun.map_or(true, |t| panggilan_year(*id) == t))
        .map(panggilan_row)
        .collect();
    let total = rows.len() as i64;
    let last_page = ((total + PER_PAGE - 1) / PER_PAGE).max(1);
    let data: Vec<Value> = rows
        .into_iter()
        .skip(((page - 1) * PER_PAGE) as usize)
        .take(PER_PAGE as usize)
        .collect();

    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "data": data,
            "total": total,
            "current_page": page,
            "last_page": last_page,
            "per_page": PER_PAGE
        })),
    )
}

async fn get_panggilan(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> (StatusCode, Json<Value>) {
    state.record("GET", format!("/panggilan/{id}"), &headers, HashMap::new(), Vec::new());
    if (1..=PANGGILAN_ROWS).contains(&id) {
        (
            StatusCode::OK,
            Json(json!({ "success": true, "data": panggilan_row(id) })),
        )
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "message": "Data tidak ditemukan" })),
        )
    }
}

async fn create_panggilan(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(mut body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.record("POST", "/panggilan", &headers, HashMap::new(), Vec::new());
    body["id"] = json!(99);
    (
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": body, "message": "Data berhasil disimpan" })),
    )
}

async fn update_panggilan(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(mut body): Json<Value>,
) -> Json<Value> {
    state.record("PUT", format!("/panggilan/{id}"), &headers, HashMap::new(), Vec::new());
    body["id"] = json!(id);
    Json(json!({ "success": true, "data": body, "message": "Data berhasil diperbarui" }))
}

async fn delete_panggilan(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Json<Value> {
    state.record("DELETE", format!("/panggilan/{id}"), &headers, HashMap::new(), Vec::new());
    Json(json!({ "success": true, "message": "Data berhasil dihapus" }))
}

/// Answers with the `{status, data, message}` envelope.
async fn list_agenda(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    state.record("GET", "/agenda", &headers, query.clone(), Vec::new());
    if query.get("bulan").map(String::as_str) == Some("2") {
        return Json(json!({ "status": "error", "message": "Agenda bulan ini belum tersedia" }));
    }
    Json(json!({
        "status": "success",
        "message": "Data ditemukan",
        "data": [
            { "id": 1, "tanggal_agenda": "2024-03-05", "isi_agenda": "Rapat koordinasi" },
            { "id": 2, "tanggal_agenda": "2024-03-12", "isi_agenda": "Pembinaan pegawai" }
        ]
    }))
}

async fn create_agenda(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(mut body): Json<Value>,
) -> Json<Value> {
    state.record("POST", "/agenda", &headers, HashMap::new(), Vec::new());
    body["id"] = json!(7);
    Json(json!({ "status": "success", "data": body, "message": "Agenda disimpan" }))
}

async fn update_agenda(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(mut body): Json<Value>,
) -> Json<Value> {
    state.record("PUT", format!("/agenda/{id}"), &headers, HashMap::new(), Vec::new());
    body["id"] = json!(id);
    Json(json!({ "status": "success", "data": body, "message": "Agenda diperbarui" }))
}

async fn list_pagu(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    state.record("GET", "/pagu", &headers, query, Vec::new());
    Json(json!({
        "success": true,
        "data": [
            { "id": 1, "dipa": "DIPA 01", "kategori": "Belanja Pegawai", "jumlah_pagu": "1500000.00", "tahun": 2024 },
            { "id": 2, "dipa": "DIPA 04", "kategori": "POSBAKUM", "jumlah_pagu": 250000000, "tahun": 2024 }
        ]
    }))
}

async fn upsert_pagu(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(mut body): Json<Value>,
) -> Json<Value> {
    state.record("POST", "/pagu", &headers, HashMap::new(), Vec::new());
    body["id"] = json!(7);
    Json(json!({ "success": true, "data": body }))
}

async fn failing_list(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    state.record("GET", "/lhkpn", &headers, query, Vec::new());
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "success": false, "message": "Database sedang sibuk" })),
    )
}

async fn bad_gateway(State(state): State<Arc<MockState>>, headers: HeaderMap) -> (StatusCode, &'static str) {
    state.record("GET", "/itsbat", &headers, HashMap::new(), Vec::new());
    (StatusCode::BAD_GATEWAY, "<html><body>Bad gateway</body></html>")
}

async fn read_form(mut multipart: Multipart) -> Vec<(String, String)> {
    let mut form = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        match field.file_name().map(str::to_string) {
            Some(file_name) => {
                let _ = field.bytes().await;
                form.push((format!("file:{name}"), file_name));
            }
            None => form.push((name, field.text().await.unwrap_or_default())),
        }
    }
    form
}

fn form_value(form: &[(String, String)], key: &str) -> String {
    form.iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
        .unwrap_or_default()
}

async fn create_aset_bmn(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    multipart: Multipart,
) -> (StatusCode, Json<Value>) {
    let form = read_form(multipart).await;
    state.record("POST", "/aset-bmn", &headers, HashMap::new(), form.clone());
    (
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "data": {
                "id": 12,
                "tahun": form_value(&form, "tahun").parse::<i32>().unwrap_or_default(),
                "jenis_laporan": form_value(&form, "jenis_laporan"),
                "link_dokumen": format!("https://files.example/{}", form_value(&form, "file:file_dokumen"))
            }
        })),
    )
}

async fn update_dipapok(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> Json<Value> {
    let form = read_form(multipart).await;
    state.record("POST", format!("/dipapok/{id}"), &headers, HashMap::new(), form.clone());

    let text = |key: &str| form_value(&form, key);
    Json(json!({
        "success": true,
        "data": {
            "id": id,
            "thn_dipa": text("thn_dipa").parse::<i32>().unwrap_or_default(),
            "revisi_dipa": text("revisi_dipa"),
            "jns_dipa": text("jns_dipa"),
            "tgl_dipa": text("tgl_dipa"),
            "alokasi_dipa": text("alokasi_dipa"),
            "doc_dipa": format!("https://files.example/{}", text("file:file_doc_dipa"))
        }
    }))
}
