use crate::common::{MockBackend, API_KEY};
use client::{FilePart, Upload};
use pretty_assertions::assert_eq;
use shared_types::{
    AgendaPimpinan, AsetBmn, DipaPok, PaguAnggaran, Panggilan, RegistryErrorKind,
    DIPA_FILE_FIELD, DOCUMENT_FILE, JENIS_LAPORAN_BMN, POK_FILE_FIELD,
};

fn summons() -> Panggilan {
    Panggilan {
        tahun_perkara: 2024,
        nomor_perkara: "120/Pdt.G/2024/PA.Pnj".to_string(),
        nama_dipanggil: "Ahmad Fauzi".to_string(),
        alamat_asal: Some("Desa Sukamaju".to_string()),
        ..Panggilan::default()
    }
}

#[tokio::test]
async fn test_get_existing_record() {
    let backend = MockBackend::start().await;
    let record = backend.client().get::<Panggilan>(5).await.unwrap().unwrap();
    assert_eq!(record.id, Some(5));
    assert_eq!(record.nomor_perkara, "5/Pdt.G/2024/PA.Pnj");
}

#[tokio::test]
async fn test_get_missing_record_is_none() {
    let backend = MockBackend::start().await;
    let record = backend.client().get::<Panggilan>(404).await.unwrap();
    assert_eq!(record, None);
}

#[tokio::test]
async fn test_create_sends_json_with_api_key() {
    let backend = MockBackend::start().await;
    let created = backend
        .client()
        .create(&summons())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(created.id, Some(99));
    assert_eq!(created.nama_dipanggil, "Ahmad Fauzi");

    let request = &backend.requests_to("/panggilan")[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.api_key.as_deref(), Some(API_KEY));
}

#[tokio::test]
async fn test_invalid_record_never_reaches_backend() {
    let backend = MockBackend::start().await;
    let err = backend
        .client()
        .create(&Panggilan {
            nomor_perkara: String::new(),
            ..summons()
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind(), RegistryErrorKind::Validation);
    assert_eq!(
        err.field_errors().get("nomor_perkara").map(String::as_str),
        Some("Nomor perkara wajib diisi")
    );
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_update_sends_put_to_record_url() {
    let backend = MockBackend::start().await;
    let updated = backend
        .client()
        .update(5, &summons())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, Some(5));
    assert_eq!(updated.alamat_asal.as_deref(), Some("Desa Sukamaju"));

    let requests = backend.requests_to("/panggilan/5");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].api_key.as_deref(), Some(API_KEY));
}

#[tokio::test]
async fn test_delete_sends_api_key() {
    let backend = MockBackend::start().await;
    backend.client().delete::<Panggilan>(7).await.unwrap();

    let requests = backend.requests_to("/panggilan/7");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].api_key.as_deref(), Some(API_KEY));
}

#[tokio::test]
async fn test_multipart_update_is_sent_as_post_with_method_override() {
    let backend = MockBackend::start().await;
    let record = DipaPok {
        id: Some(3),
        thn_dipa: 2024,
        revisi_dipa: "Revisi 1".to_string(),
        jns_dipa: "DIPA 01".to_string(),
        tgl_dipa: "2024-02-01".to_string(),
        alokasi_dipa: 1_500_000.0,
        ..DipaPok::default()
    };
    let upload = Upload::from_record(&record)
        .unwrap()
        .file(DIPA_FILE_FIELD, "dipa-2024.pdf", b"%PDF-1.4".to_vec())
        .file(POK_FILE_FIELD, "pok-2024.pdf", b"%PDF-1.4".to_vec());

    let updated = backend
        .client()
        .update_multipart::<DipaPok>(3, upload)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.revisi_dipa, "Revisi 1");
    assert_eq!(updated.alokasi_dipa, 1_500_000.0);
    assert_eq!(
        updated.doc_dipa.as_deref(),
        Some("https://files.example/dipa-2024.pdf")
    );

    let request = &backend.requests_to("/dipapok/3")[0];
    let field = |name: &str| {
        request
            .form
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    };
    assert_eq!(request.method, "POST");
    assert_eq!(request.api_key.as_deref(), Some(API_KEY));
    assert_eq!(field("_method"), Some("PUT"));
    assert_eq!(field("thn_dipa"), Some("2024"));
    assert_eq!(field("file:file_doc_dipa"), Some("dipa-2024.pdf"));
    assert_eq!(field("file:file_doc_pok"), Some("pok-2024.pdf"));
    assert_eq!(field("id"), None);
}

#[tokio::test]
async fn test_multipart_create_posts_without_method_override() {
    let backend = MockBackend::start().await;
    let record = AsetBmn {
        tahun: 2024,
        jenis_laporan: JENIS_LAPORAN_BMN[3].to_string(),
        ..AsetBmn::default()
    };
    let upload = Upload::from_record(&record)
        .unwrap()
        .file(DOCUMENT_FILE.field, "lbkp-s1.pdf", b"%PDF-1.4".to_vec());

    let created = backend
        .client()
        .create_multipart::<AsetBmn>(upload)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(created.id, Some(12));
    assert_eq!(created.tahun, 2024);
    assert_eq!(
        created.link_dokumen.as_deref(),
        Some("https://files.example/lbkp-s1.pdf")
    );

    let request = &backend.requests_to("/aset-bmn")[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.api_key.as_deref(), Some(API_KEY));
    assert!(request.form.iter().all(|(k, _)| k != "_method"));
    assert!(request
        .form
        .contains(&("file:file_dokumen".to_string(), "lbkp-s1.pdf".to_string())));
}

#[tokio::test]
async fn test_upsert_pagu_posts_to_collection() {
    let backend = MockBackend::start().await;
    let saved = backend
        .client()
        .upsert_pagu(&PaguAnggaran {
            id: None,
            dipa: "DIPA 01".to_string(),
            kategori: "Belanja Modal".to_string(),
            jumlah_pagu: 75_000_000.0,
            tahun: 2024,
        })
        .await
        .unwrap()
        .unwrap();

    assert_eq!(saved.id, Some(7));
    assert_eq!(saved.jumlah_pagu, 75_000_000.0);
    assert_eq!(backend.requests_to("/pagu")[0].method, "POST");
}

fn agenda() -> AgendaPimpinan {
    AgendaPimpinan {
        tanggal_agenda: "2024-03-19".to_string(),
        isi_agenda: "Rapat evaluasi kinerja triwulan".to_string(),
        ..AgendaPimpinan::default()
    }
}

#[tokio::test]
async fn test_save_new_json_record_posts_to_collection() {
    let backend = MockBackend::start().await;
    let saved = backend
        .client()
        .save(&agenda(), Vec::new())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(saved.id, Some(7));
    let request = &backend.requests_to("/agenda")[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.api_key.as_deref(), Some(API_KEY));
}

#[tokio::test]
async fn test_save_existing_json_record_puts_to_record() {
    let backend = MockBackend::start().await;
    let record = AgendaPimpinan {
        id: Some(4),
        ..agenda()
    };
    let saved = backend.client().save(&record, Vec::new()).await.unwrap().unwrap();

    assert_eq!(saved.id, Some(4));
    assert_eq!(saved.isi_agenda, "Rapat evaluasi kinerja triwulan");
    assert_eq!(backend.requests_to("/agenda/4")[0].method, "PUT");
    assert!(backend.requests_to("/agenda").is_empty());
}

#[tokio::test]
async fn test_save_existing_record_with_attachments_uses_method_override() {
    let backend = MockBackend::start().await;
    let record = DipaPok {
        id: Some(3),
        thn_dipa: 2025,
        revisi_dipa: "Revisi 2".to_string(),
        jns_dipa: "DIPA 04".to_string(),
        tgl_dipa: "2025-01-15".to_string(),
        ..DipaPok::default()
    };
    let files = vec![FilePart {
        field: POK_FILE_FIELD.to_string(),
        file_name: "pok-rev2.pdf".to_string(),
        bytes: b"%PDF-1.7".to_vec(),
    }];

    let saved = backend.client().save(&record, files).await.unwrap().unwrap();

    assert_eq!(saved.revisi_dipa, "Revisi 2");
    let request = &backend.requests_to("/dipapok/3")[0];
    assert_eq!(request.method, "POST");
    assert!(request
        .form
        .contains(&("_method".to_string(), "PUT".to_string())));
    assert!(request
        .form
        .contains(&("file:file_doc_pok".to_string(), "pok-rev2.pdf".to_string())));
}

#[tokio::test]
async fn test_save_reports_field_errors_without_a_request() {
    let backend = MockBackend::start().await;
    let err = backend
        .client()
        .save(
            &AgendaPimpinan {
                isi_agenda: String::new(),
                ..agenda()
            },
            Vec::new(),
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), RegistryErrorKind::Validation);
    assert_eq!(
        err.field_errors().get("isi_agenda").map(String::as_str),
        Some("Isi agenda wajib diisi")
    );
    assert!(backend.requests().is_empty());
}
