//! Export/import round-trip law and wire-format stability.

use ordem_core::{ClientKind, GistConfig, NewClient};
use ordem_integration_tests::order_input;
use ordem_store::{DataStore, StoreError};

#[test]
fn export_import_reproduces_every_collection() {
    let mut source = DataStore::in_memory();
    let client = source.create_client(NewClient {
        kind: ClientKind::Organization,
        trade_name: "Padaria Pão Quente".to_string(),
        cnpj: "11.222.333/0001-44".to_string(),
        ..NewClient::default()
    });
    let equipment_id = source.snapshot().equipment[0].id.clone();
    source
        .create_order(order_input(&client.id, &equipment_id))
        .expect("create order");

    let exported = source.export_snapshot().expect("export");

    let mut target = DataStore::in_memory();
    let stats = target.import_snapshot(&exported).expect("import");

    let original = source.snapshot();
    let imported = target.snapshot();

    assert_eq!(stats.orders, original.orders.len());
    assert_eq!(stats.clients, original.clients.len());
    assert_eq!(stats.equipment, original.equipment.len());

    // Field-for-field equality across every collection
    assert_eq!(imported.orders, original.orders);
    assert_eq!(imported.clients, original.clients);
    assert_eq!(imported.equipment, original.equipment);
    assert_eq!(imported.company, original.company);
    assert_eq!(imported.attachments, original.attachments);
    assert_eq!(imported.audit_log, original.audit_log);
}

#[test]
fn import_requires_all_three_core_collections() {
    let mut store = DataStore::in_memory();
    let before = store.snapshot();

    for payload in [
        r#"{"ordens_servico":[],"equipamentos":[]}"#,
        r#"{"ordens_servico":[],"clientes":[]}"#,
        r#"{"clientes":[],"equipamentos":[]}"#,
        r#"{"ordens_servico":{},"clientes":[],"equipamentos":[]}"#,
        "not even json",
    ] {
        let result = store.import_snapshot(payload);
        assert!(
            matches!(result, Err(StoreError::Validation(_))),
            "payload should be rejected: {payload}"
        );
        assert_eq!(store.snapshot(), before, "aggregate must stay untouched");
    }
}

#[test]
fn import_accepts_minimal_foreign_payload() {
    let mut store = DataStore::in_memory();
    // No empresa, anexos, logs, settings or counters - all optional
    let stats = store
        .import_snapshot(r#"{"ordens_servico":[],"clientes":[],"equipamentos":[]}"#)
        .expect("import");
    assert_eq!((stats.orders, stats.clients, stats.equipment), (0, 0, 0));
}

#[test]
fn export_keeps_wire_field_names() {
    let store = DataStore::in_memory();
    let exported = store.export_snapshot().expect("export");
    let value: serde_json::Value = serde_json::from_str(&exported).expect("valid json");

    assert!(value["ordens_servico"].is_array());
    assert!(value["clientes"].is_array());
    assert!(value["equipamentos"].is_array());
    assert!(value["empresa"].is_object());

    let first_client = &value["clientes"][0];
    assert!(first_client["nome_fantasia"].is_string());
    assert!(first_client["tipo_cliente"].is_string());

    let first_order = &value["ordens_servico"][0];
    assert!(first_order["status_servico"].is_string());
    assert!(first_order["valor_visita"].is_number());
}

#[test]
fn export_blanks_the_access_token_but_import_keeps_the_rest() {
    let mut store = DataStore::in_memory();
    let mut settings = store.settings();
    settings.gist = Some(GistConfig {
        gist_id: "d34db33f".to_string(),
        token: "ghp_private_token".to_string(),
        filename: "ordem-backup.json".to_string(),
    });
    store.update_settings(settings);

    let exported = store.export_snapshot().expect("export");
    assert!(!exported.contains("ghp_private_token"));

    let mut target = DataStore::in_memory();
    target.import_snapshot(&exported).expect("import");
    let gist = target.snapshot().settings.gist.expect("gist config");
    assert_eq!(gist.gist_id, "d34db33f");
    assert_eq!(gist.filename, "ordem-backup.json");
    assert!(gist.token.is_empty());
}

#[test]
fn import_reconciles_counters_against_foreign_ids() {
    let mut store = DataStore::in_memory();
    store
        .import_snapshot(
            r#"{
                "ordens_servico": [],
                "clientes": [{
                    "id": "cliente-41",
                    "tipo_cliente": "Pessoa Física",
                    "nome_fantasia": "Importada",
                    "razao_social": "",
                    "endereco": "", "num_endereco": "", "bairro": "",
                    "cidade": "", "estado": "", "cep": "",
                    "telefone": "", "telefone2": "", "telefone3": "",
                    "email": "", "contato": "",
                    "rg": "", "cpf": "", "cnpj": "",
                    "insc_estadual": "", "insc_municipal": ""
                }],
                "equipamentos": []
            }"#,
        )
        .expect("import");

    let created = store.create_client(NewClient::default());
    assert_eq!(created.id.as_str(), "cliente-42");
}
