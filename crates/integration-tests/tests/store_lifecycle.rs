//! End-to-end CRUD, audit trail and dependency guard scenarios.

use ordem_core::{
    AuditAction, AuditEntityKind, ClientId, ClientKind, ClientPatch, NewClient, NewEquipment,
    OrderPatch, ServiceStatus,
};
use ordem_integration_tests::order_input;
use ordem_store::{DataStore, OrderFilter, StoreError};

fn individual(name: &str, phone: &str) -> NewClient {
    NewClient {
        kind: ClientKind::Individual,
        trade_name: name.to_string(),
        phone: phone.to_string(),
        ..NewClient::default()
    }
}

#[test]
fn full_client_lifecycle_with_audit_trail() {
    let mut store = DataStore::in_memory();

    // Create: id follows the cliente-<n> shape, fields survive a read back
    let created = store.create_client(individual("Ana", "123"));
    assert!(created.id.as_str().starts_with("cliente-"));
    let fetched = store.get_client(&created.id).expect("get after create");
    assert_eq!(fetched.trade_name, "Ana");
    assert_eq!(fetched.phone, "123");

    let create_entries: Vec<_> = store
        .snapshot()
        .audit_log
        .into_iter()
        .filter(|e| e.entity_id == created.id.as_str() && e.action == AuditAction::Create)
        .collect();
    assert_eq!(create_entries.len(), 1);
    assert_eq!(create_entries[0].entity, AuditEntityKind::Cliente);

    // Update: diff carries wire names and old/new values
    let patch = ClientPatch {
        phone: Some("456".to_string()),
        ..ClientPatch::default()
    };
    store.update_client(&created.id, &patch).expect("update");
    let last = store.snapshot().audit_log.pop().expect("update entry");
    let change = last.diff.get("telefone").expect("telefone diff");
    assert_eq!(change.old, serde_json::json!("123"));
    assert_eq!(change.new, serde_json::json!("456"));

    // Delete: allowed while unreferenced, logged with a descriptive comment
    store.delete_client(&created.id).expect("delete");
    let last = store.snapshot().audit_log.pop().expect("delete entry");
    assert_eq!(last.action, AuditAction::Delete);
    assert!(last.diff.is_empty());
    assert!(last.comment.contains("Ana"));
}

#[test]
fn order_lifecycle_updates_both_audit_views() {
    let mut store = DataStore::in_memory();
    let client = store.create_client(individual("Bruno", "111"));
    let equipment = store.create_equipment(NewEquipment {
        name: "Geladeira duplex".to_string(),
        ..NewEquipment::default()
    });

    let order = store
        .create_order(order_input(&client.id, &equipment.id))
        .expect("create order");

    // Move it through the status flow
    for status in [ServiceStatus::InProgress, ServiceStatus::Completed] {
        let patch = OrderPatch {
            status: Some(status),
            ..OrderPatch::default()
        };
        store.update_order(&order.id, &patch).expect("update");
    }

    let final_order = store.get_order(&order.id).expect("get");
    assert_eq!(final_order.status, ServiceStatus::Completed);
    // One create + two updates, linked on the order itself
    assert_eq!(final_order.audit_log.len(), 3);

    let snapshot = store.snapshot();
    for entry_id in &final_order.audit_log {
        assert!(
            snapshot.audit_log.iter().any(|e| &e.id == entry_id),
            "order-side audit reference must resolve in the global log"
        );
    }
}

#[test]
fn dependency_guards_block_then_allow_deletion() {
    let mut store = DataStore::in_memory();
    let client = store.create_client(individual("Carla", "222"));
    let equipment = store.create_equipment(NewEquipment {
        name: "Ar condicionado janela".to_string(),
        ..NewEquipment::default()
    });
    let order = store
        .create_order(order_input(&client.id, &equipment.id))
        .expect("create order");

    // Both referenced entities refuse deletion
    assert!(matches!(
        store.delete_client(&client.id),
        Err(StoreError::Conflict(_))
    ));
    assert!(matches!(
        store.delete_equipment(&equipment.id),
        Err(StoreError::Conflict(_))
    ));

    // Removing the order releases them; orders themselves have no guard
    store.delete_order(&order.id).expect("delete order");
    store.delete_client(&client.id).expect("delete client");
    store.delete_equipment(&equipment.id).expect("delete equipment");
}

#[test]
fn relationship_queries_match_foreign_keys_exactly() {
    let mut store = DataStore::in_memory();
    let client = store.create_client(individual("Diego", "333"));
    let equipment = store.create_equipment(NewEquipment {
        name: "Câmara de resfriamento".to_string(),
        ..NewEquipment::default()
    });
    store
        .create_order(order_input(&client.id, &equipment.id))
        .expect("create order");

    let for_client = store.list_orders(&OrderFilter {
        client_id: Some(client.id.clone()),
        ..OrderFilter::default()
    });
    assert_eq!(for_client.len(), 1);

    // A different client with a common prefix must not match
    let for_other = store.list_orders(&OrderFilter {
        client_id: Some(ClientId::new(format!("{}0", client.id))),
        ..OrderFilter::default()
    });
    assert!(for_other.is_empty());
}

#[test]
fn reset_to_seed_restores_fixed_counts() {
    let mut store = DataStore::in_memory();
    store.create_client(individual("Extra", "999"));
    store
        .import_snapshot(r#"{"ordens_servico":[],"clientes":[],"equipamentos":[]}"#)
        .expect("import");
    store.reset_to_seed();

    let snapshot = store.snapshot();
    assert_eq!(snapshot.clients.len(), 2);
    assert_eq!(snapshot.equipment.len(), 3);
    assert_eq!(snapshot.orders.len(), 3);
    assert!(snapshot.company.is_some());
    assert!(snapshot.attachments.is_empty());
    assert!(snapshot.audit_log.is_empty());

    let statuses: Vec<_> = snapshot.orders.iter().map(|o| o.status).collect();
    assert_eq!(
        statuses,
        [
            ServiceStatus::Completed,
            ServiceStatus::InProgress,
            ServiceStatus::Open
        ]
    );
}
