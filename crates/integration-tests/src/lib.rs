//! Integration tests for Ordem.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p ordem-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `store_lifecycle` - CRUD, audit trail and dependency guards end to end
//! - `roundtrip` - export/import round-trip law and wire-format stability
//! - `persistence` - slot durability across reopen, corrupt-slot recovery

#![cfg_attr(not(test), forbid(unsafe_code))]

use chrono::NaiveDate;
use rust_decimal::Decimal;

use ordem_core::{ClientId, EquipmentId, NewServiceOrder, OrderKind, ServiceStatus};

/// A minimal valid order input against the given seed references.
#[must_use]
pub fn order_input(client: &ClientId, equipment: &EquipmentId) -> NewServiceOrder {
    NewServiceOrder {
        kind: OrderKind::Repair,
        order_date: NaiveDate::from_ymd_opt(2026, 6, 1).expect("valid date"),
        call_date: NaiveDate::from_ymd_opt(2026, 5, 30).expect("valid date"),
        reported_issue: "Equipamento não gela".to_string(),
        findings: String::new(),
        work_performed: String::new(),
        status: ServiceStatus::Open,
        notes: String::new(),
        material_kind: String::new(),
        material: String::new(),
        visit_fee: Decimal::from(100),
        labor: Decimal::ZERO,
        material_cost: Decimal::ZERO,
        km_rate: Decimal::ZERO,
        odometer_start: Decimal::ZERO,
        odometer_end: Decimal::ZERO,
        client_id: client.clone(),
        equipment_id: equipment.clone(),
        technician_signature: None,
        client_signature: None,
    }
}
