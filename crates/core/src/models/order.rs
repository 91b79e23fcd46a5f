//! Service order records.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{AttachmentId, AuditLogId, ClientId, EquipmentId, OrderId, OrderKind,
                   ServiceStatus};

/// A service order (work ticket).
///
/// Monetary fields and the per-km rate are decimals serialized as plain JSON
/// numbers, matching the persisted wire format. The store rejects negative
/// values at create/update time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOrder {
    pub id: OrderId,
    #[serde(rename = "tipo_ordem")]
    pub kind: OrderKind,
    /// Date the order was issued.
    #[serde(rename = "data_os")]
    pub order_date: NaiveDate,
    /// Date the client called the issue in.
    #[serde(rename = "data_chamado")]
    pub call_date: NaiveDate,
    #[serde(rename = "motivo_chamado")]
    pub reported_issue: String,
    #[serde(rename = "constatado")]
    pub findings: String,
    #[serde(rename = "serv_executado")]
    pub work_performed: String,
    #[serde(rename = "status_servico")]
    pub status: ServiceStatus,
    #[serde(rename = "observacao")]
    pub notes: String,
    #[serde(rename = "tipo_material")]
    pub material_kind: String,
    pub material: String,
    #[serde(rename = "valor_visita", with = "rust_decimal::serde::float")]
    pub visit_fee: Decimal,
    #[serde(rename = "mao_de_obra", with = "rust_decimal::serde::float")]
    pub labor: Decimal,
    #[serde(rename = "valor_material", with = "rust_decimal::serde::float")]
    pub material_cost: Decimal,
    /// Rate charged per km driven.
    #[serde(rename = "unit_km", with = "rust_decimal::serde::float")]
    pub km_rate: Decimal,
    #[serde(rename = "km_inicial", with = "rust_decimal::serde::float")]
    pub odometer_start: Decimal,
    #[serde(rename = "km_final", with = "rust_decimal::serde::float")]
    pub odometer_end: Decimal,
    #[serde(rename = "cliente_id")]
    pub client_id: ClientId,
    #[serde(rename = "equipamento_id")]
    pub equipment_id: EquipmentId,
    /// Attachment references, in upload order. Maintained by the store.
    pub attachments: Vec<AttachmentId>,
    /// Audit entries touching this order, in chronological order.
    /// Maintained by the store.
    pub audit_log: Vec<AuditLogId>,
    /// Technician signature as a data-URL image.
    #[serde(
        rename = "assinatura_tecnico",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub technician_signature: Option<String>,
    /// Client signature as a data-URL image.
    #[serde(
        rename = "assinatura_cliente",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub client_signature: Option<String>,
}

impl ServiceOrder {
    /// Kilometers driven for this order. Clamped at zero - an odometer end
    /// below the start reads as no distance, not a credit.
    #[must_use]
    pub fn km_driven(&self) -> Decimal {
        (self.odometer_end - self.odometer_start).max(Decimal::ZERO)
    }

    /// Total charge: visit fee + labor + material + distance.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.visit_fee + self.labor + self.material_cost + self.km_driven() * self.km_rate
    }
}

/// Input for creating a service order. The store assigns the ID and starts
/// the attachment and audit lists empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewServiceOrder {
    #[serde(rename = "tipo_ordem")]
    pub kind: OrderKind,
    #[serde(rename = "data_os")]
    pub order_date: NaiveDate,
    #[serde(rename = "data_chamado")]
    pub call_date: NaiveDate,
    #[serde(rename = "motivo_chamado")]
    pub reported_issue: String,
    #[serde(rename = "constatado")]
    pub findings: String,
    #[serde(rename = "serv_executado")]
    pub work_performed: String,
    #[serde(rename = "status_servico")]
    pub status: ServiceStatus,
    #[serde(rename = "observacao")]
    pub notes: String,
    #[serde(rename = "tipo_material")]
    pub material_kind: String,
    pub material: String,
    #[serde(rename = "valor_visita", with = "rust_decimal::serde::float")]
    pub visit_fee: Decimal,
    #[serde(rename = "mao_de_obra", with = "rust_decimal::serde::float")]
    pub labor: Decimal,
    #[serde(rename = "valor_material", with = "rust_decimal::serde::float")]
    pub material_cost: Decimal,
    #[serde(rename = "unit_km", with = "rust_decimal::serde::float")]
    pub km_rate: Decimal,
    #[serde(rename = "km_inicial", with = "rust_decimal::serde::float")]
    pub odometer_start: Decimal,
    #[serde(rename = "km_final", with = "rust_decimal::serde::float")]
    pub odometer_end: Decimal,
    #[serde(rename = "cliente_id")]
    pub client_id: ClientId,
    #[serde(rename = "equipamento_id")]
    pub equipment_id: EquipmentId,
    #[serde(
        rename = "assinatura_tecnico",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub technician_signature: Option<String>,
    #[serde(
        rename = "assinatura_cliente",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub client_signature: Option<String>,
}

impl NewServiceOrder {
    /// Materialize the record under a store-assigned ID.
    #[must_use]
    pub fn into_order(self, id: OrderId) -> ServiceOrder {
        ServiceOrder {
            id,
            kind: self.kind,
            order_date: self.order_date,
            call_date: self.call_date,
            reported_issue: self.reported_issue,
            findings: self.findings,
            work_performed: self.work_performed,
            status: self.status,
            notes: self.notes,
            material_kind: self.material_kind,
            material: self.material,
            visit_fee: self.visit_fee,
            labor: self.labor,
            material_cost: self.material_cost,
            km_rate: self.km_rate,
            odometer_start: self.odometer_start,
            odometer_end: self.odometer_end,
            client_id: self.client_id,
            equipment_id: self.equipment_id,
            attachments: Vec::new(),
            audit_log: Vec::new(),
            technician_signature: self.technician_signature,
            client_signature: self.client_signature,
        }
    }
}

/// Partial update for a service order.
///
/// The signature fields are double-optional: the outer `None` leaves the
/// signature untouched, `Some(None)` clears it (a signature can be redone).
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrderPatch {
    #[serde(rename = "tipo_ordem", skip_serializing_if = "Option::is_none")]
    pub kind: Option<OrderKind>,
    #[serde(rename = "data_os", skip_serializing_if = "Option::is_none")]
    pub order_date: Option<NaiveDate>,
    #[serde(rename = "data_chamado", skip_serializing_if = "Option::is_none")]
    pub call_date: Option<NaiveDate>,
    #[serde(rename = "motivo_chamado", skip_serializing_if = "Option::is_none")]
    pub reported_issue: Option<String>,
    #[serde(rename = "constatado", skip_serializing_if = "Option::is_none")]
    pub findings: Option<String>,
    #[serde(rename = "serv_executado", skip_serializing_if = "Option::is_none")]
    pub work_performed: Option<String>,
    #[serde(rename = "status_servico", skip_serializing_if = "Option::is_none")]
    pub status: Option<ServiceStatus>,
    #[serde(rename = "observacao", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(rename = "tipo_material", skip_serializing_if = "Option::is_none")]
    pub material_kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(
        rename = "valor_visita",
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub visit_fee: Option<Decimal>,
    #[serde(
        rename = "mao_de_obra",
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub labor: Option<Decimal>,
    #[serde(
        rename = "valor_material",
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub material_cost: Option<Decimal>,
    #[serde(
        rename = "unit_km",
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub km_rate: Option<Decimal>,
    #[serde(
        rename = "km_inicial",
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub odometer_start: Option<Decimal>,
    #[serde(
        rename = "km_final",
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub odometer_end: Option<Decimal>,
    #[serde(rename = "cliente_id", skip_serializing_if = "Option::is_none")]
    pub client_id: Option<ClientId>,
    #[serde(rename = "equipamento_id", skip_serializing_if = "Option::is_none")]
    pub equipment_id: Option<EquipmentId>,
    #[serde(rename = "assinatura_tecnico", skip_serializing_if = "Option::is_none")]
    pub technician_signature: Option<Option<String>>,
    #[serde(rename = "assinatura_cliente", skip_serializing_if = "Option::is_none")]
    pub client_signature: Option<Option<String>>,
}

impl OrderPatch {
    /// Merge the patch into an existing record.
    pub fn apply(&self, order: &mut ServiceOrder) {
        if let Some(v) = self.kind {
            order.kind = v;
        }
        if let Some(v) = self.order_date {
            order.order_date = v;
        }
        if let Some(v) = self.call_date {
            order.call_date = v;
        }
        if let Some(v) = &self.reported_issue {
            order.reported_issue = v.clone();
        }
        if let Some(v) = &self.findings {
            order.findings = v.clone();
        }
        if let Some(v) = &self.work_performed {
            order.work_performed = v.clone();
        }
        if let Some(v) = self.status {
            order.status = v;
        }
        if let Some(v) = &self.notes {
            order.notes = v.clone();
        }
        if let Some(v) = &self.material_kind {
            order.material_kind = v.clone();
        }
        if let Some(v) = &self.material {
            order.material = v.clone();
        }
        if let Some(v) = self.visit_fee {
            order.visit_fee = v;
        }
        if let Some(v) = self.labor {
            order.labor = v;
        }
        if let Some(v) = self.material_cost {
            order.material_cost = v;
        }
        if let Some(v) = self.km_rate {
            order.km_rate = v;
        }
        if let Some(v) = self.odometer_start {
            order.odometer_start = v;
        }
        if let Some(v) = self.odometer_end {
            order.odometer_end = v;
        }
        if let Some(v) = &self.client_id {
            order.client_id = v.clone();
        }
        if let Some(v) = &self.equipment_id {
            order.equipment_id = v.clone();
        }
        if let Some(v) = &self.technician_signature {
            order.technician_signature = v.clone();
        }
        if let Some(v) = &self.client_signature {
            order.client_signature = v.clone();
        }
    }
}
