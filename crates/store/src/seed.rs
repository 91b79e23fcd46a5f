//! First-run seed dataset.
//!
//! Materialized when the persistence slot is empty, unreadable, or carries a
//! mismatched format version, and by the reset operation. Fixed contents:
//! one company, two clients (one organization, one individual), three
//! equipment records and three service orders - one completed, one in
//! progress, one open - all dated at seed time. No attachments, no audit
//! entries: seeding is not an audited operation.

use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;

use ordem_core::{
    Client, ClientId, ClientKind, Company, CompanyId, Equipment, EquipmentId, IdCounters,
    OrderId, OrderKind, ServiceOrder, ServiceStatus, Settings, Snapshot,
};

/// Build the fixed seed dataset, dated `now`.
#[must_use]
pub fn seed_snapshot(now: DateTime<Utc>) -> Snapshot {
    let today = now.date_naive();

    let company = Company {
        id: CompanyId::default(),
        name: "Verdetec Refrigeração e Climatização".to_string(),
        cnpj: "23.456.789/0001-10".to_string(),
        address: "Rua das Araucárias, 1250 - Centro, Curitiba - PR".to_string(),
        phone: "(41) 3322-4455".to_string(),
        logo: String::new(),
        email: "contato@verdetec.com.br".to_string(),
        site: "www.verdetec.com.br".to_string(),
        warranty_policy: "Garantia de 90 dias sobre serviços executados e peças \
                          substituídas, contados da data de conclusão da ordem."
            .to_string(),
        default_technician_signature: None,
    };

    let clients = vec![
        Client {
            id: ClientId::from_seq(1),
            kind: ClientKind::Organization,
            trade_name: "Mercado Bom Preço".to_string(),
            legal_name: "Bom Preço Comércio de Alimentos Ltda".to_string(),
            street: "Av. Sete de Setembro".to_string(),
            street_number: "3480".to_string(),
            district: "Centro".to_string(),
            city: "Curitiba".to_string(),
            state: "PR".to_string(),
            postal_code: "80250-210".to_string(),
            phone: "(41) 3233-7788".to_string(),
            phone2: "(41) 99876-1122".to_string(),
            phone3: String::new(),
            email: "compras@bompreco.com.br".to_string(),
            contact: "Sérgio Lima".to_string(),
            rg: String::new(),
            cpf: String::new(),
            cnpj: "45.678.901/0001-22".to_string(),
            state_registration: "903.55412-78".to_string(),
            municipal_registration: "11.223.344-5".to_string(),
        },
        Client {
            id: ClientId::from_seq(2),
            kind: ClientKind::Individual,
            trade_name: "Helena Prado".to_string(),
            legal_name: String::new(),
            street: "Rua Marechal Deodoro".to_string(),
            street_number: "742".to_string(),
            district: "Alto da XV".to_string(),
            city: "Curitiba".to_string(),
            state: "PR".to_string(),
            postal_code: "80045-150".to_string(),
            phone: "(41) 98811-2233".to_string(),
            phone2: String::new(),
            phone3: String::new(),
            email: "helena.prado@gmail.com".to_string(),
            contact: String::new(),
            rg: "8.123.456-0".to_string(),
            cpf: "123.456.789-09".to_string(),
            cnpj: String::new(),
            state_registration: String::new(),
            municipal_registration: String::new(),
        },
    ];

    let equipment = vec![
        Equipment {
            id: EquipmentId::from_seq(1),
            name: "Câmara fria 4x3".to_string(),
            model: "CF-4030".to_string(),
            brand: "Recrusul".to_string(),
            sn: "CF4030-18-00271".to_string(),
        },
        Equipment {
            id: EquipmentId::from_seq(2),
            name: "Split hi-wall 12.000 BTU".to_string(),
            model: "AR12TVHZ".to_string(),
            brand: "Samsung".to_string(),
            sn: "0A7X4PBT500129".to_string(),
        },
        Equipment {
            id: EquipmentId::from_seq(3),
            name: "Balcão expositor refrigerado".to_string(),
            model: "BER-350".to_string(),
            brand: "Gelopar".to_string(),
            sn: "GP-BER-21-4488".to_string(),
        },
    ];

    let orders = vec![
        ServiceOrder {
            id: OrderId::from_parts(today.year(), 1),
            kind: OrderKind::Maintenance,
            order_date: today,
            call_date: today,
            reported_issue: "Câmara fria não atinge a temperatura programada".to_string(),
            findings: "Condensador obstruído por sujeira; carga de gás baixa".to_string(),
            work_performed: "Limpeza do condensador e recarga de fluido R-404A".to_string(),
            status: ServiceStatus::Completed,
            notes: "Recomendada limpeza preventiva semestral".to_string(),
            material_kind: "Fluido refrigerante".to_string(),
            material: "R-404A (2,5 kg)".to_string(),
            visit_fee: Decimal::new(12000, 2),
            labor: Decimal::new(28000, 2),
            material_cost: Decimal::new(42500, 2),
            km_rate: Decimal::new(180, 2),
            odometer_start: Decimal::from(45210),
            odometer_end: Decimal::from(45242),
            client_id: ClientId::from_seq(1),
            equipment_id: EquipmentId::from_seq(1),
            attachments: Vec::new(),
            audit_log: Vec::new(),
            technician_signature: None,
            client_signature: None,
        },
        ServiceOrder {
            id: OrderId::from_parts(today.year(), 2),
            kind: OrderKind::Repair,
            order_date: today,
            call_date: today,
            reported_issue: "Split desarma o disjuntor ao ligar".to_string(),
            findings: "Compressor com fuga de corrente".to_string(),
            work_performed: "Aguardando peça de reposição".to_string(),
            status: ServiceStatus::InProgress,
            notes: String::new(),
            material_kind: "Peça".to_string(),
            material: "Compressor rotativo 12k".to_string(),
            visit_fee: Decimal::new(9000, 2),
            labor: Decimal::ZERO,
            material_cost: Decimal::ZERO,
            km_rate: Decimal::new(180, 2),
            odometer_start: Decimal::from(45250),
            odometer_end: Decimal::from(45261),
            client_id: ClientId::from_seq(2),
            equipment_id: EquipmentId::from_seq(2),
            attachments: Vec::new(),
            audit_log: Vec::new(),
            technician_signature: None,
            client_signature: None,
        },
        ServiceOrder {
            id: OrderId::from_parts(today.year(), 3),
            kind: OrderKind::Inspection,
            order_date: today,
            call_date: today,
            reported_issue: "Revisão periódica do balcão expositor".to_string(),
            findings: String::new(),
            work_performed: String::new(),
            status: ServiceStatus::Open,
            notes: "Agendar visita com o gerente da loja".to_string(),
            material_kind: String::new(),
            material: String::new(),
            visit_fee: Decimal::new(9000, 2),
            labor: Decimal::ZERO,
            material_cost: Decimal::ZERO,
            km_rate: Decimal::new(180, 2),
            odometer_start: Decimal::ZERO,
            odometer_end: Decimal::ZERO,
            client_id: ClientId::from_seq(1),
            equipment_id: EquipmentId::from_seq(3),
            attachments: Vec::new(),
            audit_log: Vec::new(),
            technician_signature: None,
            client_signature: None,
        },
    ];

    Snapshot {
        orders,
        clients,
        equipment,
        company: Some(company),
        attachments: Vec::new(),
        audit_log: Vec::new(),
        settings: Settings::default(),
        counters: IdCounters {
            clients: 2,
            equipment: 3,
            orders: 3,
            attachments: 0,
        },
    }
}
