//! Status and kind enums for the domain entities.
//!
//! The serde rename values are the exact Portuguese strings of the persisted
//! wire format and of the original data files. Display renders the same
//! strings, so logs and documents show what users expect.

use serde::{Deserialize, Serialize};

/// Service order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ServiceStatus {
    /// Newly opened, no work started.
    #[default]
    #[serde(rename = "Aberto")]
    Open,
    /// A technician is working the order.
    #[serde(rename = "Em Andamento")]
    InProgress,
    /// Work finished and signed off.
    #[serde(rename = "Concluído")]
    Completed,
    /// Abandoned without completion.
    #[serde(rename = "Cancelado")]
    Cancelled,
}

impl std::fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "Aberto"),
            Self::InProgress => write!(f, "Em Andamento"),
            Self::Completed => write!(f, "Concluído"),
            Self::Cancelled => write!(f, "Cancelado"),
        }
    }
}

impl std::str::FromStr for ServiceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Aberto" => Ok(Self::Open),
            "Em Andamento" => Ok(Self::InProgress),
            "Concluído" => Ok(Self::Completed),
            "Cancelado" => Ok(Self::Cancelled),
            _ => Err(format!("invalid service status: {s}")),
        }
    }
}

/// Kind of service order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderKind {
    #[serde(rename = "Instalação")]
    Installation,
    #[default]
    #[serde(rename = "Manutenção")]
    Maintenance,
    #[serde(rename = "Reparo")]
    Repair,
    #[serde(rename = "Revisão")]
    Inspection,
    #[serde(rename = "Outro")]
    Other,
}

impl std::fmt::Display for OrderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Installation => write!(f, "Instalação"),
            Self::Maintenance => write!(f, "Manutenção"),
            Self::Repair => write!(f, "Reparo"),
            Self::Inspection => write!(f, "Revisão"),
            Self::Other => write!(f, "Outro"),
        }
    }
}

/// Client classification. Determines which tax-id fields are relevant
/// (cpf/rg for individuals, cnpj and registrations for organizations).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ClientKind {
    #[default]
    #[serde(rename = "Pessoa Física")]
    Individual,
    #[serde(rename = "Pessoa Jurídica")]
    Organization,
}

impl std::fmt::Display for ClientKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Individual => write!(f, "Pessoa Física"),
            Self::Organization => write!(f, "Pessoa Jurídica"),
        }
    }
}

/// Audit trail action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Entity kinds that appear in the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditEntityKind {
    OrdemServico,
    Cliente,
    Equipamento,
    Empresa,
}

impl std::fmt::Display for AuditEntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OrdemServico => write!(f, "ordem_servico"),
            Self::Cliente => write!(f, "cliente"),
            Self::Equipamento => write!(f, "equipamento"),
            Self::Empresa => write!(f, "empresa"),
        }
    }
}

/// Preferred editing surface of the calling UI. Stored, not interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EditMode {
    #[default]
    Modal,
    Route,
}
