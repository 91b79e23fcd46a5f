//! Company profile (singleton record).

use serde::{Deserialize, Serialize};

use crate::types::CompanyId;

/// The service company's own profile, printed on order documents.
///
/// At most one instance exists, under the fixed ID `empresa-1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    #[serde(rename = "nome")]
    pub name: String,
    pub cnpj: String,
    #[serde(rename = "endereco")]
    pub address: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    /// Base64-encoded logo image.
    pub logo: String,
    pub email: String,
    pub site: String,
    #[serde(rename = "politicas_garantia")]
    pub warranty_policy: String,
    /// Default technician signature (data-URL image), used on printed
    /// orders when the order itself carries none.
    #[serde(
        rename = "assinatura_tecnico_padrao",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub default_technician_signature: Option<String>,
}

/// Input for creating or replacing the company profile. The ID is fixed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyInput {
    #[serde(rename = "nome")]
    pub name: String,
    pub cnpj: String,
    #[serde(rename = "endereco")]
    pub address: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    pub logo: String,
    pub email: String,
    pub site: String,
    #[serde(rename = "politicas_garantia")]
    pub warranty_policy: String,
    #[serde(
        rename = "assinatura_tecnico_padrao",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub default_technician_signature: Option<String>,
}

impl CompanyInput {
    /// Materialize the singleton record.
    #[must_use]
    pub fn into_company(self, id: CompanyId) -> Company {
        Company {
            id,
            name: self.name,
            cnpj: self.cnpj,
            address: self.address,
            phone: self.phone,
            logo: self.logo,
            email: self.email,
            site: self.site,
            warranty_policy: self.warranty_policy,
            default_technician_signature: self.default_technician_signature,
        }
    }
}
