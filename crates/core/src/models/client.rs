//! Client records.

use serde::{Deserialize, Serialize};

use crate::types::{ClientId, ClientKind};

/// A client (customer) of the service company.
///
/// Which tax-id fields carry data depends on [`ClientKind`]: individuals use
/// `rg`/`cpf`, organizations use `cnpj` and the state/municipal
/// registrations. The store does not enforce this - the original system
/// leaves it to the forms - so unused fields are simply empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    #[serde(rename = "tipo_cliente")]
    pub kind: ClientKind,
    #[serde(rename = "nome_fantasia")]
    pub trade_name: String,
    #[serde(rename = "razao_social")]
    pub legal_name: String,
    #[serde(rename = "endereco")]
    pub street: String,
    #[serde(rename = "num_endereco")]
    pub street_number: String,
    #[serde(rename = "bairro")]
    pub district: String,
    #[serde(rename = "cidade")]
    pub city: String,
    #[serde(rename = "estado")]
    pub state: String,
    #[serde(rename = "cep")]
    pub postal_code: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(rename = "telefone2")]
    pub phone2: String,
    #[serde(rename = "telefone3")]
    pub phone3: String,
    pub email: String,
    #[serde(rename = "contato")]
    pub contact: String,
    pub rg: String,
    pub cpf: String,
    pub cnpj: String,
    #[serde(rename = "insc_estadual")]
    pub state_registration: String,
    #[serde(rename = "insc_municipal")]
    pub municipal_registration: String,
}

/// Input for creating a client. The store assigns the ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewClient {
    #[serde(rename = "tipo_cliente")]
    pub kind: ClientKind,
    #[serde(rename = "nome_fantasia")]
    pub trade_name: String,
    #[serde(rename = "razao_social")]
    pub legal_name: String,
    #[serde(rename = "endereco")]
    pub street: String,
    #[serde(rename = "num_endereco")]
    pub street_number: String,
    #[serde(rename = "bairro")]
    pub district: String,
    #[serde(rename = "cidade")]
    pub city: String,
    #[serde(rename = "estado")]
    pub state: String,
    #[serde(rename = "cep")]
    pub postal_code: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(rename = "telefone2")]
    pub phone2: String,
    #[serde(rename = "telefone3")]
    pub phone3: String,
    pub email: String,
    #[serde(rename = "contato")]
    pub contact: String,
    pub rg: String,
    pub cpf: String,
    pub cnpj: String,
    #[serde(rename = "insc_estadual")]
    pub state_registration: String,
    #[serde(rename = "insc_municipal")]
    pub municipal_registration: String,
}

impl NewClient {
    /// Materialize the record under a store-assigned ID.
    #[must_use]
    pub fn into_client(self, id: ClientId) -> Client {
        Client {
            id,
            kind: self.kind,
            trade_name: self.trade_name,
            legal_name: self.legal_name,
            street: self.street,
            street_number: self.street_number,
            district: self.district,
            city: self.city,
            state: self.state,
            postal_code: self.postal_code,
            phone: self.phone,
            phone2: self.phone2,
            phone3: self.phone3,
            email: self.email,
            contact: self.contact,
            rg: self.rg,
            cpf: self.cpf,
            cnpj: self.cnpj,
            state_registration: self.state_registration,
            municipal_registration: self.municipal_registration,
        }
    }
}

/// Partial update for a client. `None` fields are left untouched; the ID is
/// never part of a patch.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClientPatch {
    #[serde(rename = "tipo_cliente", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ClientKind>,
    #[serde(rename = "nome_fantasia", skip_serializing_if = "Option::is_none")]
    pub trade_name: Option<String>,
    #[serde(rename = "razao_social", skip_serializing_if = "Option::is_none")]
    pub legal_name: Option<String>,
    #[serde(rename = "endereco", skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(rename = "num_endereco", skip_serializing_if = "Option::is_none")]
    pub street_number: Option<String>,
    #[serde(rename = "bairro", skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(rename = "cidade", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(rename = "estado", skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(rename = "cep", skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(rename = "telefone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "telefone2", skip_serializing_if = "Option::is_none")]
    pub phone2: Option<String>,
    #[serde(rename = "telefone3", skip_serializing_if = "Option::is_none")]
    pub phone3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "contato", skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnpj: Option<String>,
    #[serde(rename = "insc_estadual", skip_serializing_if = "Option::is_none")]
    pub state_registration: Option<String>,
    #[serde(rename = "insc_municipal", skip_serializing_if = "Option::is_none")]
    pub municipal_registration: Option<String>,
}

impl ClientPatch {
    /// Merge the patch into an existing record.
    pub fn apply(&self, client: &mut Client) {
        if let Some(v) = self.kind {
            client.kind = v;
        }
        if let Some(v) = &self.trade_name {
            client.trade_name = v.clone();
        }
        if let Some(v) = &self.legal_name {
            client.legal_name = v.clone();
        }
        if let Some(v) = &self.street {
            client.street = v.clone();
        }
        if let Some(v) = &self.street_number {
            client.street_number = v.clone();
        }
        if let Some(v) = &self.district {
            client.district = v.clone();
        }
        if let Some(v) = &self.city {
            client.city = v.clone();
        }
        if let Some(v) = &self.state {
            client.state = v.clone();
        }
        if let Some(v) = &self.postal_code {
            client.postal_code = v.clone();
        }
        if let Some(v) = &self.phone {
            client.phone = v.clone();
        }
        if let Some(v) = &self.phone2 {
            client.phone2 = v.clone();
        }
        if let Some(v) = &self.phone3 {
            client.phone3 = v.clone();
        }
        if let Some(v) = &self.email {
            client.email = v.clone();
        }
        if let Some(v) = &self.contact {
            client.contact = v.clone();
        }
        if let Some(v) = &self.rg {
            client.rg = v.clone();
        }
        if let Some(v) = &self.cpf {
            client.cpf = v.clone();
        }
        if let Some(v) = &self.cnpj {
            client.cnpj = v.clone();
        }
        if let Some(v) = &self.state_registration {
            client.state_registration = v.clone();
        }
        if let Some(v) = &self.municipal_registration {
            client.municipal_registration = v.clone();
        }
    }
}
