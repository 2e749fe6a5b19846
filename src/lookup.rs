//! Postal-code address resolution via the ViaCEP service.
//!
//! The lookup is an enhancement, not a requirement: every failure mode
//! (not found, transport error, malformed body) collapses to `None` and
//! the user fills the address in manually.

use serde::Deserialize;

use crate::domain::digits_only;

/// Default base URL of the ViaCEP service.
pub const DEFAULT_BASE_URL: &str = "https://viacep.com.br";

/// Length of a complete postal code, in digits.
const POSTAL_CODE_DIGITS: usize = 8;

/// A resolved address, as returned by a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    /// The postal code, as echoed by the service (masked).
    pub postal_code: String,
    /// Street name.
    pub street: String,
    /// Neighborhood.
    pub neighborhood: String,
    /// City.
    pub city: String,
    /// State (UF).
    pub state: String,
}

/// Wire format of a ViaCEP response.
///
/// A not-found postal code comes back as `{"erro": true}` with every
/// other field absent.
#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    #[serde(default)]
    cep: String,
    #[serde(default)]
    logradouro: String,
    #[serde(default)]
    bairro: String,
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    uf: String,
    #[serde(default)]
    erro: bool,
}

impl From<ViaCepResponse> for Address {
    fn from(response: ViaCepResponse) -> Self {
        Self {
            postal_code: response.cep,
            street: response.logradouro,
            neighborhood: response.bairro,
            city: response.localidade,
            state: response.uf,
        }
    }
}

/// A ViaCEP lookup client.
#[derive(Debug, Clone)]
pub struct ViaCep {
    base_url: String,
}

impl Default for ViaCep {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ViaCep {
    /// A client against the given base URL.
    ///
    /// The base URL is configurable so tests can point at a local stub.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Resolve a postal code to an address.
    ///
    /// Fires only when the normalized code has exactly eight digits;
    /// anything else returns `None` without a request. A not-found
    /// response or any transport or parse failure also returns `None`.
    #[must_use]
    pub fn lookup(&self, postal_code: &str) -> Option<Address> {
        let digits = digits_only(postal_code);
        if digits.len() != POSTAL_CODE_DIGITS {
            return None;
        }

        let url = format!("{}/ws/{digits}/json/", self.base_url);
        let agent = ureq::Agent::new_with_defaults();
        let response = match agent.get(&url).call() {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("Postal-code lookup failed for {digits}: {e}");
                return None;
            }
        };

        let body: ViaCepResponse = match response.into_body().read_json() {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!("Malformed lookup response for {digits}: {e}");
                return None;
            }
        };

        parse_response(body)
    }
}

/// Turn a decoded response into an address, filtering the not-found case.
fn parse_response(body: ViaCepResponse) -> Option<Address> {
    if body.erro {
        return None;
    }
    Some(body.into())
}

#[cfg(test)]
mod tests {
    use super::{parse_response, Address, ViaCep, ViaCepResponse};

    fn decode(json: &str) -> ViaCepResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn found_response_maps_to_address() {
        let body = decode(
            r#"{
                "cep": "01310-930",
                "logradouro": "Avenida Paulista",
                "complemento": "1578",
                "bairro": "Bela Vista",
                "localidade": "Sao Paulo",
                "uf": "SP"
            }"#,
        );

        let address = parse_response(body).unwrap();
        assert_eq!(
            address,
            Address {
                postal_code: "01310-930".to_string(),
                street: "Avenida Paulista".to_string(),
                neighborhood: "Bela Vista".to_string(),
                city: "Sao Paulo".to_string(),
                state: "SP".to_string(),
            }
        );
    }

    #[test]
    fn not_found_response_is_absent() {
        let body = decode(r#"{"erro": true}"#);
        assert!(parse_response(body).is_none());
    }

    #[test]
    fn short_postal_code_never_fires_a_request() {
        // An unroutable base URL proves no request is attempted.
        let client = ViaCep::new("http://127.0.0.1:0");
        assert!(client.lookup("0131").is_none());
        assert!(client.lookup("").is_none());
        assert!(client.lookup("013109301").is_none());
    }
}
