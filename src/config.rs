//! Configuración de la aplicación desde variables de entorno (.env).
//! Solo el binario la consume: la librería núcleo nunca lee el entorno,
//! recibe sus colaboradores como dependencias explícitas.

use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub ledger: LedgerConfig,
    pub store: StoreConfig,
}

/// Parámetros de conexión al ledger (RPC + dirección del registry).
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    pub rpc_url: String,
    /// Dirección del contrato registry en la red destino, si se conoce.
    pub registry_address: Option<String>,
}

/// Parámetros del store off-chain de registros.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub url: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Lazy::force(&DOTENV_LOADED);
        let rpc_url = env::var("LEDGER_RPC_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8545".to_string());
        let registry_address = env::var("REGISTRY_ADDRESS").ok();
        let store_url = env::var("RECORD_STORE_URL").ok();
        Self {
            ledger: LedgerConfig { rpc_url, registry_address },
            store: StoreConfig { url: store_url },
        }
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        // no fija variables: valida los defaults
        let cfg = AppConfig::from_env();
        assert!(!cfg.ledger.rpc_url.is_empty());
    }
}
