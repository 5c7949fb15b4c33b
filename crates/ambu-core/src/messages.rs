//! User-facing strings (Italian, as shown by the web client).

use crate::error::AmbuError;
use crate::search::{Consensus, Engine};

pub const LOGIN_RATE_LIMITED: &str = "Troppi tentativi. Riprova tra un minuto.";
pub const LOGIN_INVALID: &str = "Credenziali non valide.";
pub const LOGIN_GENERIC: &str = "Errore durante il login.";
pub const LOGIN_IN_PROGRESS: &str = "Accesso in corso...";
pub const SEARCH_GENERIC: &str = "Errore durante la ricerca. Riprova.";
pub const SEARCH_PENDING: &str = "Ricerca in corso...";
pub const OFF_TOPIC: &str = "La richiesta non riguarda ambulatori o studi medici.";
pub const NOT_FOUND: &str = "Nessun numero di telefono trovato.";
pub const LOGGED_OUT: &str = "Sessione terminata.";

pub const LOGIN_SUCCEEDED: &str = "Accesso effettuato.";
pub const CREDENTIALS_REQUIRED: &str = "Inserisci nome utente e password.";
pub const SESSION_REQUIRED: &str = "Accesso richiesto. Esegui `ambu login`.";
pub const SEARCH_EMPTY: &str = "Inserisci il nome di un ambulatorio o studio medico.";
pub const DETAILS_HIDDEN: &str = "Fonti nascoste.";
pub const DETAILS_UNAVAILABLE: &str = "Nessuna fonte per il risultato corrente.";
pub const UNKNOWN_COMMAND: &str = "Comando sconosciuto.";

pub const PROMPT_USERNAME: &str = "Nome utente";
pub const PROMPT_PASSWORD: &str = "Password";

pub const REPL_HELP: &str = "Scrivi il nome di un ambulatorio per cercarlo, '/details' per le fonti, \
'/engine <local|deepsearch>' per cambiare motore, '/logout' oppure 'quit'.";
pub const REPL_INTERRUPTED: &str = "CTRL-C rilevato. Scrivi 'quit' per uscire.";
pub const REPL_EOF: &str = "CTRL-D rilevato. Uscita...";
pub const GOODBYE: &str = "Arrivederci!";

// `ambu status` labels
pub const STATUS_SERVICE: &str = "Servizio:";
pub const STATUS_ENVIRONMENT: &str = "Ambiente:";
pub const STATUS_ENGINE: &str = "Motore:";
pub const STATUS_CONFIG: &str = "Configurazione:";
pub const STATUS_SESSION: &str = "Sessione:";
pub const SERVICE_UNCONFIGURED: &str = "non configurato";
pub const SESSION_NONE: &str = "nessuna";

/// Message for a failed login. Network failures share the generic text.
pub fn login_failure(error: &AmbuError) -> &'static str {
    match error {
        AmbuError::AuthRateLimited => LOGIN_RATE_LIMITED,
        AmbuError::AuthInvalid => LOGIN_INVALID,
        AmbuError::LoginInProgress => LOGIN_IN_PROGRESS,
        _ => LOGIN_GENERIC,
    }
}

/// Message for a failed search; the cause is never shown.
pub fn search_failure(_error: &AmbuError) -> &'static str {
    SEARCH_GENERIC
}

pub fn consensus_label(consensus: Consensus) -> String {
    format!("{}/{} fonti concordano", consensus.agreeing, consensus.total)
}

pub fn unknown_engine(name: &str) -> String {
    format!("Motore di ricerca sconosciuto: {name}")
}

/// `saved_at` is absent for records written before it was tracked.
pub fn session_active(saved_at: Option<&str>) -> String {
    match saved_at {
        Some(at) => format!("attiva (dal {at})"),
        None => "attiva".to_string(),
    }
}

pub fn engine_label(engine: Engine) -> &'static str {
    match engine {
        Engine::Local => "Ricerca locale",
        Engine::Deepsearch => "DeepSearch AI",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_messages_are_distinct() {
        let invalid = login_failure(&AmbuError::AuthInvalid);
        let limited = login_failure(&AmbuError::AuthRateLimited);
        let network = login_failure(&AmbuError::network("connection refused"));

        assert_ne!(invalid, limited);
        assert_ne!(invalid, network);
        assert_ne!(limited, network);
        assert_eq!(network, LOGIN_GENERIC);
        assert_eq!(login_failure(&AmbuError::auth_generic("500")), LOGIN_GENERIC);
    }

    #[test]
    fn test_search_message_hides_cause() {
        let message = search_failure(&AmbuError::search_generic("expected value at line 1"));
        assert!(!message.contains("line 1"));
    }

    #[test]
    fn test_consensus_label() {
        let label = consensus_label(Consensus {
            agreeing: 2,
            total: 3,
        });
        assert_eq!(label, "2/3 fonti concordano");
    }

    #[test]
    fn test_terminal_strings_are_distinct() {
        let strings = [
            LOGIN_SUCCEEDED,
            CREDENTIALS_REQUIRED,
            SESSION_REQUIRED,
            SEARCH_EMPTY,
            DETAILS_HIDDEN,
            DETAILS_UNAVAILABLE,
            UNKNOWN_COMMAND,
            REPL_HELP,
            REPL_INTERRUPTED,
            REPL_EOF,
            GOODBYE,
            LOGGED_OUT,
            NOT_FOUND,
            OFF_TOPIC,
        ];

        for (i, a) in strings.iter().enumerate() {
            assert!(!a.trim().is_empty());
            for b in &strings[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_session_and_engine_labels() {
        assert_eq!(session_active(None), "attiva");
        assert_eq!(
            session_active(Some("2026-01-02T03:04:05+00:00")),
            "attiva (dal 2026-01-02T03:04:05+00:00)"
        );
        assert_eq!(unknown_engine("bing"), "Motore di ricerca sconosciuto: bing");
    }
}
