// ============================================================================
// Module : config
// ============================================================================
// Constantes de l'application et résolution des chemins.
//
// Pas de fichier de configuration : tout est compilé, seules deux variables
// d'environnement sont lues (RUST_LOG pour le filtre de logs, SEIWATCH_LOG_DIR
// pour le répertoire des logs).
// ============================================================================

use std::path::PathBuf;
use std::time::Duration;

/// Nom de l'application (répertoire de données, fichier de log)
pub const APP_NAME: &str = "seiwatch";

/// Titre affiché dans le header
pub const TITLE: &str = "Sei Stablecoin Monitor";

/// Sous-titre affiché sous le titre
pub const SUBTITLE: &str = "Real-time insights into on-chain stablecoin flows and whale activity.";

/// Délai minimal entre deux clignements (inclus)
pub const BLINK_MIN_DELAY: Duration = Duration::from_millis(3000);

/// Délai maximal entre deux clignements (exclu)
pub const BLINK_MAX_DELAY: Duration = Duration::from_millis(8000);

/// Durée pendant laquelle les paupières restent fermées
pub const BLINK_DURATION: Duration = Duration::from_millis(300);

/// Durée de la transition ouverture/fermeture des paupières
pub const EYELID_TRANSITION: Duration = Duration::from_millis(300);

/// Période de la boucle d'événements
///
/// Assez courte pour que la transition des paupières (300 ms) soit visible.
pub const TICK_RATE: Duration = Duration::from_millis(50);

/// Variable d'environnement qui remplace le répertoire des logs
pub const LOG_DIR_ENV: &str = "SEIWATCH_LOG_DIR";

/// Filtre de logs par défaut si RUST_LOG n'est pas défini
pub const DEFAULT_LOG_FILTER: &str = "seiwatch=debug,info";

/// Répertoire des logs
///
/// Ordre de résolution :
/// 1. `$SEIWATCH_LOG_DIR` s'il est défini et non vide
/// 2. `<data_local_dir>/seiwatch/logs` (~/.local/share/seiwatch/logs sur Linux)
/// 3. `./logs` si le répertoire de données est introuvable
pub fn log_dir() -> PathBuf {
    resolve_log_dir(std::env::var_os(LOG_DIR_ENV).map(PathBuf::from), dirs::data_local_dir())
}

fn resolve_log_dir(override_dir: Option<PathBuf>, data_dir: Option<PathBuf>) -> PathBuf {
    match (override_dir, data_dir) {
        (Some(dir), _) if !dir.as_os_str().is_empty() => dir,
        (_, Some(data)) => data.join(APP_NAME).join("logs"),
        _ => PathBuf::from("./logs"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blink_timings() {
        assert!(BLINK_MIN_DELAY < BLINK_MAX_DELAY);
        // Un clignement se termine toujours avant le suivant
        assert!(BLINK_DURATION < BLINK_MIN_DELAY);
    }

    #[test]
    fn test_resolve_log_dir() {
        let data = Some(PathBuf::from("/home/u/.local/share"));

        assert_eq!(
            resolve_log_dir(Some(PathBuf::from("/tmp/logs")), data.clone()),
            PathBuf::from("/tmp/logs")
        );
        assert_eq!(
            resolve_log_dir(Some(PathBuf::new()), data.clone()),
            PathBuf::from("/home/u/.local/share/seiwatch/logs")
        );
        assert_eq!(
            resolve_log_dir(None, data),
            PathBuf::from("/home/u/.local/share/seiwatch/logs")
        );
        assert_eq!(resolve_log_dir(None, None), PathBuf::from("./logs"));
    }
}
