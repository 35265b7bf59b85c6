#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,

    // === DATABASE MESSAGES ===
    DatabaseInitialized,
    DatabaseReset,
    ConfirmDatabaseReset,
    ResetCancelled,

    // === SERVER MESSAGES ===
    ServerListening(String), // bound address

    // === GENERAL MESSAGES ===
    FatalError(String),
}
