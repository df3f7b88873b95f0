use thiserror::Error;

/// Terminal failures of one orchestration run. The orchestrator is the
/// only pipeline component permitted to fail; each variant carries one
/// human-readable message so callers can discriminate confirmation vs.
/// data vs. generation failures.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("a confirmação fidedigna dos dados é obrigatória antes da geração")]
    ConfirmationRequired,

    #[error("dados extraídos incompletos para processamento")]
    IncompleteData,

    #[error("falha na geração editorial: {0}")]
    Generation(String),

    #[error("política ética inválida: {0}")]
    Policy(#[from] relato_core::error::CoreError),
}
