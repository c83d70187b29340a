//! Request validation error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Configuration errors rejected before any layout work begins.
///
/// These surface to the caller as user-facing validation messages.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    /// No fields were selected for the report.
    #[error("Selecione ao menos um campo para o relatório")]
    NoFieldsSelected,

    /// A selected field key is not declared for the entity kind.
    #[error("Campo desconhecido para {entity}: {key}")]
    UnknownField {
        /// Entity slug.
        entity: &'static str,
        /// The offending field key.
        key: String,
    },

    /// The sort key is not declared for the entity kind.
    #[error("Chave de ordenação desconhecida: {0}")]
    UnknownSortKey(String),

    /// Start date is after end date.
    #[error("Intervalo de datas inválido: {start} é posterior a {end}")]
    InvalidDateRange {
        /// Range start.
        start: NaiveDate,
        /// Range end.
        end: NaiveDate,
    },

    /// This report type requires a date range and none was provided.
    #[error("Você deve selecionar um intervalo de datas")]
    DateRangeRequired,
}
