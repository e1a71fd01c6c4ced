//! Transaction abort type for multi-statement writes.

use diesel::result::Error as DieselError;

/// Error type threaded through `AsyncConnection::transaction`.
///
/// Returning `Rejected` from the callback rolls the transaction back just
/// like a driver failure, but the adapter still reports the business outcome
/// to its caller instead of an error.
#[derive(Debug)]
pub(crate) enum TxAbort<T> {
    /// A precondition failed; carries the outcome to report.
    Rejected(T),
    /// The driver failed.
    Diesel(DieselError),
}

impl<T> From<DieselError> for TxAbort<T> {
    fn from(error: DieselError) -> Self {
        Self::Diesel(error)
    }
}
