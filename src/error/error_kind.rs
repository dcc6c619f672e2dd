/// Describes an application specific error types.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Error caused by the error on the client side.
    ClientError,
    /// Error caused by a request with an HTTP method the endpoint doesn't support.
    MethodNotAllowed,
    /// Error reported by the task store while executing an operation.
    StoreError,
    /// Unknown error.
    Unknown,
}
