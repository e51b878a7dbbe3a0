use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("unknown jurisdiction '{0}'")]
    UnknownJurisdiction(String),
    #[error("failure building HTTP client: {0}")]
    ClientBuildError(String),
    #[error("HTTP {status} from {endpoint}")]
    HttpStatus { endpoint: String, status: u16 },
    #[error("request to {endpoint} timed out")]
    Timeout { endpoint: String },
    #[error("request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },
    #[error("response from {endpoint} is not a valid overpass payload: {message}")]
    MalformedBody { endpoint: String, message: String },
    #[error("response from {endpoint} has no 'elements' collection")]
    MissingElements { endpoint: String },
    #[error("{endpoint} failed after {attempts} attempt(s), last error: {last_error}")]
    RetriesExhausted {
        endpoint: String,
        attempts: usize,
        last_error: String,
    },
    #[error("all {0} overpass server(s) failed")]
    AllEndpointsFailed(usize),
}
