pub mod client;
pub mod credentials;
pub mod lol;
pub mod route;
pub mod transport;

pub use client::{ApiClient, ResolvedRequest};
pub use credentials::{CredentialSource, StaticCredentials};
pub use lol::LolApi;
pub use route::{PathParam, RouteTemplate};
pub use transport::{ReqwestTransport, Transport, TransportError};
