//! Credential verification for the login gate.
//!
//! Deliberately decoupled from storage and transport: checking a credential
//! pair is a pure decision. The session flag recording a successful login
//! lives in `dukaan-storage`.

pub mod credentials;

pub use credentials::{AuthError, CredentialVerifier, Credentials, StaticCredentials};
