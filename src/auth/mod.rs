//! Authentication for the Amplify API.
//!
//! Amplify uses a single login call: `GET {base_url}/login` with HTTP basic
//! auth returns a JSON body carrying an `OB-TOKEN-V1` token, which is then
//! sent back in the `OB-TOKEN-V1` header of every request.
//!
//! ```no_run
//! use amplify_rs::{Credentials, Session};
//!
//! # async fn example() -> amplify_rs::Result<()> {
//! let credentials = Credentials::new(
//!     "user@example.com",
//!     "password",
//!     "https://api.outbrain.com/amplify/v0.1",
//! );
//! let session = Session::login(&credentials).await?;
//! # Ok(())
//! # }
//! ```

mod credentials;
mod session;

pub use credentials::{Credentials, BASE_URL_ENV, DEFAULT_BASE_URL, PASSWORD_ENV, USER_ENV};
pub use session::{Session, TOKEN_HEADER};
