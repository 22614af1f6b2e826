//! # Domain-grouped sub-clients
//!
//! Thin parameter-to-endpoint mappings over [`ApiClient`](crate::ApiClient).
//! None of them holds state or adds logic beyond shaping the request and
//! naming the response type; the one exception is
//! [`ReceiptsApi::upload_and_verify`], which sequences two calls.
//!
//! | Accessor | Endpoints |
//! |----------|-----------|
//! | `auth()` | `/api/auth/register`, `/api/auth/login` |
//! | `user()` | `/api/user/me`, `/api/user/score` |
//! | `identity()` | `/api/identity/anchors`, `/api/identity/:provider` |
//! | `badges()` | `/api/badges`, `/api/badges/generate`, `/api/badges/revoke` |
//! | `invites()` | `/api/invites/{validate,redeem,my-codes,beta-status}` |
//! | `receipts()` | `/api/receipts/upload`, `/api/receipts/:id/verify` |
//! | `listings()` | `/api/listings` |
//! | `events()` | `/api/events/:id/ceilings` |
//! | `waitlist()` | `/api/waitlist/enlist`, `/api/waitlist/stats` |

mod auth;
mod badges;
mod events;
mod identity;
mod invites;
mod listings;
mod receipts;
mod user;
mod waitlist;

pub use auth::AuthApi;
pub use badges::BadgesApi;
pub use events::EventsApi;
pub use identity::IdentityApi;
pub use invites::InvitesApi;
pub use listings::ListingsApi;
pub use receipts::{ReceiptsApi, VerifiedReceipt};
pub use user::UserApi;
pub use waitlist::WaitlistApi;

/// Percent-encode a single path segment.
pub(crate) fn segment(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
