mod home;
pub use home::{Dashboard, Home};

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod join;
pub use join::Join;

mod listings;
pub use listings::{Listings, NewListing};

mod verify;
pub use verify::Verify;

mod static_pages;
pub use static_pages::{AuthError, NotFound, Privacy, Terms};
